//! 提示词模板

use crate::models::{Profile, Question};

/// 直接回答策略使用的安全系统指令
pub const SAFETY_INSTRUCTION: &str = "You are a helpful, ethical assistant. Do not answer questions that involve illegal activity, hate speech, violence, personal data, or unethical behavior. If a question is unsafe or inappropriate, politely decline to answer.";

/// 分节格式说明，写作阶段和学习笔记的直接回答共用
const SECTION_FORMAT: &str = "Use this format:
- Start sections with ## SECTION_NAME (e.g., ## Definition, ## Key Points, ## Example)
- Use simple language, examples, numbered steps
- Include relevant sections like: Definition, Explanation, Key Points, Steps, Example, Summary
- No other markdown formatting

Example format:
## Definition
[explanation here]

## Key Points
1. Point one
2. Point two

## Example
[example here]";

/// 直接回答策略的用户消息
pub fn direct_prompt(profile: Profile, question: &Question) -> String {
    match profile {
        Profile::StudyNotes => format!(
            "You are an expert tutor. Question: {}\n\nProvide clear, comprehensive answer with proper formatting.\n\n{}",
            question, SECTION_FORMAT
        ),
        Profile::Qa => format!(
            r#"You are an expert assistant that provides clear, concise, and professional answers to user questions.

User question is delimited by <<<>>>.

user_query = <<<{}>>>

Follow below steps while answering the user's question.
1. Avoid using excessive markdown formatting such as asterisks (**), bold text, or bullet points with symbols like '*'. Instead, use plain language, numbered or clearly separated steps, and short paragraphs.
2. Respond with well-structured, easy-to-read answers in plain text.
3. Do not use emoji, markdown syntax, or decorative characters.

Example style:

Q1: How to learn English?

Learning English can be a rewarding journey. Here are some helpful steps:

1. Clear Goals: Set clear goals. Know why you're learning and what you want to achieve.
2. Practice: Practice regularly. Spend time listening, speaking, reading, and writing every day.
3. Daily Use: Use English in your daily life. Watch English shows, label objects, or speak with friends.
4. Track: Track your progress. Use apps or keep a journal.

Keep your responses practical, clear, and human-friendly."#,
            question
        ),
    }
}

/// 多阶段流程中的一个角色
#[derive(Clone, Copy)]
pub struct StageSpec {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
    pub expected_output: &'static str,
    task: fn(&Question) -> String,
}

impl StageSpec {
    /// 角色设定，作为系统消息
    pub fn system_message(&self) -> String {
        format!(
            "You are a {}. {}\nYour goal: {}",
            self.role, self.backstory, self.goal
        )
    }

    /// 任务描述，附带上一阶段的输出
    pub fn user_message(&self, question: &Question, context: Option<&str>) -> String {
        let mut message = format!(
            "{}\n\nExpected output: {}",
            (self.task)(question),
            self.expected_output
        );
        if let Some(context) = context {
            message.push_str("\n\nContext from the previous task:\n");
            message.push_str(context);
        }
        message
    }
}

fn research_task(question: &Question) -> String {
    format!("Analyze: {}\n\nIdentify key concepts.", question)
}

fn writing_task(question: &Question) -> String {
    format!(
        "Create student-friendly answer for: {}\n\n{}",
        question, SECTION_FORMAT
    )
}

fn review_task(_question: &Question) -> String {
    "Review answer for clarity, accuracy, format. Ensure student-ready. Return only the final answer, keeping the ## section headers.".to_string()
}

/// research → write → review
pub const PIPELINE_STAGES: [StageSpec; 3] = [
    StageSpec {
        role: "Research Specialist",
        goal: "Analyze questions and identify key concepts",
        backstory: "Expert tutor who identifies learning needs.",
        expected_output: "Analysis of concepts",
        task: research_task,
    },
    StageSpec {
        role: "Content Writer",
        goal: "Create clear, student-friendly explanations with proper formatting",
        backstory: "Skilled educator who explains concepts simply with clear section headers.",
        expected_output: "Clear, comprehensive answer with sections",
        task: writing_task,
    },
    StageSpec {
        role: "Quality Checker",
        goal: "Ensure accuracy and completeness",
        backstory: "Experienced teacher ensuring study material quality.",
        expected_output: "Polished final answer",
        task: review_task,
    },
];
