//! 报告生成器 - 编排层
//!
//! ## 职责
//!
//! 按顺序遍历题目列表，为每道题生成文档块并累计统计。
//!
//! ## 设计特点
//!
//! - **严格顺序**：第 i+1 题只在第 i 题有结果后开始
//! - **逐题收敛**：单题失败只记录，不中断整批
//! - **折叠累积**：每道题产出一个 [`ItemOutcome`]，由 [`ReportAccumulator`] 吸收
//! - **总有产物**：即使全部失败也返回完整报告

use std::time::Duration;

use chrono::{DateTime, Local};
use tracing::info;

use crate::error::RenderError;
use crate::models::{Block, Profile, Question, QuestionBatch, RunSummary, Tone};
use crate::render::DocumentRenderer;
use crate::services::AnswerProvider;
use crate::workflow::{ItemOutcome, QuestionCtx, QuestionFlow};

/// 生成完成的报告
#[derive(Debug, Clone)]
pub struct Report {
    blocks: Vec<Block>,
    summary: RunSummary,
}

impl Report {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// 序列化成目标格式
    pub fn render(&self, renderer: &dyn DocumentRenderer) -> Result<Vec<u8>, RenderError> {
        renderer.render(&self.blocks)
    }
}

/// 报告生成器
pub struct ReportBuilder {
    profile: Profile,
    timeout: Option<Duration>,
    generated_at: DateTime<Local>,
}

impl ReportBuilder {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            timeout: None,
            generated_at: Local::now(),
        }
    }

    /// 每次调用回答策略的超时
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    pub async fn build(&self, batch: &QuestionBatch, provider: &dyn AnswerProvider) -> Report {
        let flow = QuestionFlow::new(provider, self.timeout);
        let mut acc = ReportAccumulator::new(self.preamble(), batch.len());

        for (index, question) in batch.iter().enumerate() {
            let ctx = QuestionCtx::new(index + 1, batch.len());
            let outcome = flow.run(question, &ctx).await;
            acc = acc.absorb(&ctx, question, outcome);
        }

        let report = acc.finish();
        info!(
            "报告生成完成: 成功 {}/{}",
            report.summary.succeeded(),
            report.summary.total()
        );
        report
    }

    fn preamble(&self) -> Vec<Block> {
        match self.profile.title() {
            Some(title) => vec![
                Block::title(title),
                Block::paragraph(format!(
                    "Generated: {}",
                    self.generated_at.format("%B %d, %Y at %I:%M %p")
                )),
                Block::spacer(),
            ],
            None => Vec::new(),
        }
    }
}

/// 折叠的累加器：`(blocks, summary)`
pub struct ReportAccumulator {
    blocks: Vec<Block>,
    summary: RunSummary,
}

impl ReportAccumulator {
    pub fn new(preamble: Vec<Block>, total: usize) -> Self {
        Self {
            blocks: preamble,
            summary: RunSummary::new(total),
        }
    }

    /// 吸收一道题的结果
    pub fn absorb(mut self, ctx: &QuestionCtx, question: &Question, outcome: ItemOutcome) -> Self {
        self.blocks.push(Block::question(ctx.position, question));

        match outcome.failure_message() {
            None => {
                self.blocks.push(Block::paragraph("Answer:"));
                if let ItemOutcome::Answered(body) = outcome {
                    self.blocks.extend(body);
                }
                self.summary.record_success();
            }
            Some(message) => {
                self.blocks.push(Block::toned(
                    format!("Answer: Error generating answer: {}", message),
                    Tone::Error,
                ));
                self.summary.record_failure(ctx.position, question, message);
            }
        }

        self.blocks.push(Block::spacer());
        self.blocks.push(Block::separator());
        self.blocks.push(Block::spacer());
        self
    }

    /// 追加汇总部分
    pub fn finish(mut self) -> Report {
        let summary = &self.summary;
        self.blocks.push(Block::spacer());
        self.blocks.push(Block::heading("Generation Summary"));
        self.blocks.push(Block::toned(
            format!(
                "Successfully processed: {}/{} questions",
                summary.succeeded(),
                summary.total()
            ),
            if summary.all_succeeded() {
                Tone::Success
            } else {
                Tone::Warning
            },
        ));

        if !summary.failures().is_empty() {
            self.blocks.push(Block::spacer());
            self.blocks.push(Block::heading("Failed Questions"));
            for entry in summary.failures() {
                self.blocks.push(Block::toned(
                    format!(
                        "Q{}: {}... - {}",
                        entry.position, entry.question, entry.message
                    ),
                    Tone::Error,
                ));
            }
        }

        Report {
            blocks: self.blocks,
            summary: self.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockKind;
    use crate::services::AnswerResult;
    use async_trait::async_trait;

    /// 指定位置失败，其余返回固定答案
    struct FailAt {
        failing: Vec<String>,
    }

    #[async_trait]
    impl AnswerProvider for FailAt {
        async fn answer(&self, question: &Question) -> AnswerResult {
            if self.failing.iter().any(|q| q == question.text()) {
                AnswerResult::Failure("503 Service Unavailable".to_string())
            } else {
                AnswerResult::Success("x".to_string())
            }
        }

        fn label(&self) -> &'static str {
            "fail-at"
        }
    }

    fn batch(n: usize) -> QuestionBatch {
        QuestionBatch::from_questions((1..=n).filter_map(|i| Question::new(format!("question {}", i))))
    }

    fn count(report: &Report, kind: BlockKind) -> usize {
        report.blocks().iter().filter(|b| b.kind == kind).count()
    }

    fn texts_of(report: &Report, kind: BlockKind) -> Vec<&str> {
        report
            .blocks()
            .iter()
            .filter(|b| b.kind == kind)
            .map(|b| b.text.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_all_success() {
        let provider = FailAt { failing: vec![] };
        let report = ReportBuilder::new(Profile::Qa).build(&batch(4), &provider).await;

        assert_eq!(count(&report, BlockKind::Question), 4);
        assert_eq!(
            report.blocks().iter().filter(|b| b.text == "x").count(),
            4
        );
        assert_eq!(report.summary().succeeded(), 4);
        assert_eq!(report.summary().failed(), 0);
        assert_eq!(texts_of(&report, BlockKind::Heading), vec!["Generation Summary"]);

        let summary_line = report
            .blocks()
            .iter()
            .find(|b| b.text.starts_with("Successfully processed"))
            .unwrap();
        assert_eq!(summary_line.text, "Successfully processed: 4/4 questions");
        assert_eq!(summary_line.tone, Tone::Success);
    }

    #[tokio::test]
    async fn test_failure_in_the_middle_does_not_stop_the_batch() {
        let provider = FailAt {
            failing: vec!["question 3".to_string()],
        };
        let report = ReportBuilder::new(Profile::Qa).build(&batch(5), &provider).await;

        assert_eq!(
            texts_of(&report, BlockKind::Question),
            vec![
                "Q1: question 1",
                "Q2: question 2",
                "Q3: question 3",
                "Q4: question 4",
                "Q5: question 5",
            ]
        );
        assert_eq!(report.blocks().iter().filter(|b| b.text == "x").count(), 4);

        let inline_errors: Vec<&Block> = report
            .blocks()
            .iter()
            .filter(|b| b.text.starts_with("Answer: Error generating answer"))
            .collect();
        assert_eq!(inline_errors.len(), 1);

        let summary = report.summary();
        assert_eq!(summary.succeeded(), 4);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.failures().len(), 1);
        assert_eq!(summary.failures()[0].position, 3);

        assert_eq!(
            texts_of(&report, BlockKind::Heading),
            vec!["Generation Summary", "Failed Questions"]
        );
        let last = report.blocks().last().unwrap();
        assert_eq!(
            last.text,
            "Q3: question 3... - 503 Service Unavailable"
        );
        assert!(report
            .blocks()
            .iter()
            .any(|b| b.text == "Successfully processed: 4/5 questions" && b.tone == Tone::Warning));
    }

    #[tokio::test]
    async fn test_every_question_failing_still_produces_report() {
        let questions = batch(3);
        let provider = FailAt {
            failing: questions.iter().map(|q| q.text().to_string()).collect(),
        };
        let report = ReportBuilder::new(Profile::StudyNotes)
            .build(&questions, &provider)
            .await;

        assert_eq!(report.summary().failed(), 3);
        assert_eq!(
            report.summary().succeeded() + report.summary().failed(),
            questions.len()
        );
        assert_eq!(report.blocks()[0].kind, BlockKind::Title);
        assert!(report.blocks()[1].text.starts_with("Generated: "));
    }

    #[tokio::test]
    async fn test_empty_batch_only_has_summary() {
        let provider = FailAt { failing: vec![] };
        let report = ReportBuilder::new(Profile::Qa)
            .build(&QuestionBatch::default(), &provider)
            .await;

        assert_eq!(count(&report, BlockKind::Question), 0);
        assert!(report.summary().all_succeeded());
    }
}
