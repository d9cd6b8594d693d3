use std::fmt;

use serde::Serialize;

/// 单次运行最多处理的题目数量
pub const MAX_QUESTIONS: usize = 50;

/// 题目
///
/// 去掉首尾空白后的非空字符串，创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Question(String);

impl Question {
    /// 从原始文本创建题目，空白文本返回 `None`
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 一次运行的题目列表
///
/// 顺序有意义（位置从 1 开始，用于标注和失败统计），长度不超过 [`MAX_QUESTIONS`]。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionBatch {
    questions: Vec<Question>,
}

impl QuestionBatch {
    /// 按顺序收集题目，超出上限的部分直接丢弃
    pub fn from_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        Self {
            questions: questions.into_iter().take(MAX_QUESTIONS).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// 按 1-based 位置取题目
    pub fn get(&self, position: usize) -> Option<&Question> {
        position
            .checked_sub(1)
            .and_then(|index| self.questions.get(index))
    }
}

impl<'a> IntoIterator for &'a QuestionBatch {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::new("  What is photosynthesis?\t").unwrap();
        assert_eq!(q.text(), "What is photosynthesis?");
        assert!(Question::new("   ").is_none());
    }

    #[test]
    fn test_batch_is_capped() {
        let batch =
            QuestionBatch::from_questions((0..80).filter_map(|i| Question::new(format!("q{}", i))));
        assert_eq!(batch.len(), MAX_QUESTIONS);
        assert_eq!(batch.get(1).unwrap().text(), "q0");
        assert_eq!(batch.get(50).unwrap().text(), "q49");
        assert!(batch.get(0).is_none());
        assert!(batch.get(51).is_none());
    }
}
