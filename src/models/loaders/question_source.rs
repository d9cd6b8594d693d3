//! 题目来源归一化
//!
//! 文本框在前、表格在后，合并后截取前 [`MAX_QUESTIONS`] 个。

use tracing::{info, warn};

use crate::error::SourceError;
use crate::models::loaders::spreadsheet::read_table_questions;
use crate::models::question::{Question, QuestionBatch, MAX_QUESTIONS};

/// 归一化结果
///
/// 表格损坏时 `table_error` 有值，`batch` 只包含文本框里的题目。
#[derive(Debug)]
pub struct NormalizedInput {
    pub batch: QuestionBatch,
    pub table_error: Option<SourceError>,
    /// 文本框中的有效题目数（截断前）
    pub text_count: usize,
    /// 表格中的有效题目数（截断前）
    pub table_count: usize,
}

impl NormalizedInput {
    /// 截断前的题目总数
    pub fn available(&self) -> usize {
        self.text_count + self.table_count
    }
}

/// 按行拆分文本框输入
pub fn text_questions(raw: &str) -> Vec<Question> {
    raw.lines().filter_map(Question::new).collect()
}

/// 合并文本与表格输入
pub fn normalize(raw_text: Option<&str>, raw_table: Option<&[u8]>) -> NormalizedInput {
    let from_text = raw_text.map(text_questions).unwrap_or_default();

    let (from_table, table_error) = match raw_table.map(read_table_questions) {
        None => (Vec::new(), None),
        Some(Ok(cells)) => (cells.iter().filter_map(Question::new).collect(), None),
        Some(Err(e)) => {
            warn!("⚠️ 表格读取失败，仅使用文本框中的题目: {}", e);
            (Vec::new(), Some(e))
        }
    };

    let text_count = from_text.len();
    let table_count = from_table.len();
    if text_count + table_count > MAX_QUESTIONS {
        info!(
            "题目共 {} 个，超过上限 {}，只处理前 {} 个",
            text_count + table_count,
            MAX_QUESTIONS,
            MAX_QUESTIONS
        );
    }

    NormalizedInput {
        batch: QuestionBatch::from_questions(from_text.into_iter().chain(from_table)),
        table_error,
        text_count,
        table_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(batch: &QuestionBatch) -> Vec<&str> {
        batch.iter().map(Question::text).collect()
    }

    #[test]
    fn test_text_lines_are_trimmed_and_blank_lines_dropped() {
        let input = normalize(
            Some("What is photosynthesis?\n\n   \n  Explain Newton's laws of motion  \r\nDescribe the water cycle"),
            None,
        );

        assert_eq!(
            texts(&input.batch),
            vec![
                "What is photosynthesis?",
                "Explain Newton's laws of motion",
                "Describe the water cycle",
            ]
        );
        assert!(input.table_error.is_none());
    }

    #[test]
    fn test_empty_input_gives_empty_batch() {
        let input = normalize(None, None);
        assert!(input.batch.is_empty());
        assert!(input.table_error.is_none());

        let input = normalize(Some("  \n\n"), None);
        assert!(input.batch.is_empty());
    }

    #[test]
    fn test_batch_length_is_min_of_cap_and_available() {
        for n in [0usize, 1, 49, 50, 51, 120] {
            let raw: String = (0..n).map(|i| format!("question {}\n", i)).collect();
            let input = normalize(Some(&raw), None);
            assert_eq!(input.batch.len(), n.min(MAX_QUESTIONS));
            assert_eq!(input.available(), n);
        }
    }

    #[test]
    fn test_broken_table_keeps_text_questions() {
        let input = normalize(Some("What is an atom?"), Some(b"not a spreadsheet"));

        assert_eq!(texts(&input.batch), vec!["What is an atom?"]);
        assert!(matches!(input.table_error, Some(SourceError::Unreadable(_))));
        assert_eq!(input.table_count, 0);
    }

    /// A 列第 1 行是表头，其余每行一个题目
    fn workbook(questions: &[String]) -> Vec<u8> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Questions").unwrap();
        for (i, q) in questions.iter().enumerate() {
            worksheet.write_string(i as u32 + 1, 0, q.as_str()).unwrap();
        }
        workbook.save_to_buffer().unwrap()
    }

    fn numbered(prefix: &str, n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{} {}", prefix, i)).collect()
    }

    #[test]
    fn test_table_questions_follow_text_questions() {
        let bytes = workbook(&numbered("table", 2));
        let input = normalize(Some("text 1\ntext 2"), Some(&bytes));

        assert_eq!(
            texts(&input.batch),
            vec!["text 1", "text 2", "table 1", "table 2"]
        );
        assert_eq!(input.text_count, 2);
        assert_eq!(input.table_count, 2);
        assert!(input.table_error.is_none());
    }

    #[test]
    fn test_cap_applies_across_both_sources() {
        let text = numbered("text", 30).join("\n");
        let table = numbered("table", 30);
        let bytes = workbook(&table);

        let input = normalize(Some(&text), Some(&bytes));

        assert_eq!(input.batch.len(), MAX_QUESTIONS);
        assert_eq!(input.available(), 60);
        assert_eq!(input.table_count, 30);

        let kept = texts(&input.batch);
        assert_eq!(kept[29], "text 30");
        assert_eq!(kept[30], "table 1");
        assert_eq!(kept[49], "table 20");
        assert!(!kept.contains(&"table 21"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = "a\n b \n\nc";
        let first = normalize(Some(raw), None);
        let second = normalize(Some(raw), None);
        assert_eq!(first.batch, second.batch);
    }
}
