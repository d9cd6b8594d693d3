//! 表格题目读取
//!
//! 题目在第一个工作表的 A 列，第 1 行是表头。
//!
//! calamine 的 `Range` 从第一个非空单元格开始，行列下标都要按 `range.start()` 换算成绝对位置。

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use tracing::debug;

use crate::error::SourceError;

/// 从表格文件（xlsx / xls / ods）中读取题目
///
/// 文件无法识别或损坏时返回错误，不会返回部分结果。
pub fn read_table_questions(bytes: &[u8]) -> Result<Vec<String>, SourceError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| SourceError::Unreadable(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SourceError::NoWorksheet)?
        .map_err(|e| SourceError::Worksheet(e.to_string()))?;

    let questions = first_column_questions(&range);
    debug!(
        "工作表大小: {:?}, 读取到 {} 个题目",
        range.get_size(),
        questions.len()
    );
    Ok(questions)
}

/// 取 A 列、跳过表头行、丢弃空单元格
pub fn first_column_questions(range: &Range<Data>) -> Vec<String> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    // A 列全空
    if start_col != 0 {
        return Vec::new();
    }

    range
        .rows()
        .enumerate()
        .filter(|(offset, _)| start_row as usize + offset > 0)
        .filter_map(|(_, row)| row.first())
        .filter_map(cell_text)
        .collect()
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.clone(),
        other => other.to_string(),
    };
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
