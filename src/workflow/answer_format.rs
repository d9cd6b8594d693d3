//! 答案排版
//!
//! 纯文本规则：以 `#` 开头的行是小节标题，其余非空行是普通段落，`**` 一律去掉。

use crate::error::FormatError;
use crate::models::Block;

const BOLD_MARKER: &str = "**";

/// 把模型返回的文本转换成文档块
pub fn format_answer(text: &str) -> Result<Vec<Block>, FormatError> {
    let mut blocks = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        check_printable(line, index + 1)?;

        if line.starts_with('#') {
            let header = strip_bold(line.trim_start_matches('#').trim());
            if !header.is_empty() {
                blocks.push(Block::section_header(header));
            }
        } else {
            blocks.push(Block::paragraph(strip_bold(line)));
        }
    }

    if blocks.is_empty() {
        return Err(FormatError::EmptyAnswer);
    }
    Ok(blocks)
}

fn strip_bold(line: &str) -> String {
    line.replace(BOLD_MARKER, "").trim().to_string()
}

/// C0 控制字符里只允许 Tab；DEL 和 C1 字符可以写入文档
fn check_printable(line: &str, line_no: usize) -> Result<(), FormatError> {
    match line
        .chars()
        .find(|c| ('\0'..='\u{1f}').contains(c) && *c != '\t')
    {
        Some(c) => Err(FormatError::IllegalCharacter {
            line: line_no,
            code: c as u32,
        }),
        None => Ok(()),
    }
}
