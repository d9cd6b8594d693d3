//! 报告的抽象结构
//!
//! 与具体文档格式无关：渲染器负责把 [`Block`] 转成 docx 或纯文本。

use serde::Serialize;

use crate::models::question::Question;
use crate::utils::logging::truncate_chars;

/// 失败列表里保留的题目字符数
pub const FAILURE_PREVIEW_CHARS: usize = 50;

/// 块类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// 文档标题
    Title,
    /// 汇总部分的标题
    Heading,
    /// `Q{i}: ...` 题目行
    Question,
    /// 答案中的小节标题
    SectionHeader,
    Paragraph,
    /// 题目之间的分隔线
    Separator,
    /// 空行
    Spacer,
}

/// 颜色/强调提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Plain,
    /// 题目行（红色）
    Question,
    /// 主题强调色
    Accent,
    /// 全部成功（绿色）
    Success,
    /// 部分失败（琥珀色）
    Warning,
    /// 失败条目
    Error,
}

/// 文档块
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
}

impl Block {
    fn new(kind: BlockKind, text: impl Into<String>, tone: Tone, bold: bool) -> Self {
        Self {
            kind,
            text: text.into(),
            tone,
            bold,
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Title, text, Tone::Plain, true)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading, text, Tone::Plain, true)
    }

    pub fn question(position: usize, question: &Question) -> Self {
        Self::new(
            BlockKind::Question,
            format!("Q{}: {}", position, question),
            Tone::Question,
            true,
        )
    }

    pub fn section_header(text: impl Into<String>) -> Self {
        Self::new(BlockKind::SectionHeader, text, Tone::Accent, true)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, text, Tone::Plain, false)
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self::new(BlockKind::Paragraph, text, tone, false)
    }

    pub fn separator() -> Self {
        Self::new(BlockKind::Separator, "─".repeat(50), Tone::Plain, false)
    }

    pub fn spacer() -> Self {
        Self::new(BlockKind::Spacer, "", Tone::Plain, false)
    }
}

/// 单个失败条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureEntry {
    /// 1-based 位置
    pub position: usize,
    /// 题目前 [`FAILURE_PREVIEW_CHARS`] 个字符
    pub question: String,
    pub message: String,
}

/// 运行统计
///
/// 只能通过 `record_*` 更新，保证 `succeeded + failed == processed`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    total: usize,
    processed: usize,
    succeeded: usize,
    failed: usize,
    failures: Vec<FailureEntry>,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
            succeeded: 0,
            failed: 0,
            failures: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.processed += 1;
        self.succeeded += 1;
    }

    pub fn record_failure(
        &mut self,
        position: usize,
        question: &Question,
        message: impl Into<String>,
    ) {
        self.processed += 1;
        self.failed += 1;
        self.failures.push(FailureEntry {
            position,
            question: truncate_chars(question.text(), FAILURE_PREVIEW_CHARS),
            message: message.into(),
        });
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn failures(&self) -> &[FailureEntry] {
        &self.failures
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}
