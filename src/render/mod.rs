//! 文档渲染
//!
//! 把抽象的 [`Block`] 序列写成目标格式的字节流。

pub mod docx;
pub mod text;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use serde::Deserialize;

use crate::error::{ConfigError, RenderError};
use crate::models::{Block, Palette, Tone};

pub use docx::DocxRenderer;
pub use text::TextRenderer;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Docx,
    Txt,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Txt => "txt",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "docx" | "word" => Ok(OutputFormat::Docx),
            "txt" | "text" => Ok(OutputFormat::Txt),
            other => Err(ConfigError::unknown_value("output_format", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 文档渲染器
pub trait DocumentRenderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, RenderError>;

    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}

/// 按输出格式创建渲染器
pub fn renderer_for(format: OutputFormat, palette: Palette) -> Box<dyn DocumentRenderer> {
    match format {
        OutputFormat::Docx => Box::new(DocxRenderer::new(palette)),
        OutputFormat::Txt => Box::new(TextRenderer),
    }
}

/// 输出文件名：`<Prefix>_<YYYYMMDD_HHMMSS>.<ext>`
pub fn artifact_file_name<Tz: TimeZone>(prefix: &str, extension: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("{}_{}.{}", prefix, at.format("%Y%m%d_%H%M%S"), extension)
}

/// 语气对应的颜色（十六进制 RGB）
pub(crate) fn tone_color(tone: Tone, palette: &Palette) -> Option<&'static str> {
    match tone {
        Tone::Plain => None,
        Tone::Question => Some("FF0000"),
        Tone::Accent => Some(palette.accent),
        Tone::Success => Some("4CAF50"),
        Tone::Warning => Some("FF9800"),
        Tone::Error => Some("F44336"),
    }
}
