//! 纯文本渲染器

use std::io::Write;

use crate::error::RenderError;
use crate::models::{Block, BlockKind};
use crate::render::DocumentRenderer;

/// 每个块一行，标题加下划线
pub struct TextRenderer;

impl DocumentRenderer for TextRenderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::new();
        for block in blocks {
            match block.kind {
                BlockKind::Title => {
                    writeln!(out, "{}", block.text)?;
                    writeln!(out, "{}", "=".repeat(block.text.chars().count()))?;
                }
                BlockKind::Heading => {
                    writeln!(out, "{}", block.text)?;
                    writeln!(out, "{}", "-".repeat(block.text.chars().count()))?;
                }
                BlockKind::SectionHeader => writeln!(out, "[{}]", block.text)?,
                BlockKind::Spacer => writeln!(out)?,
                BlockKind::Question | BlockKind::Paragraph | BlockKind::Separator => {
                    writeln!(out, "{}", block.text)?
                }
            }
        }
        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn mime_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }
}
