//! docx 渲染器
//!
//! 文件格式本身交给 `docx-rs`，这里只负责块到段落的映射。

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};
use tracing::debug;

use crate::error::RenderError;
use crate::models::{Block, BlockKind, Palette};
use crate::render::{tone_color, DocumentRenderer};

/// 字号（半磅）
const TITLE_SIZE: usize = 36;
const HEADING_SIZE: usize = 28;
const SECTION_HEADER_SIZE: usize = 24;

pub struct DocxRenderer {
    palette: Palette,
}

impl DocxRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn paragraph(&self, block: &Block) -> Paragraph {
        if block.kind == BlockKind::Spacer {
            return Paragraph::new();
        }

        let mut run = Run::new().add_text(block.text.as_str());
        if block.bold {
            run = run.bold();
        }
        match block.kind {
            BlockKind::Title => run = run.size(TITLE_SIZE),
            BlockKind::Heading => run = run.size(HEADING_SIZE),
            BlockKind::SectionHeader => run = run.size(SECTION_HEADER_SIZE),
            _ => {}
        }

        let color = if block.kind == BlockKind::Separator {
            Some(self.palette.rule)
        } else {
            tone_color(block.tone, &self.palette)
        };
        if let Some(color) = color {
            run = run.color(color);
        }

        Paragraph::new().add_run(run)
    }
}

impl DocumentRenderer for DocxRenderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, RenderError> {
        let docx = blocks
            .iter()
            .fold(Docx::new(), |docx, block| docx.add_paragraph(self.paragraph(block)));

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| RenderError::Docx(e.to_string()))?;

        let bytes = buffer.into_inner();
        debug!("docx 生成完成: {} 字节, {} 个段落", bytes.len(), blocks.len());
        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "docx"
    }

    fn mime_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }
}
