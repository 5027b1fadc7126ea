//! Input layout model consumed by the structure engine.
//!
//! These types describe what an upstream layout parser hands over: pages of
//! blocks, text blocks of lines, lines of styled spans. The engine never
//! parses documents itself; it only walks this tree. All types are
//! (de)serializable so a layout can cross a process boundary as JSON.

use serde::{Deserialize, Serialize};

/// A text fragment with uniform font styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content
    pub text: String,

    /// Font size in points
    pub size: f32,

    /// Font name (e.g., "Helvetica-Bold")
    pub font_name: String,
}

impl TextSpan {
    /// Create a new text span.
    pub fn new(text: impl Into<String>, size: f32, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size,
            font_name: font_name.into(),
        }
    }

    /// Font size rounded to one decimal place.
    ///
    /// All size comparisons in the engine operate on rounded sizes to absorb
    /// rendering jitter in the source document.
    pub fn rounded_size(&self) -> f32 {
        (self.size * 10.0).round() / 10.0
    }

    /// Whether the span's font name marks it as bold.
    pub fn is_bold(&self) -> bool {
        self.font_name.to_lowercase().contains("bold")
    }
}

/// A visually contiguous row of spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// The spans in this line, in reading order
    pub spans: Vec<TextSpan>,
}

impl TextLine {
    /// Create a line from spans.
    pub fn from_spans(spans: Vec<TextSpan>) -> Self {
        Self { spans }
    }

    /// Create a line holding a single span.
    pub fn single(text: impl Into<String>, size: f32, font_name: impl Into<String>) -> Self {
        Self {
            spans: vec![TextSpan::new(text, size, font_name)],
        }
    }

    /// Combined text of all spans, trimmed.
    pub fn text(&self) -> String {
        let joined: String = self.spans.iter().map(|s| s.text.as_str()).collect();
        joined.trim().to_string()
    }

    /// Largest rounded span size in the line, or None for a span-less line.
    pub fn max_size(&self) -> Option<f32> {
        self.spans
            .iter()
            .map(|s| s.rounded_size())
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Whether any span in the line is bold.
    pub fn is_bold(&self) -> bool {
        self.spans.iter().any(|s| s.is_bold())
    }

    /// Whether the line carries no visible text.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

/// A run of lines forming one layout region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Lines in document order
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    /// Create a block from lines.
    pub fn from_lines(lines: Vec<TextLine>) -> Self {
        Self { lines }
    }
}

/// An image region. Opaque to the engine; pixel data lives behind the
/// image-source collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    /// Alternative text, when the source format provides one
    pub alt_text: Option<String>,
}

/// A page region: text, image, or something the engine does not interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A text region
    Text(TextBlock),

    /// An image region
    Image(ImageBlock),

    /// Any other region (vector drawing, annotation, ...)
    Other,
}

impl Block {
    /// Create a text block from lines.
    pub fn text(lines: Vec<TextLine>) -> Self {
        Block::Text(TextBlock::from_lines(lines))
    }

    /// Create an opaque image block.
    pub fn image() -> Self {
        Block::Image(ImageBlock::default())
    }

    /// Check if this block is a text block.
    pub fn is_text(&self) -> bool {
        matches!(self, Block::Text(_))
    }

    /// Check if this block is an image block.
    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image(_))
    }
}

/// A single parsed page: ordered blocks plus the page number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page number (1-indexed)
    pub number: u32,

    /// Blocks in document order
    pub blocks: Vec<Block>,
}

impl PageLayout {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            blocks: Vec::new(),
        }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Raw text of the page: every line's text, newline-joined.
    pub fn raw_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            if let Block::Text(tb) = block {
                for line in &tb.lines {
                    let text = line.text();
                    if !text.is_empty() {
                        if !out.is_empty() {
                            out.push('\n');
                        }
                        out.push_str(&text);
                    }
                }
            }
        }
        out
    }

    /// Whether the page yields any non-whitespace text at all.
    ///
    /// Pages without extractable text go down the OCR fallback path instead
    /// of text structuring.
    pub fn has_extractable_text(&self) -> bool {
        !self.raw_text().trim().is_empty()
    }
}

/// A whole parsed document as delivered by the layout parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentLayout {
    /// Pages in increasing page-number order
    pub pages: Vec<PageLayout>,
}

impl DocumentLayout {
    /// Create an empty document layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page to the layout.
    pub fn add_page(&mut self, page: PageLayout) {
        self.pages.push(page);
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Check if the layout has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over every span of every text block in the document.
    pub fn spans(&self) -> impl Iterator<Item = &TextSpan> {
        self.pages
            .iter()
            .flat_map(|p| p.blocks.iter())
            .filter_map(|b| match b {
                Block::Text(tb) => Some(tb),
                _ => None,
            })
            .flat_map(|tb| tb.lines.iter())
            .flat_map(|l| l.spans.iter())
    }
}
