//! Per-page structure building.
//!
//! Walks a page's blocks in document order, classifies each line, and turns
//! the result into an ordered content stream: headings open a new context,
//! body lines accumulate in a paragraph buffer, and the buffer is flushed
//! whenever the context changes (or the page ends).

use unicode_normalization::UnicodeNormalization;

use super::{FontProfile, HeadingDetector, HeadingKind};
use crate::layout::{Block, PageLayout};
use crate::model::ContentItem;

/// Collapse all whitespace runs (including non-breaking spaces) to single
/// ASCII spaces, trim the ends, and NFC-normalize the result.
pub fn normalize_whitespace(text: &str) -> String {
    let nfc: String = text.nfc().collect();
    nfc.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Builds one page's text-derived content stream.
///
/// The section/subsection context and the paragraph buffer live only for the
/// duration of one `build` call; headings never persist from one page to the
/// next.
pub struct PageStructureBuilder<'a> {
    detector: &'a HeadingDetector,
    profile: &'a FontProfile,
    tolerance: f32,

    current_section: Option<String>,
    current_sub_section: Option<String>,
    paragraph_buffer: Vec<String>,
    content: Vec<ContentItem>,
}

impl<'a> PageStructureBuilder<'a> {
    /// Create a builder for one page pass.
    pub fn new(detector: &'a HeadingDetector, profile: &'a FontProfile, tolerance: f32) -> Self {
        Self {
            detector,
            profile,
            tolerance,
            current_section: None,
            current_sub_section: None,
            paragraph_buffer: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Walk the page and emit its ordered content items.
    pub fn build(mut self, page: &PageLayout) -> Vec<ContentItem> {
        for block in &page.blocks {
            match block {
                Block::Text(text_block) => {
                    for line in &text_block.lines {
                        // Lines without visible text are skipped silently.
                        if line.is_empty() {
                            continue;
                        }
                        self.push_line(line);
                    }
                }
                Block::Image(_) => {
                    self.flush();
                    self.content.push(ContentItem::chart(
                        self.current_section.clone(),
                        "image block detected",
                    ));
                }
                Block::Other => {
                    self.flush();
                }
            }
        }

        // Trailing paragraph text is not lost.
        self.flush();
        self.content
    }

    fn push_line(&mut self, line: &crate::layout::TextLine) {
        let classification = self.detector.classify(line, self.profile, self.tolerance);

        match classification.kind {
            HeadingKind::Section => {
                self.flush();
                self.current_section = Some(classification.text.clone());
                self.current_sub_section = None;
                self.content.push(ContentItem::heading(1, classification.text));
            }
            HeadingKind::Subsection => {
                self.flush();
                self.current_sub_section = Some(classification.text.clone());
                self.content.push(ContentItem::heading(2, classification.text));
            }
            HeadingKind::Paragraph => {
                self.paragraph_buffer.push(classification.text);
            }
        }
    }

    /// Emit the accumulated paragraph under the current context. A flush of
    /// an empty buffer is a no-op; no empty paragraph item is ever emitted.
    fn flush(&mut self) {
        if self.paragraph_buffer.is_empty() {
            return;
        }

        let text = normalize_whitespace(&self.paragraph_buffer.join(" "));
        self.paragraph_buffer.clear();

        self.content.push(ContentItem::paragraph(
            self.current_section.clone(),
            self.current_sub_section.clone(),
            text,
        ));
    }
}
