//! Page and document assembly.
//!
//! [`DocumentAssembler`] drives the whole pipeline: one font-profile pre-pass
//! over the document, then per-page assembly in page order. Per page, the
//! text-derived content stream is followed by table items and image items;
//! text-less pages take the OCR fallback path instead. Collaborator failures
//! are absorbed here with documented fallbacks so a bad image or a failed
//! table extraction never loses the rest of the page.

use rayon::prelude::*;

use super::builder::{normalize_whitespace, PageStructureBuilder};
use super::{AssembleOptions, FontProfile, HeadingDetector};
use crate::layout::{DocumentLayout, PageLayout};
use crate::model::{ContentItem, DocumentResult, PageResult};
use crate::pipeline::Collaborators;

/// Assembles parsed page layouts into a [`DocumentResult`].
pub struct DocumentAssembler {
    detector: HeadingDetector,
    collaborators: Collaborators,
    options: AssembleOptions,
}

impl DocumentAssembler {
    /// Create an assembler with no collaborators and default options.
    pub fn new() -> Self {
        Self::with_collaborators(Collaborators::none(), AssembleOptions::default())
    }

    /// Create an assembler with the given collaborators and options.
    pub fn with_collaborators(collaborators: Collaborators, options: AssembleOptions) -> Self {
        Self {
            detector: HeadingDetector::new(),
            collaborators,
            options,
        }
    }

    /// Assemble a whole document.
    ///
    /// The font profile is computed once, before any page is classified.
    /// Pages are independent after that, so assembly may run on the rayon
    /// pool; results are ordered by page number either way, and the output
    /// is identical in both modes.
    pub fn assemble(&self, layout: &DocumentLayout) -> DocumentResult {
        let profile = FontProfile::analyze(layout);

        let mut pages: Vec<PageResult> = if self.options.parallel {
            layout
                .pages
                .par_iter()
                .map(|page| self.assemble_page(page, &profile))
                .collect()
        } else {
            layout
                .pages
                .iter()
                .map(|page| self.assemble_page(page, &profile))
                .collect()
        };

        pages.sort_by_key(|p| p.page_number);
        DocumentResult { pages }
    }

    /// Assemble a single page against a precomputed font profile.
    pub fn assemble_page(&self, page: &PageLayout, profile: &FontProfile) -> PageResult {
        let mut content = Vec::new();

        if !page.has_extractable_text() {
            // OCR-only path: no text structuring, no table extraction.
            if self.options.ocr_fallback {
                if let Some(text) = self.ocr_page_text(page.number) {
                    content.push(ContentItem::paragraph(None, None, text));
                }
            }
            content.extend(self.image_items(page.number));
        } else {
            let builder = PageStructureBuilder::new(&self.detector, profile, self.options.tolerance);
            content.extend(builder.build(page));
            content.extend(self.table_items(page.number));
            content.extend(self.image_items(page.number));
        }

        PageResult::with_content(page.number, content)
    }

    /// Rasterize the page and OCR it. Any failure along the chain is logged
    /// and yields no paragraph.
    fn ocr_page_text(&self, page_number: u32) -> Option<String> {
        let result = self
            .collaborators
            .images
            .render_page(page_number)
            .and_then(|pixels| self.collaborators.ocr.recognize(&pixels));

        match result {
            Ok(text) => {
                let text = normalize_whitespace(&text);
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            Err(e) => {
                log::warn!("page {} OCR fallback failed: {}", page_number, e);
                None
            }
        }
    }

    /// Tables for the page, in extractor order. A failed extraction leaves
    /// the page without tables.
    fn table_items(&self, page_number: u32) -> Vec<ContentItem> {
        match self.collaborators.tables.extract_tables(page_number) {
            Ok(tables) => tables
                .into_iter()
                .map(|t| ContentItem::table(t.data))
                .collect(),
            Err(e) => {
                log::warn!("table extraction failed on page {}: {}", page_number, e);
                Vec::new()
            }
        }
    }

    /// Chart items for every image on the page. An unresolvable image keeps
    /// its slot with a placeholder description.
    fn image_items(&self, page_number: u32) -> Vec<ContentItem> {
        self.collaborators
            .images
            .images_on_page(page_number)
            .iter()
            .map(|handle| match self.collaborators.images.resolve(handle) {
                Ok(pixels) => {
                    let description = self
                        .image_description(&pixels)
                        .unwrap_or_else(|| "image detected".to_string());
                    ContentItem::chart(None, description)
                }
                Err(e) => {
                    log::warn!(
                        "failed to extract image {} on page {}: {}",
                        handle.id,
                        page_number,
                        e
                    );
                    ContentItem::chart(None, "image detected (failed to extract)")
                }
            })
            .collect()
    }

    /// OCR an image into a description, when OCR is enabled and yields text.
    fn image_description(&self, pixels: &[u8]) -> Option<String> {
        if !self.options.ocr_fallback {
            return None;
        }
        match self.collaborators.ocr.recognize(pixels) {
            Ok(text) => {
                let text = text.trim().to_string();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            Err(e) => {
                log::warn!("image OCR failed: {}", e);
                None
            }
        }
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}
