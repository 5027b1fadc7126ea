//! # docstruct
//!
//! Heuristic document structure reconstruction for Rust.
//!
//! Given a parsed page layout (text spans with font metadata, image and
//! other regions), docstruct classifies lines as section headings,
//! subsection headings, or body text and assembles them — together with
//! table and image items from external extractors — into an ordered,
//! per-page content stream suitable for indexing or display.
//!
//! ## Quick Start
//!
//! ```
//! use docstruct::{assemble, Block, DocumentLayout, PageLayout, TextLine};
//! use docstruct::render::{to_json, JsonFormat};
//!
//! fn main() -> docstruct::Result<()> {
//!     let mut page = PageLayout::new(1);
//!     page.add_block(Block::text(vec![
//!         TextLine::single("1 Overview", 18.0, "Helvetica-Bold"),
//!         TextLine::single("Key Metrics", 14.0, "Helvetica"),
//!         TextLine::single("Revenue grew modestly.", 10.0, "Helvetica"),
//!     ]));
//!
//!     let mut layout = DocumentLayout::new();
//!     layout.add_page(page);
//!
//!     let result = assemble(&layout);
//!     println!("{}", to_json(&result, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Single pre-pass font profile**: the two largest distinct span sizes
//!   in the whole document stand in for section and subsection styles.
//! - **Ordered classification rules**: numbering pattern, section size,
//!   subsection size, bold-short fallback — first match wins.
//! - **Per-page context**: section/subsection state never crosses a page
//!   boundary.
//! - **Collaborator seams**: table extraction, OCR, and image decoding sit
//!   behind traits; their failures degrade the page, never abort it.

pub mod engine;
pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use engine::{
    AssembleOptions, DocumentAssembler, FontProfile, HeadingClassification, HeadingDetector,
    HeadingKind, PageStructureBuilder,
};
pub use error::{Error, Result};
pub use layout::{Block, DocumentLayout, ImageBlock, PageLayout, TextBlock, TextLine, TextSpan};
pub use model::{ContentItem, DocumentResult, Grid, PageResult};
pub use pipeline::{
    Collaborators, ExtractedTable, ImageHandle, ImageSource, NoImages, NoOcr, NoTables, OcrEngine,
    TableExtractor,
};
pub use render::{to_json, JsonFormat};

/// Assemble a parsed layout with default options and no collaborators.
///
/// Pages come back in page-number order; text-less pages yield only their
/// image items (none, without an image source).
pub fn assemble(layout: &DocumentLayout) -> DocumentResult {
    DocumentAssembler::new().assemble(layout)
}

/// Assemble a parsed layout with custom options.
pub fn assemble_with_options(layout: &DocumentLayout, options: AssembleOptions) -> DocumentResult {
    DocumentAssembler::with_collaborators(Collaborators::none(), options).assemble(layout)
}

/// Builder for configuring and running document assembly.
///
/// # Example
///
/// ```
/// use docstruct::{Docstruct, DocumentLayout};
///
/// let layout = DocumentLayout::new();
/// let result = Docstruct::new()
///     .with_tolerance(0.5)
///     .sequential()
///     .assemble(&layout);
/// assert!(result.is_empty());
/// ```
pub struct Docstruct {
    collaborators: Collaborators,
    options: AssembleOptions,
}

impl Docstruct {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            collaborators: Collaborators::none(),
            options: AssembleOptions::default(),
        }
    }

    /// Set the table extraction backend.
    pub fn with_tables(mut self, tables: std::sync::Arc<dyn TableExtractor>) -> Self {
        self.collaborators = self.collaborators.with_tables(tables);
        self
    }

    /// Set the OCR backend and enable the OCR fallback.
    pub fn with_ocr(mut self, ocr: std::sync::Arc<dyn OcrEngine>) -> Self {
        self.collaborators = self.collaborators.with_ocr(ocr);
        self.options = self.options.with_ocr(true);
        self
    }

    /// Set the image pipeline backend.
    pub fn with_images(mut self, images: std::sync::Arc<dyn ImageSource>) -> Self {
        self.collaborators = self.collaborators.with_images(images);
        self
    }

    /// Set the size-threshold tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.options = self.options.with_tolerance(tolerance);
        self
    }

    /// Disable parallel page assembly.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Run assembly over a parsed layout.
    pub fn assemble(self, layout: &DocumentLayout) -> DocumentResult {
        DocumentAssembler::with_collaborators(self.collaborators, self.options).assemble(layout)
    }
}

impl Default for Docstruct {
    fn default() -> Self {
        Self::new()
    }
}
