//! Collaborator seams: table extraction, OCR, and page imagery.
//!
//! The structure engine treats these as black boxes. Each concern is a trait
//! with a no-op default implementation, and [`Collaborators`] bundles the
//! active set behind `Arc`s so one bundle can serve parallel page assembly.
//!
//! Failures reported through these traits are absorbed by the assembler with
//! a documented fallback; they never abort a page or the document.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::Grid;

/// A table recovered from a page by the external table extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTable {
    /// Cell contents, row-major
    pub data: Grid,
}

impl ExtractedTable {
    /// Create a table from cell data.
    pub fn new(data: Grid) -> Self {
        Self { data }
    }
}

/// An opaque reference to one image on a page.
///
/// Handles are produced by an [`ImageSource`] and resolved back through it;
/// the engine never interprets the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    /// Source-defined identifier
    pub id: String,
}

impl ImageHandle {
    /// Create a handle with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Extracts tabular regions from a page.
///
/// Implementations must return an empty list, not an error, for pages that
/// simply contain no tables.
pub trait TableExtractor: Send + Sync {
    /// Extract all tables on the given page, in layout order.
    fn extract_tables(&self, page_number: u32) -> Result<Vec<ExtractedTable>>;
}

/// Recognizes text in raw image bytes.
pub trait OcrEngine: Send + Sync {
    /// Run recognition over the image. An empty string is a valid result.
    fn recognize(&self, image: &[u8]) -> Result<String>;
}

/// Provides the images present on a page and their pixel data.
pub trait ImageSource: Send + Sync {
    /// List the images on the given page, in layout order.
    fn images_on_page(&self, page_number: u32) -> Vec<ImageHandle>;

    /// Resolve a handle to raw pixel data.
    fn resolve(&self, handle: &ImageHandle) -> Result<Vec<u8>>;

    /// Rasterize the whole page, for the OCR fallback on text-less pages.
    fn render_page(&self, page_number: u32) -> Result<Vec<u8>>;
}

/// Table extractor that finds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTables;

impl TableExtractor for NoTables {
    fn extract_tables(&self, _page_number: u32) -> Result<Vec<ExtractedTable>> {
        Ok(Vec::new())
    }
}

/// OCR engine placeholder used when none is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOcr;

impl OcrEngine for NoOcr {
    fn recognize(&self, _image: &[u8]) -> Result<String> {
        Err(Error::Ocr("no OCR engine configured".to_string()))
    }
}

/// Image source for documents without an image pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageSource for NoImages {
    fn images_on_page(&self, _page_number: u32) -> Vec<ImageHandle> {
        Vec::new()
    }

    fn resolve(&self, handle: &ImageHandle) -> Result<Vec<u8>> {
        Err(Error::ImageExtract(format!(
            "no image source configured (handle {})",
            handle.id
        )))
    }

    fn render_page(&self, page_number: u32) -> Result<Vec<u8>> {
        Err(Error::ImageExtract(format!(
            "no image source configured (page {})",
            page_number
        )))
    }
}

/// The collaborator bundle used during assembly.
#[derive(Clone)]
pub struct Collaborators {
    /// Table extraction backend
    pub tables: Arc<dyn TableExtractor>,

    /// OCR backend
    pub ocr: Arc<dyn OcrEngine>,

    /// Image pipeline backend
    pub images: Arc<dyn ImageSource>,
}

impl Collaborators {
    /// Create a bundle of no-op collaborators.
    pub fn none() -> Self {
        Self {
            tables: Arc::new(NoTables),
            ocr: Arc::new(NoOcr),
            images: Arc::new(NoImages),
        }
    }

    /// Set the table extractor.
    pub fn with_tables(mut self, tables: Arc<dyn TableExtractor>) -> Self {
        self.tables = tables;
        self
    }

    /// Set the OCR engine.
    pub fn with_ocr(mut self, ocr: Arc<dyn OcrEngine>) -> Self {
        self.ocr = ocr;
        self
    }

    /// Set the image source.
    pub fn with_images(mut self, images: Arc<dyn ImageSource>) -> Self {
        self.images = images;
        self
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::none()
    }
}
