//! Error types for the docstruct library.

use std::io;
use thiserror::Error;

/// Result type alias for docstruct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during structure reconstruction.
///
/// Only [`Error::Layout`] and [`Error::Io`] are fatal at the document level.
/// Collaborator errors (tables, OCR, images) are absorbed at their call sites
/// with a documented fallback and logged; they exist so implementations of
/// the collaborator traits can report failures in a typed way.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input layout cannot be read or parsed at all.
    #[error("layout input error: {0}")]
    Layout(String),

    /// Error extracting tables from a page.
    #[error("table extraction error: {0}")]
    TableExtract(String),

    /// Error running optical character recognition.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Error resolving or rasterizing an image.
    #[error("image extraction error: {0}")]
    ImageExtract(String),

    /// Error during output rendering (JSON serialization).
    #[error("rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error class aborts document assembly.
    ///
    /// Collaborator failures never do; they are replaced by per-item
    /// fallbacks so a single bad image or table never loses the page.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Layout(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Layout(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Layout("truncated input".to_string());
        assert_eq!(err.to_string(), "layout input error: truncated input");

        let err = Error::Ocr("engine unavailable".to_string());
        assert_eq!(err.to_string(), "OCR error: engine unavailable");
    }

    #[test]
    fn test_fatality() {
        assert!(Error::Layout("bad".into()).is_fatal());
        assert!(!Error::TableExtract("bad".into()).is_fatal());
        assert!(!Error::Ocr("bad".into()).is_fatal());
        assert!(!Error::ImageExtract("bad".into()).is_fatal());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
