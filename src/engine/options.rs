//! Assembly options and configuration.

/// Options for document assembly.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Tolerance subtracted from the size thresholds, absorbing rendering
    /// jitter in span sizes
    pub tolerance: f32,

    /// Whether to run OCR for text-less pages and image descriptions
    pub ocr_fallback: bool,

    /// Whether to assemble pages on the rayon pool
    pub parallel: bool,
}

impl AssembleOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size-threshold tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable the OCR fallback.
    pub fn with_ocr(mut self, enabled: bool) -> Self {
        self.ocr_fallback = enabled;
        self
    }

    /// Enable or disable parallel page assembly.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel page assembly.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.5,
            ocr_fallback: false,
            parallel: true,
        }
    }
}
