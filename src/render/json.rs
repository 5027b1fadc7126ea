//! JSON rendering for reconstructed documents.

use crate::error::{Error, Result};
use crate::model::DocumentResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a document result to JSON.
///
/// The emitted shape — `pages` of `page_number` plus `content`, each item
/// carrying a `type` discriminator — is the stable output contract.
pub fn to_json(doc: &DocumentResult, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
