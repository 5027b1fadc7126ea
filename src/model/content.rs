//! Typed content items emitted by the structure engine.

use serde::{Deserialize, Serialize};

/// A rectangular grid of cell strings, as produced by table extraction.
pub type Grid = Vec<Vec<String>>;

/// One element of a page's reconstructed content stream.
///
/// The serialized form carries a `type` discriminator
/// (`"heading" | "paragraph" | "chart" | "table"`); this schema is the
/// externally visible contract and must stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A section (level 1) or subsection (level 2) heading
    Heading {
        /// Heading level: 1 for sections, 2 for subsections
        level: u8,
        /// Heading text with any numbering token stripped
        text: String,
    },

    /// A run of body text, tagged with the heading context it appeared under
    Paragraph {
        /// Section heading active when the paragraph was flushed
        section: Option<String>,
        /// Subsection heading active when the paragraph was flushed
        sub_section: Option<String>,
        /// Whitespace-normalized paragraph text
        text: String,
    },

    /// An image region, either an in-flow placeholder or a resolved image
    Chart {
        /// Section heading active at the image's position (None for
        /// images appended from the image pipeline)
        section: Option<String>,
        /// Human-readable description (OCR text or a placeholder)
        description: Option<String>,
        /// Extracted chart data, when a downstream step recovers it
        chart_data: Option<Grid>,
    },

    /// A tabular region recovered by the table extractor
    Table {
        /// Always None: tables are appended after the text stream
        section: Option<String>,
        /// Optional caption or description
        description: Option<String>,
        /// Cell contents, row-major
        table_data: Grid,
    },
}

impl ContentItem {
    /// Create a heading item.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ContentItem::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a paragraph item.
    pub fn paragraph(
        section: Option<String>,
        sub_section: Option<String>,
        text: impl Into<String>,
    ) -> Self {
        ContentItem::Paragraph {
            section,
            sub_section,
            text: text.into(),
        }
    }

    /// Create a chart placeholder with a description and no data.
    pub fn chart(section: Option<String>, description: impl Into<String>) -> Self {
        ContentItem::Chart {
            section,
            description: Some(description.into()),
            chart_data: None,
        }
    }

    /// Create a table item from extracted cell data.
    pub fn table(table_data: Grid) -> Self {
        ContentItem::Table {
            section: None,
            description: None,
            table_data,
        }
    }

    /// Check if this item is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, ContentItem::Heading { .. })
    }

    /// Check if this item is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, ContentItem::Paragraph { .. })
    }

    /// Check if this item is a chart.
    pub fn is_chart(&self) -> bool {
        matches!(self, ContentItem::Chart { .. })
    }

    /// Check if this item is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, ContentItem::Table { .. })
    }

    /// Get the plain text carried by this item, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentItem::Heading { text, .. } => Some(text),
            ContentItem::Paragraph { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_predicates() {
        let h = ContentItem::heading(1, "Overview");
        assert!(h.is_heading());
        assert!(!h.is_paragraph());

        let t = ContentItem::table(vec![vec!["a".to_string()]]);
        assert!(t.is_table());
        assert!(!t.is_chart());
    }

    #[test]
    fn test_type_discriminator() {
        let p = ContentItem::paragraph(Some("Intro".to_string()), None, "Body text");
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"type\":\"paragraph\""));
        assert!(json.contains("\"sub_section\":null"));

        let c = ContentItem::chart(None, "image detected");
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"type\":\"chart\""));
        assert!(json.contains("\"chart_data\":null"));
    }

    #[test]
    fn test_text_accessor() {
        let h = ContentItem::heading(2, "Methods");
        assert_eq!(h.text(), Some("Methods"));

        let t = ContentItem::table(vec![]);
        assert_eq!(t.text(), None);
    }
}
