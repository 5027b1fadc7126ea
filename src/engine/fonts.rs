//! Document-wide font statistics for heading detection.

use std::collections::BTreeSet;

use crate::layout::DocumentLayout;

/// Distinct font sizes observed across a whole document, largest first.
///
/// The two largest sizes stand in for "section style" and "subsection style"
/// since no explicit style metadata is available. The profile is computed
/// once per document in a full pre-pass: a size that appears only on page 40
/// still shapes classification on page 1, so the scan cannot be incremental.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontProfile {
    sizes: Vec<f32>,
}

impl FontProfile {
    /// Scan every span of every text block in the document and build the
    /// profile. A document without any text spans yields an empty profile;
    /// that is the documented degraded mode, not an error.
    pub fn analyze(layout: &DocumentLayout) -> Self {
        // Sizes are keyed in tenths of a point so dedup works on integers.
        let tenths: BTreeSet<i32> = layout
            .spans()
            .map(|span| (span.size * 10.0).round() as i32)
            .collect();

        let sizes: Vec<f32> = tenths.into_iter().rev().map(|t| t as f32 / 10.0).collect();

        log::debug!("font profile sizes (descending): {:?}", sizes);
        Self { sizes }
    }

    /// Reference size for section headings: the largest size present.
    pub fn section_size(&self) -> Option<f32> {
        self.sizes.first().copied()
    }

    /// Reference size for subsection headings: the second-largest size.
    pub fn subsection_size(&self) -> Option<f32> {
        self.sizes.get(1).copied()
    }

    /// All distinct sizes, strictly descending.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Whether the document contained no text spans at all.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Block, PageLayout, TextLine};

    fn layout_with_sizes(sizes: &[f32]) -> DocumentLayout {
        let mut page = PageLayout::new(1);
        let lines = sizes
            .iter()
            .map(|&s| TextLine::single("text", s, "Helvetica"))
            .collect();
        page.add_block(Block::text(lines));

        let mut doc = DocumentLayout::new();
        doc.add_page(page);
        doc
    }

    #[test]
    fn test_descending_distinct_sizes() {
        let doc = layout_with_sizes(&[10.0, 18.0, 14.0, 18.0, 10.0]);
        let profile = FontProfile::analyze(&doc);

        assert_eq!(profile.sizes(), &[18.0, 14.0, 10.0]);
        assert_eq!(profile.section_size(), Some(18.0));
        assert_eq!(profile.subsection_size(), Some(14.0));
    }

    #[test]
    fn test_rounding_merges_near_sizes() {
        let doc = layout_with_sizes(&[12.02, 12.04, 11.96]);
        let profile = FontProfile::analyze(&doc);

        assert_eq!(profile.sizes(), &[12.0]);
        assert_eq!(profile.subsection_size(), None);
    }

    #[test]
    fn test_empty_document() {
        let profile = FontProfile::analyze(&DocumentLayout::new());
        assert!(profile.is_empty());
        assert_eq!(profile.section_size(), None);
        assert_eq!(profile.subsection_size(), None);
    }

    #[test]
    fn test_cross_page_scan() {
        let mut doc = DocumentLayout::new();

        let mut p1 = PageLayout::new(1);
        p1.add_block(Block::text(vec![TextLine::single("body", 10.0, "F")]));
        doc.add_page(p1);

        let mut p2 = PageLayout::new(2);
        p2.add_block(Block::text(vec![TextLine::single("title", 20.0, "F")]));
        doc.add_page(p2);

        let profile = FontProfile::analyze(&doc);
        assert_eq!(profile.section_size(), Some(20.0));
        assert_eq!(profile.subsection_size(), Some(10.0));
    }
}
