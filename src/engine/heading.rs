//! Line classification heuristics.
//!
//! A line of text is either a section heading, a subsection heading, or body
//! text. Classification runs an ordered list of rules; the first rule that
//! fires wins, and the ordering is part of the contract:
//!
//! 1. numbering pattern ("2.3.1 Title")
//! 2. section-size threshold
//! 3. subsection-size threshold
//! 4. bold-short fallback
//!
//! Explicit numbering is checked first because it is a stronger,
//! language-independent signal than visual styling. Known limitation: a
//! document that numbers its subsections but styles only unnumbered top-level
//! titles at the largest size will have those numbered lines classified by
//! their numbering depth, not their size.

use regex::Regex;

use super::FontProfile;
use crate::layout::TextLine;

/// Maximum text length for the bold-short fallback rule.
const BOLD_MAX_CHARS: usize = 120;

/// What a line was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    /// A level-1 heading
    Section,
    /// A level-2 heading
    Subsection,
    /// Body text
    Paragraph,
}

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingClassification {
    /// The detected kind
    pub kind: HeadingKind,

    /// Heading text with the numbering token stripped, or the raw line text
    /// for paragraphs
    pub text: String,

    /// The numbering token when the numbering rule fired (e.g., "2.3.1")
    pub numbering: Option<String>,
}

impl HeadingClassification {
    fn paragraph(text: String) -> Self {
        Self {
            kind: HeadingKind::Paragraph,
            text,
            numbering: None,
        }
    }
}

/// Extracted per-line features the rules operate on.
struct LineFeatures {
    text: String,
    max_size: Option<f32>,
    is_bold: bool,
}

impl LineFeatures {
    fn from_line(line: &TextLine) -> Self {
        Self {
            text: line.text(),
            max_size: line.max_size(),
            is_bold: line.is_bold(),
        }
    }
}

/// Heading classifier with a pre-compiled numbering pattern.
pub struct HeadingDetector {
    numbering: Regex,
}

impl HeadingDetector {
    /// Create a detector. The numbering pattern accepts "1", "1.2", "2.3.1"
    /// etc., followed by whitespace or a hyphen, then the title.
    pub fn new() -> Self {
        Self {
            numbering: Regex::new(r"^\s*(\d+(?:\.\d+)*)(?:\s+|-)\s*(.*)").unwrap(),
        }
    }

    /// Classify a line against the document's font profile.
    ///
    /// `tol` absorbs floating-point and rendering jitter in the size
    /// thresholds. Rules are evaluated in fixed order; the first match wins.
    pub fn classify(
        &self,
        line: &TextLine,
        profile: &FontProfile,
        tol: f32,
    ) -> HeadingClassification {
        let feats = LineFeatures::from_line(line);

        self.numbering_rule(&feats)
            .or_else(|| self.section_size_rule(&feats, profile, tol))
            .or_else(|| self.subsection_size_rule(&feats, profile, tol))
            .or_else(|| self.bold_short_rule(&feats, profile))
            .unwrap_or_else(|| HeadingClassification::paragraph(feats.text))
    }

    /// Rule 1: an explicit numbering token. One segment ("3") is a section;
    /// two or more ("3.1", "2.3.1") collapse to a subsection — only two
    /// heading levels are ever emitted.
    fn numbering_rule(&self, feats: &LineFeatures) -> Option<HeadingClassification> {
        let caps = self.numbering.captures(&feats.text)?;
        let numbering = caps.get(1)?.as_str().to_string();
        let title = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");

        let level = numbering.matches('.').count() + 1;
        let kind = if level == 1 {
            HeadingKind::Section
        } else {
            HeadingKind::Subsection
        };

        // A bare numbering token keeps the full line as its text.
        let text = if title.is_empty() {
            feats.text.clone()
        } else {
            title.to_string()
        };

        log::debug!("numbering rule matched {:?} -> level {}", numbering, level);
        Some(HeadingClassification {
            kind,
            text,
            numbering: Some(numbering),
        })
    }

    /// Rule 2: the line reaches the largest size seen in the document.
    fn section_size_rule(
        &self,
        feats: &LineFeatures,
        profile: &FontProfile,
        tol: f32,
    ) -> Option<HeadingClassification> {
        let section_size = profile.section_size()?;
        let max_size = feats.max_size?;

        if max_size >= section_size - tol {
            Some(HeadingClassification {
                kind: HeadingKind::Section,
                text: feats.text.clone(),
                numbering: None,
            })
        } else {
            None
        }
    }

    /// Rule 3: the line reaches the second-largest size.
    fn subsection_size_rule(
        &self,
        feats: &LineFeatures,
        profile: &FontProfile,
        tol: f32,
    ) -> Option<HeadingClassification> {
        let subsection_size = profile.subsection_size()?;
        let max_size = feats.max_size?;

        if max_size >= subsection_size - tol {
            Some(HeadingClassification {
                kind: HeadingKind::Subsection,
                text: feats.text.clone(),
                numbering: None,
            })
        } else {
            None
        }
    }

    /// Rule 4: bold, short, and larger than the reference size. Catches
    /// headings rendered in body-sized-but-bold fonts at the cost of the
    /// occasional false positive. Inert when the document has no usable
    /// reference size.
    fn bold_short_rule(
        &self,
        feats: &LineFeatures,
        profile: &FontProfile,
    ) -> Option<HeadingClassification> {
        let reference = profile.subsection_size().or(profile.section_size())?;
        let max_size = feats.max_size?;

        if feats.is_bold && feats.text.chars().count() < BOLD_MAX_CHARS && max_size > reference {
            Some(HeadingClassification {
                kind: HeadingKind::Subsection,
                text: feats.text.clone(),
                numbering: None,
            })
        } else {
            None
        }
    }
}

impl Default for HeadingDetector {
    fn default() -> Self {
        Self::new()
    }
}
