//! Document- and page-level result types.

use super::ContentItem;
use serde::{Deserialize, Serialize};

/// The reconstructed content of a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Ordered content items reconstructed for this page
    pub content: Vec<ContentItem>,
}

impl PageResult {
    /// Create an empty result for a page.
    pub fn new(page_number: u32) -> Self {
        Self {
            page_number,
            content: Vec::new(),
        }
    }

    /// Create a result from pre-built content.
    pub fn with_content(page_number: u32, content: Vec<ContentItem>) -> Self {
        Self {
            page_number,
            content,
        }
    }

    /// Add a content item to the page.
    pub fn add_item(&mut self, item: ContentItem) {
        self.content.push(item);
    }

    /// Check if the page has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the number of content items.
    pub fn item_count(&self) -> usize {
        self.content.len()
    }

    /// Get plain text content of the page (headings and paragraphs).
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .filter_map(|item| item.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The reconstructed content of a whole document, one entry per page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Pages in increasing page-number order, 1-based, no gaps
    pub pages: Vec<PageResult>,
}

impl DocumentResult {
    /// Create a new empty document result.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&PageResult> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: PageResult) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for DocumentResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = DocumentResult::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert!(doc.get_page(1).is_none());
        assert!(doc.get_page(0).is_none());
    }

    #[test]
    fn test_page_result() {
        let mut page = PageResult::new(1);
        assert!(page.is_empty());

        page.add_item(ContentItem::heading(1, "Overview"));
        page.add_item(ContentItem::paragraph(
            Some("Overview".to_string()),
            None,
            "Body text",
        ));

        assert_eq!(page.item_count(), 2);
        assert_eq!(page.plain_text(), "Overview\nBody text");
    }

    #[test]
    fn test_document_pages() {
        let mut doc = DocumentResult::new();
        doc.add_page(PageResult::new(1));
        doc.add_page(PageResult::new(2));

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.get_page(2).unwrap().page_number, 2);
        assert!(doc.get_page(3).is_none());
    }
}
