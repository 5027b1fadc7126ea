//! Integration tests for the output JSON contract and the CLI input format.

use docstruct::{
    assemble, Block, ContentItem, DocumentLayout, DocumentResult, JsonFormat, PageLayout,
    PageResult, TextLine,
};

fn sample_result() -> DocumentResult {
    let mut layout = DocumentLayout::new();
    let mut page = PageLayout::new(1);
    page.add_block(Block::text(vec![
        TextLine::single("Summary", 18.0, "Helvetica"),
        TextLine::single("Breakdown", 14.0, "Helvetica"),
        TextLine::single("Cash flow improved.", 10.0, "Helvetica"),
    ]));
    page.add_block(Block::image());
    layout.add_page(page);
    assemble(&layout)
}

#[test]
fn test_schema_shape() {
    let result = sample_result();
    let json = docstruct::to_json(&result, JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let pages = value.get("pages").unwrap().as_array().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].get("page_number").unwrap(), 1);

    let content = pages[0].get("content").unwrap().as_array().unwrap();
    let types: Vec<&str> = content
        .iter()
        .map(|item| item.get("type").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["heading", "heading", "paragraph", "chart"]);
}

#[test]
fn test_paragraph_field_names() {
    let result = sample_result();
    let json = docstruct::to_json(&result, JsonFormat::Compact).unwrap();

    // Field names are part of the contract.
    assert!(json.contains("\"sub_section\""));
    assert!(json.contains("\"section\""));
    assert!(json.contains("\"chart_data\""));
    assert!(json.contains("\"description\""));
}

#[test]
fn test_table_serialization() {
    let mut doc = DocumentResult::new();
    let mut page = PageResult::new(1);
    page.add_item(ContentItem::table(vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["1".to_string(), "2".to_string()],
    ]));
    doc.add_page(page);

    let json = docstruct::to_json(&doc, JsonFormat::Compact).unwrap();
    assert!(json.contains("\"type\":\"table\""));
    assert!(json.contains("\"table_data\":[[\"a\",\"b\"],[\"1\",\"2\"]]"));
}

#[test]
fn test_result_roundtrip() {
    let result = sample_result();
    let json = docstruct::to_json(&result, JsonFormat::Pretty).unwrap();
    let back: DocumentResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}

#[test]
fn test_layout_json_input() {
    // The CLI's input format: a serialized DocumentLayout.
    let json = r#"{
        "pages": [
            {
                "number": 1,
                "blocks": [
                    {
                        "type": "text",
                        "lines": [
                            { "spans": [ { "text": "Findings", "size": 18.0, "font_name": "Helvetica-Bold" } ] },
                            { "spans": [ { "text": "Margins", "size": 14.0, "font_name": "Helvetica" } ] },
                            { "spans": [ { "text": "Costs fell.", "size": 10.0, "font_name": "Helvetica" } ] }
                        ]
                    },
                    { "type": "other" }
                ]
            }
        ]
    }"#;

    let layout: DocumentLayout = serde_json::from_str(json).unwrap();
    assert_eq!(layout.page_count(), 1);

    let result = assemble(&layout);
    assert_eq!(
        result.pages[0].content[0],
        ContentItem::heading(1, "Findings")
    );
    assert_eq!(
        result.pages[0].content[2],
        ContentItem::paragraph(
            Some("Findings".to_string()),
            Some("Margins".to_string()),
            "Costs fell.",
        )
    );
}

#[test]
fn test_layout_file_roundtrip() {
    // End-to-end through the filesystem, as the CLI consumes it.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let mut layout = DocumentLayout::new();
    let mut page = PageLayout::new(1);
    page.add_block(Block::text(vec![TextLine::single(
        "2.1 Revenue Growth",
        10.0,
        "Helvetica",
    )]));
    layout.add_page(page);

    std::fs::write(&path, serde_json::to_string(&layout).unwrap()).unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let loaded: DocumentLayout = serde_json::from_str(&data).unwrap();
    let result = assemble(&loaded);

    assert_eq!(
        result.pages[0].content[0],
        ContentItem::heading(2, "Revenue Growth")
    );
}
