//! Export Integration Tests
//!
//! Generates a result against the scripted backend, exports it and reads the
//! produced package back.

use std::io::{Cursor, Read};

use requirements_analyzer::models::{RequirementText, DOCX_MIME_TYPE};
use requirements_analyzer::services::{extract_text, DocumentKind, PromptStore};
use requirements_analyzer::{build_document, export_document, generate_all, Block, HeadingLevel};

use super::support::ScriptedProvider;

async fn generated() -> requirements_analyzer::GenerationResult {
    let provider = ScriptedProvider::always_ok(&[
        "Saved baskets let shoppers pay later.",
        "Epic 1: Saved Baskets\nUS-1: Save a basket",
        "- Given a basket, when saved, then it persists",
        "**TC-1: Save basket**\n- Expected result: saved",
    ]);
    generate_all(
        &RequirementText::new("Save baskets").unwrap(),
        &PromptStore::builtin(),
        &provider,
        1200,
    )
    .await
    .unwrap()
}

fn document_xml(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[tokio::test]
async fn test_export_produces_named_docx() {
    let exported = export_document(&generated().await).unwrap();

    assert!(exported.file_name.starts_with("requirements_"));
    assert!(exported.file_name.ends_with(".docx"));
    assert_eq!(exported.mime_type, DOCX_MIME_TYPE);

    let xml = document_xml(&exported.bytes);
    assert!(xml.contains("AI Generated Requirements"));
    assert!(xml.contains("Executive Summary"));
    assert!(xml.contains("Saved Baskets"));
    assert!(!xml.contains("Mermaid Flowchart"));
}

#[tokio::test]
async fn test_exported_docx_reads_back_through_extractor() {
    let exported = export_document(&generated().await).unwrap();
    let text = extract_text(&exported.bytes, DocumentKind::Docx).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "AI Generated Requirements");
    assert_eq!(lines[1], "Executive Summary");
    assert_eq!(lines[2], "Saved baskets let shoppers pay later.");
    assert!(lines.contains(&"Given a basket, when saved, then it persists"));
    assert!(lines.contains(&"TC-1: Save basket"));
}

#[tokio::test]
async fn test_document_blocks_follow_section_order() {
    let doc = build_document(&generated().await);
    let headings: Vec<(HeadingLevel, &str)> = doc
        .blocks()
        .iter()
        .filter_map(|b| match b {
            Block::Heading { level, text } => Some((*level, text.as_str())),
            _ => None,
        })
        .collect();

    assert_eq!(
        headings,
        vec![
            (HeadingLevel::Title, "AI Generated Requirements"),
            (HeadingLevel::Section, "Executive Summary"),
            (HeadingLevel::Section, "Epics & User Stories"),
            (HeadingLevel::Epic, "Saved Baskets"),
            (HeadingLevel::Story, "Save a basket"),
            (HeadingLevel::Section, "Acceptance Criteria"),
            (HeadingLevel::Section, "Test Cases"),
        ]
    );
}
