//! Document Extraction Integration Tests
//!
//! Builds real DOCX packages and PDFs on the fly and runs them through the public
//! extraction entry points.

use requirements_analyzer::services::{extract_file, extract_text, DocumentKind};
use requirements_analyzer::AnalyzerError;

use super::support::{docx_with_body, docx_with_paragraphs, pdf_with_pages};

#[test]
fn test_docx_empty_paragraphs_dropped() {
    let bytes = docx_with_paragraphs(&["Title", "", "Body text"]);
    let text = extract_text(&bytes, DocumentKind::Docx).unwrap();
    assert_eq!(text, "Title\nBody text");
}

#[test]
fn test_docx_whitespace_only_paragraph_dropped() {
    let bytes = docx_with_body(
        r#"<w:p><w:r><w:t>One</w:t></w:r></w:p><w:p><w:r><w:t xml:space="preserve">   </w:t></w:r></w:p><w:p><w:r><w:t>Two</w:t></w:r></w:p>"#,
    );
    assert_eq!(extract_text(&bytes, DocumentKind::Docx).unwrap(), "One\nTwo");
}

#[test]
fn test_docx_entities_unescaped() {
    let bytes = docx_with_paragraphs(&["Terms &amp; conditions &lt;v2&gt;"]);
    assert_eq!(
        extract_text(&bytes, DocumentKind::Docx).unwrap(),
        "Terms & conditions <v2>"
    );
}

#[test]
fn test_docx_table_cells_ignored() {
    let bytes = docx_with_body(
        r#"<w:p><w:r><w:t>Scope</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
    );
    assert_eq!(extract_text(&bytes, DocumentKind::Docx).unwrap(), "Scope");
}

#[test]
fn test_docx_without_document_part() {
    use std::io::{Cursor, Write};
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("readme.txt", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"hello").unwrap();
    let bytes = zip.finish().unwrap().into_inner();

    let err = extract_text(&bytes, DocumentKind::Docx).unwrap_err();
    assert!(err.to_string().contains("word/document.xml"));
}

#[test]
fn test_pdf_pages_joined_with_empty_middle_page() {
    let bytes = pdf_with_pages(&["Alpha", "", "Gamma"]);
    let text = extract_text(&bytes, DocumentKind::Pdf).unwrap();
    assert_eq!(text, "Alpha\n\nGamma");
    assert_eq!(text.split('\n').collect::<Vec<_>>(), vec!["Alpha", "", "Gamma"]);
}

#[test]
fn test_pdf_single_page() {
    let bytes = pdf_with_pages(&["Only page"]);
    assert_eq!(extract_text(&bytes, DocumentKind::Pdf).unwrap(), "Only page");
}

#[test]
fn test_plain_text_invalid_utf8() {
    let err = extract_text(b"caf\xe9", DocumentKind::PlainText).unwrap_err();
    assert!(matches!(err, AnalyzerError::Decode(_)));
}

#[test]
fn test_extract_file_by_extension() {
    let temp_dir = tempfile::tempdir().unwrap();

    let docx = temp_dir.path().join("brief.docx");
    std::fs::write(&docx, docx_with_paragraphs(&["From docx"])).unwrap();
    assert_eq!(extract_file(&docx).unwrap(), "From docx");

    let txt = temp_dir.path().join("brief.txt");
    std::fs::write(&txt, "From text\n").unwrap();
    assert_eq!(extract_file(&txt).unwrap(), "From text\n");

    let odd = temp_dir.path().join("brief.xlsx");
    std::fs::write(&odd, b"x").unwrap();
    assert!(matches!(
        extract_file(&odd),
        Err(AnalyzerError::UnsupportedDocument(_))
    ));
}
