//! Document Text Extraction
//!
//! Turns an uploaded DOCX, PDF or plain-text document into the requirement
//! text fed to the generation pipeline. Pure functions over byte buffers.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;

use crate::utils::error::{AnalyzerError, AnalyzerResult};

/// Maximum upload size accepted for extraction (50MB)
const MAX_DOC_SIZE: usize = 50 * 1024 * 1024;

/// Elements whose paragraphs are not body paragraphs of the document.
const NON_BODY_CONTAINERS: [&str; 4] = ["tbl", "txbxContent", "drawing", "pict"];

/// Declared kind of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Office Open XML word-processor document (.docx)
    Docx,
    /// Portable Document Format
    Pdf,
    /// UTF-8 text
    PlainText,
}

impl DocumentKind {
    /// Resolve a kind from an upload's declared MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_lowercase();
        match mime.as_str() {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(DocumentKind::Docx)
            }
            "application/pdf" => Some(DocumentKind::Pdf),
            m if m.starts_with("text/") => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    /// Resolve a kind from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "docx" => Some(DocumentKind::Docx),
            "pdf" => Some(DocumentKind::Pdf),
            "txt" | "md" | "text" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    /// Resolve a kind from a path's extension.
    pub fn from_path(path: &Path) -> AnalyzerResult<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| AnalyzerError::UnsupportedDocument(path.display().to_string()))
    }

    /// Label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Docx => "docx",
            DocumentKind::Pdf => "pdf",
            DocumentKind::PlainText => "text file",
        }
    }
}

/// Extract plain text from document bytes of the declared kind.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> AnalyzerResult<String> {
    if bytes.len() > MAX_DOC_SIZE {
        return Err(AnalyzerError::extraction(
            kind.label(),
            format!(
                "File too large: {:.1} MB (max {:.1} MB)",
                bytes.len() as f64 / (1024.0 * 1024.0),
                MAX_DOC_SIZE as f64 / (1024.0 * 1024.0)
            ),
        ));
    }

    let text = match kind {
        DocumentKind::Docx => extract_docx_text(bytes)?,
        DocumentKind::Pdf => extract_pdf_text(bytes)?,
        DocumentKind::PlainText => decode_plain_text(bytes)?,
    };
    tracing::debug!(kind = kind.label(), chars = text.len(), "extracted document text");
    Ok(text)
}

/// Extract text from a file on disk, choosing the kind from its extension.
pub fn extract_file(path: &Path) -> AnalyzerResult<String> {
    let kind = DocumentKind::from_path(path)?;
    let bytes = std::fs::read(path)?;
    extract_text(&bytes, kind)
}

/// Decode a plain-text upload. No fallback encoding is attempted.
pub fn decode_plain_text(bytes: &[u8]) -> AnalyzerResult<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Extract the non-blank body paragraphs of a DOCX document, one per line.
pub fn extract_docx_text(bytes: &[u8]) -> AnalyzerResult<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AnalyzerError::extraction("docx", format!("Failed to read DOCX as ZIP: {}", e)))?;

    let mut doc_xml = String::new();
    {
        let mut doc_entry = archive.by_name("word/document.xml").map_err(|_| {
            AnalyzerError::extraction("docx", "Invalid DOCX: missing word/document.xml")
        })?;
        doc_entry.read_to_string(&mut doc_xml).map_err(|e| {
            AnalyzerError::extraction("docx", format!("Failed to read document.xml: {}", e))
        })?;
    }

    let paragraphs = docx_paragraphs(&doc_xml)?;
    Ok(paragraphs
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Collect the text of every body paragraph in `word/document.xml`, in order.
///
/// Paragraph text is the concatenation of its `<w:t>` runs; `<w:tab/>` becomes
/// a tab and `<w:br/>`/`<w:cr/>` a newline. Paragraphs inside tables, text
/// boxes and drawings are skipped.
fn docx_paragraphs(xml: &str) -> AnalyzerResult<Vec<String>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut nested_depth = 0usize;
    let mut in_paragraph = false;
    let mut in_text_element = false;
    let mut paragraph_text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let local_name = e.local_name();
                let name = std::str::from_utf8(local_name.as_ref()).unwrap_or("");
                if NON_BODY_CONTAINERS.contains(&name) {
                    nested_depth += 1;
                } else if nested_depth == 0 {
                    match name {
                        "p" => {
                            in_paragraph = true;
                            paragraph_text.clear();
                        }
                        "t" if in_paragraph => in_text_element = true,
                        _ => {}
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let local_name = e.local_name();
                let name = std::str::from_utf8(local_name.as_ref()).unwrap_or("");
                if nested_depth == 0 {
                    match name {
                        "p" => paragraphs.push(String::new()),
                        "tab" if in_paragraph => paragraph_text.push('\t'),
                        "br" | "cr" if in_paragraph => paragraph_text.push('\n'),
                        _ => {}
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let local_name = e.local_name();
                let name = std::str::from_utf8(local_name.as_ref()).unwrap_or("");
                if NON_BODY_CONTAINERS.contains(&name) {
                    nested_depth = nested_depth.saturating_sub(1);
                } else if nested_depth == 0 {
                    match name {
                        "p" if in_paragraph => {
                            paragraphs.push(std::mem::take(&mut paragraph_text));
                            in_paragraph = false;
                        }
                        "t" => in_text_element = false,
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_text_element && nested_depth == 0 {
                    let text = e.unescape().map_err(|err| {
                        AnalyzerError::extraction("docx", format!("XML parse error: {}", err))
                    })?;
                    paragraph_text.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AnalyzerError::extraction(
                    "docx",
                    format!("XML parse error: {}", e),
                ))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

/// Extract text from a PDF, one segment per page joined by newlines.
pub fn extract_pdf_text(bytes: &[u8]) -> AnalyzerResult<String> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
        AnalyzerError::extraction("pdf", format!("Failed to extract PDF text: {}", e))
    })?;
    let pages: Vec<String> = pages.iter().map(|page| page.trim().to_string()).collect();
    tracing::debug!(pages = pages.len(), "extracted PDF pages");
    Ok(join_pages(&pages))
}

/// Join per-page text in page order. Pages without text stay as empty segments.
pub(crate) fn join_pages(pages: &[String]) -> String {
    pages.join("\n")
}
