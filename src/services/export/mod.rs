//! Document Export
//!
//! Assembles the exported document from a generation result and renders it
//! as a Word file.

pub mod docx;

pub use docx::export_docx;

use chrono::Utc;
use requirements_analyzer_core::{Block, FormattedDocument, GenerationResult, HeadingLevel, SectionName};

use crate::models::export::{ExportedDocument, DOCX_MIME_TYPE};
use crate::services::formatter::{format_section, format_summary};
use crate::utils::error::AnalyzerResult;

/// Top-level title of every exported document
pub const DOCUMENT_TITLE: &str = "AI Generated Requirements";

/// Build the full block sequence: title, then per generated section its
/// heading followed by its formatted text. The `flows` placeholder is omitted.
pub fn build_document(result: &GenerationResult) -> FormattedDocument {
    let mut blocks = vec![Block::heading(HeadingLevel::Title, DOCUMENT_TITLE)];
    for (section, text) in result.iter().filter(|(section, _)| section.is_generated()) {
        blocks.push(Block::heading(HeadingLevel::Section, section.title()));
        let body = match section {
            SectionName::Summary => format_summary(text),
            _ => format_section(text),
        };
        blocks.extend(body);
    }
    FormattedDocument::new(blocks)
}

/// Build and render the document, stamping the file name with `unix_seconds`.
pub fn export_at(result: &GenerationResult, unix_seconds: i64) -> AnalyzerResult<ExportedDocument> {
    let document = build_document(result);
    let bytes = export_docx(&document)?;
    let file_name = ExportedDocument::file_name_for(unix_seconds);
    tracing::info!(file_name = %file_name, blocks = document.len(), size = bytes.len(), "exported document");
    Ok(ExportedDocument {
        file_name,
        mime_type: DOCX_MIME_TYPE.to_string(),
        bytes,
    })
}

/// Build and render the document, stamped with the current time.
pub fn export_document(result: &GenerationResult) -> AnalyzerResult<ExportedDocument> {
    export_at(result, Utc::now().timestamp())
}
