//! Export Models
//!
//! The downloadable artifact produced from a generation result.

use serde::{Deserialize, Serialize};

/// MIME type of an exported Word document
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A rendered document ready to be offered for download or written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedDocument {
    /// Suggested file name, `requirements_<unix-seconds>.docx`
    pub file_name: String,
    /// Declared content type
    pub mime_type: String,
    /// Document bytes
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl ExportedDocument {
    /// Build the suggested file name for an export taken at `unix_seconds`.
    pub fn file_name_for(unix_seconds: i64) -> String {
        format!("requirements_{}.docx", unix_seconds)
    }
}
