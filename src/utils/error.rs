//! Error Handling
//!
//! Unified error types for the analyzer.
//! Uses thiserror for ergonomic error definitions.

use requirements_analyzer_core::{CoreError, SectionName};
use requirements_analyzer_llm::LlmError;
use thiserror::Error;

/// Analyzer-wide error type
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// An uploaded document could not be parsed
    #[error("Error reading {kind}: {message}")]
    Extraction { kind: &'static str, message: String },

    /// Plain-text upload was not valid UTF-8
    #[error("Error reading text file: Unable to decode as UTF-8 ({0})")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Document kind not supported by the extractor
    #[error("Unsupported document type: {0}")]
    UnsupportedDocument(String),

    /// A required prompt template is absent from the store
    #[error("Prompt file not found for {section}: {path}")]
    TemplateMissing { section: SectionName, path: String },

    /// A prompt template exists but cannot be used
    #[error("Invalid prompt template for {section}: {message}")]
    TemplateInvalid {
        section: SectionName,
        message: String,
    },

    /// The backend call for a section failed
    #[error("Error processing {section}: {source}")]
    Generation {
        section: SectionName,
        #[source]
        source: LlmError,
    },

    /// No backend credential is available
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Requirement text is blank
    #[error("Please paste a requirement or upload a document")]
    EmptyRequirement,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Document export errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors from the core contract types
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for analyzer errors
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

impl AnalyzerError {
    /// Create an extraction error for a document kind
    pub fn extraction(kind: &'static str, msg: impl Into<String>) -> Self {
        Self::Extraction {
            kind,
            message: msg.into(),
        }
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an export error
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// The section whose generation failed, if this error is tied to one.
    pub fn failed_section(&self) -> Option<SectionName> {
        match self {
            Self::TemplateMissing { section, .. }
            | Self::TemplateInvalid { section, .. }
            | Self::Generation { section, .. } => Some(*section),
            _ => None,
        }
    }

    /// Whether this error points at a deployment problem rather than user input.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::TemplateMissing { .. }
                | Self::TemplateInvalid { .. }
                | Self::MissingCredential(_)
                | Self::Config(_)
        )
    }
}

/// Convert AnalyzerError to a string suitable for display
impl From<AnalyzerError> for String {
    fn from(err: AnalyzerError) -> String {
        err.to_string()
    }
}
