//! Requirements Analyzer
//!
//! Turns raw business-requirement text into an executive summary, epics and
//! user stories, acceptance criteria and test cases, then renders them into
//! a Word document. It includes:
//! - Document text extraction (DOCX, PDF, plain text)
//! - Prompt templates and the fail-fast section generation pipeline
//! - Line-oriented formatting and DOCX export
//! - Layered configuration and credential sources

pub mod models;
pub mod services;
pub mod storage;
pub mod telemetry;
pub mod utils;

pub use models::{AnalyzerConfig, ExportedDocument, RequirementText, SettingsUpdate};
pub use requirements_analyzer_core::{
    Block, FormattedDocument, GenerationResult, HeadingLevel, SectionName, TextRun,
};
pub use services::{
    build_document, export_docx, export_document, extract_text, format_section, generate_all,
    DocumentKind, PromptSource, PromptStore, RequirementsAnalyzer,
};
pub use storage::{ChainedCredential, ConfigService, CredentialSource};
pub use utils::error::{AnalyzerError, AnalyzerResult};
