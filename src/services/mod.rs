//! Services
//!
//! Business logic: text extraction, prompt templates, section generation,
//! formatting and export.

pub mod analyzer;
pub mod export;
pub mod extractor;
pub mod formatter;
pub mod generator;
pub mod prompts;

pub use analyzer::RequirementsAnalyzer;
pub use export::{build_document, export_docx, export_document};
pub use extractor::{extract_file, extract_text, DocumentKind};
pub use formatter::{format_section, format_summary, split_emphasis};
pub use generator::{generate_all, SectionGenerator, SYSTEM_INSTRUCTION};
pub use prompts::{DirectoryPromptStore, PromptSource, PromptStore, PromptTemplate, REQUIREMENT_PLACEHOLDER};
