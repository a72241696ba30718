//! Requirements Analyzer Core
//!
//! Foundational types shared by the Requirements Analyzer workspace. This crate
//! has no dependency on the LLM backend, document parsers or the exporter.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `section` - The fixed section set (`SectionName`) and the ordered
//!   `GenerationResult` contract handed to display and export
//! - `document` - Styled block model (`Block`, `TextRun`, `FormattedDocument`)

pub mod document;
pub mod error;
pub mod section;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Sections ───────────────────────────────────────────────────────────
pub use section::{GenerationResult, SectionName};

// ── Document Blocks ────────────────────────────────────────────────────
pub use document::{Block, FormattedDocument, HeadingLevel, TextRun};
