//! Requirement Text
//!
//! The caller-supplied business requirement. Blank input never reaches the
//! generation pipeline because a `RequirementText` cannot be built from it.

use std::fmt;

use crate::utils::error::{AnalyzerError, AnalyzerResult};

/// Non-blank requirement text, stored exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementText(String);

impl RequirementText {
    /// Wrap requirement text, rejecting input that is empty after trimming.
    pub fn new(text: impl Into<String>) -> AnalyzerResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AnalyzerError::EmptyRequirement);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequirementText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
