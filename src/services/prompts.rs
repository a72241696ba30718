//! Prompt Template Store
//!
//! One template per generated section, each carrying the `{requirement}`
//! placeholder. Templates come either from `<dir>/<section>.txt` files or
//! from the set compiled into the binary.

use std::collections::HashMap;
use std::path::PathBuf;

use requirements_analyzer_core::SectionName;

use crate::utils::error::{AnalyzerError, AnalyzerResult};

/// Substitution marker replaced with the requirement text
pub const REQUIREMENT_PLACEHOLDER: &str = "{requirement}";

const BUILTIN_SUMMARY: &str = include_str!("../../prompts/summary.txt");
const BUILTIN_USER_STORIES: &str = include_str!("../../prompts/user_stories.txt");
const BUILTIN_ACCEPTANCE_CRITERIA: &str = include_str!("../../prompts/acceptance_criteria.txt");
const BUILTIN_TEST_CASES: &str = include_str!("../../prompts/test_cases.txt");

/// A validated template for one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    section: SectionName,
    content: String,
}

impl PromptTemplate {
    /// Validate raw template text. The placeholder must appear at least once.
    pub fn parse(section: SectionName, content: impl Into<String>) -> AnalyzerResult<Self> {
        let content = content.into();
        if !content.contains(REQUIREMENT_PLACEHOLDER) {
            return Err(AnalyzerError::TemplateInvalid {
                section,
                message: format!("template has no {} placeholder", REQUIREMENT_PLACEHOLDER),
            });
        }
        Ok(Self { section, content })
    }

    pub fn section(&self) -> SectionName {
        self.section
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Substitute the requirement text into every placeholder occurrence.
    pub fn render(&self, requirement: &str) -> String {
        self.content.replace(REQUIREMENT_PLACEHOLDER, requirement)
    }
}

/// Resolves a section name to its template.
pub trait PromptSource: Send + Sync {
    /// Load the template for `section`.
    ///
    /// An absent template is `TemplateMissing`; one without a placeholder is
    /// `TemplateInvalid`.
    fn load(&self, section: SectionName) -> AnalyzerResult<PromptTemplate>;
}

/// Templates read from `<dir>/<section>.txt` on every load.
#[derive(Debug, Clone)]
pub struct DirectoryPromptStore {
    dir: PathBuf,
}

impl DirectoryPromptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the template file for a section.
    pub fn template_path(&self, section: SectionName) -> PathBuf {
        self.dir.join(section.template_file_name())
    }
}

impl PromptSource for DirectoryPromptStore {
    fn load(&self, section: SectionName) -> AnalyzerResult<PromptTemplate> {
        let path = self.template_path(section);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AnalyzerError::TemplateMissing {
                    section,
                    path: path.display().to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(section = %section, path = %path.display(), "loaded prompt template");
        PromptTemplate::parse(section, content)
    }
}

/// In-memory templates keyed by section.
#[derive(Debug, Clone, Default)]
pub struct PromptStore {
    templates: HashMap<SectionName, String>,
}

impl PromptStore {
    /// An empty store; every load fails with `TemplateMissing`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The templates shipped with the crate.
    pub fn builtin() -> Self {
        Self::new()
            .with_template(SectionName::Summary, BUILTIN_SUMMARY)
            .with_template(SectionName::UserStories, BUILTIN_USER_STORIES)
            .with_template(SectionName::AcceptanceCriteria, BUILTIN_ACCEPTANCE_CRITERIA)
            .with_template(SectionName::TestCases, BUILTIN_TEST_CASES)
    }

    pub fn with_template(mut self, section: SectionName, content: impl Into<String>) -> Self {
        self.templates.insert(section, content.into());
        self
    }

    /// Drop a section's template.
    pub fn without(mut self, section: SectionName) -> Self {
        self.templates.remove(&section);
        self
    }
}

impl PromptSource for PromptStore {
    fn load(&self, section: SectionName) -> AnalyzerResult<PromptTemplate> {
        let content = self
            .templates
            .get(&section)
            .ok_or_else(|| AnalyzerError::TemplateMissing {
                section,
                path: format!("<builtin>/{}", section.template_file_name()),
            })?;
        PromptTemplate::parse(section, content.clone())
    }
}
