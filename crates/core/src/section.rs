//! Section Types
//!
//! The fixed, ordered set of artifact sections produced by one analysis run,
//! and the `GenerationResult` mapping that carries their text to both the
//! presentation layer and the document exporter.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};

/// One named artifact type.
///
/// Declaration order is the display and export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    /// Executive summary
    Summary,
    /// Epics and user stories
    UserStories,
    /// Acceptance criteria
    AcceptanceCriteria,
    /// Test cases
    TestCases,
    /// Flowchart placeholder. Always empty, never sent to the backend.
    Flows,
}

impl SectionName {
    /// Every key of a `GenerationResult`, in fixed order.
    pub const ALL: [SectionName; 5] = [
        SectionName::Summary,
        SectionName::UserStories,
        SectionName::AcceptanceCriteria,
        SectionName::TestCases,
        SectionName::Flows,
    ];

    /// Sections that are actually generated by the backend, in fixed order.
    pub const GENERATED: [SectionName; 4] = [
        SectionName::Summary,
        SectionName::UserStories,
        SectionName::AcceptanceCriteria,
        SectionName::TestCases,
    ];

    /// The snake_case key used in results and template file names.
    pub fn key(&self) -> &'static str {
        match self {
            SectionName::Summary => "summary",
            SectionName::UserStories => "user_stories",
            SectionName::AcceptanceCriteria => "acceptance_criteria",
            SectionName::TestCases => "test_cases",
            SectionName::Flows => "flows",
        }
    }

    /// Human-readable heading used on screen and in exported documents.
    pub fn title(&self) -> &'static str {
        match self {
            SectionName::Summary => "Executive Summary",
            SectionName::UserStories => "Epics & User Stories",
            SectionName::AcceptanceCriteria => "Acceptance Criteria",
            SectionName::TestCases => "Test Cases",
            SectionName::Flows => "Mermaid Flowchart",
        }
    }

    /// File name of this section's prompt template (`<key>.txt`).
    pub fn template_file_name(&self) -> String {
        format!("{}.txt", self.key())
    }

    /// Whether this section is produced by a backend call.
    pub fn is_generated(&self) -> bool {
        !matches!(self, SectionName::Flows)
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionName::ALL
            .iter()
            .copied()
            .find(|section| section.key() == s.trim())
            .ok_or_else(|| CoreError::parse(format!("Unknown section: {}", s)))
    }
}

/// Ordered mapping from every `SectionName` to its generated text.
///
/// Only constructible from a complete set of generated sections, so a value
/// of this type always holds all five keys in fixed order with `flows` empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    sections: Vec<(SectionName, String)>,
}

impl GenerationResult {
    /// Assemble a result from the generated sections.
    ///
    /// `generated` must contain exactly the `SectionName::GENERATED` sections
    /// in fixed order. The `flows` placeholder is appended as an empty string.
    pub fn from_generated(generated: Vec<(SectionName, String)>) -> CoreResult<Self> {
        let names: Vec<SectionName> = generated.iter().map(|(name, _)| *name).collect();
        if names != SectionName::GENERATED {
            return Err(CoreError::validation(format!(
                "Expected sections {:?}, got {:?}",
                SectionName::GENERATED,
                names
            )));
        }

        let mut sections = generated;
        sections.push((SectionName::Flows, String::new()));
        Ok(Self { sections })
    }

    /// Text for a section. Every section is present, so this never fails.
    pub fn get(&self, section: SectionName) -> &str {
        self.sections
            .iter()
            .find(|(name, _)| *name == section)
            .map(|(_, text)| text.as_str())
            .unwrap_or_default()
    }

    /// Iterate `(section, text)` pairs in fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionName, &str)> {
        self.sections.iter().map(|(name, text)| (*name, text.as_str()))
    }

    /// Section keys in fixed order.
    pub fn keys(&self) -> Vec<SectionName> {
        self.sections.iter().map(|(name, _)| *name).collect()
    }

    /// Number of keys (always five).
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for GenerationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, text) in &self.sections {
            map.serialize_entry(name.key(), text)?;
        }
        map.end()
    }
}
