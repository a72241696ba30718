//! Document Block Model
//!
//! A flat sequence of styled blocks built from section text and consumed by
//! the document exporter. Blocks carry semantic styling (heading level,
//! list item, bold runs); layout details such as spacing and indentation are
//! decided by the exporter from the block kind.

use serde::Serialize;

/// Heading levels, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingLevel {
    /// Document title
    Title,
    /// One heading per section
    Section,
    /// An epic inside the user-stories section
    Epic,
    /// A user story, rendered indented under its epic
    Story,
}

impl HeadingLevel {
    /// Whether headings at this level are rendered indented.
    pub fn is_indented(&self) -> bool {
        matches!(self, HeadingLevel::Story)
    }
}

/// A run of text with uniform emphasis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
}

impl TextRun {
    /// Create an unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Create a bold run
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// One styled unit of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A bold heading at the given level
    Heading { level: HeadingLevel, text: String },
    /// An indented bullet-list entry
    ListItem { text: String },
    /// A paragraph made of one or more runs
    Paragraph { runs: Vec<TextRun> },
}

impl Block {
    /// Create a heading block
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a list-item block
    pub fn list_item(text: impl Into<String>) -> Self {
        Block::ListItem { text: text.into() }
    }

    /// Create a paragraph holding a single unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Block::Paragraph {
            runs: vec![TextRun::plain(text)],
        }
    }
}

/// An ordered, immutable sequence of blocks ready for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedDocument {
    blocks: Vec<Block>,
}

impl FormattedDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
