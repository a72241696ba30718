//! Structured Document Formatter
//!
//! Classifies each non-empty line of a section's text into a styled block.
//! Classifiers run in a fixed order and the first match wins:
//! epic heading, user-story heading, list item, inline emphasis, plain.

use std::sync::OnceLock;

use regex::Regex;
use requirements_analyzer_core::{Block, HeadingLevel, TextRun};

/// Compiled line patterns (initialized once).
struct Patterns {
    epic_markdown: Regex,
    epic_bold: Regex,
    epic_bare: Regex,
    story_markdown: Regex,
    story_bold: Regex,
    story_bare: Regex,
    story_numbered: Regex,
    list_item: Regex,
    emphasis: Regex,
    markdown_prefix: Regex,
    epic_label: Regex,
    story_label: Regex,
    identifier: Regex,
    separator: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let re = |pattern: &str| Regex::new(pattern).expect("formatter pattern must compile");
        Patterns {
            epic_markdown: re(r"(?i)^#{1,6}\s*epic\b"),
            epic_bold: re(r"(?i)^\*\*\s*epic\b"),
            epic_bare: re(r"(?i)^epic(?:\s*:|\s+\S|$)"),
            story_markdown: re(r"(?i)^#{1,6}\s*(?:user\s+story|story|us)\b"),
            story_bold: re(r"(?i)^\*\*\s*(?:user\s+story|story|us)\b"),
            story_bare: re(r"(?i)^(?:user\s+story|story|us)(?:\s*:|\s+\S|$)"),
            story_numbered: re(r"(?i)^us[-_]?\d+\s*:"),
            list_item: re(r"^(?:[-*•]|\d+[.)])\s+(.*)$"),
            emphasis: re(r"\*\*(.+?)\*\*"),
            markdown_prefix: re(r"^#{1,6}\s*"),
            epic_label: re(r"(?i)^\s*epic\b"),
            story_label: re(r"(?i)^\s*(?:user\s+story|story|us)\b"),
            // `E-2:` / `1.` style tokens need a separator; bare `2` or `US-3` do not.
            identifier: re(
                r"^\s*(?:[A-Za-z]*[-_]?\d[\w.]*\s*[:.\-](?:\s|$)|(?:[A-Za-z]{1,2}[-_])?\d+(?:\.\d+)*(?:\s|$))",
            ),
            separator: re(r"^\s*[:.\-]?\s*"),
        }
    })
}

/// Format one section's text into a flat block sequence.
///
/// Lines are trimmed; blank lines produce nothing.
pub fn format_section(text: &str) -> Vec<Block> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .collect()
}

/// Summary text is not block-parsed: each non-empty line is one plain paragraph.
pub fn format_summary(text: &str) -> Vec<Block> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Block::plain)
        .collect()
}

fn classify_line(line: &str) -> Block {
    let classifiers: [fn(&str) -> Option<Block>; 4] =
        [epic_heading, story_heading, list_item, emphasis_paragraph];
    classifiers
        .iter()
        .find_map(|classify| classify(line))
        .unwrap_or_else(|| Block::plain(line))
}

fn epic_heading(line: &str) -> Option<Block> {
    let p = patterns();
    let matched = p.epic_markdown.is_match(line)
        || p.epic_bold.is_match(line)
        || p.epic_bare.is_match(line);
    if !matched {
        return None;
    }
    Some(Block::heading(
        HeadingLevel::Epic,
        heading_title(line, &p.epic_label),
    ))
}

fn story_heading(line: &str) -> Option<Block> {
    let p = patterns();
    let matched = p.story_markdown.is_match(line)
        || p.story_bold.is_match(line)
        || p.story_bare.is_match(line)
        || p.story_numbered.is_match(line);
    if !matched {
        return None;
    }
    Some(Block::heading(
        HeadingLevel::Story,
        heading_title(line, &p.story_label),
    ))
}

/// Strip markdown prefix, bold markers, the label, an identifier such as
/// `1` or `US-3`, then a separator. A word that merely contains a digit
/// (`2FA`, `OAuth2`) belongs to the title. Falls back to the de-marked line when
/// nothing is left.
fn heading_title(line: &str, label: &Regex) -> String {
    let p = patterns();
    let unmarked = p.markdown_prefix.replace(line, "").replace("**", "");
    let unmarked = unmarked.trim();

    let rest = label.replace(unmarked, "");
    let rest = p.identifier.replace(&rest, "");
    let title = p.separator.replace(&rest, "");
    let title = title.trim();

    if title.is_empty() {
        unmarked.to_string()
    } else {
        title.to_string()
    }
}

fn list_item(line: &str) -> Option<Block> {
    patterns()
        .list_item
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|text| Block::list_item(text.as_str().trim()))
}

fn emphasis_paragraph(line: &str) -> Option<Block> {
    if !patterns().emphasis.is_match(line) {
        return None;
    }
    Some(Block::Paragraph {
        runs: split_emphasis(line),
    })
}

/// Split text into alternating plain and bold runs at `**` boundaries.
///
/// Empty plain runs are omitted. Text without markup is one plain run.
pub fn split_emphasis(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut last = 0;
    for caps in patterns().emphasis.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            runs.push(TextRun::plain(&text[last..whole.start()]));
        }
        runs.push(TextRun::bold(inner.as_str()));
        last = whole.end();
    }
    if last < text.len() || runs.is_empty() {
        runs.push(TextRun::plain(&text[last..]));
    }
    runs
}
