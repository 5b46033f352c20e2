//! Heading nodes recovered from the parsed document body.

use crate::parse::Span;

/// A literal text run inside a heading's inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Text exactly as markdown-rs decoded it.
    pub value: String,
}

impl TextRun {
    /// Create a text run from its value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// An ATX heading with its byte span in the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingNode {
    /// Number of leading `#` characters (1..=6).
    pub depth: u8,
    /// Text runs of the inline content, in document order.
    pub children: Vec<TextRun>,
    /// Byte span of the heading line.
    pub span: Span,
}

impl HeadingNode {
    /// Heading text with surrounding whitespace removed, as used for lookup.
    pub fn lookup_text(&self) -> String {
        get_heading_text(self).trim().to_string()
    }

    /// Whether this heading matches a lookup query.
    ///
    /// Both sides are trimmed and compared exactly, including case.
    pub fn matches(&self, query: &str) -> bool {
        get_heading_text(self).trim() == query.trim()
    }
}

/// Concatenates the heading's text runs with no separator.
///
/// Runs are the heading's direct text children, so `# **Bold** rules` reads
/// as `" rules"`.
pub fn get_heading_text(heading: &HeadingNode) -> String {
    heading
        .children
        .iter()
        .map(|run| run.value.as_str())
        .collect()
}

/// Outline entry for a heading: depth, display text, and slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    /// Heading depth (1..=6).
    pub depth: u8,
    /// Trimmed heading text; passing it back to the slicer selects this heading.
    pub text: String,
    /// Slug derived from the text.
    pub slug: String,
}
