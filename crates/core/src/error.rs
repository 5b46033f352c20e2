use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that can occur while turning markdown text into a block arena.
///
/// A missing heading or an unterminated front matter block is not an error;
/// both are reported through ordinary return values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// markdown-rs rejected the input.
    #[error("Parse error at {location}: {message}")]
    MarkdownAdapter {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
}

impl ParseError {
    /// Location the parser reported for this error.
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::MarkdownAdapter { location, .. } => *location,
        }
    }
}
