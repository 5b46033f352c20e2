//! Section slicing: cut a document down to one heading's section and turn
//! the remaining blocks back into markdown.

use crate::ParseError;
use crate::parse::{Block, ParseOptions, ParsedDocument, parse_document_with_options};
use crate::section::locate;

/// Outcome of slicing a document by heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceResult {
    /// Serialized section, empty when the heading was not found.
    pub content: String,
    /// Whether the requested heading exists in the document.
    pub found_heading: bool,
}

impl SliceResult {
    fn not_found() -> Self {
        Self {
            content: String::new(),
            found_heading: false,
        }
    }
}

/// Extracts the section introduced by `heading_text` from a document body.
///
/// The body must not contain front matter. A missing heading is not an
/// error: it yields an empty result with `found_heading == false`.
///
/// # Examples
///
/// ```
/// use airules_core::slice_markdown_by_heading;
///
/// let body = "# Style\n\nUse tabs.\n\n# Testing\n\nWrite tests.\n";
/// let result = slice_markdown_by_heading(body, "Style").unwrap();
/// assert!(result.found_heading);
/// assert_eq!(result.content, "# Style\n\nUse tabs.\n");
/// ```
pub fn slice_markdown_by_heading(body: &str, heading_text: &str) -> Result<SliceResult, ParseError> {
    slice_markdown_by_heading_with_options(body, heading_text, &ParseOptions::default())
}

/// Like [`slice_markdown_by_heading`] with explicit parser options.
pub fn slice_markdown_by_heading_with_options(
    body: &str,
    heading_text: &str,
    options: &ParseOptions,
) -> Result<SliceResult, ParseError> {
    let document = parse_document_with_options(body, options)?;
    Ok(slice_document(&document, heading_text))
}

/// Slices an already parsed document.
///
/// Only top-level blocks whose start offset falls inside the section range
/// are kept; a container that starts before the heading is dropped even if
/// the heading sits inside it.
pub fn slice_document(document: &ParsedDocument<'_>, heading_text: &str) -> SliceResult {
    let Some(section) = locate(document.headings(), heading_text) else {
        log::debug!("Heading {:?} not found", heading_text.trim());
        return SliceResult::not_found();
    };

    let blocks: Vec<&Block> = document
        .blocks()
        .iter()
        .filter(|block| section.range.contains(block.span.start))
        .collect();

    log::debug!(
        "Heading {:?} covers {} blocks in {:?}",
        heading_text.trim(),
        blocks.len(),
        section.range
    );

    SliceResult {
        content: serialize_blocks(document.source(), blocks),
        found_heading: true,
    }
}

/// Line ending used by `source`: `"\r\n"` when its first line ends that way,
/// `"\n"` otherwise.
pub fn line_ending(source: &str) -> &'static str {
    match source.find('\n') {
        Some(index) if source[..index].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Serializes blocks back to markdown from their source spans.
///
/// Blocks are separated by one blank line and the output ends with a single
/// line ending, both in the source's own line ending. No blocks serialize to
/// the empty string.
pub fn serialize_blocks<'b>(source: &str, blocks: impl IntoIterator<Item = &'b Block>) -> String {
    let eol = line_ending(source);
    let mut out = String::new();

    for block in blocks {
        let text = block.span.slice(source).trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(eol);
            out.push_str(eol);
        }
        out.push_str(text);
    }

    if !out.is_empty() {
        out.push_str(eol);
    }
    out
}
