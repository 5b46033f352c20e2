#![deny(missing_docs)]
//! airules core: front matter splitting, heading lookup, and markdown section slicing.

/// Core error types.
pub mod error;
/// YAML front matter splitting and recombination.
pub mod frontmatter;
/// Heading nodes and heading text extraction.
pub mod heading;
/// Markdown parsing into a flat block arena.
pub mod parse;
/// Section boundary lookup.
pub mod section;
/// Multi-heading selection and output assembly.
pub mod select;
/// Section slicing and serialization.
pub mod slice;
/// Slug generation utilities.
pub mod slug;

pub use error::{ParseError, SourceLocation};
pub use frontmatter::{FrontMatterResult, combine_front_matter, extract_front_matter};
pub use heading::{HeadingEntry, HeadingNode, TextRun, get_heading_text};
pub use parse::{
    Block, BlockKind, ParseOptions, ParsedDocument, Span, outline, parse_document,
    parse_document_with_options, parse_mdast,
};
pub use section::{Section, SectionRange, find_next_heading_of_same_or_lower_depth, locate};
pub use select::{HeadingItem, SectionSelection, extract_selected_headings};
pub use slice::{
    SliceResult, line_ending, serialize_blocks, slice_document, slice_markdown_by_heading,
    slice_markdown_by_heading_with_options,
};
pub use slug::heading_to_slug;
