//! Markdown parsing into a flat, position-carrying block arena.
//!
//! markdown-rs produces a full MDAST; the slicer only needs the top-level
//! blocks with their byte spans and every heading in document order. Both
//! are flattened out of the tree here so that slicing becomes a filter over
//! a sequence.

use crate::frontmatter::extract_front_matter;
use crate::heading::{HeadingEntry, HeadingNode, TextRun};
use crate::slug::heading_to_slug;
use crate::{ParseError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown constructs (tables, task lists, footnotes).
    pub gfm: bool,
    /// Enable indented code blocks.
    pub code_indented: bool,
    /// Recognize raw HTML blocks and inline HTML.
    pub raw_html: bool,
}

impl ParseOptions {
    /// Defaults for rule files: GFM on, indented code on, HTML on.
    pub const fn rules() -> Self {
        Self {
            gfm: true,
            code_indented: true,
            raw_html: true,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    ///
    /// Setext headings and front matter are always disabled: only ATX
    /// headings delimit sections, and front matter is split off beforehand.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: false,
            heading_setext: false,
            code_indented: self.code_indented,
            html_flow: self.raw_html,
            html_text: self.raw_html,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_footnote_definition = true;
            constructs.gfm_label_start_footnote = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::rules()
    }
}

/// Half-open byte range `[start, end)` into the parsed source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First byte.
    pub start: usize,
    /// One past the last byte.
    pub end: usize,
}

impl Span {
    /// Create a span.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The source text covered by this span, or `""` if it is out of bounds.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }

    fn from_node(node: &Node) -> Option<Self> {
        node.position()
            .map(|position| Self::new(position.start.offset, position.end.offset))
    }
}

/// Kind tag of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// ATX heading.
    Heading {
        /// Heading depth (1..=6).
        depth: u8,
    },
    /// Paragraph.
    Paragraph,
    /// Ordered or unordered list.
    List,
    /// Fenced or indented code.
    Code,
    /// Block quote.
    BlockQuote,
    /// `***`, `---`, or `___`.
    ThematicBreak,
    /// Raw HTML block.
    Html,
    /// GFM table.
    Table,
    /// Link reference definition.
    Definition,
    /// GFM footnote definition.
    FootnoteDefinition,
    /// Anything else markdown-rs emits at the top level.
    Other,
}

impl BlockKind {
    fn of(node: &Node) -> Self {
        match node {
            Node::Heading(heading) => BlockKind::Heading {
                depth: heading.depth,
            },
            Node::Paragraph(_) => BlockKind::Paragraph,
            Node::List(_) => BlockKind::List,
            Node::Code(_) => BlockKind::Code,
            Node::Blockquote(_) => BlockKind::BlockQuote,
            Node::ThematicBreak(_) => BlockKind::ThematicBreak,
            Node::Html(_) => BlockKind::Html,
            Node::Table(_) => BlockKind::Table,
            Node::Definition(_) => BlockKind::Definition,
            Node::FootnoteDefinition(_) => BlockKind::FootnoteDefinition,
            _ => BlockKind::Other,
        }
    }
}

/// A top-level block and its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Block kind.
    pub kind: BlockKind,
    /// Byte span in the source.
    pub span: Span,
}

/// Flattened document: top-level blocks plus every heading in document order.
#[derive(Debug, Clone)]
pub struct ParsedDocument<'a> {
    source: &'a str,
    blocks: Vec<Block>,
    headings: Vec<HeadingNode>,
}

impl<'a> ParsedDocument<'a> {
    /// Text the document was parsed from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Top-level blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All headings in document order, including ones nested in containers.
    pub fn headings(&self) -> &[HeadingNode] {
        &self.headings
    }

    fn from_root(source: &'a str, root: &Node) -> Self {
        let blocks = root
            .children()
            .map(|children| {
                children
                    .iter()
                    .filter_map(|node| {
                        Span::from_node(node).map(|span| Block {
                            kind: BlockKind::of(node),
                            span,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let mut headings = Vec::new();
        collect_headings(root, &mut headings);

        Self {
            source,
            blocks,
            headings,
        }
    }
}

/// Parse a document body with the default options.
pub fn parse_document(body: &str) -> Result<ParsedDocument<'_>, ParseError> {
    parse_document_with_options(body, &ParseOptions::default())
}

/// Parse a document body into a block arena.
///
/// The body must already have its front matter removed; offsets index into
/// `body`.
pub fn parse_document_with_options<'a>(
    body: &'a str,
    options: &ParseOptions,
) -> Result<ParsedDocument<'a>, ParseError> {
    let root = parse_mdast(body, &options.to_markdown())?;
    let document = ParsedDocument::from_root(body, &root);
    log::debug!(
        "Parsed {} bytes into {} blocks and {} headings",
        body.len(),
        document.blocks.len(),
        document.headings.len()
    );
    Ok(document)
}

/// Lists the headings of a whole document, front matter included or not.
///
/// Headings whose text is empty after trimming are skipped since they can
/// never be selected.
pub fn outline(markdown: &str) -> Result<Vec<HeadingEntry>, ParseError> {
    let split = extract_front_matter(markdown);
    let document = parse_document(&split.content)?;

    Ok(document
        .headings()
        .iter()
        .filter_map(|heading| {
            let text = heading.lookup_text();
            if text.is_empty() {
                return None;
            }
            Some(HeadingEntry {
                depth: heading.depth,
                slug: heading_to_slug(&text),
                text,
            })
        })
        .collect())
}

/// Parse markdown into an MDAST tree using markdown-rs `ParseOptions`.
pub fn parse_mdast(input: &str, options: &markdown::ParseOptions) -> Result<Node, ParseError> {
    markdown::to_mdast(input, options).map_err(|err| ParseError::MarkdownAdapter {
        message: err.to_string(),
        location: message_location(&err),
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::default(),
    }
}

/// Pre-order walk, so headings come out in document order.
fn collect_headings(node: &Node, headings: &mut Vec<HeadingNode>) {
    if let Node::Heading(heading) = node {
        if let Some(span) = Span::from_node(node) {
            let mut children = Vec::new();
            collect_text_runs(&heading.children, &mut children);
            headings.push(HeadingNode {
                depth: heading.depth,
                children,
                span,
            });
        }
        return;
    }

    if let Some(children) = node.children() {
        for child in children {
            collect_headings(child, headings);
        }
    }
}

/// Only direct text children count; text inside emphasis, links, or inline
/// code is not part of the lookup text.
fn collect_text_runs(nodes: &[Node], runs: &mut Vec<TextRun>) {
    runs.extend(nodes.iter().filter_map(|node| match node {
        Node::Text(text) => Some(TextRun::new(text.value.clone())),
        _ => None,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ParsedDocument<'_> {
        parse_document(body).expect("markdown should parse")
    }

    #[test]
    fn records_block_kinds_and_spans() {
        let body = "# Title\n\nIntro text.\n\n- one\n- two\n\n```rust\nfn main() {}\n```\n";
        let doc = parse(body);
        let kinds: Vec<_> = doc.blocks().iter().map(|block| block.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading { depth: 1 },
                BlockKind::Paragraph,
                BlockKind::List,
                BlockKind::Code,
            ]
        );
        let texts: Vec<_> = doc
            .blocks()
            .iter()
            .map(|block| block.span.slice(body))
            .collect();
        assert_eq!(texts[0], "# Title");
        assert_eq!(texts[1], "Intro text.");
        assert!(texts[2].starts_with("- one"));
        assert!(texts[3].starts_with("```rust"));
    }

    #[test]
    fn heading_spans_point_into_body() {
        let body = "intro\n\n## Second ##\n";
        let doc = parse(body);
        let heading = &doc.headings()[0];
        assert_eq!(heading.depth, 2);
        assert_eq!(heading.lookup_text(), "Second");
        assert_eq!(heading.span.start, body.find("##").unwrap());
        assert_eq!(heading.span.slice(body), "## Second ##");
    }

    #[test]
    fn setext_headings_are_not_headings() {
        let body = "Title\n=====\n\nOther\n-----\n\n# Real\n";
        let doc = parse(body);
        let texts: Vec<_> = doc.headings().iter().map(HeadingNode::lookup_text).collect();
        assert_eq!(texts, vec!["Real"]);
    }

    #[test]
    fn hashes_inside_code_are_not_headings() {
        let body = "# Real\n\n```sh\n# comment\n```\n\n    # indented\n";
        let doc = parse(body);
        assert_eq!(doc.headings().len(), 1);
    }

    #[test]
    fn nested_headings_are_collected_in_order() {
        let body = "# One\n\n> ## Quoted\n\n- ### Listed\n\n# Two\n";
        let doc = parse(body);
        let found: Vec<_> = doc
            .headings()
            .iter()
            .map(|heading| (heading.depth, heading.lookup_text()))
            .collect();
        assert_eq!(
            found,
            vec![
                (1, "One".to_string()),
                (2, "Quoted".to_string()),
                (3, "Listed".to_string()),
                (1, "Two".to_string()),
            ]
        );
    }

    #[test]
    fn heading_runs_skip_phrasing_children() {
        let doc = parse("# **Bold** and *soft* `code` end\n");
        let runs: Vec<_> = doc.headings()[0]
            .children
            .iter()
            .map(|run| run.value.as_str())
            .collect();
        assert_eq!(runs, vec![" and ", " ", " end"]);
        assert_eq!(doc.headings()[0].lookup_text(), "and   end");

        let doc = parse("# **Bold** rules\n");
        assert_eq!(doc.headings()[0].lookup_text(), "rules");
    }

    #[test]
    fn heading_with_only_phrasing_is_left_out_of_outline() {
        let entries = outline("# **Only bold**\n\n## Plain\n").unwrap();
        let texts: Vec<_> = entries.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["Plain"]);
    }

    #[test]
    fn empty_input_has_no_blocks() {
        let doc = parse("");
        assert!(doc.blocks().is_empty());
        assert!(doc.headings().is_empty());
    }

    #[test]
    fn outline_skips_front_matter_and_empty_headings() {
        let source = "---\ntitle: Rules\n---\n# Style Guide\n\n#\n\n## Naming Things\n";
        let entries = outline(source).unwrap();
        assert_eq!(
            entries,
            vec![
                HeadingEntry {
                    depth: 1,
                    text: "Style Guide".into(),
                    slug: "style-guide".into(),
                },
                HeadingEntry {
                    depth: 2,
                    text: "Naming Things".into(),
                    slug: "naming-things".into(),
                },
            ]
        );
    }

    #[test]
    fn span_slice_out_of_bounds_is_empty() {
        assert_eq!(Span::new(4, 40).slice("short"), "");
    }

    #[test]
    fn options_without_gfm_disable_tables() {
        let options = ParseOptions {
            gfm: false,
            ..ParseOptions::rules()
        }
        .to_markdown();
        assert!(!options.constructs.gfm_table);
        assert!(!options.constructs.heading_setext);
        assert!(!options.constructs.frontmatter);
    }
}
