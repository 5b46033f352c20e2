const FENCE: &str = "---";

/// Result of splitting a leading front matter block off a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterResult {
    /// Text between the delimiter lines. `Some("")` is an empty but present block.
    pub front_matter: Option<String>,
    /// Markdown after the closing delimiter line, or the whole input when absent.
    pub content: String,
    /// Whether a delimited block was found.
    pub has_front_matter: bool,
}

impl FrontMatterResult {
    fn absent(input: &str) -> Self {
        Self {
            front_matter: None,
            content: input.to_string(),
            has_front_matter: false,
        }
    }
}

/// Splits a leading `---` delimited block from the document body.
///
/// The block must start at the first byte of the input and be closed by a
/// line containing only `---` followed by a line ending. Without a closing
/// delimiter the leading `---` is ordinary content and the input is returned
/// unchanged.
pub fn extract_front_matter(markdown: &str) -> FrontMatterResult {
    if !markdown.trim_start().starts_with(FENCE) {
        return FrontMatterResult::absent(markdown);
    }

    match find_block(markdown) {
        Some((block, body_start)) => FrontMatterResult {
            front_matter: Some(block.to_string()),
            content: markdown[body_start..].to_string(),
            has_front_matter: true,
        },
        None => FrontMatterResult::absent(markdown),
    }
}

/// Prepends a front matter block to `content`.
///
/// `None` returns the content verbatim. `Some("")` still emits both
/// delimiters around an empty block.
pub fn combine_front_matter(front_matter: Option<&str>, content: &str) -> String {
    match front_matter {
        None => content.to_string(),
        Some(block) => format!("{FENCE}\n{block}\n{FENCE}\n\n{content}"),
    }
}

/// Returns the block text and the byte offset where the body begins.
fn find_block(input: &str) -> Option<(&str, usize)> {
    let rest = strip_line_ending(input.strip_prefix(FENCE)?)?;

    // Shortest block wins: scan line endings in order and stop at the first
    // one that is followed by a closing fence line.
    for (newline, _) in rest.match_indices('\n') {
        let block_end = if rest[..newline].ends_with('\r') {
            newline - 1
        } else {
            newline
        };
        let Some(after_fence) = rest[newline + 1..].strip_prefix(FENCE) else {
            continue;
        };
        if let Some(body) = strip_line_ending(after_fence) {
            return Some((&rest[..block_end], input.len() - body.len()));
        }
    }

    None
}

fn strip_line_ending(input: &str) -> Option<&str> {
    input
        .strip_prefix("\r\n")
        .or_else(|| input.strip_prefix('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "# Hello World\n\nThis is a test";

    #[test]
    fn returns_none_when_no_frontmatter() {
        let result = extract_front_matter(CONTENT);
        assert_eq!(result.front_matter, None);
        assert_eq!(result.content, CONTENT);
        assert!(!result.has_front_matter);
    }

    #[test]
    fn extracts_frontmatter_and_content() {
        let block = "title: Hello World\ndate: 2023-01-01";
        let input = format!("---\n{block}\n---\n\n{CONTENT}");
        let result = extract_front_matter(&input);
        assert_eq!(result.front_matter.as_deref(), Some(block));
        assert_eq!(result.content, format!("\n{CONTENT}"));
        assert!(result.has_front_matter);
    }

    #[test]
    fn empty_block_is_present_but_empty() {
        let input = format!("---\n\n---\n\n{CONTENT}");
        let result = extract_front_matter(&input);
        assert_eq!(result.front_matter.as_deref(), Some(""));
        assert_eq!(result.content, format!("\n{CONTENT}"));
        assert!(result.has_front_matter);
    }

    #[test]
    fn keeps_colons_and_quotes_verbatim() {
        let block = "title: \"Hello: World\"\ndescription: 'This is a test: with colon'";
        let input = format!("---\n{block}\n---\n\n{CONTENT}");
        let result = extract_front_matter(&input);
        assert_eq!(result.front_matter.as_deref(), Some(block));
        assert_eq!(result.content, format!("\n{CONTENT}"));
    }

    #[test]
    fn unterminated_block_is_ordinary_content() {
        let input = "---\ntitle: test\n# Body";
        let result = extract_front_matter(input);
        assert_eq!(result.front_matter, None);
        assert_eq!(result.content, input);
        assert!(!result.has_front_matter);
    }

    #[test]
    fn closing_fence_needs_trailing_line_ending() {
        let input = "---\ntitle: test\n---";
        let result = extract_front_matter(input);
        assert!(!result.has_front_matter);
        assert_eq!(result.content, input);
    }

    #[test]
    fn adjacent_fences_do_not_form_a_block() {
        // The block must be followed by its own line ending before the closer.
        let input = "---\n---\n# Body";
        let result = extract_front_matter(input);
        assert!(!result.has_front_matter);
        assert_eq!(result.content, input);
    }

    #[test]
    fn leading_whitespace_is_not_stripped() {
        let input = "\n---\ntitle: test\n---\n# Body";
        let result = extract_front_matter(input);
        assert!(!result.has_front_matter);
        assert_eq!(result.content, input);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let input = "---\r\ntitle: test\r\n---\r\n# Body\r\n";
        let result = extract_front_matter(input);
        assert_eq!(result.front_matter.as_deref(), Some("title: test"));
        assert_eq!(result.content, "# Body\r\n");
    }

    #[test]
    fn stops_at_first_closing_fence() {
        let input = "---\na: 1\n---\nbody\n---\nmore\n";
        let result = extract_front_matter(input);
        assert_eq!(result.front_matter.as_deref(), Some("a: 1"));
        assert_eq!(result.content, "body\n---\nmore\n");
    }

    #[test]
    fn combine_without_frontmatter_returns_content() {
        assert_eq!(combine_front_matter(None, CONTENT), CONTENT);
    }

    #[test]
    fn combine_wraps_frontmatter() {
        let block = "title: Hello World\ndate: 2023-01-01";
        assert_eq!(
            combine_front_matter(Some(block), CONTENT),
            format!("---\n{block}\n---\n\n{CONTENT}")
        );
    }

    #[test]
    fn combine_keeps_delimiters_for_empty_block() {
        assert_eq!(
            combine_front_matter(Some(""), CONTENT),
            format!("---\n\n---\n\n{CONTENT}")
        );
    }

    #[test]
    fn combine_then_extract_round_trips() {
        for block in ["", "title: X", "a: 1\nb: [2, 3]", "trailing: newline\n"] {
            let combined = combine_front_matter(Some(block), CONTENT);
            let result = extract_front_matter(&combined);
            assert_eq!(result.front_matter.as_deref(), Some(block), "{block:?}");
            assert_eq!(result.content, format!("\n{CONTENT}"), "{block:?}");
        }
    }
}
