//! Combining several selected sections of one document into a single output.

use crate::ParseError;
use crate::frontmatter::{combine_front_matter, extract_front_matter};
use crate::parse::parse_document;
use crate::slice::{SliceResult, line_ending, slice_document};
use rayon::prelude::*;

/// A heading offered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingItem {
    /// Heading text as listed.
    pub text: String,
    /// Whether the heading is selected.
    pub selected: bool,
}

impl HeadingItem {
    /// An unselected item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected: false,
        }
    }

    /// A selected item.
    pub fn selected(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected: true,
        }
    }
}

/// Output of extracting several sections from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSelection {
    /// Final file content with the original front matter, or `None` when no
    /// selected heading was found.
    pub content: Option<String>,
    /// Selected headings that were found, in selection order.
    pub extracted: Vec<String>,
    /// Selected headings that do not exist in the document, in selection order.
    pub missing: Vec<String>,
    /// Whether the source document had front matter.
    pub has_front_matter: bool,
}

/// Extracts every selected heading from `markdown` and joins the sections.
///
/// Each section is sliced from the same front-matter-free body, so one
/// selection never sees another's output. Missing headings are collected in
/// [`SectionSelection::missing`] and do not stop the rest. Sections are joined
/// with a blank line and wrapped in the original front matter.
pub fn extract_selected_headings(
    markdown: &str,
    headings: &[HeadingItem],
) -> Result<SectionSelection, ParseError> {
    let split = extract_front_matter(markdown);
    let document = parse_document(&split.content)?;

    let wanted: Vec<&str> = headings
        .iter()
        .filter(|item| item.selected)
        .map(|item| item.text.as_str())
        .collect();

    let results: Vec<SliceResult> = wanted
        .par_iter()
        .map(|text| slice_document(&document, text))
        .collect();

    let mut selection = SectionSelection {
        has_front_matter: split.has_front_matter,
        ..Default::default()
    };
    let mut sections = Vec::new();

    for (text, result) in wanted.iter().zip(results) {
        if result.found_heading {
            selection.extracted.push((*text).to_string());
            sections.push(result.content);
        } else {
            selection.missing.push((*text).to_string());
        }
    }

    if !sections.is_empty() {
        let joined = join_sections(&sections, line_ending(&split.content));
        selection.content = Some(combine_front_matter(
            split.front_matter.as_deref(),
            &joined,
        ));
    }

    Ok(selection)
}

fn join_sections(sections: &[String], eol: &str) -> String {
    let mut joined = sections
        .iter()
        .map(|section| section.trim_end_matches(['\r', '\n']))
        .collect::<Vec<_>>()
        .join(eol.repeat(2).as_str());
    joined.push_str(eol);
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "---\ntitle: X\n---\n# Guide\n\nIntro.\n\n## Style\n\nUse tabs.\n\n## Tests\n\nWrite them.\n";

    #[test]
    fn single_nested_section_keeps_front_matter() {
        let selection = extract_selected_headings(DOC, &[HeadingItem::selected("Style")]).unwrap();
        assert_eq!(
            selection.content.as_deref(),
            Some("---\ntitle: X\n---\n\n## Style\n\nUse tabs.\n")
        );
        assert_eq!(selection.extracted, vec!["Style"]);
        assert!(selection.missing.is_empty());
        assert!(selection.has_front_matter);
    }

    #[test]
    fn sections_join_in_selection_order() {
        let items = [HeadingItem::selected("Tests"), HeadingItem::selected("Style")];
        let selection = extract_selected_headings(DOC, &items).unwrap();
        insta::assert_snapshot!(selection.content.unwrap(), @r"
        ---
        title: X
        ---

        ## Tests

        Write them.

        ## Style

        Use tabs.
        ");
    }

    #[test]
    fn overlapping_selections_are_sliced_independently() {
        let items = [HeadingItem::selected("Guide"), HeadingItem::selected("Tests")];
        let selection = extract_selected_headings(DOC, &items).unwrap();
        let content = selection.content.unwrap();
        assert_eq!(content.matches("## Tests").count(), 2);
    }

    #[test]
    fn missing_headings_are_reported_and_skipped() {
        let items = [
            HeadingItem::selected("Nope"),
            HeadingItem::selected("Style"),
            HeadingItem::selected("Also missing"),
        ];
        let selection = extract_selected_headings(DOC, &items).unwrap();
        assert_eq!(selection.missing, vec!["Nope", "Also missing"]);
        assert_eq!(selection.extracted, vec!["Style"]);
        assert!(selection.content.is_some());
    }

    #[test]
    fn nothing_found_produces_no_content() {
        let selection = extract_selected_headings(DOC, &[HeadingItem::selected("Nope")]).unwrap();
        assert_eq!(selection.content, None);
        assert_eq!(selection.missing, vec!["Nope"]);
    }

    #[test]
    fn unselected_items_are_ignored() {
        let items = [HeadingItem::new("Style"), HeadingItem::selected("Tests")];
        let selection = extract_selected_headings(DOC, &items).unwrap();
        assert_eq!(selection.extracted, vec!["Tests"]);
    }

    #[test]
    fn document_without_front_matter_is_not_wrapped() {
        let selection =
            extract_selected_headings("# A\n\none\n\n# B\n\ntwo\n", &[HeadingItem::selected("B")])
                .unwrap();
        assert_eq!(selection.content.as_deref(), Some("# B\n\ntwo\n"));
        assert!(!selection.has_front_matter);
    }

    #[test]
    fn empty_front_matter_is_kept() {
        let selection =
            extract_selected_headings("---\n\n---\n# A\n\none\n", &[HeadingItem::selected("A")])
                .unwrap();
        assert_eq!(selection.content.as_deref(), Some("---\n\n---\n\n# A\n\none\n"));
    }

    #[test]
    fn crlf_sections_join_with_crlf() {
        let body = "# A\r\n\r\none\r\n\r\n# B\r\n\r\ntwo\r\n";
        let items = [HeadingItem::selected("B"), HeadingItem::selected("A")];
        let selection = extract_selected_headings(body, &items).unwrap();
        assert_eq!(
            selection.content.as_deref(),
            Some("# B\r\n\r\ntwo\r\n\r\n# A\r\n\r\none\r\n")
        );
    }
}
