use crate::heading::HeadingNode;

/// Byte range of a section: from its heading up to, but excluding, the next
/// heading of same or lower depth. `end == None` means end of document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    /// Start offset of the section heading.
    pub start: usize,
    /// Start offset of the terminating heading, if any.
    pub end: Option<usize>,
}

impl SectionRange {
    /// Whether `offset` lies in `[start, end)`.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && self.end.is_none_or(|end| offset < end)
    }
}

/// Result of locating a heading in an ordered heading list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Index of the matched heading.
    pub target_index: usize,
    /// Index of the heading that closes the section, if any.
    pub next_index: Option<usize>,
    /// Covered byte range.
    pub range: SectionRange,
}

/// Finds the first heading after `current_index` whose depth is at most `current_depth`.
///
/// Deeper headings are nested inside the current section and are skipped.
pub fn find_next_heading_of_same_or_lower_depth(
    headings: &[HeadingNode],
    current_index: usize,
    current_depth: u8,
) -> Option<usize> {
    headings
        .iter()
        .enumerate()
        .skip(current_index + 1)
        .find(|(_, heading)| heading.depth <= current_depth)
        .map(|(index, _)| index)
}

/// Locates the section introduced by the first heading matching `target`.
///
/// Matching compares trimmed text exactly and is case-sensitive.
pub fn locate(headings: &[HeadingNode], target: &str) -> Option<Section> {
    let target_index = headings.iter().position(|heading| heading.matches(target))?;
    let heading = &headings[target_index];
    let next_index = find_next_heading_of_same_or_lower_depth(headings, target_index, heading.depth);

    Some(Section {
        target_index,
        next_index,
        range: SectionRange {
            start: heading.span.start,
            end: next_index.map(|index| headings[index].span.start),
        },
    })
}
