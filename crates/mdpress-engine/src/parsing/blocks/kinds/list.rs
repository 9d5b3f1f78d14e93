/// Unordered list block type (`- item`).
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Item texts with the marker removed, one per line.
    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
    }
}

/// Ordered list block type (`1. item`).
///
/// Numbering must start at 1 and increase by one per line. A block with any
/// gap is not a list at all, not even a partial one.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// The prefix expected on the `number`th line (1-based).
    pub fn marker(number: usize) -> String {
        format!("{number}{}", Self::SEPARATOR)
    }

    pub fn is_contiguous<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines
            .into_iter()
            .zip(1..)
            .all(|(line, number)| line.starts_with(&Self::marker(number)))
    }

    /// Item texts with their number prefix removed.
    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        block.split('\n').zip(1..).map(|(line, number)| {
            line.strip_prefix(Self::marker(number).as_str())
                .unwrap_or(line)
        })
    }
}
