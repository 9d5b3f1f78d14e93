/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other kind matches.
    Paragraph,
    /// `#` through `######` followed by whitespace.
    Heading {
        /// Number of leading `#` characters, 1 through 6.
        level: u8,
    },
    /// A block opened and closed by a ```` ``` ```` fence.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... with no gaps.
    OrderedList,
}
