/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block when no other
/// kind matches. Their lines are joined into one run of inline text.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOINER: &'static str = " ";

    /// Joins the block's lines with single spaces.
    pub fn text(block: &str) -> String {
        block.split('\n').collect::<Vec<_>>().join(Self::LINE_JOINER)
    }
}
