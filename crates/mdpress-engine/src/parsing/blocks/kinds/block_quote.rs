/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quoted(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one `>` prefix and the whitespace around the remaining text.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }

    /// Joins the stripped lines of a quote block with single spaces.
    pub fn text(block: &str) -> String {
        block
            .split('\n')
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
