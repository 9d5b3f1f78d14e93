/// Fenced code block type (```` ``` ```` on both ends of the block).
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether the block both opens and closes with a fence.
    pub fn encloses(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// The raw text between the fences, minus at most one leading newline.
    ///
    /// A block too short to hold two fences has no body.
    pub fn body(block: &str) -> &str {
        let fence = Self::BACKTICKS.len();
        let inner = block
            .get(fence..block.len().saturating_sub(fence))
            .unwrap_or_default();
        inner.strip_prefix('\n').unwrap_or(inner)
    }
}
