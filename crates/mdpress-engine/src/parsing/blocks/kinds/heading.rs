use std::sync::OnceLock;

use regex::Regex;

/// ATX heading block type (`# Title` through `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"^(#{1,6})\s").expect("Invalid heading regex"))
    }

    /// Returns the heading level if `block` opens with 1-6 `#` and whitespace.
    ///
    /// Seven or more `#` never match: the pattern cannot stop inside a run of
    /// markers because the next character must be whitespace.
    pub fn level(block: &str) -> Option<u8> {
        let caps = Self::pattern().captures(block)?;
        u8::try_from(caps.get(1)?.len()).ok()
    }

    /// The heading text: markers and the whitespace after them removed.
    pub fn text(block: &str, level: u8) -> &str {
        block[usize::from(level)..].trim_start()
    }
}
