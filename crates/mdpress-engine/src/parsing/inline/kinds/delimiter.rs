use crate::parsing::inline::types::InlineStyle;

/// Paired inline delimiters.
pub struct Delimiter;

impl Delimiter {
    pub const BOLD: &'static str = "**";
    pub const UNDERSCORE_ITALIC: &'static str = "_";
    pub const ASTERISK_ITALIC: &'static str = "*";
    pub const CODE: &'static str = "`";

    /// The order delimiters are split in.
    ///
    /// `**` must come before `*`, otherwise a bold run would be read as two
    /// empty italic runs.
    pub const ORDER: [(&'static str, InlineStyle); 4] = [
        (Self::BOLD, InlineStyle::Bold),
        (Self::UNDERSCORE_ITALIC, InlineStyle::Italic),
        (Self::ASTERISK_ITALIC, InlineStyle::Italic),
        (Self::CODE, InlineStyle::Code),
    ];
}
