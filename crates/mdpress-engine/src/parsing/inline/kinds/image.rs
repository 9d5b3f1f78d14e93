use std::sync::OnceLock;

use regex::Regex;

/// Image syntax `![alt](url)`.
///
/// Only absolute `http://` and `https://` URLs are recognized.
pub struct Image;

impl Image {
    /// Marker that distinguishes an image from a link.
    pub const BANG: char = '!';

    /// Captures: 1 = alt text, 2 = url.
    pub fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\((https?://[^()\s]*)\)").expect("Invalid image regex")
        })
    }
}
