use std::sync::OnceLock;

use regex::Regex;

use super::Image;

/// Link syntax `[text](url)`.
pub struct Link;

impl Link {
    /// Captures: 1 = optional leading `!`, 2 = text, 3 = url.
    ///
    /// The regex crate has no lookbehind, so the `!` is captured instead and
    /// matches that carry it are discarded by the caller. Consuming it keeps
    /// the image's bracket pair from being matched on its own.
    pub fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"(!?)\[([^\[\]]*)\]\((https?://[^()\s]*)\)").expect("Invalid link regex")
        })
    }

    /// Whether a captured prefix marks the match as an image rather than a link.
    pub fn is_image_prefix(prefix: &str) -> bool {
        prefix.starts_with(Image::BANG)
    }
}
