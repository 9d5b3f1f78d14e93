use std::ops::Range;

use super::kinds::{Image, Link};

/// A bracketed construct located in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<'t> {
    /// Byte range of the whole construct, brackets included.
    pub range: Range<usize>,
    /// Link text or image alt text.
    pub label: &'t str,
    pub url: &'t str,
}

/// Locates every `![alt](url)` in `text`, left to right.
pub fn find_images(text: &str) -> Vec<Found<'_>> {
    Image::pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            Some(Found {
                range: caps.get(0)?.range(),
                label: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

/// Locates every `[text](url)` in `text` that is not part of an image.
pub fn find_links(text: &str) -> Vec<Found<'_>> {
    Link::pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            if Link::is_image_prefix(caps.get(1)?.as_str()) {
                return None;
            }
            Some(Found {
                range: caps.get(0)?.range(),
                label: caps.get(2)?.as_str(),
                url: caps.get(3)?.as_str(),
            })
        })
        .collect()
}

/// Extracts `(alt, url)` pairs for every image in `text`.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text).into_iter().map(into_pair).collect()
}

/// Extracts `(text, url)` pairs for every link in `text`.
///
/// Image syntax is never reported as a link.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text).into_iter().map(into_pair).collect()
}

fn into_pair(found: Found<'_>) -> (String, String) {
    (found.label.to_string(), found.url.to_string())
}
