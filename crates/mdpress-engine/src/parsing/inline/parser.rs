use super::{
    extract::{Found, find_images, find_links},
    kinds::Delimiter,
    types::{InlineStyle, TextSegment},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("Invalid Markdown: Unmatched {delimiter} delimiter.")]
    UnbalancedDelimiter { delimiter: String },
}

/// Splits every plain segment on `delimiter`, styling the enclosed runs.
///
/// Chunks at even positions stay plain and chunks at odd positions get
/// `style`. Empty chunks are kept, so `**bold**` yields an empty plain
/// segment on each side of the bold one. Non-plain segments pass through.
///
/// # Errors
/// Fails with [`InlineError::UnbalancedDelimiter`] as soon as any plain
/// segment contains the delimiter an odd number of times.
pub fn split_by_delimiter(
    segments: Vec<TextSegment>,
    delimiter: &str,
    style: InlineStyle,
) -> Result<Vec<TextSegment>, InlineError> {
    debug_assert!(!delimiter.is_empty(), "delimiter must not be empty");

    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        let text = match segment {
            TextSegment::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        if text.matches(delimiter).count() % 2 != 0 {
            return Err(InlineError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
            });
        }

        out.extend(text.split(delimiter).enumerate().map(|(i, chunk)| {
            if i % 2 == 0 {
                TextSegment::plain(chunk)
            } else {
                style.segment(chunk)
            }
        }));
    }
    Ok(out)
}

/// Pulls `![alt](url)` images out of plain segments.
pub fn split_images(segments: Vec<TextSegment>) -> Vec<TextSegment> {
    split_constructs(segments, find_images, |found| {
        TextSegment::image(found.label, found.url)
    })
}

/// Pulls `[text](url)` links out of plain segments.
pub fn split_links(segments: Vec<TextSegment>) -> Vec<TextSegment> {
    split_constructs(segments, find_links, |found| {
        TextSegment::link(found.label, found.url)
    })
}

/// Shared walk for images and links.
///
/// A plain segment with no match is kept as-is, even when empty. Otherwise
/// the text between matches becomes plain segments, skipping empty ones.
fn split_constructs(
    segments: Vec<TextSegment>,
    find: for<'t> fn(&'t str) -> Vec<Found<'t>>,
    build: fn(&Found<'_>) -> TextSegment,
) -> Vec<TextSegment> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        let text = match segment {
            TextSegment::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let found = find(&text);
        if found.is_empty() {
            out.push(TextSegment::Plain(text));
            continue;
        }

        let mut cursor = 0;
        for item in &found {
            let before = &text[cursor..item.range.start];
            if !before.is_empty() {
                out.push(TextSegment::plain(before));
            }
            out.push(build(item));
            cursor = item.range.end;
        }
        let rest = &text[cursor..];
        if !rest.is_empty() {
            out.push(TextSegment::plain(rest));
        }
    }
    out
}

/// Parses a string into a flat sequence of [`TextSegment`]s.
///
/// Delimiters are split in [`Delimiter::ORDER`], then images, then links.
/// Images go first so `![x](y)` is never read as a link.
pub fn text_to_segments(text: &str) -> Result<Vec<TextSegment>, InlineError> {
    let mut segments = vec![TextSegment::plain(text)];
    for (delimiter, style) in Delimiter::ORDER {
        segments = split_by_delimiter(segments, delimiter, style)?;
    }
    Ok(split_links(split_images(segments)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(s: &str) -> TextSegment {
        TextSegment::plain(s)
    }

    fn bold(s: &str) -> TextSegment {
        InlineStyle::Bold.segment(s)
    }

    fn italic(s: &str) -> TextSegment {
        InlineStyle::Italic.segment(s)
    }

    fn code(s: &str) -> TextSegment {
        InlineStyle::Code.segment(s)
    }

    #[test]
    fn split_empty_input() {
        let result = split_by_delimiter(vec![], Delimiter::BOLD, InlineStyle::Bold).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn split_without_delimiter_keeps_segment() {
        let result =
            split_by_delimiter(vec![plain("This is a test")], Delimiter::BOLD, InlineStyle::Bold)
                .unwrap();
        assert_eq!(result, vec![plain("This is a test")]);
    }

    #[rstest]
    #[case(Delimiter::BOLD, InlineStyle::Bold, "This is **a test")]
    #[case(Delimiter::UNDERSCORE_ITALIC, InlineStyle::Italic, "This is _a test")]
    #[case(Delimiter::ASTERISK_ITALIC, InlineStyle::Italic, "This is *a test")]
    #[case(Delimiter::CODE, InlineStyle::Code, "This is `a test")]
    fn odd_delimiter_count_fails(
        #[case] delimiter: &str,
        #[case] style: InlineStyle,
        #[case] text: &str,
    ) {
        let err = split_by_delimiter(vec![plain(text)], delimiter, style).unwrap_err();
        assert_eq!(
            err,
            InlineError::UnbalancedDelimiter {
                delimiter: delimiter.to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            format!("Invalid Markdown: Unmatched {delimiter} delimiter.")
        );
    }

    #[rstest]
    #[case(Delimiter::BOLD, InlineStyle::Bold, "This is **a** test")]
    #[case(Delimiter::UNDERSCORE_ITALIC, InlineStyle::Italic, "This is _a_ test")]
    #[case(Delimiter::ASTERISK_ITALIC, InlineStyle::Italic, "This is *a* test")]
    #[case(Delimiter::CODE, InlineStyle::Code, "This is `a` test")]
    fn even_delimiter_count_splits(
        #[case] delimiter: &str,
        #[case] style: InlineStyle,
        #[case] text: &str,
    ) {
        let result = split_by_delimiter(vec![plain(text)], delimiter, style).unwrap();
        assert_eq!(
            result,
            vec![plain("This is "), style.segment("a"), plain(" test")]
        );
    }

    #[test]
    fn split_multiple_runs() {
        let result = split_by_delimiter(
            vec![plain("This is **a** test **with** multiple delimiters")],
            Delimiter::BOLD,
            InlineStyle::Bold,
        )
        .unwrap();
        assert_eq!(
            result,
            vec![
                plain("This is "),
                bold("a"),
                plain(" test "),
                bold("with"),
                plain(" multiple delimiters"),
            ]
        );
    }

    #[test]
    fn split_across_segments() {
        let segments = vec![
            plain("This is **a** test"),
            plain("Another test"),
            bold("already bold"),
            plain("And **another** one"),
        ];
        let result = split_by_delimiter(segments, Delimiter::BOLD, InlineStyle::Bold).unwrap();
        assert_eq!(
            result,
            vec![
                plain("This is "),
                bold("a"),
                plain(" test"),
                plain("Another test"),
                bold("already bold"),
                plain("And "),
                bold("another"),
                plain(" one"),
            ]
        );
    }

    #[test]
    fn delimiters_at_edges_keep_empty_segments() {
        let result =
            split_by_delimiter(vec![plain("**bold**")], Delimiter::BOLD, InlineStyle::Bold)
                .unwrap();
        assert_eq!(result, vec![plain(""), bold("bold"), plain("")]);
    }

    #[test]
    fn consecutive_delimiters_produce_empty_runs() {
        let result = split_by_delimiter(
            vec![plain("This is ****bold**** text")],
            Delimiter::BOLD,
            InlineStyle::Bold,
        )
        .unwrap();
        assert_eq!(
            result,
            vec![
                plain("This is "),
                bold(""),
                plain("bold"),
                bold(""),
                plain(" text"),
            ]
        );
    }

    #[test]
    fn styled_segments_are_not_resplit() {
        let result = split_by_delimiter(
            vec![bold("has * one star")],
            Delimiter::ASTERISK_ITALIC,
            InlineStyle::Italic,
        )
        .unwrap();
        assert_eq!(result, vec![bold("has * one star")]);
    }

    #[test]
    fn split_images_single() {
        let result = split_images(vec![plain(
            "Text before ![alt text](https://example.com/img.png) text after",
        )]);
        assert_eq!(
            result,
            vec![
                plain("Text before "),
                TextSegment::image("alt text", "https://example.com/img.png"),
                plain(" text after"),
            ]
        );
    }

    #[test]
    fn split_images_at_edges() {
        assert_eq!(
            split_images(vec![plain("![alt text](http://example.com/img.png) text after")]),
            vec![
                TextSegment::image("alt text", "http://example.com/img.png"),
                plain(" text after"),
            ]
        );
        assert_eq!(
            split_images(vec![plain("Text before ![alt text](https://example.com/img.png)")]),
            vec![
                plain("Text before "),
                TextSegment::image("alt text", "https://example.com/img.png"),
            ]
        );
    }

    #[test]
    fn split_images_adjacent() {
        assert_eq!(
            split_images(vec![plain(
                "Before ![alt1](https://url1.com)![alt2](http://url2.net) After"
            )]),
            vec![
                plain("Before "),
                TextSegment::image("alt1", "https://url1.com"),
                TextSegment::image("alt2", "http://url2.net"),
                plain(" After"),
            ]
        );
    }

    #[test]
    fn split_images_leaves_links_in_text() {
        assert_eq!(
            split_images(vec![plain(
                "Text with a [link](https://link.com) and ![image](http://image.org)."
            )]),
            vec![
                plain("Text with a [link](https://link.com) and "),
                TextSegment::image("image", "http://image.org"),
                plain("."),
            ]
        );
    }

    #[test]
    fn split_images_keeps_unmatched_empty_segment() {
        assert_eq!(split_images(vec![plain("")]), vec![plain("")]);
    }

    #[test]
    fn split_links_passes_non_plain_through() {
        let segments = vec![
            plain("Node 1 with [link1](https://url1.com)"),
            plain("Node 2 is plain text."),
            TextSegment::image("Node 3 is image", "https://img.url"),
            bold("[not](https://a.link)"),
        ];
        assert_eq!(
            split_links(segments),
            vec![
                plain("Node 1 with "),
                TextSegment::link("link1", "https://url1.com"),
                plain("Node 2 is plain text."),
                TextSegment::image("Node 3 is image", "https://img.url"),
                bold("[not](https://a.link)"),
            ]
        );
    }

    #[test]
    fn split_links_ignores_images() {
        assert_eq!(
            split_links(vec![plain(
                "Text with ![image](https://image.org) and a [link](http://link.com)."
            )]),
            vec![
                plain("Text with ![image](https://image.org) and a "),
                TextSegment::link("link", "http://link.com"),
                plain("."),
            ]
        );
    }

    #[test]
    fn split_links_uses_match_position_for_repeated_text() {
        assert_eq!(
            split_links(vec![plain("![a](http://x.dev) [a](http://x.dev)")]),
            vec![
                plain("![a](http://x.dev) "),
                TextSegment::link("a", "http://x.dev"),
            ]
        );
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(
            text_to_segments("This is plain text with no markdown.").unwrap(),
            vec![plain("This is plain text with no markdown.")]
        );
    }

    #[test]
    fn empty_text_is_one_empty_segment() {
        assert_eq!(text_to_segments("").unwrap(), vec![plain("")]);
    }

    #[rstest]
    #[case("Text with *italic content* here.")]
    #[case("Text with _italic content_ here.")]
    fn both_italic_markers_are_equivalent(#[case] text: &str) {
        assert_eq!(
            text_to_segments(text).unwrap(),
            vec![
                plain("Text with "),
                italic("italic content"),
                plain(" here."),
            ]
        );
    }

    #[test]
    fn mixed_content() {
        let text = "This is **bold** and *italic* with `code` and an ![image](https://img.url) and a [link](http://lnk.url).";
        assert_eq!(
            text_to_segments(text).unwrap(),
            vec![
                plain("This is "),
                bold("bold"),
                plain(" and "),
                italic("italic"),
                plain(" with "),
                code("code"),
                plain(" and an "),
                TextSegment::image("image", "https://img.url"),
                plain(" and a "),
                TextSegment::link("link", "http://lnk.url"),
                plain("."),
            ]
        );
    }

    #[test]
    fn bold_only_yields_empty_plain_edges() {
        assert_eq!(
            text_to_segments("**bold**").unwrap(),
            vec![plain(""), bold("bold"), plain("")]
        );
    }

    #[test]
    fn nested_markers_stay_literal() {
        assert_eq!(
            text_to_segments("**bold with `tick` inside**").unwrap(),
            vec![plain(""), bold("bold with `tick` inside"), plain("")]
        );
    }

    #[test]
    fn unmatched_delimiter_fails_whole_parse() {
        let err = text_to_segments("This has an **unmatched delimiter").unwrap_err();
        assert!(err.to_string().contains("Unmatched ** delimiter"));
    }
}
