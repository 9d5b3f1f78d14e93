use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a block into exactly one [`BlockKind`].
///
/// Checks run in precedence order and the first match wins: heading, code
/// fence, quote, unordered list, ordered list. Anything else, including the
/// empty string, is a paragraph.
pub fn classify_block(block: &str) -> BlockKind {
    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading { level };
    }
    if CodeFence::encloses(block) {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();
    if lines.iter().all(|line| BlockQuote::is_quoted(line)) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| UnorderedList::is_item(line)) {
        return BlockKind::UnorderedList;
    }
    if OrderedList::is_contiguous(lines.iter().copied()) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("This is a paragraph.", BlockKind::Paragraph)]
    #[case("", BlockKind::Paragraph)]
    #[case("# Heading 1", BlockKind::Heading { level: 1 })]
    #[case("### Heading 3", BlockKind::Heading { level: 3 })]
    #[case("###### Heading 6", BlockKind::Heading { level: 6 })]
    #[case("####### too many", BlockKind::Paragraph)]
    #[case("#missing space", BlockKind::Paragraph)]
    #[case("```\ncode here\n```", BlockKind::Code)]
    #[case("```\nnever closed", BlockKind::Paragraph)]
    #[case("> quote\n> more", BlockKind::Quote)]
    #[case(">tight\n>quote", BlockKind::Quote)]
    #[case("> quote\nnot quoted", BlockKind::Paragraph)]
    #[case("- one\n- two", BlockKind::UnorderedList)]
    #[case("- one\n-two", BlockKind::Paragraph)]
    #[case("* star", BlockKind::Paragraph)]
    #[case("1. a\n2. b\n3. c", BlockKind::OrderedList)]
    #[case("1. a\n3. b", BlockKind::Paragraph)]
    #[case("2. a\n3. b", BlockKind::Paragraph)]
    #[case("1.no space", BlockKind::Paragraph)]
    fn classifies(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify_block(block), expected);
    }

    #[test]
    fn heading_wins_over_other_kinds() {
        assert_eq!(
            classify_block("# Title\n- list looking line"),
            BlockKind::Heading { level: 1 }
        );
    }

    #[test]
    fn code_fence_wins_over_quote() {
        assert_eq!(classify_block("```\n> quoted\n```"), BlockKind::Code);
    }
}
