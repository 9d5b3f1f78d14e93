use crate::{
    html::{Attributes, Node},
    parsing::inline::TextSegment,
};

pub const BOLD_TAG: &str = "b";
pub const ITALIC_TAG: &str = "i";
pub const CODE_TAG: &str = "code";
pub const LINK_TAG: &str = "a";
pub const IMAGE_TAG: &str = "img";

/// Maps one inline segment onto its HTML leaf.
pub fn segment_to_node(segment: TextSegment) -> Node {
    match segment {
        TextSegment::Plain(text) => Node::text(text),
        TextSegment::Bold(text) => Node::leaf(BOLD_TAG, text),
        TextSegment::Italic(text) => Node::leaf(ITALIC_TAG, text),
        TextSegment::Code(text) => Node::leaf(CODE_TAG, text),
        TextSegment::Link { text, url } => {
            Node::leaf(LINK_TAG, text).with_attributes(Attributes::new().with("href", url))
        }
        TextSegment::Image { alt, url } => Node::leaf(IMAGE_TAG, "")
            .with_attributes(Attributes::new().with("src", url).with("alt", alt)),
    }
}

pub fn segments_to_nodes(segments: Vec<TextSegment>) -> Vec<Node> {
    segments.into_iter().map(segment_to_node).collect()
}
