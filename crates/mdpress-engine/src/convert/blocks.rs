use crate::{
    html::Node,
    parsing::{
        blocks::{
            BlockKind,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
        },
        inline::{InlineError, text_to_segments},
    },
};

use super::segments::{CODE_TAG, segments_to_nodes};

pub const PARAGRAPH_TAG: &str = "p";
pub const QUOTE_TAG: &str = "blockquote";
pub const PRE_TAG: &str = "pre";
pub const UNORDERED_LIST_TAG: &str = "ul";
pub const ORDERED_LIST_TAG: &str = "ol";
pub const LIST_ITEM_TAG: &str = "li";

/// Converts a classified block into its root node.
pub fn block_to_node(block: &str, kind: BlockKind) -> Result<Node, InlineError> {
    match kind {
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Heading { level } => heading_to_node(block, level),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
    }
}

fn text_to_children(text: &str) -> Result<Vec<Node>, InlineError> {
    Ok(segments_to_nodes(text_to_segments(text)?))
}

pub fn paragraph_to_node(block: &str) -> Result<Node, InlineError> {
    let text = Paragraph::text(block);
    Ok(Node::parent(PARAGRAPH_TAG, text_to_children(&text)?))
}

pub fn heading_to_node(block: &str, level: u8) -> Result<Node, InlineError> {
    debug_assert!((1..=Heading::MAX_LEVEL).contains(&level));
    let text = Heading::text(block, level);
    Ok(Node::parent(format!("h{level}"), text_to_children(text)?))
}

/// Code blocks are raw zones: the body is kept verbatim, no inline parsing.
pub fn code_to_node(block: &str) -> Node {
    Node::parent(PRE_TAG, vec![Node::leaf(CODE_TAG, CodeFence::body(block))])
}

pub fn quote_to_node(block: &str) -> Result<Node, InlineError> {
    let text = BlockQuote::text(block);
    Ok(Node::parent(QUOTE_TAG, text_to_children(&text)?))
}

pub fn unordered_list_to_node(block: &str) -> Result<Node, InlineError> {
    Ok(Node::parent(
        UNORDERED_LIST_TAG,
        list_items(UnorderedList::items(block))?,
    ))
}

pub fn ordered_list_to_node(block: &str) -> Result<Node, InlineError> {
    Ok(Node::parent(
        ORDERED_LIST_TAG,
        list_items(OrderedList::items(block))?,
    ))
}

fn list_items<'a>(items: impl Iterator<Item = &'a str>) -> Result<Vec<Node>, InlineError> {
    items
        .map(|item| -> Result<Node, InlineError> {
            Ok(Node::parent(LIST_ITEM_TAG, text_to_children(item)?))
        })
        .collect()
}
