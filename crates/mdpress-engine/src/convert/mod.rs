//! # Conversion
//!
//! Glue between the parsers and the HTML tree: every block of a document is
//! classified, converted into its root node, and the roots are collected
//! under one container element.
//!
//! ## Modules
//!
//! - **`segments`**: inline segment to leaf mapping
//! - **`blocks`**: one converter per [`BlockKind`]

pub mod blocks;
pub mod segments;

use crate::{
    error::ConvertError,
    html::{Node, render},
    parsing::{
        blocks::{BlockKind, classify_block, split_blocks},
        inline::InlineError,
        title::extract_title,
    },
};

pub use blocks::block_to_node;
pub use segments::segment_to_node;

/// Tag of the element that wraps a whole document.
pub const DOCUMENT_TAG: &str = "div";

/// A converted document ready for a page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Text of the first level-1 heading.
    pub title: String,
    /// The rendered document tree.
    pub html: String,
}

/// Parses a Markdown document into a tree rooted at a `div`.
///
/// Blocks are independent of each other; the first inline error aborts the
/// whole conversion.
pub fn document_to_tree(document: &str) -> Result<Node, InlineError> {
    let children = split_blocks(document)
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let kind: BlockKind = classify_block(block);
            log::trace!("block {index} classified as {kind:?}");
            block_to_node(block, kind)
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("converted document into {} blocks", children.len());
    Ok(Node::parent(DOCUMENT_TAG, children))
}

/// Converts a Markdown document straight to an HTML string.
pub fn markdown_to_html(document: &str) -> Result<String, ConvertError> {
    let tree = document_to_tree(document)?;
    Ok(render(&tree)?)
}

/// Converts a document and extracts its title for page templating.
pub fn convert_page(document: &str) -> Result<Page, ConvertError> {
    let title = extract_title(document)?;
    let html = markdown_to_html(document)?;
    Ok(Page { title, html })
}
