pub mod convert;
pub mod error;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use convert::{Page, convert_page, document_to_tree, markdown_to_html};
pub use error::ConvertError;
pub use html::{Attributes, Node, RenderError, render};
pub use parsing::{
    BlockKind, InlineError, TextSegment, TitleError, classify_block, extract_title,
    split_blocks, text_to_segments,
};
