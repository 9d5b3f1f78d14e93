pub mod blocks;
pub mod inline;
pub mod title;

pub use blocks::{BlockKind, classify_block, split_blocks};
pub use inline::{InlineError, TextSegment, text_to_segments};
pub use title::{TitleError, extract_title};
