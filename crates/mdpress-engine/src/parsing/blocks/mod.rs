//! # Block Parsing
//!
//! Two-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into
//!    trimmed, non-empty blocks.
//!
//! 2. **Classification** (`classify`): each block gets exactly one
//!    [`BlockKind`]. Classification looks at the whole block, so a block is a
//!    list only if every line is a list item.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: block-specific syntax owners (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `split_blocks`
//! - **`classify`**: `classify_block`
//!
//! ## Key Invariants
//!
//! - Blocks keep document order and are never empty
//! - Classification is pure and total: it never fails
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify_block;
pub use split::split_blocks;
pub use types::BlockKind;
