//! # Inline Parsing
//!
//! Turns a run of text into a flat sequence of [`TextSegment`]s.
//!
//! ## Pipeline
//!
//! Parsing is a fixed sequence of passes over a segment list that starts as a
//! single plain segment holding the whole text. Each pass only subdivides
//! plain segments; anything already styled passes through untouched.
//!
//! 1. Delimiters, in [`Delimiter::ORDER`]: `**` bold, `_` italic, `*` italic,
//!    `` ` `` code. An odd delimiter count fails the whole parse.
//! 2. Images `![alt](url)`.
//! 3. Links `[text](url)`.
//!
//! Because passes never look inside styled segments, inline styles do not
//! nest: `**a _b_**` is one bold segment whose text still contains `_`.
//!
//! ## Modules
//!
//! - **`types`**: `TextSegment`, `InlineStyle`
//! - **`kinds`**: syntax owners (`Delimiter`, `Image`, `Link`)
//! - **`extract`**: regex-driven location of images and links
//! - **`parser`**: the splitting passes and `text_to_segments()`

pub mod extract;
pub mod kinds;
pub mod parser;
pub mod types;

pub use extract::{extract_images, extract_links};
pub use kinds::Delimiter;
pub use parser::{
    InlineError, split_by_delimiter, split_images, split_links, text_to_segments,
};
pub use types::{InlineStyle, TextSegment};
