//! # Inline Kinds
//!
//! Inline types that own their syntax: delimiter strings and the patterns for
//! bracketed constructs. Parser code refers to these constants and never
//! hardcodes `**` or `![`.
//!
//! ## Types
//!
//! - **`Delimiter`**: paired markers (`**`, `_`, `*`, `` ` ``) and the order they
//!   are applied in
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`, never preceded by `!`

pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::Delimiter;
pub use image::Image;
pub use link::Link;
