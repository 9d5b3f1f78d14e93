//! # HTML Tree
//!
//! The output document as a tree of [`Node`]s, and its serialization.
//!
//! A [`Node`] is either a leaf (text, or one element wrapping text) or a
//! parent element owning its children. Trees are built bottom-up by the
//! converters and consumed once by [`render`].

pub mod node;
pub mod render;

pub use node::{Attributes, Node};
pub use render::{RenderError, render};
