//! # tagtree
//!
//! Build markup element trees with a fluent API and render them as indented text.
//!
//! ## Design
//!
//! An [`HtmlBuilder`] owns a single root [`Element`]. Children are appended with
//! chained calls, and [`HtmlBuilder::clear`] resets the tree while keeping the
//! root tag. Elements own their children by value, so the tree can never share
//! nodes or contain cycles.
//!
//! Rendering has no side effects on the tree and never fails.
//!
//! ## Example
//!
//! ```rust
//! use tagtree::HtmlBuilder;
//!
//! let mut builder = HtmlBuilder::new("ul");
//! builder.add_child("li", "Hello").add_child("li", "World");
//!
//! assert_eq!(
//!     builder.to_string(),
//!     " <ul>\n   <li>\n    Hello\n   </li>\n   <li>\n    World\n   </li>\n </ul>\n"
//! );
//!
//! builder.clear();
//! assert_eq!(builder.to_string(), " <ul>\n </ul>\n");
//! ```

mod builder;

pub use builder::HtmlBuilder;
pub use tagtree_core::{render, Element, LineEnding, RenderOptions};

/// Error type for tagtree operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagTreeError {
    #[error("Invalid tag: {0:?}")]
    InvalidTag(String),
}

pub type Result<T> = std::result::Result<T, TagTreeError>;
