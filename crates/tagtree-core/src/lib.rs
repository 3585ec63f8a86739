//! tagtree-core - markup element tree and serialization
//!
//! This crate provides the element tree and its indented text rendering.
//! It is used by `tagtree`, which adds the fluent builder on top.
//!
//! # Architecture
//!
//! ```text
//! HtmlBuilder ──mutates──▶ ┌──────────────┐
//!                          │              │
//!                          │ Element tree │ ──serialize──▶ String
//! Element::with_child ────▶│              │
//!                          └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use tagtree_core::{render, Element, RenderOptions};
//!
//! let list = Element::named("ul")
//!     .with_child(Element::new("li", "Hello"))
//!     .with_child(Element::new("li", "World"));
//!
//! let text = render(&list, &RenderOptions::default());
//! assert_eq!(
//!     text,
//!     " <ul>\n   <li>\n    Hello\n   </li>\n   <li>\n    World\n   </li>\n </ul>\n"
//! );
//! ```

mod element;
mod options;
mod serialize;

pub use element::Element;
pub use options::{LineEnding, RenderOptions};
pub use serialize::render;
