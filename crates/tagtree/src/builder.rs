//! HtmlBuilder - the fluent entry point for building element trees.

use std::fmt;

use tagtree_core::{Element, RenderOptions};
use tracing::{debug, trace};

use crate::{Result, TagTreeError};

/// Fluent builder that owns a root element.
///
/// The root tag is fixed at construction; [`clear`](HtmlBuilder::clear)
/// discards everything below the root but keeps its tag.
#[derive(Debug, Clone)]
pub struct HtmlBuilder {
    root_tag: String,
    root: Element,
}

impl HtmlBuilder {
    /// Create a builder with an empty root element
    pub fn new(root_tag: impl Into<String>) -> Self {
        let root_tag = root_tag.into();
        Self {
            root: Element::named(root_tag.clone()),
            root_tag,
        }
    }

    /// Create a builder, rejecting an empty or whitespace-only root tag
    pub fn try_new(root_tag: impl Into<String>) -> Result<Self> {
        let root_tag = root_tag.into();
        if root_tag.trim().is_empty() {
            return Err(TagTreeError::InvalidTag(root_tag));
        }
        Ok(Self::new(root_tag))
    }

    /// Append a leaf element to the root
    pub fn add_child(&mut self, tag: impl Into<String>, text: impl Into<String>) -> &mut Self {
        let child = Element::new(tag, text);
        trace!(root = %self.root_tag, child = %child.tag(), "adding child");
        self.root.add_child(child);
        self
    }

    /// Append a pre-built subtree to the root
    pub fn add_element(&mut self, element: Element) -> &mut Self {
        trace!(
            root = %self.root_tag,
            child = %element.tag(),
            nodes = element.count(),
            "adding subtree"
        );
        self.root.add_child(element);
        self
    }

    /// Drop the current tree and start again from an empty root
    pub fn clear(&mut self) -> &mut Self {
        debug!(
            root = %self.root_tag,
            discarded = self.root.count() - 1,
            "clearing builder"
        );
        self.root = Element::named(self.root_tag.clone());
        self
    }

    /// Tag given at construction, kept across `clear`
    pub fn root_tag(&self) -> &str {
        &self.root_tag
    }

    /// Get the current root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Number of direct children of the root
    pub fn len(&self) -> usize {
        self.root.children().len()
    }

    /// Check if the root has no children
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Render the tree with custom options
    pub fn render(&self, options: &RenderOptions) -> String {
        tagtree_core::render(&self.root, options)
    }

    /// Consume the builder and return the tree
    pub fn build(self) -> Element {
        debug!(root = %self.root_tag, nodes = self.root.count(), "building tree");
        self.root
    }
}

impl fmt::Display for HtmlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
