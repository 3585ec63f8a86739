//! Markup element tree
//!
//! An [`Element`] owns its children by value, so a node can only ever live in
//! one place in one tree and cycles cannot be expressed.

use std::fmt;

use crate::options::RenderOptions;
use crate::serialize::serialize_element;

/// A single markup element: tag name, optional text and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create a leaf element with the given tag and text
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Create an element with a tag and no text
    pub fn named(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Append a child and return the element, for building subtrees inline
    pub fn with_child(mut self, child: Element) -> Self {
        self.add_child(child);
        self
    }

    /// Append a child at the end of the children list
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Raw text as given at construction
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if the text would produce a line when rendered.
    ///
    /// Absent, empty and whitespace-only text all count as "no text".
    pub fn has_text(&self) -> bool {
        self.text
            .as_deref()
            .is_some_and(|text| !text.chars().all(char::is_whitespace))
    }

    /// Number of elements in this subtree, including `self`
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }

    /// Height of this subtree (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Element::depth).max().unwrap_or(0)
    }

    /// Render this subtree at the given indent level with default options
    pub fn serialize(&self, indent_level: usize) -> String {
        self.serialize_with(&RenderOptions::default(), indent_level)
    }

    /// Render this subtree at the given indent level
    pub fn serialize_with(&self, options: &RenderOptions, indent_level: usize) -> String {
        let mut out = String::with_capacity(64 * self.count());
        serialize_element(self, options, indent_level, &mut out);
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(0))
    }
}
