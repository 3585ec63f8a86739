//! Element tree serialization
//!
//! Converts an element tree into indented, line-terminated text:
//!
//! ```text
//!  <ul>
//!    <li>
//!     Hello
//!    </li>
//!  </ul>
//! ```
//!
//! Tag lines carry `indent_size * level` spaces followed by a single literal
//! space; a text line carries `indent_size * (level + 1)` spaces and no extra
//! space. Every line, including the last, ends with the line terminator.

use crate::element::Element;
use crate::options::RenderOptions;

/// Serialize an element tree to a string, starting at indent level 0
pub fn render(element: &Element, options: &RenderOptions) -> String {
    element.serialize_with(options, 0)
}

pub(crate) fn serialize_element(
    element: &Element,
    options: &RenderOptions,
    level: usize,
    out: &mut String,
) {
    let eol = options.line_ending.as_str();
    let prefix = " ".repeat(options.indent_size * level);

    push_tag_line(&prefix, "<", element.tag(), eol, out);

    if let Some(text) = element.text().filter(|_| element.has_text()) {
        push_indent(options.indent_size * (level + 1), out);
        out.push_str(text);
        out.push_str(eol);
    }

    for child in element.children() {
        serialize_element(child, options, level + 1, out);
    }

    push_tag_line(&prefix, "</", element.tag(), eol, out);
}

fn push_tag_line(prefix: &str, open: &str, tag: &str, eol: &str, out: &mut String) {
    out.push_str(prefix);
    out.push(' ');
    out.push_str(open);
    out.push_str(tag);
    out.push('>');
    out.push_str(eol);
}

fn push_indent(width: usize, out: &mut String) {
    out.push_str(&" ".repeat(width));
}
