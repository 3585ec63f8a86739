//! The console walkthrough: hand-written markup first, then the builder.

use std::fmt::Write as _;

use tagtree::{HtmlBuilder, RenderOptions};
use tracing::info;

const WORDS: [&str; 2] = ["hello", "world"];

/// Produce the full walkthrough text
pub fn walkthrough(options: &RenderOptions) -> anyhow::Result<String> {
    let eol = options.line_ending.as_str();
    let mut out = String::new();

    // A paragraph assembled line by line
    write!(out, "<p>{eol}hello{eol}</p>{eol}{eol}")?;

    // A list assembled on a single line
    out.push_str("<ul>");
    for word in WORDS {
        write!(out, "<li>{word}</li>")?;
    }
    write!(out, "</ul>{eol}")?;

    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "Hello").add_child("li", "World");
    info!(children = builder.len(), "rendering builder");

    write!(out, "{}{eol}", builder.render(options))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagtree::LineEnding;

    #[test]
    fn test_default_walkthrough() {
        let result = walkthrough(&RenderOptions::default()).unwrap();
        assert_eq!(
            result,
            concat!(
                "<p>\nhello\n</p>\n\n",
                "<ul><li>hello</li><li>world</li></ul>\n",
                " <ul>\n   <li>\n    Hello\n   </li>\n   <li>\n    World\n   </li>\n </ul>\n\n",
            )
        );
    }

    #[test]
    fn test_crlf_walkthrough() {
        let options = RenderOptions {
            line_ending: LineEnding::CrLf,
            ..Default::default()
        };
        let result = walkthrough(&options).unwrap();
        assert!(!result.replace("\r\n", "").contains('\n'));
        assert!(result.ends_with(" </ul>\r\n\r\n"));
    }
}
