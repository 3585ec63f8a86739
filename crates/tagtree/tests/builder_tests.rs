use tagtree::{Element, HtmlBuilder, LineEnding, RenderOptions, TagTreeError};

const HELLO_WORLD: &str = concat!(
    " <ul>\n",
    "   <li>\n",
    "    Hello\n",
    "   </li>\n",
    "   <li>\n",
    "    World\n",
    "   </li>\n",
    " </ul>\n",
);

#[test]
fn test_hello_world_list() {
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "Hello").add_child("li", "World");

    assert_eq!(builder.to_string(), HELLO_WORLD);
    assert_eq!(format!("{builder}"), HELLO_WORLD);
}

#[test]
fn test_clear_between_builds() {
    let mut builder = HtmlBuilder::new("ul");
    for round in 0..3 {
        builder.add_child("li", format!("item {round}"));
        builder.add_child("li", "");
        builder.clear();
        assert_eq!(builder.to_string(), " <ul>\n </ul>\n");
        assert_eq!(builder.root().tag(), "ul");
    }
}

#[test]
fn test_whitespace_children_render_as_empty_elements() {
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "  ").add_child("li", "x");

    assert_eq!(
        builder.to_string(),
        " <ul>\n   <li>\n   </li>\n   <li>\n    x\n   </li>\n </ul>\n"
    );
    assert_eq!(builder.root().children()[0].text(), Some("  "));
}

#[test]
fn test_built_tree_can_be_nested() {
    let mut inner = HtmlBuilder::new("ul");
    inner.add_child("li", "Hello");

    let mut outer = HtmlBuilder::new("body");
    outer.add_child("h1", "Title").add_element(inner.build());

    assert_eq!(
        outer.to_string(),
        concat!(
            " <body>\n",
            "   <h1>\n",
            "    Title\n",
            "   </h1>\n",
            "   <ul>\n",
            "     <li>\n",
            "      Hello\n",
            "     </li>\n",
            "   </ul>\n",
            " </body>\n",
        )
    );
}

#[test]
fn test_render_crlf() {
    let mut builder = HtmlBuilder::new("ul");
    builder.add_child("li", "Hello").add_child("li", "World");
    let options = RenderOptions {
        line_ending: LineEnding::CrLf,
        ..Default::default()
    };

    assert_eq!(builder.render(&options), HELLO_WORLD.replace('\n', "\r\n"));
}

#[test]
fn test_invalid_tag_error_message() {
    let err = HtmlBuilder::try_new(" ").unwrap_err();
    assert_eq!(err, TagTreeError::InvalidTag(" ".to_string()));
    assert_eq!(err.to_string(), "Invalid tag: \" \"");
}

#[test]
fn test_element_default_can_be_rendered() {
    let element = Element::default();
    assert_eq!(element.to_string(), " <>\n </>\n");
}
