use tabledom::{Content, Element, markup};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_constructors_apply_marker_classes() {
    assert!(Element::table().has_class(markup::TABLE));
    assert!(Element::head().has_class(markup::TABLE_HEAD));
    assert!(Element::body().has_class(markup::TABLE_BODY));
    assert!(Element::row().has_class(markup::TABLE_ROW));
    assert!(Element::header_cell("Name").has_class(markup::TABLE_SORT));
    assert!(!Element::cell("x").has_class(markup::TABLE_SORT));
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::row();
    let b = Element::row();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_id_override() {
    let el = Element::cell("x").id("my-cell");
    assert_eq!(el.id, "my-cell");
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_attr_set_get_remove() {
    let mut el = Element::cell("x").with_attr("data-sort", "1");
    assert!(el.has_attr("data-sort"));
    assert_eq!(el.attr("data-sort"), Some("1"));

    el.set_attr("data-sort", "2");
    assert_eq!(el.attr("data-sort"), Some("2"));

    assert_eq!(el.remove_attr("data-sort"), Some("2".to_string()));
    assert!(!el.has_attr("data-sort"));
    assert_eq!(el.attr("data-sort"), None);
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_text_content_plain() {
    assert_eq!(Element::cell("hello").text_content(), "hello");
    assert_eq!(Element::node().text_content(), "");
}

#[test]
fn test_text_content_recurses_children() {
    let cell = Element::node()
        .child(Element::text("a"))
        .child(Element::node().child(Element::text("b")));
    assert_eq!(cell.text_content(), "ab");
}

#[test]
fn test_child_replaces_text_content() {
    let el = Element::cell("text").child(Element::text("child"));
    assert!(matches!(el.content, Content::Children(_)));
    assert_eq!(el.children().len(), 1);
}

// ============================================================================
// Children
// ============================================================================

#[test]
fn test_take_and_set_children() {
    let mut row = Element::row()
        .child(Element::cell("a"))
        .child(Element::cell("b"));

    let mut children = row.take_children();
    assert_eq!(children.len(), 2);
    assert!(row.children().is_empty());

    children.reverse();
    row.set_children(children);
    assert_eq!(row.children()[0].text_content(), "b");
    assert_eq!(row.children()[1].text_content(), "a");
}

#[test]
fn test_take_children_of_text_element_is_empty() {
    let mut el = Element::cell("x");
    assert!(el.take_children().is_empty());
    // Text content is left intact.
    assert_eq!(el.text_content(), "x");
}
