use tabledom::{Element, child_index, find_element, find_element_mut, markup, query_class};

fn sample_tree() -> Element {
    Element::table()
        .id("root")
        .child(
            Element::head().id("head").child(
                Element::row()
                    .id("header-row")
                    .child(Element::header_cell("Name").id("th-name")),
            ),
        )
        .child(
            Element::body()
                .id("body")
                .child(Element::row().id("r1").child(Element::cell("a")))
                .child(Element::row().id("r2").child(Element::cell("b"))),
        )
}

// ============================================================================
// Lookup by id
// ============================================================================

#[test]
fn test_find_element_nested() {
    let tree = sample_tree();
    assert!(find_element(&tree, "th-name").is_some());
    assert_eq!(find_element(&tree, "root").map(|el| el.id.as_str()), Some("root"));
    assert!(find_element(&tree, "missing").is_none());
}

#[test]
fn test_find_element_mut_mutation_sticks() {
    let mut tree = sample_tree();
    find_element_mut(&mut tree, "th-name")
        .expect("header cell present")
        .set_attr("aria-sort", "ascending");
    assert_eq!(
        find_element(&tree, "th-name").and_then(|el| el.attr("aria-sort")),
        Some("ascending")
    );
}

// ============================================================================
// Query by class
// ============================================================================

#[test]
fn test_query_class_document_order() {
    let tree = sample_tree();
    let rows = query_class(&tree, markup::TABLE_ROW);
    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, ["header-row", "r1", "r2"]);
}

#[test]
fn test_query_class_excludes_root() {
    let tree = sample_tree();
    assert!(query_class(&tree, markup::TABLE).is_empty());
}

// ============================================================================
// Child index
// ============================================================================

#[test]
fn test_child_index() {
    let tree = sample_tree();
    let body = find_element(&tree, "body").expect("body present");
    assert_eq!(child_index(body, "r1"), Some(0));
    assert_eq!(child_index(body, "r2"), Some(1));
    assert_eq!(child_index(body, "header-row"), None);
}
