//! Tree lookup helpers: by id, by marker class, by child position.

use crate::element::Element;

/// Find an element by id anywhere in the tree, the root included.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }
    for child in root.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_element`].
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }
    for child in root.children_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }
    None
}

/// All descendants carrying the given marker class, in document order.
/// The root itself is not considered.
pub fn query_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_class(root, class, &mut found);
    found
}

fn collect_class<'a>(root: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    for child in root.children() {
        if child.has_class(class) {
            found.push(child);
        }
        collect_class(child, class, found);
    }
}

/// Position of the child with the given id among `parent`'s children.
pub fn child_index(parent: &Element, id: &str) -> Option<usize> {
    parent.children().iter().position(|child| child.id == id)
}
