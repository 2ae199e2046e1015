use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::markup;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in an owned table-document tree.
///
/// Elements are plain values: identity, marker classes, string attributes,
/// and either text or children. Structure is expressed through the marker
/// classes in [`crate::markup`], which the table constructors below apply.
#[derive(Debug, Clone)]
pub struct Element {
    /// Identity, unique within a tree. Auto-generated unless overridden.
    pub id: String,

    /// Marker classes, in application order.
    pub classes: Vec<String>,

    /// String attributes (`data-*`, `aria-*`, ...).
    pub attrs: HashMap<String, String>,

    /// Text or nested children.
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            classes: Vec::new(),
            attrs: HashMap::new(),
            content: Content::None,
        }
    }
}

impl Element {
    /// Create a generic container element.
    pub fn node() -> Self {
        Self::default()
    }

    /// Create a text element.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create a table root.
    pub fn table() -> Self {
        Self {
            id: generate_id("table"),
            classes: vec![markup::TABLE.to_string()],
            ..Default::default()
        }
    }

    /// Create a header section.
    pub fn head() -> Self {
        Self {
            id: generate_id("thead"),
            classes: vec![markup::TABLE_HEAD.to_string()],
            ..Default::default()
        }
    }

    /// Create a row-group.
    pub fn body() -> Self {
        Self {
            id: generate_id("tbody"),
            classes: vec![markup::TABLE_BODY.to_string()],
            ..Default::default()
        }
    }

    /// Create a row.
    pub fn row() -> Self {
        Self {
            id: generate_id("tr"),
            classes: vec![markup::TABLE_ROW.to_string()],
            ..Default::default()
        }
    }

    /// Create a data cell holding the given text.
    pub fn cell(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("td"),
            content: Content::Text(text.into()),
            ..Default::default()
        }
    }

    /// Create a sortable header cell holding the given text.
    pub fn header_cell(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("th"),
            classes: vec![markup::TABLE_SORT.to_string()],
            content: Content::Text(text.into()),
            ..Default::default()
        }
    }

    // Identity

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Attributes

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    /// Builder form of [`set_attr`](Self::set_attr).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    // Content

    /// Rendered text: the element's own text, or its descendants'
    /// concatenated in document order.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => {
                children.iter().map(Element::text_content).collect()
            }
        }
    }

    // Children

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children_from(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for text and empty elements.
    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Detach all children, leaving the element empty. Children move by
    /// value; reattach them with [`set_children`](Self::set_children).
    pub fn take_children(&mut self) -> Vec<Element> {
        match std::mem::take(&mut self.content) {
            Content::Children(children) => children,
            other => {
                self.content = other;
                Vec::new()
            }
        }
    }

    pub fn set_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }
}
