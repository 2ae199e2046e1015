//! Cell text extraction.

use tabledom::Element;

use crate::attr;

/// The comparable text for a cell: a non-empty `data-sort` override wins
/// over the rendered text content.
pub fn inner_text(cell: &Element) -> String {
    match cell.attr(attr::SORT_OVERRIDE) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => cell.text_content(),
    }
}

/// Extraction over an optional cell; missing cells read as empty text.
pub fn cell_text(cell: Option<&Element>) -> String {
    cell.map(inner_text).unwrap_or_default()
}
