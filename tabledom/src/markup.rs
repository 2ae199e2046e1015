//! Structural marker classes shared across the table DOM.
//!
//! These are the class names the element constructors apply and the
//! sorting layer queries by. Embedding applications that build trees by
//! hand must use the same markers.

/// Root marker of a sortable table element.
pub const TABLE: &str = "table";

/// Header section holding one or more header rows.
pub const TABLE_HEAD: &str = "table-head";

/// One row-group. A table may hold several, each sorted independently.
pub const TABLE_BODY: &str = "table-body";

/// A data (or header) row inside a section.
pub const TABLE_ROW: &str = "table-row";

/// A sortable header cell.
pub const TABLE_SORT: &str = "table-sort";

/// A header cell that occupies a column slot but never sorts.
pub const TABLE_NO_SORT: &str = "table-no-sort";

/// Row-level marker excluding the row from sorting.
pub const NO_SORT_ROW: &str = "no-sort";
