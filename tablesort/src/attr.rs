//! Declarative configuration attributes recognized on table markup.

/// Forces a named comparator on a header, or `"none"` / `"thead"`.
pub const SORT_METHOD: &str = "data-sort-method";

/// Keys a cell to a header independent of positional index.
pub const COLUMN_KEY: &str = "data-sort-column-key";

/// Marks the header the table sorts by at construction.
pub const SORT_DEFAULT: &str = "data-sort-default";

/// Override text compared in place of a cell's rendered text.
pub const SORT_OVERRIDE: &str = "data-sort";

/// Persisted direction marker: `"ascending"` or `"descending"`.
pub const ARIA_SORT: &str = "aria-sort";

pub const ROLE: &str = "role";
pub const TAB_INDEX: &str = "tabindex";

/// `data-sort-method` value excluding a header or row from sorting.
pub const METHOD_NONE: &str = "none";

/// `data-sort-method` value marking the authoritative header row.
pub const METHOD_THEAD: &str = "thead";
