//! Click-to-sort engine for table-shaped element trees.
//!
//! A [`TableSorter`] attaches to a [`tabledom::Element`] table and:
//! - routes header clicks to a sort pass, toggling ascending/descending
//! - picks a comparator per column, by forced name or by classifying a
//!   sample of cell text (case-insensitive text and date rules built in)
//! - sorts stably, so equal rows keep their original order across any
//!   sequence of direction toggles
//! - reorders rows in place per row-group, leaving excluded rows pinned
//!
//! # Example
//!
//! ```ignore
//! use tabledom::Element;
//! use tablesort::{SortOptions, TableSorter};
//!
//! let table = Element::table()
//!     .child(Element::head().child(Element::row().child(Element::header_cell("Name"))))
//!     .child(
//!         Element::body()
//!             .child(Element::row().child(Element::cell("John")))
//!             .child(Element::row().child(Element::cell("Alice"))),
//!     );
//!
//! let mut sorter = TableSorter::new(table, SortOptions::new())?;
//! let header = sorter.sortable_headers()[0].clone();
//! sorter.handle_click(&header);
//! ```

pub mod attr;
pub mod date;
pub mod extract;
pub mod options;
pub mod registry;
pub mod reorder;
pub mod sorter;
pub mod stable;

pub use date::{DateParser, UNPARSEABLE, date_rule};
pub use extract::{cell_text, inner_text};
pub use options::{SortDirection, SortOptions};
pub use registry::{RegistryError, SortRegistry, SortRule};
pub use sorter::{AFTER_SORT, BEFORE_SORT, SetupError, TableSorter, VERSION};
pub use stable::{SortItem, TieBreak, sort_rows, stabilize};

pub mod prelude {
    pub use crate::date::{DateParser, date_rule};
    pub use crate::options::{SortDirection, SortOptions};
    pub use crate::registry::{RegistryError, SortRegistry, SortRule};
    pub use crate::sorter::{SetupError, TableSorter};

    pub use tabledom::{Element, Event, Notification, markup};
}
