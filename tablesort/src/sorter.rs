//! Per-table sort orchestration.
//!
//! A [`TableSorter`] owns its table element for the duration of the
//! session. Clicks are routed in by id (hit testing belongs to whatever
//! renders the tree), notifications flow out through a drainable queue,
//! and the tree comes back out via [`TableSorter::into_element`].

use std::collections::HashSet;

use log::debug;
use thiserror::Error;

use tabledom::{
    Element, Event, Notification, NotificationQueue, child_index, find_element, find_element_mut,
    markup,
};

use crate::attr;
use crate::extract;
use crate::options::{SortDirection, SortOptions};
use crate::registry::{SortRegistry, SortRule};
use crate::reorder;
use crate::stable::{SortItem, sort_rows};

/// Library version, reported at construction.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Notification fired before any mutation of a sort pass.
pub const BEFORE_SORT: &str = "beforeSort";

/// Notification fired after every row-group has been reordered.
pub const AFTER_SORT: &str = "afterSort";

/// How many cell texts column-type inference samples.
const SAMPLE_SIZE: usize = 3;

/// Errors from [`TableSorter`] construction.
#[derive(Debug, Clone, Error)]
pub enum SetupError {
    /// The element does not carry the `table` marker class.
    #[error("Element must be a table")]
    NotATable,
}

/// Sorting controller for one table element.
///
/// Construction resolves the header row, marks sortable headers, and runs
/// a default sort when a header asks for one. A table without a usable
/// header row yields an inert instance: constructed, but every click is
/// ignored. That is deliberate, not an error.
#[derive(Debug)]
pub struct TableSorter {
    table: Element,
    registry: SortRegistry,
    options: SortOptions,
    has_header_section: bool,
    header_row_id: Option<String>,
    sortable_headers: Vec<String>,
    current: Option<String>,
    sorted_column: Option<usize>,
    notifications: NotificationQueue,
}

impl TableSorter {
    /// Attach to a table element with the built-in rules.
    pub fn new(table: Element, options: SortOptions) -> Result<Self, SetupError> {
        Self::with_registry(table, options, SortRegistry::with_builtins())
    }

    /// Attach with an application-provided registry. The built-in rules
    /// are seeded idempotently, so pre-populated registries keep their
    /// own rules ahead of the built-ins.
    pub fn with_registry(
        table: Element,
        options: SortOptions,
        mut registry: SortRegistry,
    ) -> Result<Self, SetupError> {
        if !table.has_class(markup::TABLE) {
            return Err(SetupError::NotATable);
        }
        registry.seed_builtins();

        let mut sorter = Self {
            table,
            registry,
            options,
            has_header_section: false,
            header_row_id: None,
            sortable_headers: Vec::new(),
            current: None,
            sorted_column: None,
            notifications: NotificationQueue::new(),
        };
        sorter.init();
        Ok(sorter)
    }

    fn init(&mut self) {
        debug!("tablesort {} attached to '{}'", VERSION, self.table.id);
        let Some(header_row_id) = self.resolve_header_row() else {
            return;
        };
        self.header_row_id = Some(header_row_id.clone());

        // Survey the header row first, then a mutation pass per cell.
        let mut cells: Vec<(String, bool, bool)> = Vec::new();
        if let Some(row) = find_element(&self.table, &header_row_id) {
            for cell in row.children() {
                if !cell.has_class(markup::TABLE_SORT) {
                    continue;
                }
                let clickable = cell.attr(attr::SORT_METHOD) != Some(attr::METHOD_NONE);
                let default = clickable && cell.has_attr(attr::SORT_DEFAULT);
                cells.push((cell.id.clone(), clickable, default));
            }
        }

        let mut default_header = None;
        for (id, clickable, default) in cells {
            if let Some(cell) = find_element_mut(&mut self.table, &id) {
                cell.set_attr(attr::ROLE, "columnheader");
                if clickable {
                    cell.set_attr(attr::TAB_INDEX, "0");
                }
            }
            if clickable {
                self.sortable_headers.push(id.clone());
            }
            if default {
                default_header = Some(id);
            }
        }

        if let Some(id) = default_header {
            self.current = Some(id.clone());
            self.sort_table(&id, false);
        }
    }

    /// The authoritative header row. Inside a `table-head` section the row
    /// marked `data-sort-method="thead"` wins, else the section's last
    /// row. Without a section, the table's first row-like child doubles
    /// as the header.
    fn resolve_header_row(&mut self) -> Option<String> {
        if let Some(head) = self
            .table
            .children()
            .iter()
            .find(|child| child.has_class(markup::TABLE_HEAD))
        {
            let rows = head.children();
            if !rows.is_empty() {
                self.has_header_section = true;
                let row = rows
                    .iter()
                    .find(|row| row.attr(attr::SORT_METHOD) == Some(attr::METHOD_THEAD))
                    .or_else(|| rows.last())?;
                return Some(row.id.clone());
            }
        }

        for child in self.table.children() {
            if child.has_class(markup::TABLE_BODY) {
                if let Some(first) = child.children().first() {
                    return Some(first.id.clone());
                }
            } else if child.has_class(markup::TABLE_ROW) || !child.children().is_empty() {
                return Some(child.id.clone());
            }
        }
        None
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The owned table element, for rendering between sorts.
    pub fn element(&self) -> &Element {
        &self.table
    }

    /// Mutable access to the table, for applications editing cell data in
    /// place. Call [`refresh`](Self::refresh) afterwards to restore order.
    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.table
    }

    /// Give the table element back, consuming the sorter.
    pub fn into_element(self) -> Element {
        self.table
    }

    /// Whether a header section was found at construction.
    pub fn has_header_section(&self) -> bool {
        self.has_header_section
    }

    /// Ids of the headers that respond to clicks, in column order.
    pub fn sortable_headers(&self) -> &[String] {
        &self.sortable_headers
    }

    /// Id of the header the table is currently sorted by.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Column index of the last completed sort pass.
    pub fn sorted_column(&self) -> Option<usize> {
        self.sorted_column
    }

    pub fn registry(&self) -> &SortRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SortRegistry {
        &mut self.registry
    }

    /// Take all pending notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    // -------------------------------------------------------------------------
    // Event routing
    // -------------------------------------------------------------------------

    /// Route an event. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Click {
                target: Some(target),
            } => self.handle_click(target),
            Event::Click { target: None } => false,
        }
    }

    /// Route a click at an element id. Clicks anywhere but a sortable
    /// header are ignored.
    pub fn handle_click(&mut self, target: &str) -> bool {
        if !self.sortable_headers.iter().any(|id| id == target) {
            return false;
        }
        if let Some(previous) = self.current.take() {
            if previous != target {
                if let Some(cell) = find_element_mut(&mut self.table, &previous) {
                    cell.remove_attr(attr::ARIA_SORT);
                }
            }
        }
        self.current = Some(target.to_string());
        self.sort_table(target, false);
        true
    }

    /// Re-run the current sort after external data changes. Direction is
    /// left as it stands.
    pub fn refresh(&mut self) {
        if let Some(current) = self.current.clone() {
            self.sort_table(&current, true);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Sort the table by the given header.
    ///
    /// `refresh` keeps the persisted direction instead of toggling it.
    /// `beforeSort` and `afterSort` bracket the call exactly once each,
    /// early exits included.
    pub fn sort_table(&mut self, header_id: &str, refresh: bool) {
        self.notifications.dispatch(self.table.id.clone(), BEFORE_SORT);
        self.sort_table_inner(header_id, refresh);
        self.notifications.dispatch(self.table.id.clone(), AFTER_SORT);
    }

    fn sort_table_inner(&mut self, header_id: &str, refresh: bool) {
        let Some(header_row_id) = self.header_row_id.clone() else {
            return;
        };

        // Resolve the column from the header's position, or its key.
        let resolved = find_element(&self.table, &header_row_id).and_then(|row| {
            let column = child_index(row, header_id)?;
            let header = &row.children()[column];
            Some((
                column,
                header.attr(attr::COLUMN_KEY).map(str::to_string),
                header.attr(attr::SORT_METHOD).map(str::to_string),
                header.attr(attr::ARIA_SORT).and_then(SortDirection::from_aria),
            ))
        });
        let Some((column, column_key, forced, marker)) = resolved else {
            return;
        };

        let direction = if refresh {
            marker.unwrap_or(SortDirection::Ascending)
        } else {
            let next = match marker {
                Some(current) => current.toggled(),
                None if self.options.descending_first => SortDirection::Descending,
                None => SortDirection::Ascending,
            };
            if let Some(cell) = find_element_mut(&mut self.table, header_id) {
                cell.set_attr(attr::ARIA_SORT, next.as_aria());
            }
            next
        };

        if self.sortable_rows().count() < 2 {
            return;
        }

        // Resolve the comparator once, before touching any group. The rule
        // is cloned out of the registry so groups can be mutated below.
        let samples = if forced.is_some() {
            Vec::new()
        } else {
            self.sample_texts(column, column_key.as_deref())
        };
        let rule = self.registry.resolve(forced.as_deref(), &samples).clone();
        debug!(
            "sorting '{}' column {} with rule '{}' {}",
            self.table.id,
            column,
            rule.name(),
            direction,
        );

        let group_ids: Vec<String> = self.row_groups().map(|group| group.id.clone()).collect();
        for group_id in group_ids {
            self.sort_group(&group_id, &rule, direction, column, column_key.as_deref());
        }
        self.sorted_column = Some(column);
    }

    fn sort_group(
        &mut self,
        group_id: &str,
        rule: &SortRule,
        direction: SortDirection,
        column: usize,
        column_key: Option<&str>,
    ) {
        let Some(group) = find_element(&self.table, group_id) else {
            return;
        };

        // Parse the group once: slot plus exclusion flag per row, then the
        // comparison key for every sortable row.
        let mut items: Vec<SortItem> = Vec::new();
        let mut excluded: HashSet<usize> = HashSet::new();
        for (slot, child) in group.children().iter().enumerate() {
            if !child.has_class(markup::TABLE_ROW) {
                continue;
            }
            if Self::row_excluded(child) {
                excluded.insert(slot);
            } else {
                let text = extract::cell_text(Self::cell_in_row(child, column, column_key));
                items.push(SortItem::new(text, slot));
            }
        }
        if items.len() < 2 {
            return;
        }

        sort_rows(&mut items, rule.comparator(), direction.is_ascending());

        let ranked: Vec<usize> = items.iter().map(|item| item.slot).collect();
        if let Some(group) = find_element_mut(&mut self.table, group_id) {
            reorder::apply(group, &ranked, &excluded);
        }
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    fn row_excluded(row: &Element) -> bool {
        row.has_class(markup::NO_SORT_ROW) || row.attr(attr::SORT_METHOD) == Some(attr::METHOD_NONE)
    }

    fn row_groups(&self) -> impl Iterator<Item = &Element> {
        self.table
            .children()
            .iter()
            .filter(|child| child.has_class(markup::TABLE_BODY))
    }

    fn sortable_rows(&self) -> impl Iterator<Item = &Element> {
        self.row_groups()
            .flat_map(|group| group.children().iter())
            .filter(|row| row.has_class(markup::TABLE_ROW) && !Self::row_excluded(row))
    }

    /// Up to [`SAMPLE_SIZE`] non-empty texts for the column, scanning
    /// sortable rows forward from the first data row. Without a header
    /// section the first row doubles as the header and is skipped.
    fn sample_texts(&self, column: usize, column_key: Option<&str>) -> Vec<String> {
        let start = if self.has_header_section { 0 } else { 1 };
        let mut samples = Vec::new();
        for row in self.sortable_rows().skip(start) {
            if samples.len() >= SAMPLE_SIZE {
                break;
            }
            let text = extract::cell_text(Self::cell_in_row(row, column, column_key));
            if !text.is_empty() {
                samples.push(text);
            }
        }
        samples
    }

    /// The cell a header addresses within a row: by column key when the
    /// header carries one, else by child position.
    fn cell_in_row<'a>(
        row: &'a Element,
        column: usize,
        column_key: Option<&str>,
    ) -> Option<&'a Element> {
        match column_key {
            Some(key) => row
                .children()
                .iter()
                .find(|cell| cell.attr(attr::COLUMN_KEY) == Some(key)),
            None => row.children().get(column),
        }
    }
}
