//! In-place row reordering within one row-group.

use std::collections::HashSet;

use tabledom::{Element, markup};

/// Re-attach a row-group's rows in ranked order.
///
/// Walks every original child slot: an excluded row stays at its slot,
/// every other row slot receives the next entry of `ranked_slots` (slot
/// indices of the sortable rows in their final order). Children that are
/// not rows keep their positions. Rows move by value out of the detached
/// child list and back in, so nothing is cloned and row identity,
/// attributes, and nested content survive the pass.
pub fn apply(group: &mut Element, ranked_slots: &[usize], excluded_slots: &HashSet<usize>) {
    let total = group.children().len();
    let mut source: Vec<Option<Element>> = group.take_children().into_iter().map(Some).collect();
    let mut ranked = ranked_slots.iter().copied();
    let mut reordered: Vec<Element> = Vec::with_capacity(total);

    for slot in 0..total {
        let pinned = excluded_slots.contains(&slot)
            || source[slot]
                .as_ref()
                .is_some_and(|child| !child.has_class(markup::TABLE_ROW));
        let taken = if pinned {
            source[slot].take()
        } else {
            ranked.next().and_then(|ranked_slot| source[ranked_slot].take())
        };
        if let Some(child) = taken {
            reordered.push(child);
        }
    }

    group.set_children(reordered);
}
