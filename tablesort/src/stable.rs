//! Stable total orders over raw two-way comparators.
//!
//! The built-in comparators order descending natively; direction is applied
//! here, in one place, rather than at each call site. An ascending request
//! sorts with the reverse tie-break and then flips the whole sequence: the
//! two reversals cancel for equal-comparing rows, so ties come out in
//! original slot order after any direction toggle.

use std::cmp::Ordering;

/// Which way equal-comparing items fall back to slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Equal items keep ascending slot order.
    Forward,
    /// Equal items take descending slot order, for callers that reverse
    /// the sorted sequence afterwards.
    Reverse,
}

/// One sortable row's comparison key: extracted cell text plus the row's
/// slot index within its group at the start of the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem {
    pub text: String,
    pub slot: usize,
}

impl SortItem {
    pub fn new(text: impl Into<String>, slot: usize) -> Self {
        Self {
            text: text.into(),
            slot,
        }
    }
}

/// Wrap a raw comparator into a total order that breaks ties by slot.
pub fn stabilize<F>(
    compare: &F,
    tie_break: TieBreak,
) -> impl Fn(&SortItem, &SortItem) -> Ordering + '_
where
    F: Fn(&str, &str) -> Ordering + ?Sized,
{
    move |a, b| match compare(&a.text, &b.text) {
        Ordering::Equal => match tie_break {
            TieBreak::Forward => a.slot.cmp(&b.slot),
            TieBreak::Reverse => b.slot.cmp(&a.slot),
        },
        unequal => unequal,
    }
}

/// Direction-compensated sort over a group's sortable rows.
pub fn sort_rows<F>(items: &mut [SortItem], compare: &F, ascending: bool)
where
    F: Fn(&str, &str) -> Ordering + ?Sized,
{
    if ascending {
        items.sort_by(stabilize(compare, TieBreak::Reverse));
        items.reverse();
    } else {
        items.sort_by(stabilize(compare, TieBreak::Forward));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_equal(_: &str, _: &str) -> Ordering {
        Ordering::Equal
    }

    #[test]
    fn test_stabilize_forward_keeps_slot_order() {
        let ordered = stabilize(&always_equal, TieBreak::Forward);
        let a = SortItem::new("same", 0);
        let b = SortItem::new("same", 1);
        assert_eq!(ordered(&a, &b), Ordering::Less);
        assert_eq!(ordered(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_stabilize_reverse_flips_slot_order() {
        let ordered = stabilize(&always_equal, TieBreak::Reverse);
        let a = SortItem::new("same", 0);
        let b = SortItem::new("same", 1);
        assert_eq!(ordered(&a, &b), Ordering::Greater);
        assert_eq!(ordered(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_stabilize_passes_unequal_through() {
        let base = |a: &str, b: &str| b.cmp(a);
        let ordered = stabilize(&base, TieBreak::Reverse);
        let a = SortItem::new("a", 5);
        let b = SortItem::new("b", 0);
        assert_eq!(ordered(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_sort_rows_ties_stay_put_both_directions() {
        let mut items = vec![
            SortItem::new("x", 0),
            SortItem::new("x", 1),
            SortItem::new("x", 2),
        ];
        sort_rows(&mut items, &always_equal, true);
        assert_eq!(items.iter().map(|i| i.slot).collect::<Vec<_>>(), [0, 1, 2]);
        sort_rows(&mut items, &always_equal, false);
        assert_eq!(items.iter().map(|i| i.slot).collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn test_sort_rows_ascending_flips_descending_comparator() {
        // Descending-polarity comparator: earlier text compares greater.
        let base = |a: &str, b: &str| b.cmp(a);
        let mut items = vec![
            SortItem::new("b", 0),
            SortItem::new("c", 1),
            SortItem::new("a", 2),
        ];
        sort_rows(&mut items, &base, true);
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }
}
