//! Search strategies over an item list.
//!
//! Every strategy is a pure scan: items are borrowed for the duration of the
//! call, `None` entries are skipped, and a fresh [`crate::SearchResult`] is returned.

mod binary;
mod fuzzy;
mod linear;

pub use binary::{binary_search, find_sorted_case_insensitive};
pub use fuzzy::fuzzy_search;
pub use linear::linear_search;

/// Non-null items with their positions.
fn present<T: AsRef<[u8]>>(items: &[Option<T>]) -> impl Iterator<Item = (usize, &[u8])> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| item.as_ref().map(|item| (index, item.as_ref())))
}

/// Keeps the middle-first probe order of a classic `left <= right` binary
/// search, which decides where duplicate expansion starts.
fn bisect<T>(items: &[T], mut cmp: impl FnMut(&T) -> std::cmp::Ordering) -> Option<usize> {
    use std::cmp::Ordering;

    let mut lo = 0;
    let mut hi = items.len();
    while lo < hi {
        let mid = lo + (hi - 1 - lo) / 2;
        match cmp(&items[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}
