use super::bisect;
use crate::compare::case_insensitive_compare;
use crate::error::Result;
use crate::results::SearchResult;
use std::cmp::Ordering;

/// Exact lookup in items sorted by byte order.
///
/// Result order is: the first equal item the search lands on, then equal
/// predecessors walking backwards, then equal successors walking forwards.
/// `None` entries order before every present item.
pub fn binary_search<T: AsRef<[u8]>>(
    items: &[Option<T>],
    keyword: impl AsRef<[u8]>,
) -> Result<SearchResult> {
    let keyword = keyword.as_ref();
    let mut result = SearchResult::new();

    let is_match = |index: usize| matches!(&items[index], Some(item) if item.as_ref() == keyword);

    let Some(mid) = bisect(items, |item| match item {
        Some(item) => item.as_ref().cmp(keyword),
        None => Ordering::Less,
    }) else {
        return Ok(result);
    };

    result.push(mid)?;
    for index in (0..mid).rev().take_while(|&index| is_match(index)) {
        result.push(index)?;
    }
    for index in (mid + 1..items.len()).take_while(|&index| is_match(index)) {
        result.push(index)?;
    }

    Ok(result)
}

/// Single lookup in items sorted by [`case_insensitive_compare`].
///
/// Returns the first position probed that compares equal, or `None`.
pub fn find_sorted_case_insensitive<T: AsRef<[u8]>>(
    items: &[Option<T>],
    keyword: impl AsRef<[u8]>,
) -> Option<usize> {
    let keyword = keyword.as_ref();
    bisect(items, |item| match item {
        Some(item) => case_insensitive_compare(item.as_ref(), keyword),
        None => Ordering::Less,
    })
}
