use super::present;
use crate::distance::EditDistance;
use crate::error::Result;
use crate::options::FuzzyTuning;
use crate::results::SearchResult;
use crate::strategy::linear_search;

/// Positions of items within `max_distance` edits of `keyword`, in item order.
///
/// A keyword of a single wide (CJK-range) character is matched by containment
/// instead, since one character's edit distance says little. Other keywords
/// first pass a cheap length-gap filter before the distance is computed.
pub fn fuzzy_search<T: AsRef<[u8]>>(
    items: &[Option<T>],
    keyword: impl AsRef<[u8]>,
    max_distance: usize,
    tuning: &FuzzyTuning,
) -> Result<SearchResult> {
    let keyword = keyword.as_ref();
    if tuning.is_wide_char_keyword(keyword) {
        return linear_search(items, keyword);
    }

    let max_gap = tuning.max_length_gap(keyword.len(), max_distance);
    let mut rows = EditDistance::new();
    let mut result = SearchResult::new();

    for (index, item) in present(items) {
        if item.len().abs_diff(keyword.len()) > max_gap {
            continue;
        }
        if rows.within(item, keyword, max_distance).is_some() {
            result.push(index)?;
        }
    }

    Ok(result)
}
