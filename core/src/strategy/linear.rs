use super::present;
use crate::compare::contains;
use crate::error::Result;
use crate::results::SearchResult;

/// Positions of items containing `keyword`, in item order.
///
/// Containment here is byte-exact and case-sensitive, unlike the
/// case-insensitive comparison used elsewhere. Callers depend on that.
pub fn linear_search<T: AsRef<[u8]>>(
    items: &[Option<T>],
    keyword: impl AsRef<[u8]>,
) -> Result<SearchResult> {
    let keyword = keyword.as_ref();
    let mut result = SearchResult::new();

    for (index, item) in present(items) {
        if contains(item, keyword) {
            result.push(index)?;
        }
    }

    Ok(result)
}
