use crate::error::Result;
use crate::options::SearchOptions;
use crate::results::SearchResult;
use crate::strategy::{binary_search, fuzzy_search, linear_search};

/// Runs the strategy selected by `options`.
///
/// 1. `use_fuzzy`: fuzzy search, with the distance rescaled for long keywords.
/// 2. `is_sorted`: binary exact search.
/// 3. otherwise: linear containment search.
pub fn perform_search<T: AsRef<[u8]>>(
    items: &[Option<T>],
    keyword: impl AsRef<[u8]>,
    options: &SearchOptions,
) -> Result<SearchResult> {
    let keyword = keyword.as_ref();

    let result = if options.use_fuzzy {
        let max_distance = options
            .tuning
            .adjusted_distance(keyword.len(), options.max_distance);
        tracing::debug!(
            items = items.len(),
            keyword_len = keyword.len(),
            max_distance,
            "fuzzy search"
        );
        fuzzy_search(items, keyword, max_distance, &options.tuning)?
    } else if options.is_sorted {
        tracing::debug!(items = items.len(), "binary search");
        binary_search(items, keyword)?
    } else {
        tracing::debug!(items = items.len(), "linear search");
        linear_search(items, keyword)?
    };

    tracing::trace!(matches = result.len(), "search finished");
    Ok(result)
}
