use sift_core::{SearchOptions, perform_search};

fn items(values: &[&'static str]) -> Vec<Option<&'static str>> {
    values.iter().copied().map(Some).collect()
}

fn search(list: &[Option<&str>], keyword: &str, options: SearchOptions) -> Vec<usize> {
    perform_search(list, keyword, &options).unwrap().into_vec()
}

/// Unsorted, non-fuzzy input goes through case-sensitive containment.
#[test]
fn test_default_options_use_linear_containment() {
    let list = items(&["Apple", "banana", "APPLE pie"]);
    assert_eq!(search(&list, "Apple", SearchOptions::linear()), vec![0]);
}

/// Sorted input goes through exact binary lookup, not containment.
#[test]
fn test_sorted_options_use_binary_search() {
    let list = items(&["apple", "banana", "grape", "orange", "pear"]);
    assert_eq!(search(&list, "orange", SearchOptions::sorted()), vec![3]);
    assert!(search(&list, "kiwi", SearchOptions::sorted()).is_empty());
    // "ora" is a substring but not an exact match.
    assert!(search(&list, "ora", SearchOptions::sorted()).is_empty());
}

#[test]
fn test_sorted_duplicates_are_all_returned() {
    let list = items(&["a", "b", "b", "b", "c"]);
    let mut result = search(&list, "b", SearchOptions::sorted());
    assert_eq!(result.len(), 3);
    result.sort_unstable();
    assert_eq!(result, vec![1, 2, 3]);
}

/// Fuzzy wins over sorted when both are set.
#[test]
fn test_fuzzy_ignores_sorted_flag() {
    let list = items(&["apple", "apply", "grape"]);
    let options = SearchOptions {
        is_sorted: true,
        ..SearchOptions::fuzzy(1)
    };
    assert_eq!(search(&list, "appla", options), vec![0, 1]);
}

#[test]
fn test_fuzzy_single_cjk_char_ignores_distance() {
    let list = items(&["文档", "照片", "我的文件"]);
    assert_eq!(search(&list, "文", SearchOptions::fuzzy(0)), vec![0, 2]);
    assert_eq!(search(&list, "文", SearchOptions::fuzzy(9)), vec![0, 2]);
}

/// Keywords over ten bytes get `len / 3` as their distance.
#[test]
fn test_long_keyword_raises_distance() {
    let list = items(&["quarterly-report", "quarterly-rpt", "annual-report"]);
    // 16-byte keyword -> distance 5. "quarterly-rpt" is 3 deletions away.
    let result = search(&list, "quarterly-report", SearchOptions::fuzzy(0));
    assert_eq!(result, vec![0, 1]);
}

/// The scaled distance applies even when the caller asked for more.
#[test]
fn test_long_keyword_caps_larger_distance() {
    let list = items(&["abcdefghijkl", "abcdefzzzzzl"]);
    // 12-byte keyword -> distance 4; the second item is 5 edits away.
    assert_eq!(search(&list, "abcdefghijkl", SearchOptions::fuzzy(6)), vec![0]);
}

#[test]
fn test_short_keyword_keeps_caller_distance() {
    let list = items(&["report", "reprot", "rapport"]);
    assert_eq!(search(&list, "report", SearchOptions::fuzzy(0)), vec![0]);
    assert_eq!(search(&list, "report", SearchOptions::fuzzy(2)), vec![0, 1, 2]);
}

#[test]
fn test_empty_keyword() {
    let list = items(&["apple", "banana"]);
    assert_eq!(search(&list, "", SearchOptions::linear()), vec![0, 1]);
    assert!(search(&list, "", SearchOptions::sorted()).is_empty());
}

#[test]
fn test_empty_list_for_every_strategy() {
    let list: Vec<Option<&str>> = Vec::new();
    for options in [
        SearchOptions::linear(),
        SearchOptions::sorted(),
        SearchOptions::fuzzy(2),
    ] {
        assert!(search(&list, "x", options).is_empty());
    }
}

#[test]
fn test_owned_and_byte_items() {
    let owned: Vec<Option<String>> = vec![Some("Notes.md".into()), None, Some("notes.mdx".into())];
    let result = perform_search(&owned, "notes.md", &SearchOptions::fuzzy(1)).unwrap();
    assert_eq!(result.as_slice(), &[0, 2]);

    let bytes: Vec<Option<Vec<u8>>> = vec![Some(b"abc".to_vec()), Some(vec![0xFF, 0xFE])];
    let result = perform_search(&bytes, [0xFFu8], &SearchOptions::linear()).unwrap();
    assert_eq!(result.as_slice(), &[1]);
}
