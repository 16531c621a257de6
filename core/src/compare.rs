//! Character and string comparison primitives.
//!
//! Case folding is ASCII-only. Non-ASCII characters are compared by their
//! exact byte sequence, and never equal an ASCII character.

use crate::utf8::{Utf8Chars, char_len, is_ascii};
use std::cmp::Ordering;

/// Maps `A`..=`Z` to `a`..=`z`; every other byte passes through unchanged.
#[inline]
pub fn fold(byte: u8) -> u8 {
    byte.to_ascii_lowercase()
}

/// Compares two character spans as produced by [`Utf8Chars`].
pub fn char_equal(a: &[u8], b: &[u8]) -> bool {
    match (a, b) {
        ([x], [y]) if is_ascii(*x) && is_ascii(*y) => fold(*x) == fold(*y),
        ([x, ..], [y, ..]) if !is_ascii(*x) && !is_ascii(*y) => {
            char_len(*x) == char_len(*y) && a == b
        }
        _ => false,
    }
}

fn compare_char(a: &[u8], b: &[u8]) -> Ordering {
    match (a, b) {
        ([x, ..], [y, ..]) => match (is_ascii(*x), is_ascii(*y)) {
            (true, true) => fold(*x).cmp(&fold(*y)),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => a.cmp(b),
        },
        _ => a.len().cmp(&b.len()),
    }
}

/// Lexicographic ordering that ignores ASCII case.
///
/// Any non-ASCII character orders after any ASCII character. When one string
/// is a prefix of the other, the shorter one orders first.
pub fn case_insensitive_compare(s1: &[u8], s2: &[u8]) -> Ordering {
    let mut left = Utf8Chars::new(s1);
    let mut right = Utf8Chars::new(s2);

    loop {
        match (left.next(), right.next()) {
            (Some(a), Some(b)) => match compare_char(a, b) {
                Ordering::Equal => {}
                unequal => return unequal,
            },
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
        }
    }
}

fn starts_with_chars(haystack: &[u8], needle: &[u8]) -> bool {
    let mut hay = Utf8Chars::new(haystack);
    Utf8Chars::new(needle).all(|n| hay.next().is_some_and(|h| char_equal(h, n)))
}

/// Byte offset of the first character position in `haystack` where `needle`
/// matches under [`char_equal`].
///
/// An empty needle is found at offset 0, even in an empty haystack.
pub fn case_insensitive_contains(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    let mut cursor = Utf8Chars::new(haystack);
    loop {
        let rest = cursor.as_bytes();
        if rest.is_empty() {
            return None;
        }
        if starts_with_chars(rest, needle) {
            return Some(cursor.offset());
        }
        cursor.next();
    }
}

/// Byte-exact, case-sensitive substring test.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}
