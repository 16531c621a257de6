use crate::utf8::{char_count, char_len};
use serde::{Deserialize, Serialize};

/// Selects and parameterizes a search strategy.
///
/// `is_sorted` is ignored when `use_fuzzy` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub is_sorted: bool,
    pub use_fuzzy: bool,
    pub max_distance: usize,
    pub tuning: FuzzyTuning,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            is_sorted: false,
            use_fuzzy: false,
            max_distance: 2,
            tuning: FuzzyTuning::default(),
        }
    }
}

impl SearchOptions {
    pub fn linear() -> Self {
        Self::default()
    }

    pub fn sorted() -> Self {
        Self {
            is_sorted: true,
            ..Self::default()
        }
    }

    pub fn fuzzy(max_distance: usize) -> Self {
        Self {
            use_fuzzy: true,
            max_distance,
            ..Self::default()
        }
    }
}

/// Length heuristics for fuzzy search.
///
/// The defaults are empirically tuned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyTuning {
    /// Keywords longer than this many bytes get an adaptive distance.
    pub long_keyword_bytes: usize,
    /// Adaptive distance is `keyword_len / long_keyword_divisor`.
    pub long_keyword_divisor: usize,
    /// Keywords longer than this many bytes get a wider length prefilter.
    pub prefilter_keyword_bytes: usize,
    /// Wider prefilter allows a gap of `keyword_len / prefilter_divisor`.
    pub prefilter_divisor: usize,
    /// A keyword made of one character of this encoded width is matched by
    /// containment instead of edit distance. Zero disables the rule.
    pub wide_char_bytes: usize,
}

impl Default for FuzzyTuning {
    fn default() -> Self {
        Self {
            long_keyword_bytes: 10,
            long_keyword_divisor: 3,
            prefilter_keyword_bytes: 5,
            prefilter_divisor: 2,
            wide_char_bytes: 3,
        }
    }
}

impl FuzzyTuning {
    /// Distance actually used for a keyword of `keyword_len` bytes.
    ///
    /// Long keywords replace the caller's distance with
    /// `keyword_len / long_keyword_divisor`, which may be smaller.
    pub fn adjusted_distance(&self, keyword_len: usize, max_distance: usize) -> usize {
        if keyword_len <= self.long_keyword_bytes {
            return max_distance;
        }
        keyword_len
            .checked_div(self.long_keyword_divisor)
            .unwrap_or(max_distance)
    }

    /// Largest byte-length difference between item and keyword that is still
    /// worth an edit-distance computation.
    pub fn max_length_gap(&self, keyword_len: usize, max_distance: usize) -> usize {
        if keyword_len <= self.prefilter_keyword_bytes {
            return max_distance;
        }
        keyword_len
            .checked_div(self.prefilter_divisor)
            .map_or(max_distance, |scaled| scaled.max(max_distance))
    }

    /// True when `keyword` is exactly one character of `wide_char_bytes` bytes.
    pub fn is_wide_char_keyword(&self, keyword: &[u8]) -> bool {
        match keyword.first() {
            Some(&lead) => {
                self.wide_char_bytes != 0
                    && keyword.len() == self.wide_char_bytes
                    && char_len(lead) == self.wide_char_bytes
                    && char_count(keyword) == 1
            }
            None => false,
        }
    }
}
