//! Levenshtein distance over raw bytes.
//!
//! Multi-byte characters are compared byte-for-byte, not per character, so
//! one differing CJK character counts as up to three edits. ASCII bytes are
//! compared after case folding.

use crate::compare::fold;

/// Substitution cost for a pair of bytes.
#[inline]
fn substitution_cost(a: u8, b: u8) -> usize {
    if a == b || fold(a) == fold(b) { 0 } else { 1 }
}

/// Reusable rolling-row buffers for repeated distance computations.
///
/// Fuzzy search computes one distance per candidate item; keeping the rows
/// here avoids two allocations per item.
#[derive(Debug, Default, Clone)]
pub struct EditDistance {
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl EditDistance {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, columns: usize) {
        self.prev.clear();
        self.prev.extend(0..=columns);
        self.curr.clear();
        self.curr.resize(columns + 1, 0);
    }

    /// Full edit distance between `s1` and `s2`.
    pub fn distance(&mut self, s1: &[u8], s2: &[u8]) -> usize {
        if s1.is_empty() {
            return s2.len();
        }
        if s2.is_empty() {
            return s1.len();
        }

        self.reset(s2.len());
        for (i, &a) in s1.iter().enumerate() {
            self.fill_row(i, a, s2);
            std::mem::swap(&mut self.prev, &mut self.curr);
        }

        self.prev[s2.len()]
    }

    /// Edit distance if it is at most `max_distance`, otherwise `None`.
    ///
    /// Stops as soon as every cell of a row exceeds `max_distance`; row minima
    /// never decrease, so the final distance cannot come back under the limit.
    pub fn within(&mut self, s1: &[u8], s2: &[u8], max_distance: usize) -> Option<usize> {
        if s1.len().abs_diff(s2.len()) > max_distance {
            return None;
        }
        if s1.is_empty() || s2.is_empty() {
            return Some(s1.len().max(s2.len()));
        }

        self.reset(s2.len());
        for (i, &a) in s1.iter().enumerate() {
            let row_min = self.fill_row(i, a, s2);
            std::mem::swap(&mut self.prev, &mut self.curr);
            if row_min > max_distance {
                return None;
            }
        }

        let distance = self.prev[s2.len()];
        (distance <= max_distance).then_some(distance)
    }

    /// Fills `curr` as row `i + 1` from `prev`; returns the row minimum.
    #[inline]
    fn fill_row(&mut self, i: usize, a: u8, s2: &[u8]) -> usize {
        self.curr[0] = i + 1;
        let mut row_min = self.curr[0];

        for (j, &b) in s2.iter().enumerate() {
            let insertion = self.curr[j] + 1;
            let deletion = self.prev[j + 1] + 1;
            let substitution = self.prev[j] + substitution_cost(a, b);

            let cell = insertion.min(deletion).min(substitution);
            self.curr[j + 1] = cell;
            row_min = row_min.min(cell);
        }

        row_min
    }
}

/// Edit distance between two byte strings.
pub fn edit_distance(s1: &[u8], s2: &[u8]) -> usize {
    EditDistance::new().distance(s1, s2)
}
