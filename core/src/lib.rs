//! sift matching engine.
//!
//! Searches an in-memory list of byte strings for a keyword using one of
//! three strategies:
//!
//! - linear containment (case-sensitive substring),
//! - binary exact lookup over sorted items, expanding runs of duplicates,
//! - fuzzy matching by byte-level edit distance, ASCII case folded.
//!
//! Items are `Option<T>` with `T: AsRef<[u8]>`; `None` entries are never
//! returned. Malformed UTF-8 is walked byte by byte instead of rejected.
//!
//! [`perform_search`] picks the strategy from [`SearchOptions`].

pub mod compare;
mod dispatch;
pub mod distance;
pub mod error;
mod options;
mod results;
pub mod strategy;
pub mod utf8;

pub use compare::{case_insensitive_compare, case_insensitive_contains, char_equal, fold};
pub use dispatch::perform_search;
pub use distance::{EditDistance, edit_distance};
pub use error::{Result, SearchError};
pub use options::{FuzzyTuning, SearchOptions};
pub use results::SearchResult;
