use std::collections::TryReserveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Search error type.
///
/// Matching itself cannot fail; the only failure is running out of memory
/// while growing a result set.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("result allocation failed: {0}")]
    ResourceExhausted(#[from] TryReserveError),
}
