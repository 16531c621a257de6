//! File search on top of the sift engine.
//!
//! Scans directories into path lists and runs [`sift_core::perform_search`]
//! over them.
//!
//! # Design
//!
//! - [`scan`] walks a directory tree to a bounded depth, optionally keeping
//!   only some extensions.
//! - [`FileIndex`] caches scanned paths and remembers results per query.
//!   Both can be persisted under a data directory: paths as postcard binary,
//!   results as JSON.
//! - [`SiftConfig`] is the TOML configuration shared by the front ends.

mod cache;
mod config;
mod extension;
mod index;
mod query;
mod scanner;

pub use cache::{CacheError, CachedFiles, SearchHistory};
pub use config::{ConfigError, GeneralConfig, SiftConfig, StorageConfig};
pub use extension::{Extension, is_allowed};
pub use index::FileIndex;
pub use query::FileQuery;
pub use scanner::{ScanOptions, scan};
