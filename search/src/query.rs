//! File search query types.

use crate::scanner::ScanOptions;
use sift_core::SearchOptions;
use std::path::PathBuf;

/// A file search request.
///
/// Together with the scan options it runs with, also the key under which
/// its results are remembered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileQuery {
    /// Directory to scan for this query; `None` searches the path cache.
    pub directory: Option<PathBuf>,
    pub keyword: String,
    pub options: SearchOptions,
}

impl FileQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            directory: None,
            keyword: keyword.into(),
            options: SearchOptions::default(),
        }
    }

    pub fn in_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Identifies the results of this query when run with `scan`.
    ///
    /// Everything that can change the result is part of the key: directory,
    /// keyword, mode, distance, fuzzy tuning, depth and extension filter.
    pub(crate) fn history_key(&self, scan: &ScanOptions) -> String {
        let directory = self
            .directory
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();
        let mode = if self.options.use_fuzzy {
            "fuzzy"
        } else if self.options.is_sorted {
            "sorted"
        } else {
            "linear"
        };
        let tuning = &self.options.tuning;
        let mut extensions: Vec<String> = scan
            .extensions
            .iter()
            .map(|ext| ext.to_ascii_lowercase())
            .collect();
        extensions.sort();
        extensions.dedup();

        format!(
            "{:?}|{:?}|{}|{}|{},{},{},{},{}|{}|{:?}",
            directory,
            self.keyword,
            mode,
            self.options.max_distance,
            tuning.long_keyword_bytes,
            tuning.long_keyword_divisor,
            tuning.prefilter_keyword_bytes,
            tuning.prefilter_divisor,
            tuning.wide_char_bytes,
            scan.max_depth,
            extensions,
        )
    }
}
