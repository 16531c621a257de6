//! Path cache with remembered search results.

use crate::cache::{CachedFiles, SearchHistory};
use crate::config::StorageConfig;
use crate::query::FileQuery;
use crate::scanner::{ScanOptions, scan};
use sift_core::{SearchOptions, SearchResult, perform_search};
use std::path::{Path, PathBuf};

/// Where an index persists its state.
#[derive(Debug, Clone)]
struct Store {
    cache_path: PathBuf,
    history_path: PathBuf,
}

/// Scanned file paths plus a memo of earlier file searches.
///
/// Searching without a directory uses the cached paths. The cache is filled
/// from `default_root` on first use, and rescanned once when a search over it
/// finds nothing. Replacing the cache forgets every remembered result.
pub struct FileIndex {
    files: Vec<String>,
    history: SearchHistory,
    default_root: PathBuf,
    store: Option<Store>,
}

/// Create operations.
impl FileIndex {
    /// An index that never touches the disk except to scan.
    pub fn in_memory(default_root: impl Into<PathBuf>) -> Self {
        Self {
            files: Vec::new(),
            history: SearchHistory::default(),
            default_root: default_root.into(),
            store: None,
        }
    }

    /// Loads cached paths and history from `storage`.
    ///
    /// Unreadable or corrupt files are logged and treated as empty.
    pub fn open(storage: &StorageConfig, default_root: impl Into<PathBuf>) -> Self {
        if !storage.persist {
            return Self::in_memory(default_root);
        }

        let store = Store {
            cache_path: storage.cache_path(),
            history_path: storage.history_path(),
        };

        let files = match CachedFiles::load(&store.cache_path) {
            Ok(Some(cached)) => {
                tracing::info!(
                    files = cached.files.len(),
                    saved_at = ?cached.saved_at,
                    "loaded path cache"
                );
                cached.files
            }
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(path = %store.cache_path.display(), %err, "failed to load path cache");
                Vec::new()
            }
        };

        let history = match SearchHistory::load(&store.history_path) {
            Ok(history) => {
                tracing::info!(entries = history.len(), "loaded search history");
                history
            }
            Err(err) => {
                tracing::warn!(path = %store.history_path.display(), %err, "failed to load search history");
                SearchHistory::default()
            }
        };

        Self {
            files,
            history,
            default_root: default_root.into(),
            store: Some(store),
        }
    }
}

/// Cache operations.
impl FileIndex {
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Replaces the cache with a scan of `root`.
    pub fn scan(&mut self, root: &Path, options: &ScanOptions) -> &[String] {
        let files = scan(root, options);
        self.replace_files(files);
        &self.files
    }

    /// Replaces the cache with a scan of every root and persists it.
    ///
    /// Returns the number of cached paths.
    pub fn prescan(&mut self, roots: &[PathBuf], options: &ScanOptions) -> usize {
        let mut files = Vec::new();
        for root in roots {
            tracing::info!(root = %root.display(), "prescanning");
            files.extend(scan(root, options));
        }
        self.replace_files(files);
        self.persist_files();
        tracing::info!(files = self.files.len(), "prescan finished");
        self.files.len()
    }

    fn replace_files(&mut self, files: Vec<String>) {
        self.files = files;
        self.history.clear();
    }

    fn persist_files(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = CachedFiles::new(self.files.clone()).save(&store.cache_path) {
            tracing::warn!(path = %store.cache_path.display(), %err, "failed to save path cache");
        }
    }

    fn persist_history(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = self.history.save(&store.history_path) {
            tracing::warn!(path = %store.history_path.display(), %err, "failed to save search history");
        }
    }
}

/// Search operations.
impl FileIndex {
    /// Paths matching `query`.
    ///
    /// An empty keyword matches nothing. Results are remembered per query
    /// until the cache is replaced.
    pub fn search_files(
        &mut self,
        query: &FileQuery,
        scan_options: &ScanOptions,
    ) -> sift_core::Result<Vec<String>> {
        if query.keyword.is_empty() {
            return Ok(Vec::new());
        }

        let key = query.history_key(scan_options);
        if let Some(paths) = self.history.get(&key) {
            tracing::debug!(keyword = %query.keyword, "using remembered results");
            return Ok(paths.to_vec());
        }

        let paths = match &query.directory {
            Some(directory) => {
                let files = scan(directory, scan_options);
                matching_paths(&files, &query.keyword, &query.options)?
            }
            None => self.search_cache(query, scan_options)?,
        };

        tracing::info!(keyword = %query.keyword, matches = paths.len(), "file search finished");
        self.history.insert(key, paths.clone());
        self.persist_history();
        Ok(paths)
    }

    fn search_cache(
        &mut self,
        query: &FileQuery,
        scan_options: &ScanOptions,
    ) -> sift_core::Result<Vec<String>> {
        let mut fresh = false;
        if self.files.is_empty() {
            tracing::info!(root = %self.default_root.display(), "path cache empty, scanning");
            self.replace_files(scan(&self.default_root, scan_options));
            self.persist_files();
            fresh = true;
        }

        let paths = matching_paths(&self.files, &query.keyword, &query.options)?;
        if !paths.is_empty() || fresh {
            return Ok(paths);
        }

        tracing::info!(root = %self.default_root.display(), "no match in path cache, rescanning");
        self.replace_files(scan(&self.default_root, scan_options));
        self.persist_files();
        matching_paths(&self.files, &query.keyword, &query.options)
    }
}

/// Runs the engine over `files` and maps positions back to paths.
///
/// Sorted mode sorts a view of the paths first, since scan order is only
/// sorted within each directory.
fn matching_paths(
    files: &[String],
    keyword: &str,
    options: &SearchOptions,
) -> sift_core::Result<Vec<String>> {
    let mut items: Vec<Option<&str>> = files.iter().map(|file| Some(file.as_str())).collect();
    if options.is_sorted && !options.use_fuzzy {
        items.sort_unstable();
    }

    let result: SearchResult = perform_search(&items, keyword, options)?;
    Ok(result.matched(&items).map(|path| path.to_string()).collect())
}

