//! On-disk persistence for scanned paths and remembered search results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::SystemTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] postcard::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn write_creating_parent(path: &Path, bytes: &[u8]) -> Result<(), CacheError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Snapshot of a scan, stored as postcard binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedFiles {
    pub saved_at: SystemTime,
    pub files: Vec<String>,
}

impl CachedFiles {
    pub fn new(files: Vec<String>) -> Self {
        Self {
            saved_at: SystemTime::now(),
            files,
        }
    }

    /// Returns `None` if there is no cache file yet.
    pub fn load(path: &Path) -> Result<Option<Self>, CacheError> {
        if !path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(path)?;
        Ok(Some(postcard::from_bytes(&bytes)?))
    }

    pub fn save(&self, path: &Path) -> Result<(), CacheError> {
        let bytes = postcard::to_allocvec(self)?;
        write_creating_parent(path, &bytes)
    }
}

/// Results of earlier file searches, keyed by the query that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory {
    entries: BTreeMap<String, Vec<String>>,
}

impl SearchHistory {
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn insert(&mut self, key: String, paths: Vec<String>) {
        self.entries.insert(key, paths);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an empty history if there is no history file yet.
    pub fn load(path: &Path) -> Result<Self, CacheError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), CacheError> {
        let content = serde_json::to_string_pretty(self)?;
        write_creating_parent(path, content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    mod cached_files {
        use super::*;

        #[test]
        fn test_load_missing_returns_none() {
            let temp = tempdir().unwrap();
            assert!(CachedFiles::load(&temp.path().join("cache.bin")).unwrap().is_none());
        }

        #[test]
        fn test_save_creates_parent_and_loads_back() {
            let temp = tempdir().unwrap();
            let path = temp.path().join("nested/dir/cache.bin");
            let cache = CachedFiles::new(vec!["/a/报告.pdf".to_string(), "/b/notes.md".to_string()]);

            cache.save(&path).unwrap();
            assert_eq!(CachedFiles::load(&path).unwrap(), Some(cache));
        }

        #[test]
        fn test_corrupt_file_is_an_error() {
            let temp = tempdir().unwrap();
            let path = temp.path().join("cache.bin");
            std::fs::write(&path, [0xFF; 3]).unwrap();
            assert!(matches!(CachedFiles::load(&path), Err(CacheError::Encoding(_))));
        }
    }

    mod search_history {
        use super::*;

        #[test]
        fn test_insert_and_get() {
            let mut history = SearchHistory::default();
            assert!(history.get("k").is_none());

            history.insert("k".to_string(), vec!["/x".to_string()]);
            assert_eq!(history.get("k"), Some(&["/x".to_string()][..]));
            assert_eq!(history.len(), 1);

            history.clear();
            assert!(history.is_empty());
        }

        #[test]
        fn test_saved_as_plain_json_object() {
            let temp = tempdir().unwrap();
            let path = temp.path().join("history.json");
            let mut history = SearchHistory::default();
            history.insert("报告".to_string(), vec!["/docs/报告.pdf".to_string()]);

            history.save(&path).unwrap();
            let raw: serde_json::Value =
                serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(raw["报告"][0], "/docs/报告.pdf");
            assert_eq!(SearchHistory::load(&path).unwrap(), history);
        }

        #[test]
        fn test_load_missing_is_empty() {
            let temp = tempdir().unwrap();
            assert!(SearchHistory::load(&temp.path().join("h.json")).unwrap().is_empty());
        }
    }
}
