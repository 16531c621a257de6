//! Directory enumeration feeding the engine its item list.

use crate::extension::{Extension, is_allowed};
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How deep to walk and which files to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Files directly in the root are level 0; files of a subdirectory at
    /// level `d` are kept while `d <= max_depth`.
    pub max_depth: usize,
    /// Empty means every file.
    pub extensions: Vec<Extension>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: 2,
            extensions: Vec::new(),
        }
    }
}

impl ScanOptions {
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

/// Lists file paths under `root`.
///
/// Hidden files are included and ignore files are not consulted. Missing or
/// unreadable directories contribute nothing. Entries within a directory are
/// visited in file-name order.
pub fn scan(root: &Path, options: &ScanOptions) -> Vec<String> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(options.max_depth.saturating_add(1)))
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(root = %root.display(), %err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }
        let is_file = match entry.file_type() {
            Some(file_type) if file_type.is_symlink() => entry.path().is_file(),
            Some(file_type) => file_type.is_file(),
            None => false,
        };
        if !is_file {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if is_allowed(&name, &options.extensions) {
            files.push(entry.path().to_string_lossy().into_owned());
        }
    }

    tracing::debug!(root = %root.display(), files = files.len(), "scan finished");
    files
}

#[cfg(test)]
mod tests;
