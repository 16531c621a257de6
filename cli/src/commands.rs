use crate::{FilterArgs, ModeArgs};
use anyhow::{Context, Result, ensure};
use sift_core::{SearchOptions, edit_distance, perform_search};
use sift_search::{Extension, FileIndex, FileQuery, ScanOptions, SiftConfig};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Config scan settings with command line overrides applied.
pub(crate) fn scan_options(config: &SiftConfig, filter: &FilterArgs) -> Result<ScanOptions> {
    let mut options = config.scan.clone();
    if let Some(depth) = filter.depth {
        options.max_depth = depth;
    }
    if !filter.extensions.is_empty() {
        options.extensions = filter
            .extensions
            .iter()
            .map(|ext| {
                Extension::try_new(ext.clone())
                    .with_context(|| format!("invalid extension {ext:?}"))
            })
            .collect::<Result<_>>()?;
    }
    Ok(options)
}

/// Config search settings with command line overrides applied.
pub(crate) fn search_options(config: &SiftConfig, mode: &ModeArgs) -> SearchOptions {
    let mut options = config.search;
    if mode.fuzzy {
        options.use_fuzzy = true;
        options.is_sorted = false;
    }
    if mode.sorted {
        options.is_sorted = true;
        options.use_fuzzy = false;
    }
    if let Some(max_distance) = mode.max_distance {
        options.max_distance = max_distance;
    }
    options
}

pub(crate) fn scan(
    out: &mut impl Write,
    config: &SiftConfig,
    roots: &[PathBuf],
    save: bool,
    filter: &FilterArgs,
) -> Result<()> {
    let options = scan_options(config, filter)?;
    ensure!(
        !save || config.storage.persist,
        "--save needs storage.persist = true in the config"
    );

    if save {
        let mut index = FileIndex::open(&config.storage, &config.general.default_root);
        index.prescan(roots, &options);
        for file in index.files() {
            writeln!(out, "{file}")?;
        }
        return Ok(());
    }

    for root in roots {
        for file in sift_search::scan(root, &options) {
            writeln!(out, "{file}")?;
        }
    }
    Ok(())
}

pub(crate) fn find(
    out: &mut impl Write,
    config: &SiftConfig,
    keyword: String,
    dir: Option<PathBuf>,
    mode: &ModeArgs,
    filter: &FilterArgs,
) -> Result<()> {
    let scan_options = scan_options(config, filter)?;
    let mut query = FileQuery::new(keyword).with_options(search_options(config, mode));
    if let Some(dir) = dir {
        query = query.in_directory(dir);
    }

    let mut index = FileIndex::open(&config.storage, &config.general.default_root);
    for path in index.search_files(&query, &scan_options)? {
        writeln!(out, "{path}")?;
    }
    Ok(())
}

pub(crate) fn grep(
    out: &mut impl Write,
    config: &SiftConfig,
    keyword: &str,
    file: Option<&Path>,
    mode: &ModeArgs,
) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };

    for (line_number, line) in matching_lines(reader, keyword, &search_options(config, mode))? {
        writeln!(out, "{line_number}:{line}")?;
    }
    Ok(())
}

/// Lines of `reader` that match `keyword`, numbered from 1, in file order.
///
/// Lines are compared as raw bytes; invalid UTF-8 is replaced only for output.
/// Sorted mode searches a sorted view of the lines, so the file itself need
/// not be sorted.
pub(crate) fn matching_lines(
    reader: impl BufRead,
    keyword: &str,
    options: &SearchOptions,
) -> Result<Vec<(usize, String)>> {
    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line.context("failed to read input")?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(line);
    }

    // Position in the searched view -> line index.
    let mut order: Vec<usize> = (0..lines.len()).collect();
    if options.is_sorted && !options.use_fuzzy {
        order.sort_by(|&a, &b| lines[a].cmp(&lines[b]));
    }
    let view: Vec<Option<&[u8]>> = order
        .iter()
        .map(|&index| Some(lines[index].as_slice()))
        .collect();

    let mut indices: Vec<usize> = perform_search(&view, keyword, options)?
        .iter()
        .filter_map(|position| order.get(position).copied())
        .collect();
    indices.sort_unstable();
    Ok(indices
        .into_iter()
        .map(|index| (index + 1, String::from_utf8_lossy(&lines[index]).into_owned()))
        .collect())
}

pub(crate) fn distance(out: &mut impl Write, a: &str, b: &str) -> Result<()> {
    writeln!(out, "{}", edit_distance(a.as_bytes(), b.as_bytes()))?;
    Ok(())
}
