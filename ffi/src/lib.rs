//! C ABI over the search engine and the directory scanner.
//!
//! Every pointer returned here is owned by this library and must be handed
//! back to the matching `sift_free_*` function.

use sift_core::{SearchOptions, perform_search};
use sift_search::{Extension, ScanOptions, scan};
use std::ffi::{CStr, CString, c_char};
use std::path::Path;
use std::ptr;

/// Indices of matching items.
///
/// `indices` is null when `count` is zero.
#[repr(C)]
pub struct SiftSearchResult {
    pub indices: *mut usize,
    pub count: usize,
}

impl SiftSearchResult {
    fn into_raw(indices: Vec<usize>) -> *mut Self {
        let count = indices.len();
        let indices = if count == 0 {
            ptr::null_mut()
        } else {
            Box::into_raw(indices.into_boxed_slice()) as *mut usize
        };
        Box::into_raw(Box::new(Self { indices, count }))
    }
}

/// Borrows `count` C strings; null entries become `None`.
///
/// # Safety
/// `strings` must be null or point to `count` pointers, each null or a valid
/// NUL-terminated string outliving the returned slices.
unsafe fn borrow_strings<'a>(strings: *const *const c_char, count: usize) -> Vec<Option<&'a [u8]>> {
    if strings.is_null() || count == 0 {
        return Vec::new();
    }
    let pointers = unsafe { std::slice::from_raw_parts(strings, count) };
    pointers
        .iter()
        .map(|&pointer| {
            (!pointer.is_null()).then(|| unsafe { CStr::from_ptr(pointer) }.to_bytes())
        })
        .collect()
}

/// Searches `items` for `keyword`.
///
/// Returns null when `keyword` is null or the result cannot be allocated.
///
/// # Safety
/// `items` must be null or point to `items_count` pointers, each null or a
/// valid NUL-terminated string. `keyword` must be null or a valid
/// NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sift_perform_search(
    items: *const *const c_char,
    items_count: usize,
    keyword: *const c_char,
    is_sorted: bool,
    use_fuzzy: bool,
    max_distance: usize,
) -> *mut SiftSearchResult {
    if keyword.is_null() {
        return ptr::null_mut();
    }
    let keyword = unsafe { CStr::from_ptr(keyword) }.to_bytes();
    let items = unsafe { borrow_strings(items, items_count) };

    let options = SearchOptions {
        is_sorted,
        use_fuzzy,
        max_distance,
        ..SearchOptions::default()
    };
    match perform_search(&items, keyword, &options) {
        Ok(result) => SiftSearchResult::into_raw(result.into_vec()),
        Err(err) => {
            tracing::warn!(%err, "search failed");
            ptr::null_mut()
        }
    }
}

/// Releases a result from [`sift_perform_search`]. Null is ignored.
///
/// # Safety
/// `result` must be null or a pointer returned by [`sift_perform_search`]
/// that has not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sift_free_search_result(result: *mut SiftSearchResult) {
    if result.is_null() {
        return;
    }
    let result = unsafe { Box::from_raw(result) };
    if !result.indices.is_null() {
        let indices = ptr::slice_from_raw_parts_mut(result.indices, result.count);
        drop(unsafe { Box::from_raw(indices) });
    }
}

/// Lists files under `root` down to `max_depth`, keeping only the given
/// extensions when `extension_count` is non-zero.
///
/// Writes the number of paths to `out_count` and returns them, or null when
/// there are none. Extensions that are null, empty or not UTF-8 are skipped.
///
/// # Safety
/// `root` must be null or a valid NUL-terminated string. `extensions` must
/// be null or point to `extension_count` pointers, each null or a valid
/// NUL-terminated string. `out_count` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sift_scan_directory(
    root: *const c_char,
    max_depth: usize,
    extensions: *const *const c_char,
    extension_count: usize,
    out_count: *mut usize,
) -> *mut *mut c_char {
    if out_count.is_null() {
        return ptr::null_mut();
    }
    unsafe { *out_count = 0 };
    if root.is_null() {
        return ptr::null_mut();
    }

    let Ok(root) = unsafe { CStr::from_ptr(root) }.to_str() else {
        tracing::debug!("scan root is not valid UTF-8");
        return ptr::null_mut();
    };
    let extensions = unsafe { borrow_strings(extensions, extension_count) }
        .into_iter()
        .flatten()
        .filter_map(|bytes| {
            let text = std::str::from_utf8(bytes).ok()?;
            Extension::try_new(text.to_string()).ok()
        })
        .collect();

    let options = ScanOptions {
        max_depth,
        extensions,
    };
    let files: Box<[*mut c_char]> = scan(Path::new(root), &options)
        .into_iter()
        .filter_map(|file| CString::new(file).ok())
        .map(CString::into_raw)
        .collect();

    if files.is_empty() {
        return ptr::null_mut();
    }
    unsafe { *out_count = files.len() };
    Box::into_raw(files) as *mut *mut c_char
}

/// Releases paths from [`sift_scan_directory`]. Null is ignored.
///
/// # Safety
/// `files` must be null or a pointer returned by [`sift_scan_directory`]
/// together with the count it reported, not freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sift_free_scan_result(files: *mut *mut c_char, count: usize) {
    if files.is_null() {
        return;
    }
    let files = unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(files, count)) };
    for &file in files.iter() {
        if !file.is_null() {
            drop(unsafe { CString::from_raw(file) });
        }
    }
}
