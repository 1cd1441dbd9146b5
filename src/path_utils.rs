//! Cross-platform path utilities for fib
//!
//! Exclusion rules and provenance notes work on `/`-separated strings so the
//! same patterns behave identically on every platform.

use std::path::Path;

/// Convert a path to a string with forward slashes.
///
/// # Examples
///
/// ```ignore
/// let forward = to_forward_slashes(Path::new("C:\\Users\\file.txt"));
/// assert_eq!(forward, "C:/Users/file.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Directory portion of a relative path, forward-slashed; empty at the root
pub fn parent_dir_string(relative: &Path) -> String {
    relative
        .parent()
        .map(to_forward_slashes)
        .unwrap_or_default()
}

/// Final component of a path, lossily converted
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Extension with its leading dot (`"src/a.py"` -> `".py"`), if any
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}
