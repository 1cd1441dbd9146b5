//! Path exclusion rules
//!
//! Two independent filters decide whether a file is skipped:
//! - directory substrings, tested (case-insensitively) against the directory
//!   portion of the file's path relative to the source root
//! - wildcard patterns, anchored against the whole relative path
//!
//! Paths are forward-slashed before testing, so the defaults below work on
//! every platform.

use std::path::Path;

use super::glob::WildcardPattern;
use crate::path_utils;

/// Directory substrings that are always skipped
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "bin",
    "obj",
    ".git",
    ".angular/cache",
    "Migrations",
    "debug",
];

/// File patterns that are always skipped
pub const DEFAULT_EXCLUDED_PATTERNS: &[&str] =
    &["*.Designer.cs", "*Migrations/*.cs", "*.angular/cache/*"];

/// Compiled exclusion rules
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    directories: Vec<String>,
    patterns: Vec<WildcardPattern>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_PATTERNS)
    }
}

impl ExclusionRules {
    pub fn new<D: AsRef<str>, P: AsRef<str>>(directories: &[D], patterns: &[P]) -> Self {
        Self {
            directories: directories
                .iter()
                .map(|d| d.as_ref().replace('\\', "/").to_lowercase())
                .collect(),
            patterns: patterns
                .iter()
                .map(|p| WildcardPattern::new(&p.as_ref().replace('\\', "/")))
                .collect(),
        }
    }

    /// Whether a directory (relative to the source root) is excluded.
    ///
    /// Every file below an excluded directory has that directory in its own
    /// directory portion, so callers can prune the whole subtree.
    pub fn is_excluded_dir(&self, relative_dir: &Path) -> bool {
        self.dir_matches(&path_utils::to_forward_slashes(relative_dir))
    }

    /// Whether a file (relative to the source root) is excluded
    pub fn is_excluded(&self, relative_file: &Path) -> bool {
        if self.dir_matches(&path_utils::parent_dir_string(relative_file)) {
            return true;
        }

        let candidate = path_utils::to_forward_slashes(relative_file);
        self.patterns.iter().any(|p| p.matches(&candidate))
    }

    fn dir_matches(&self, dir: &str) -> bool {
        if dir.is_empty() {
            return false;
        }
        let dir = dir.to_lowercase();
        self.directories.iter().any(|excluded| dir.contains(excluded.as_str()))
    }
}
