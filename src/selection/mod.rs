//! File selection: enumeration, exclusion and ordering
//!
//! This module handles:
//! - Walking the source root recursively (symbolic links are not followed,
//!   so linked files and directories are never selected)
//! - Pruning excluded directories and skipping excluded files
//! - Keeping only files whose extension is in the resolved set
//! - Sorting the result by name or by type

pub mod exclude;
pub mod glob;

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use walkdir::WalkDir;

use crate::catalog::ExtensionSet;
use crate::error::{FibError, Result, fs, input};
use crate::path_utils;

pub use exclude::ExclusionRules;

/// How selected files are ordered in the bundle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// File name only
    #[default]
    Name,
    /// Extension, then file name
    Type,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::Type => "type",
        }
    }
}

impl FromStr for SortMode {
    type Err = FibError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortMode::Name),
            "type" => Ok(SortMode::Type),
            _ => Err(input::invalid_sort_mode(s)),
        }
    }
}

/// A file that survived filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub absolute: PathBuf,
    /// Path relative to the source root
    pub relative: PathBuf,
    /// Extension with its leading dot, as found on disk
    pub extension: String,
}

impl FileEntry {
    pub fn file_name(&self) -> String {
        path_utils::file_name_string(&self.relative)
    }

    fn sort_key(&self, mode: SortMode) -> (String, String, String) {
        let extension = match mode {
            SortMode::Type => self.extension.to_lowercase(),
            SortMode::Name => String::new(),
        };
        (
            extension,
            self.file_name().to_lowercase(),
            path_utils::to_forward_slashes(&self.relative).to_lowercase(),
        )
    }
}

/// Why a path was left out of the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    ExcludedDirectory,
    ExcludedFile,
}

/// Walks a source root and collects the files to bundle
pub struct FileSelector<'a> {
    root: &'a Path,
    extensions: &'a ExtensionSet,
    rules: &'a ExclusionRules,
    ignore: Option<&'a Path>,
}

impl<'a> FileSelector<'a> {
    pub fn new(root: &'a Path, extensions: &'a ExtensionSet, rules: &'a ExclusionRules) -> Self {
        Self {
            root,
            extensions,
            rules,
            ignore: None,
        }
    }

    /// Never select this exact path (the bundle output, when it lives under the root)
    pub fn ignoring(mut self, path: Option<&'a Path>) -> Self {
        self.ignore = path;
        self
    }

    /// Enumerate matching files in walk order.
    ///
    /// `on_skip` is called for every pruned directory and excluded file.
    pub fn collect(&self, mut on_skip: impl FnMut(&Path, SkipReason)) -> Result<Vec<FileEntry>> {
        let mut files = Vec::new();

        let mut walker = WalkDir::new(self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| fs::walk_failed(self.root, e))?;

            if entry.file_type().is_dir() {
                let relative = self.relative(entry.path());
                if entry.depth() > 0 && self.rules.is_excluded_dir(relative) {
                    on_skip(relative, SkipReason::ExcludedDirectory);
                    walker.skip_current_dir();
                }
                continue;
            }
            if !entry.file_type().is_file() || self.ignore == Some(entry.path()) {
                continue;
            }

            let relative = self.relative(entry.path());
            if self.rules.is_excluded(relative) {
                on_skip(relative, SkipReason::ExcludedFile);
                continue;
            }

            let Some(extension) = path_utils::dotted_extension(relative) else {
                continue;
            };
            if !self.extensions.contains(&extension) {
                continue;
            }

            files.push(FileEntry {
                absolute: entry.path().to_path_buf(),
                relative: relative.to_path_buf(),
                extension,
            });
        }

        Ok(files)
    }

    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(self.root).unwrap_or(path)
    }
}

/// Sort files in place.
///
/// `Type` orders by extension, then file name; `Name` by file name alone.
/// Both compare case-insensitively and fall back to the relative path so the
/// order is total.
pub fn sort_files(files: &mut [FileEntry], mode: SortMode) {
    files.sort_by(|a, b| compare(a, b, mode));
}

/// Compare two entries under a sort mode
pub fn compare(a: &FileEntry, b: &FileEntry, mode: SortMode) -> Ordering {
    a.sort_key(mode).cmp(&b.sort_key(mode))
}
