//! Bundle pipeline
//!
//! Resolves extensions, opens the output, writes the optional header, selects
//! and sorts files, then streams each one into the output in order. Any I/O
//! failure aborts the run and leaves the partial output in place.

pub mod writer;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Local;

use crate::catalog::LanguageCatalog;
use crate::error::{Result, fs, input};
use crate::progress::BundleProgress;
use crate::selection::{self, ExclusionRules, FileSelector, SortMode};

pub use writer::BundleWriter;

/// Everything needed for one bundle run
#[derive(Debug, Clone)]
pub struct BundleRequest {
    pub source: PathBuf,
    pub output: PathBuf,
    pub languages: Vec<String>,
    pub sort: SortMode,
    pub remove_empty_lines: bool,
    pub note: bool,
    pub author: Option<String>,
}

impl BundleRequest {
    /// Author name exactly as given, unless it is missing or blank
    fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.trim().is_empty())
    }
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleOutcome {
    /// No requested language resolved to an extension; nothing was written
    NoValidExtensions,
    /// The output was created but no file matched
    NoMatchingFiles,
    Written { output: PathBuf, files: usize },
}

/// Runs bundle requests against a catalog and a set of exclusion rules
pub struct Bundler {
    catalog: LanguageCatalog,
    rules: ExclusionRules,
}

impl Default for Bundler {
    fn default() -> Self {
        Self::new(LanguageCatalog::builtin(), ExclusionRules::default())
    }
}

impl Bundler {
    pub fn new(catalog: LanguageCatalog, rules: ExclusionRules) -> Self {
        Self { catalog, rules }
    }

    pub fn run(
        &self,
        request: &BundleRequest,
        progress: &mut BundleProgress,
    ) -> Result<BundleOutcome> {
        let result = self.run_inner(request, progress);
        if result.is_err() {
            progress.abandon();
        }
        result
    }

    fn run_inner(
        &self,
        request: &BundleRequest,
        progress: &mut BundleProgress,
    ) -> Result<BundleOutcome> {
        let resolution = self.catalog.resolve(request.languages.as_slice());
        for tag in &resolution.unrecognized {
            progress.unrecognized_language(tag);
        }
        if resolution.extensions.is_empty() {
            progress.no_valid_extensions();
            return Ok(BundleOutcome::NoValidExtensions);
        }
        progress.extensions(&resolution.extensions);

        let root = dunce::canonicalize(&request.source)
            .ok()
            .filter(|p| p.is_dir())
            .ok_or_else(|| input::source_not_found(&request.source))?;

        let file =
            File::create(&request.output).map_err(|e| fs::write_failed(&request.output, e))?;
        let mut writer = BundleWriter::new(BufWriter::new(file), &request.output);

        if let Some(author) = request.author() {
            writer.write_header(author, Local::now())?;
        }

        let output = dunce::canonicalize(&request.output).ok();
        let mut files = FileSelector::new(&root, &resolution.extensions, &self.rules)
            .ignoring(output.as_deref())
            .collect(|path, reason| progress.skipped(path, reason))?;
        selection::sort_files(&mut files, request.sort);

        if files.is_empty() {
            writer.flush()?;
            progress.no_matching_files();
            return Ok(BundleOutcome::NoMatchingFiles);
        }

        progress.start(files.len());
        for entry in &files {
            progress.file_added(entry);
            if request.note {
                writer.write_note(entry)?;
            }
            writer.append_file(&entry.absolute, request.remove_empty_lines)?;
        }
        writer.flush()?;

        let output = output.unwrap_or_else(|| request.output.clone());
        progress.written(&output, files.len());
        Ok(BundleOutcome::Written {
            output,
            files: files.len(),
        })
    }
}
