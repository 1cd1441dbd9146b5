//! Progress display for bundling
//!
//! One styled line per event goes to stdout; a progress bar tracks the file
//! count on stderr and hides itself when stderr is not a terminal.

use std::path::Path;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::ExtensionSet;
use crate::path_utils;
use crate::selection::{FileEntry, SkipReason};

/// Progress display for a bundle run
pub struct BundleProgress {
    pb: ProgressBar,
    verbose: bool,
    quiet: bool,
}

impl BundleProgress {
    pub fn new(verbose: bool) -> Self {
        Self {
            pb: ProgressBar::hidden(),
            verbose,
            quiet: false,
        }
    }

    /// Swallows every message
    #[cfg(test)]
    pub fn silent() -> Self {
        Self {
            pb: ProgressBar::hidden(),
            verbose: false,
            quiet: true,
        }
    }

    /// Switch to a visible bar once the number of files is known
    pub fn start(&mut self, total_files: usize) {
        if self.quiet {
            return;
        }
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        let pb = ProgressBar::new(total_files as u64);
        pb.set_style(style);
        self.pb = pb;
    }

    pub fn unrecognized_language(&self, tag: &str) {
        self.line(format!(
            "{} Language '{tag}' is not recognized.",
            Style::new().yellow().bold().apply_to("Warning:")
        ));
    }

    pub fn extensions(&self, extensions: &ExtensionSet) {
        self.line(format!(
            "{} {extensions}",
            Style::new().bold().apply_to("Using extensions:")
        ));
    }

    pub fn skipped(&self, relative: &Path, reason: SkipReason) {
        if !self.verbose {
            return;
        }
        let kind = match reason {
            SkipReason::ExcludedDirectory => "directory",
            SkipReason::ExcludedFile => "file",
        };
        self.line(format!(
            "{} {kind} {}",
            Style::new().dim().apply_to("Skipping excluded"),
            path_utils::to_forward_slashes(relative)
        ));
    }

    pub fn file_added(&self, entry: &FileEntry) {
        self.line(format!(
            "{} {}",
            Style::new().green().apply_to("Adding file:"),
            entry.absolute.display()
        ));
        self.pb.set_message(path_utils::to_forward_slashes(&entry.relative));
        self.pb.inc(1);
    }

    pub fn no_valid_extensions(&self) {
        self.line("No valid extensions were identified. Exiting.".to_string());
    }

    pub fn no_matching_files(&self) {
        self.pb.finish_and_clear();
        self.line("No matching files found.".to_string());
    }

    pub fn written(&self, output: &Path, files: usize) {
        self.pb.finish_and_clear();
        self.line(format!(
            "{} {} ({files} file{})",
            Style::new().green().bold().apply_to("Bundled files written to:"),
            output.display(),
            if files == 1 { "" } else { "s" }
        ));
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }

    fn line(&self, message: String) {
        if self.quiet {
            return;
        }
        self.pb.suspend(|| println!("{message}"));
    }
}
