//! Bundle output stream
//!
//! Writes the author header, provenance notes and file contents. Lines are
//! copied as raw bytes; only the line terminator (`\n`, `\r\n` or a lone
//! `\r`) is rewritten to `\n`.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{Result, fs};
use crate::path_utils;
use crate::selection::FileEntry;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes bundle content to `out`, attributing write failures to `path`
pub struct BundleWriter<W: Write> {
    out: W,
    path: PathBuf,
}

impl<W: Write> BundleWriter<W> {
    pub fn new(out: W, path: impl Into<PathBuf>) -> Self {
        Self {
            out,
            path: path.into(),
        }
    }

    /// Author and creation date, then a blank line
    pub fn write_header(&mut self, author: &str, created: DateTime<Local>) -> Result<()> {
        let header = format!(
            "// Bundle created by: {author}\n// Creation date: {}\n\n",
            created.format(TIMESTAMP_FORMAT)
        );
        self.write_bytes(header.as_bytes())
    }

    /// Relative and absolute source path, then a blank line
    pub fn write_note(&mut self, entry: &FileEntry) -> Result<()> {
        let note = format!(
            "// Source: {}\n// Absolute path: {}\n\n",
            path_utils::to_forward_slashes(&entry.relative),
            entry.absolute.display()
        );
        self.write_bytes(note.as_bytes())
    }

    /// Copy every line of `source`, optionally dropping blank ones, then flush
    pub fn append_file(&mut self, source: &Path, remove_empty_lines: bool) -> Result<()> {
        let file = File::open(source).map_err(|e| fs::read_failed(source, e))?;
        let mut reader = BufReader::new(file);
        self.append_lines(&mut reader, remove_empty_lines)
            .map_err(|e| match e {
                LineError::Read(e) => fs::read_failed(source, e),
                LineError::Write(e) => fs::write_failed(&self.path, e),
            })?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(|e| fs::write_failed(&self.path, e))
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn append_lines(
        &mut self,
        reader: &mut impl BufRead,
        remove_empty_lines: bool,
    ) -> std::result::Result<(), LineError> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line).map_err(LineError::Read)? == 0 {
                return Ok(());
            }

            // A lone `\r` also ends a line
            for content in strip_line_ending(&line).split(|b| *b == b'\r') {
                if remove_empty_lines && is_blank(content) {
                    continue;
                }
                self.out.write_all(content).map_err(LineError::Write)?;
                self.out.write_all(b"\n").map_err(LineError::Write)?;
            }
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.out
            .write_all(bytes)
            .map_err(|e| fs::write_failed(&self.path, e))
    }
}

enum LineError {
    Read(std::io::Error),
    Write(std::io::Error),
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Empty or whitespace-only, judged on the lossily decoded text
fn is_blank(line: &[u8]) -> bool {
    String::from_utf8_lossy(line).trim().is_empty()
}
