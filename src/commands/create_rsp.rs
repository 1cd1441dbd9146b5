//! Create-rsp command implementation
//!
//! Asks for every bundle option, then writes a response file holding the
//! equivalent `bundle` invocation.

use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::parse_language;
use crate::error::Result;
use crate::prompt::{InquirePrompter, Prompter};
use crate::response_file::{self, BundleInvocation};
use crate::selection::SortMode;

const DEFAULT_RESPONSE_FILE: &str = "command.rsp";
const SORT_MODES: [SortMode; 2] = [SortMode::Name, SortMode::Type];

/// Run create-rsp command
pub fn run() -> Result<()> {
    let (invocation, path) = collect(&mut InquirePrompter)?;
    response_file::write(&path, &invocation.to_command_line())?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Response file created:"),
        path.display()
    );
    println!(
        "To execute, run: {}",
        Style::new().cyan().apply_to(format!("fib @{}", path.display()))
    );
    Ok(())
}

/// Ask every question in order
fn collect(prompter: &mut impl Prompter) -> Result<(BundleInvocation, PathBuf)> {
    let source = prompter.text(
        "Enter the path for the source directory:",
        Some("."),
        Some(validate_source),
    )?;
    let output = prompter.text(
        "Enter the output file name (e.g. output.txt):",
        None,
        Some(validate_required),
    )?;
    let languages = prompter.text(
        "Enter the languages to include (comma-separated, e.g. csharp,java or all):",
        None,
        Some(validate_languages),
    )?;

    let sort_options: Vec<&str> = SORT_MODES.iter().map(|m| m.as_str()).collect();
    let sort = prompter.select("Sort files by:", &sort_options, 0)?;

    let remove_empty_lines = prompter.confirm("Remove empty lines?", false)?;
    let author = prompter.text("Enter the author name (or leave blank):", None, None)?;
    let note = prompter.confirm("Include source notes?", false)?;
    let file_name = prompter.text(
        "Enter the response file name:",
        Some(DEFAULT_RESPONSE_FILE),
        Some(validate_required),
    )?;

    let invocation = BundleInvocation {
        source: source.trim().to_string(),
        output: output.trim().to_string(),
        languages: split_languages(&languages),
        sort: SORT_MODES.get(sort).copied().unwrap_or_default(),
        remove_empty_lines,
        author: Some(author.trim().to_string()).filter(|a| !a.is_empty()),
        note,
    };
    Ok((invocation, PathBuf::from(file_name.trim())))
}

fn split_languages(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn validate_required(value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        Err("A value is required".to_string())
    } else {
        Ok(())
    }
}

fn validate_source(value: &str) -> std::result::Result<(), String> {
    let value = value.trim();
    if value.is_empty() || Path::new(value).is_dir() {
        Ok(())
    } else {
        Err(format!("Source directory does not exist: {value}"))
    }
}

fn validate_languages(value: &str) -> std::result::Result<(), String> {
    let languages = split_languages(value);
    if languages.is_empty() {
        return Err("At least one language must be specified".to_string());
    }
    for language in &languages {
        parse_language(language).map_err(|e| e.to_string())?;
    }
    Ok(())
}
