//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::LanguageCatalog;
use crate::error::{FibError, input};
use crate::selection::SortMode;

/// fib - file bundler
///
/// Concatenate the source files of selected languages into a single file.
#[derive(Parser, Debug)]
#[command(
    name = "fib",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle code files of selected languages into a single file",
    long_about = "fib walks a source directory, keeps the files that belong to the requested \
                  languages, skips build output and dependency directories, and concatenates \
                  everything into one file.\n\n\
                  Arguments can be read from a response file: fib @command.rsp",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  fib bundle -o bundle.txt -l python\n    \
                  fib bundle -s ./app -o app.txt -l c#,typescript --sort type --note\n    \
                  fib create-rsp\n    \
                  fib @command.rsp"
)]
pub struct Cli {
    /// Report every skipped directory and file
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle code files to a single file
    Bundle(BundleArgs),

    /// Create a response file from interactive answers
    CreateRsp,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle all Python files in the current directory:\n    fib bundle -o bundle.txt -l python\n\n\
                  Bundle several languages, grouped by extension:\n    fib bundle -o out.txt -l java,c# --sort type\n\n\
                  Annotate sources and drop blank lines:\n    fib bundle -o out.txt -l all --note --remove-empty-lines\n\n\
                  Stamp an author header:\n    fib bundle -o out.txt -l go --author \"Jane Doe\"")]
pub struct BundleArgs {
    /// The source directory to search for files
    #[arg(long, short = 's', default_value = ".", value_parser = parse_source_dir)]
    pub source: PathBuf,

    /// The file path and name for the bundled output file
    #[arg(long, short = 'o', required = true, value_parser = parse_output)]
    pub output: PathBuf,

    /// Languages to include (e.g. java, c#, python), or 'all'
    #[arg(
        long,
        short = 'l',
        required = true,
        num_args = 1..,
        value_delimiter = ',',
        value_parser = parse_language
    )]
    pub language: Vec<String>,

    /// Write the source path of each file as a comment before its content
    #[arg(long, short = 'n')]
    pub note: bool,

    /// Sort files by 'name' or 'type'
    #[arg(long, short = 't', default_value = "name", value_parser = parse_sort_mode)]
    pub sort: SortMode,

    /// Remove empty lines from source code
    #[arg(long, short = 'r')]
    pub remove_empty_lines: bool,

    /// Author name added as a header comment in the bundle file
    #[arg(long, short = 'a')]
    pub author: Option<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    fib completions --shell bash > ~/.bash_completion.d/fib\n\n\
                  Generate zsh completions:\n    fib completions --shell zsh > ~/.zfunc/_fib")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

fn parse_source_dir(value: &str) -> Result<PathBuf, FibError> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(input::source_not_found(&path))
    }
}

fn parse_output(value: &str) -> Result<PathBuf, FibError> {
    if value.trim().is_empty() {
        return Err(FibError::OutputNotSpecified);
    }
    Ok(PathBuf::from(value))
}

/// Accept a catalog tag, alias or `all`, normalised to lowercase
pub fn parse_language(value: &str) -> Result<String, FibError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FibError::NoLanguages);
    }
    if !LanguageCatalog::builtin().is_known(value) {
        return Err(input::unsupported_language(value));
    }
    Ok(value.to_lowercase())
}

fn parse_sort_mode(value: &str) -> Result<SortMode, FibError> {
    value.parse()
}
