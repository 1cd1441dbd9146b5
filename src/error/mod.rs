//! Error types and handling for fib
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`input`]: argument validation errors, raised before any file is touched
//! - [`fs`]: file system errors raised while bundling or writing response files

pub mod fs;
pub mod input;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fib operations
#[derive(Error, Diagnostic, Debug)]
pub enum FibError {
    // Input validation errors
    #[error("Source directory does not exist: {path}")]
    #[diagnostic(
        code(fib::input::source_not_found),
        help("Pass an existing directory with --source, or omit it to use the current directory")
    )]
    SourceNotFound { path: String },

    #[error("Output file must be specified")]
    #[diagnostic(
        code(fib::input::output_not_specified),
        help("Pass the bundle destination with --output <file>")
    )]
    OutputNotSpecified,

    #[error("At least one language must be specified")]
    #[diagnostic(
        code(fib::input::no_languages),
        help("Pass one or more languages with --language, or 'all'")
    )]
    NoLanguages,

    #[error("Unsupported language: {language}")]
    #[diagnostic(code(fib::input::unsupported_language), help("Supported languages: {supported}"))]
    UnsupportedLanguage { language: String, supported: String },

    #[error("Sort option must be either 'name' or 'type', got '{value}'")]
    #[diagnostic(code(fib::input::invalid_sort))]
    InvalidSortMode { value: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(fib::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(fib::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to walk directory: {path}: {reason}")]
    #[diagnostic(code(fib::fs::walk_failed))]
    DirectoryWalkFailed { path: String, reason: String },

    #[error("Failed to read response file: {path}: {reason}")]
    #[diagnostic(
        code(fib::fs::response_file_failed),
        help("Create one with 'fib create-rsp'")
    )]
    ResponseFileFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fib::fs::io_error))]
    IoError { message: String },

    // Interactive prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(fib::prompt::failed))]
    PromptFailed { message: String },
}

impl From<std::io::Error> for FibError {
    fn from(err: std::io::Error) -> Self {
        FibError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for FibError {
    fn from(err: inquire::InquireError) -> Self {
        FibError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FibError>;
