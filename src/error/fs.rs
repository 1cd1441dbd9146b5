//! File system errors

use std::path::Path;

use super::FibError;

/// Creates a file read error
pub fn read_failed(path: &Path, err: impl std::fmt::Display) -> FibError {
    FibError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, err: impl std::fmt::Display) -> FibError {
    FibError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a directory traversal error
pub fn walk_failed(path: &Path, err: impl std::fmt::Display) -> FibError {
    FibError::DirectoryWalkFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a response file error
pub fn response_file_failed(path: impl Into<String>, err: impl std::fmt::Display) -> FibError {
    FibError::ResponseFileFailed {
        path: path.into(),
        reason: err.to_string(),
    }
}
