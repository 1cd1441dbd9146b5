//! Argument validation errors

use std::path::Path;

use super::FibError;
use crate::catalog::LanguageCatalog;

/// Creates a missing source directory error
pub fn source_not_found(path: &Path) -> FibError {
    FibError::SourceNotFound {
        path: path.display().to_string(),
    }
}

/// Creates an unsupported language error listing every known tag
pub fn unsupported_language(language: impl Into<String>) -> FibError {
    FibError::UnsupportedLanguage {
        language: language.into(),
        supported: LanguageCatalog::builtin().supported_tags().join(", "),
    }
}

/// Creates an invalid sort mode error
pub fn invalid_sort_mode(value: impl Into<String>) -> FibError {
    FibError::InvalidSortMode {
        value: value.into(),
    }
}
