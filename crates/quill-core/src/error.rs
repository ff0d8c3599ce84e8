//! Error types for Quill

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using QuillError
pub type Result<T> = std::result::Result<T, QuillError>;

/// Errors from assembling a preset.
///
/// A bad manifest is not among them: it degrades to an empty one.
#[derive(Debug, Error)]
pub enum QuillError {
    /// Template-related errors
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Project manifest errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to read the manifest file
    #[error("Failed to read manifest at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid JSON
    #[error("Failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Template loading errors
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A template file could not be read
    #[error("Failed to read {name} template at {path}: {source}")]
    Read {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Changelog configuration errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A parser pattern failed to compile
    #[error("Invalid {field} pattern: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// No repository at or above the path
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}
