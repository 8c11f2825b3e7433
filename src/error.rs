//! Error types for the photo sorter
//!
//! Two layers of failure exist. [`Error`] aborts a whole run and is returned
//! from [`crate::sort_dir`]. [`FileError`] concerns a single file and is
//! recorded in the [`crate::SortReport`] instead of being propagated.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for photo sorter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that stop a sort run before any file is processed
#[derive(Error, Debug)]
pub enum Error {
    #[error("Source directory not found or unreadable: {path}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build extraction worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-file failures, captured as data in the report
#[derive(Error, Debug)]
pub enum FileError {
    #[error("unsupported extension")]
    UnsupportedExtension,

    #[error("failed to read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("no embedded metadata: {0}")]
    MissingMetadata(String),

    #[error("metadata has no DateTimeOriginal tag")]
    MissingTimestampTag,

    #[error("malformed capture timestamp {value:?}: {message}")]
    TimestampParse { value: String, message: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Serializable classification of a [`FileError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    UnsupportedExtension,
    Read,
    MissingMetadata,
    MissingTimestampTag,
    TimestampParse,
    Write,
}

impl FileError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FileError::UnsupportedExtension => FailureKind::UnsupportedExtension,
            FileError::Read(_) => FailureKind::Read,
            FileError::MissingMetadata(_) => FailureKind::MissingMetadata,
            FileError::MissingTimestampTag => FailureKind::MissingTimestampTag,
            FileError::TimestampParse { .. } => FailureKind::TimestampParse,
            FileError::Write { .. } => FailureKind::Write,
        }
    }
}
