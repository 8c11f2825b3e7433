//! Outcome of a sort run

use crate::error::{FailureKind, FileError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Why a file was left unsorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub reason: String,
}

impl From<&FileError> for Failure {
    fn from(error: &FileError) -> Self {
        Self {
            kind: error.kind(),
            reason: error.to_string(),
        }
    }
}

/// Aggregate result of one sort run
///
/// Every scanned file ends up either counted in `processed` or keyed in
/// `unprocessed`, never both.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SortReport {
    /// Number of files written to the destination tree
    pub processed: usize,
    /// Files that were not sorted, with the reason
    pub unprocessed: BTreeMap<PathBuf, Failure>,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl SortReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_processed(&mut self) {
        self.processed += 1;
    }

    pub(crate) fn record_failure(&mut self, source: PathBuf, error: &FileError) {
        self.unprocessed.insert(source, Failure::from(error));
    }

    /// Number of files the run classified
    pub fn total(&self) -> usize {
        self.processed + self.unprocessed.len()
    }

    /// Number of unprocessed files with the given kind of failure
    pub fn count_of(&self, kind: FailureKind) -> usize {
        self.unprocessed.values().filter(|f| f.kind == kind).count()
    }

    pub fn summary(&self) -> String {
        format!(
            "Total: {}, Processed: {}, Unprocessed: {}, Elapsed: {:.3}s",
            self.total(),
            self.processed,
            self.unprocessed.len(),
            self.elapsed.as_secs_f64()
        )
    }
}
