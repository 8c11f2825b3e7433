//! Source directory enumeration

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recursively collect every regular file under `root` as absolute paths
///
/// `exclude` is skipped entirely when it lies strictly inside `root`, so a
/// destination nested in the source is never scanned as input. An `exclude`
/// equal to `root` has no effect. Unreadable entries below
/// the root are logged and skipped; only an unreadable root is fatal.
pub fn scan(root: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    let source_not_found = |e| Error::SourceNotFound {
        path: root.to_path_buf(),
        source: e,
    };
    let root = fs::canonicalize(root).map_err(source_not_found)?;
    fs::read_dir(&root).map_err(source_not_found)?;

    // A destination that does not exist yet has nothing to exclude
    let exclude = exclude.and_then(|p| fs::canonicalize(p).ok());

    let mut files = Vec::new();

    for entry in WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e.path(), exclude.as_deref()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "Scanned source directory");
    Ok(files)
}

fn is_excluded(path: &Path, exclude: Option<&Path>) -> bool {
    match exclude {
        Some(excluded) => path == excluded,
        None => false,
    }
}
