//! Destination path derivation

use crate::config::FolderLayout;
use chrono::{Datelike, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Compute the bucket directory for a capture time without touching the disk
pub fn destination_dir(dest_root: &Path, captured_at: &NaiveDateTime, layout: FolderLayout) -> PathBuf {
    let mut dir = dest_root.join(captured_at.year().to_string());
    if layout == FolderLayout::YearMonth {
        // Full English month name, e.g. "July"
        dir.push(captured_at.format("%B").to_string());
    }
    dir
}

/// Compute the bucket directory and make sure it exists
///
/// Creation failures are only logged: the write that follows will fail and
/// be reported for the file in question.
pub fn derive(dest_root: &Path, captured_at: &NaiveDateTime, layout: FolderLayout) -> PathBuf {
    let dir = destination_dir(dest_root, captured_at, layout);
    if let Err(e) = fs::create_dir_all(&dir) {
        warn!(dir = %dir.display(), error = %e, "Failed to create destination directory");
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_exif_datetime;
    use tempfile::TempDir;

    #[test]
    fn test_year_layout() {
        let ts = parse_exif_datetime("2008:07:15 10:20:30").unwrap();
        let dir = destination_dir(Path::new("/out"), &ts, FolderLayout::Year);
        assert_eq!(dir, PathBuf::from("/out/2008"));
    }

    #[test]
    fn test_year_month_layout_uses_month_name() {
        let ts = parse_exif_datetime("2008:07:15 10:20:30").unwrap();
        let dir = destination_dir(Path::new("/out"), &ts, FolderLayout::YearMonth);
        assert_eq!(dir, PathBuf::from("/out/2008/July"));

        let ts = parse_exif_datetime("2015:02:01 00:00:00").unwrap();
        let dir = destination_dir(Path::new("/out"), &ts, FolderLayout::YearMonth);
        assert_eq!(dir, PathBuf::from("/out/2015/February"));
    }

    #[test]
    fn test_derive_creates_directories_idempotently() {
        let tmp = TempDir::new().unwrap();
        let ts = parse_exif_datetime("2014:09:21 16:00:00").unwrap();

        let first = derive(tmp.path(), &ts, FolderLayout::YearMonth);
        assert!(first.is_dir());
        assert_eq!(first, tmp.path().join("2014").join("September"));

        let second = derive(tmp.path(), &ts, FolderLayout::YearMonth);
        assert_eq!(first, second);
        assert!(second.is_dir());
    }

    #[test]
    fn test_derive_tolerates_blocked_directory() {
        let tmp = TempDir::new().unwrap();
        // A regular file where the year directory should go
        fs::write(tmp.path().join("2008"), b"not a directory").unwrap();
        let ts = parse_exif_datetime("2008:07:15 10:20:30").unwrap();

        let dir = derive(tmp.path(), &ts, FolderLayout::Year);
        assert_eq!(dir, tmp.path().join("2008"));
        assert!(!dir.is_dir());
    }
}
