//! In-memory image unit handed from the extraction stage to the save stage

use crate::config::FolderLayout;
use crate::destination;
use crate::error::FileError;
use crate::time::capture_time;
use chrono::NaiveDateTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;

/// A source file loaded into memory together with its capture time
#[derive(Debug)]
pub struct ImageUnit {
    source: PathBuf,
    bytes: Vec<u8>,
    captured_at: NaiveDateTime,
}

impl ImageUnit {
    /// Read a file and extract its capture time
    pub fn load(path: &Path) -> Result<Self, FileError> {
        let bytes = fs::read(path).map_err(FileError::Read)?;
        Self::from_bytes(path.to_path_buf(), bytes)
    }

    /// Build a unit from bytes already in memory
    pub fn from_bytes(source: PathBuf, bytes: Vec<u8>) -> Result<Self, FileError> {
        let captured_at = capture_time(&bytes)?;
        trace!(source = %source.display(), %captured_at, "Extracted capture time");
        Ok(Self {
            source,
            bytes,
            captured_at,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn captured_at(&self) -> NaiveDateTime {
        self.captured_at
    }

    /// Write the bytes under `dest_root` according to `layout`
    ///
    /// The file keeps its base name. An existing file with the same name in
    /// the bucket is overwritten.
    pub fn save(&self, dest_root: &Path, layout: FolderLayout) -> Result<PathBuf, FileError> {
        let dir = destination::derive(dest_root, &self.captured_at, layout);

        let Some(file_name) = self.source.file_name() else {
            return Err(FileError::Write {
                path: dir,
                source: io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"),
            });
        };

        let dest = dir.join(file_name);
        fs::write(&dest, &self.bytes).map_err(|e| FileError::Write {
            path: dest.clone(),
            source: e,
        })?;
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::test_helpers::*;
    use chrono::Datelike;
    use tempfile::TempDir;

    #[test]
    fn test_load_and_save_month_layout() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src").join("bug.jpg");
        let bytes = jpeg_taken_at("2008:07:15 09:00:00");
        write_file(&src, &bytes);

        let unit = ImageUnit::load(&src).unwrap();
        assert_eq!(unit.source(), src.as_path());
        assert_eq!(unit.captured_at().year(), 2008);

        let out = tmp.path().join("out");
        let dest = unit.save(&out, FolderLayout::YearMonth).unwrap();
        assert_eq!(dest, out.join("2008").join("July").join("bug.jpg"));
        assert_eq!(fs::read(&dest).unwrap(), bytes);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = ImageUnit::load(&tmp.path().join("absent.jpg")).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Read);
    }

    #[test]
    fn test_save_overwrites_same_name() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out");

        let first = ImageUnit::from_bytes(
            PathBuf::from("a/tree.jpg"),
            jpeg_taken_at("2008:01:01 00:00:00"),
        )
        .unwrap();
        let second_bytes = jpeg_taken_at("2008:11:30 23:59:59");
        let second = ImageUnit::from_bytes(PathBuf::from("b/tree.jpg"), second_bytes.clone()).unwrap();

        let d1 = first.save(&out, FolderLayout::Year).unwrap();
        let d2 = second.save(&out, FolderLayout::Year).unwrap();
        assert_eq!(d1, d2);
        assert_eq!(fs::read(&d2).unwrap(), second_bytes);
    }

    #[test]
    fn test_save_reports_write_error() {
        let tmp = TempDir::new().unwrap();
        // Destination root is a regular file, so no bucket can be created
        let out = tmp.path().join("out");
        fs::write(&out, b"occupied").unwrap();

        let unit = ImageUnit::from_bytes(
            PathBuf::from("leaf.jpg"),
            jpeg_taken_at("2014:09:21 16:00:00"),
        )
        .unwrap();
        let err = unit.save(&out, FolderLayout::Year).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Write);
    }
}
