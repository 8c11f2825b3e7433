//! Capture time extraction
//!
//! Only embedded EXIF metadata is consulted. Files without it are not
//! sorted; there is no fallback to filenames or file system timestamps.

pub mod exif;

pub use self::exif::{EXIF_DATETIME_FORMAT, capture_time, parse_exif_datetime};
