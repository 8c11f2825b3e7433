//! EXIF capture time extraction

use crate::error::FileError;
use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use std::io::Cursor;
use tracing::trace;

/// Fixed EXIF date/time layout: "YYYY:MM:DD hh:mm:ss", no timezone
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Extract the original capture time from an in-memory image file
///
/// A container without an EXIF block, or bytes that are not a known image
/// container, is reported as [`FileError::MissingMetadata`].
pub fn capture_time(bytes: &[u8]) -> Result<NaiveDateTime, FileError> {
    let mut cursor = Cursor::new(bytes);
    let exif = Reader::new()
        .read_from_container(&mut cursor)
        .map_err(|e| FileError::MissingMetadata(e.to_string()))?;

    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .ok_or(FileError::MissingTimestampTag)?;

    let text = ascii_value(&field.value).ok_or_else(|| FileError::TimestampParse {
        value: field.display_value().to_string(),
        message: "value is not ASCII text".to_string(),
    })?;

    trace!(value = %text, "Found DateTimeOriginal");
    parse_exif_datetime(&text)
}

fn ascii_value(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

/// Parse an EXIF datetime string in the strict "YYYY:MM:DD HH:MM:SS" format
pub fn parse_exif_datetime(s: &str) -> Result<NaiveDateTime, FileError> {
    let trimmed = s.trim_end_matches('\0').trim();
    NaiveDateTime::parse_from_str(trimmed, EXIF_DATETIME_FORMAT).map_err(|e| {
        FileError::TimestampParse {
            value: s.to_string(),
            message: e.to_string(),
        }
    })
}
