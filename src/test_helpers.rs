//! Shared test utilities: synthetic JPEG files with an EXIF APP1 segment.

use std::fs;
use std::path::Path;

pub const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
pub const TAG_DATE_TIME_DIGITIZED: u16 = 0x9004;
const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;

/// Big-endian TIFF block: IFD0 -> Exif IFD -> one ASCII entry.
fn tiff_with_ascii(tag: u16, value: &str) -> Vec<u8> {
    let mut ascii = value.as_bytes().to_vec();
    ascii.push(0);

    // header(8) + IFD0(2 + 12 + 4) + Exif IFD(2 + 12 + 4)
    let exif_ifd_offset: u32 = 26;
    let data_offset: u32 = 44;

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM\x00\x2a");
    tiff.extend_from_slice(&8u32.to_be_bytes());

    tiff.extend_from_slice(&1u16.to_be_bytes());
    tiff.extend_from_slice(&TAG_EXIF_IFD_POINTER.to_be_bytes());
    tiff.extend_from_slice(&TYPE_LONG.to_be_bytes());
    tiff.extend_from_slice(&1u32.to_be_bytes());
    tiff.extend_from_slice(&exif_ifd_offset.to_be_bytes());
    tiff.extend_from_slice(&0u32.to_be_bytes());

    tiff.extend_from_slice(&1u16.to_be_bytes());
    tiff.extend_from_slice(&tag.to_be_bytes());
    tiff.extend_from_slice(&TYPE_ASCII.to_be_bytes());
    tiff.extend_from_slice(&(ascii.len() as u32).to_be_bytes());
    tiff.extend_from_slice(&data_offset.to_be_bytes());
    tiff.extend_from_slice(&0u32.to_be_bytes());

    tiff.extend_from_slice(&ascii);
    tiff
}

/// A JPEG whose Exif IFD holds `tag` with the ASCII `value`.
pub fn jpeg_with_exif_tag(tag: u16, value: &str) -> Vec<u8> {
    let tiff = tiff_with_ascii(tag, value);
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// A JPEG carrying `DateTimeOriginal = value`.
pub fn jpeg_taken_at(value: &str) -> Vec<u8> {
    jpeg_with_exif_tag(TAG_DATE_TIME_ORIGINAL, value)
}

/// A JPEG with no APP1 segment at all.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

pub fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}
