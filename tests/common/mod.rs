//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use std::path::Path;

#[path = "../../src/test_helpers.rs"]
mod fixtures;

pub use fixtures::*;

/// Seven dated photos, one JPEG without EXIF and one text file.
pub fn create_gallery(root: &Path) {
    let photos = [
        ("mountain.jpg", "2007:09:03 08:12:44"),
        ("bug.jpg", "2008:07:15 10:20:30"),
        ("butterfly.jpg", "2008:07:19 11:00:00"),
        ("trip/lizard.jpg", "2008:07:21 12:30:00"),
        ("trip/tree.jpg", "2008:11:02 09:15:00"),
        ("leaf.jpg", "2014:09:21 16:00:00"),
        ("nested/deeper/light.jpg", "2015:02:01 20:45:10"),
    ];
    for (name, taken) in photos {
        write_file(&root.join(name), &jpeg_taken_at(taken));
    }
    write_file(&root.join("no_exif1.jpg"), &jpeg_without_exif());
    write_file(&root.join("no_img.txt"), b"just some notes");
}
