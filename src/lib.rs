//! Photo Sorter - sorts images into folders by their original capture date
//!
//! This library provides:
//! - EXIF `DateTimeOriginal` extraction for JPEG images
//! - Year or year/month-name destination layouts
//! - A bounded producer/consumer pipeline: Rayon extraction workers feed
//!   save threads through a fixed-capacity channel
//! - A report of processed files and per-file failure reasons

pub mod cli;
pub mod config;
pub mod destination;
pub mod error;
pub mod image;
pub mod process;
pub mod report;
pub mod scan;
pub mod time;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use cli::Cli;
pub use config::{FolderLayout, SortOptions};
pub use error::{Error, FailureKind, FileError, Result};
pub use image::ImageUnit;
pub use process::{NoopObserver, SortObserver, Sorter, sort_dir};
pub use report::{Failure, SortReport};
