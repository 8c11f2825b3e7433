//! CLI argument parsing with clap

use crate::config::{FolderLayout, SortOptions};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Photo Sorter - sort photos by their original capture date
///
/// Reads the EXIF capture date of every image in a directory tree and
/// copies it into year or year/month folders.
#[derive(Parser, Debug)]
#[command(name = "photosorter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write the log file as JSON
    #[arg(long, global = true)]
    pub json_log: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort photos contained in a directory by their original creation date
    Sort(SortArgs),

    /// Print the version number
    Version,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Directory to read photos from
    pub source: PathBuf,

    /// Directory to sort photos into
    pub destination: PathBuf,

    /// The folder structure used to organise the photos
    #[arg(short, long, value_enum, default_value_t = FolderLayout::YearMonth)]
    pub format: FolderLayout,

    /// Number of extraction workers (0 = auto)
    #[arg(short = 't', long, default_value_t = 0)]
    pub workers: usize,

    /// Number of save threads
    #[arg(long, default_value_t = 1)]
    pub save_workers: usize,

    /// Capacity of the queue between extraction and save
    #[arg(long = "queue", default_value_t = 16)]
    pub queue_capacity: usize,

    /// Write the full report as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl SortArgs {
    /// Convert CLI arguments to sort options
    pub fn to_options(&self) -> SortOptions {
        SortOptions {
            layout: self.format,
            workers: self.workers,
            save_workers: self.save_workers,
            queue_capacity: self.queue_capacity,
            ..SortOptions::default()
        }
    }
}
