//! Configuration types for the photo sorter

use serde::{Deserialize, Serialize};

/// Folder layout of the destination tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
pub enum FolderLayout {
    /// Sort by year: dest/YYYY/
    #[serde(rename = "year")]
    #[value(name = "year")]
    Year,
    /// Sort by year and month name: dest/YYYY/MonthName/
    #[default]
    #[serde(rename = "month")]
    #[value(name = "month")]
    YearMonth,
}

/// Options for a sort run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortOptions {
    /// Destination folder layout
    pub layout: FolderLayout,

    /// Number of extraction workers (0 = one per CPU)
    pub workers: usize,

    /// Number of threads draining the save queue
    pub save_workers: usize,

    /// Capacity of the queue between extraction and save
    pub queue_capacity: usize,

    /// File extensions eligible for sorting, without the dot.
    /// Matching is case-sensitive.
    pub extensions: Vec<String>,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            layout: FolderLayout::default(),
            workers: 0,
            save_workers: 1,
            queue_capacity: 16,
            extensions: vec!["jpg".into()],
        }
    }
}

impl SortOptions {
    /// Options with the given layout and defaults for everything else
    pub fn with_layout(layout: FolderLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Check if a file extension is eligible for sorting
    pub fn is_candidate(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}
