//! Sort pipeline
//!
//! Handles the core logic of:
//! - Scanning the source directory
//! - Filtering candidates by extension
//! - Extracting capture times on a Rayon pool
//! - Saving extracted images from dedicated save threads
//!
//! Extraction and saving are connected by a bounded channel, so extraction
//! workers block once the save stage falls behind.

use crate::config::{FolderLayout, SortOptions};
use crate::error::{FileError, Result};
use crate::image::ImageUnit;
use crate::report::SortReport;
use crate::scan::scan;
use crossbeam_channel::{Receiver, SendError, Sender, bounded};
use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Instant;
use tracing::{debug, info, info_span, warn};

/// Receives progress events from a running sort
///
/// Methods are called from worker threads, in no particular order.
pub trait SortObserver: Send + Sync {
    /// Scanning finished with `total` files found
    fn scan_complete(&self, _total: usize) {}

    fn file_sorted(&self, _source: &Path, _destination: &Path) {}

    fn file_failed(&self, _source: &Path, _error: &FileError) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SortObserver for NoopObserver {}

/// Sort `source` into `dest` with default options and the given layout
///
/// Only a missing or unreadable source directory is returned as an error.
/// Every per-file problem ends up in [`SortReport::unprocessed`].
pub fn sort_dir(source: &Path, dest: &Path, layout: FolderLayout) -> Result<SortReport> {
    Sorter::new(SortOptions::with_layout(layout)).run(source, dest)
}

/// Configurable sort pipeline
pub struct Sorter {
    options: SortOptions,
    observer: Box<dyn SortObserver>,
}

impl Sorter {
    pub fn new(options: SortOptions) -> Self {
        Self {
            options,
            observer: Box::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl SortObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    /// Run the pipeline to completion
    pub fn run(&self, source: &Path, dest: &Path) -> Result<SortReport> {
        let started = Instant::now();
        let _span = info_span!(
            "sort_dir",
            source = %source.display(),
            dest = %dest.display(),
            layout = ?self.options.layout
        )
        .entered();

        let files = scan(source, Some(dest))?;
        info!(count = files.len(), "Found files");
        self.observer.scan_complete(files.len());

        let report = Mutex::new(SortReport::new());

        let (candidates, rejected): (Vec<PathBuf>, Vec<PathBuf>) =
            files.into_iter().partition(|path| self.is_candidate(path));
        for path in rejected {
            self.fail(&report, path, &FileError::UnsupportedExtension);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.workers)
            .thread_name(|i| format!("extract-{i}"))
            .build()?;

        info!(
            candidates = candidates.len(),
            workers = pool.current_num_threads(),
            save_workers = self.options.save_workers.max(1),
            "Processing files..."
        );

        thread::scope(|scope| -> Result<()> {
            let (unit_tx, unit_rx) = bounded::<ImageUnit>(self.options.queue_capacity.max(1));
            let report = &report;

            for i in 0..self.options.save_workers.max(1) {
                let units = unit_rx.clone();
                thread::Builder::new()
                    .name(format!("save-{i}"))
                    .spawn_scoped(scope, move || self.save_stage(units, dest, report))?;
            }
            drop(unit_rx);

            pool.install(|| {
                candidates
                    .into_par_iter()
                    .for_each_with(unit_tx, |units, path| self.extract_stage(path, units, report));
            });
            Ok(())
        })?;

        let mut report = report.into_inner().unwrap_or_else(PoisonError::into_inner);
        report.elapsed = started.elapsed();
        info!("{}", report.summary());
        Ok(report)
    }

    fn is_candidate(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.options.is_candidate(ext))
    }

    fn extract_stage(&self, path: PathBuf, units: &Sender<ImageUnit>, report: &Mutex<SortReport>) {
        match ImageUnit::load(&path) {
            Ok(unit) => {
                debug!(source = %path.display(), captured_at = %unit.captured_at(), "Extracted");
                if let Err(SendError(unit)) = units.send(unit) {
                    // Only reachable when every save thread has exited
                    let error = FileError::Write {
                        path: unit.source().to_path_buf(),
                        source: io::Error::other("save stage is not running"),
                    };
                    self.fail(report, path, &error);
                }
            }
            Err(e) => self.fail(report, path, &e),
        }
    }

    fn save_stage(&self, units: Receiver<ImageUnit>, dest: &Path, report: &Mutex<SortReport>) {
        for unit in units {
            match unit.save(dest, self.options.layout) {
                Ok(destination) => {
                    info!(
                        source = %unit.source().display(),
                        destination = %destination.display(),
                        captured_at = %unit.captured_at(),
                        "Sorted file"
                    );
                    lock(report).record_processed();
                    self.observer.file_sorted(unit.source(), &destination);
                }
                Err(e) => self.fail(report, unit.source().to_path_buf(), &e),
            }
        }
    }

    fn fail(&self, report: &Mutex<SortReport>, source: PathBuf, error: &FileError) {
        match error {
            FileError::UnsupportedExtension => {
                debug!(source = %source.display(), "Skipping file with unsupported extension")
            }
            _ => warn!(source = %source.display(), error = %error, "File not sorted"),
        }
        self.observer.file_failed(&source, error);
        lock(report).record_failure(source, error);
    }
}

fn lock(report: &Mutex<SortReport>) -> MutexGuard<'_, SortReport> {
    report.lock().unwrap_or_else(PoisonError::into_inner)
}
