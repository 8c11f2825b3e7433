//! Photo Sorter - sort photos into folders by their original capture date

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use photosorter::cli::{Command, SortArgs};
use photosorter::{Cli, FileError, SortObserver, SortReport, Sorter};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// CLI Output Module
mod cli_output {
    //! Colored terminal output for the summary.

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stdout;

    /// CLI theme colors
    pub struct CliTheme;

    impl CliTheme {
        pub const SUCCESS: Color = Color::Green;
        pub const WARNING: Color = Color::Yellow;
        pub const ERROR: Color = Color::Red;
        pub const HINT: Color = Color::DarkGrey;
    }

    pub fn print_separator() {
        let _ = stdout().execute(Print(format!("{}\n", "─".repeat(60))));
    }

    pub fn print_error(msg: &str) {
        let _ = stdout().execute(Print(style("✗ ").with(CliTheme::ERROR).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    pub fn print_hint(msg: &str) {
        let _ = stdout().execute(Print(style("→ ").with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// Print a key/value pair, the value in `color`
    pub fn print_stat(key: &str, value: &str, color: Color) {
        let _ = stdout().execute(Print("  "));
        let _ = stdout().execute(Print(style(key).with(CliTheme::HINT)));
        let _ = stdout().execute(Print(": "));
        let _ = stdout().execute(Print(style(value).with(color).bold()));
        let _ = stdout().execute(Print("\n"));
    }

    pub fn print_blank() {
        let _ = stdout().execute(Print("\n"));
    }
}

/// Drives a progress bar from pipeline events
struct ProgressObserver {
    bar: ProgressBar,
}

impl SortObserver for ProgressObserver {
    fn scan_complete(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn file_sorted(&self, _source: &Path, _destination: &Path) {
        self.bar.inc(1);
    }

    fn file_failed(&self, _source: &Path, _error: &FileError) {
        self.bar.inc(1);
    }
}

/// Console log sink that hides the progress bar while a line is written
struct BarWriter {
    bar: ProgressBar,
}

impl Write for BarWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bar.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.bar.suspend(|| io::stderr().flush())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bar = match cli.command {
        Command::Sort(_) => {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::with_template(
                    "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        }
        Command::Version => ProgressBar::hidden(),
    };

    let _guard = setup_logging(&cli, &bar)?;

    match &cli.command {
        Command::Version => {
            println!("photosorter v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Sort(args) => run_sort(&cli, args, bar),
    }
}

fn run_sort(cli: &Cli, args: &SortArgs, bar: ProgressBar) -> Result<()> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        source = %args.source.display(),
        destination = %args.destination.display(),
        "Photo Sorter starting"
    );

    let sorter = Sorter::new(args.to_options()).with_observer(ProgressObserver { bar: bar.clone() });

    match sorter.run(&args.source, &args.destination) {
        Ok(report) => {
            bar.finish_and_clear();
            print_summary(&report, cli.verbose);

            if let Some(ref report_path) = args.report {
                write_report(&report, report_path)?;
                info!(path = %report_path.display(), "Report written");
            }

            Ok(())
        }
        Err(e) => {
            bar.finish_and_clear();
            error!(error = %e, "Sort failed");
            cli_output::print_error(&format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}

fn print_summary(report: &SortReport, verbose: bool) {
    use cli_output::*;

    print_blank();
    print_stat(
        "Processed",
        &format!(
            "{} images processed in: {:.3}s",
            report.processed,
            report.elapsed.as_secs_f64()
        ),
        CliTheme::SUCCESS,
    );
    print_stat(
        "Unprocessed",
        &report.unprocessed.len().to_string(),
        if report.unprocessed.is_empty() {
            CliTheme::SUCCESS
        } else {
            CliTheme::WARNING
        },
    );

    if report.unprocessed.is_empty() {
        return;
    }

    if verbose {
        print_separator();
        for (path, failure) in &report.unprocessed {
            print_stat(&path.display().to_string(), &failure.reason, CliTheme::ERROR);
        }
    } else {
        print_hint("Run with --verbose to list unprocessed files");
    }
}

fn write_report(report: &SortReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("writing report to {}", path.display()))?;
    Ok(())
}

/// Level cap for the console layer. Without `--verbose` or `RUST_LOG` the
/// console only shows warnings; otherwise the env filter alone decides.
fn console_level(verbose: bool, rust_log_set: bool) -> LevelFilter {
    if verbose || rust_log_set {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    }
}

/// Setup logging: console on stderr, plus an optional log file
fn setup_logging(cli: &Cli, bar: &ProgressBar) -> Result<Option<WorkerGuard>> {
    let default_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let console_level = console_level(
        cli.verbose,
        std::env::var_os(EnvFilter::DEFAULT_ENV).is_some(),
    );
    let console_bar = bar.clone();
    let console_writer = move || BarWriter {
        bar: console_bar.clone(),
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let Some(ref log_path) = cli.log_file else {
        subscriber
            .with(
                fmt::layer()
                    .with_writer(console_writer)
                    .with_filter(console_level),
            )
            .init();
        return Ok(None);
    };

    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .with(
                fmt::layer()
                    .with_writer(console_writer)
                    .with_filter(console_level),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .with(
                fmt::layer()
                    .with_writer(console_writer)
                    .with_filter(console_level),
            )
            .init();
    }

    Ok(Some(guard))
}
