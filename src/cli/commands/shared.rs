//! Shared components for CLI commands
//!
//! This module contains the logging setup, configuration loading, schedule
//! loading and output helpers used by every subcommand.

use crate::app::adapters::filesystem::{InputReader, ReadStats};
use crate::app::services::schedule_table::{BuildStats, ScheduleTable};
use crate::cli::args::InputArgs;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Run statistics reported back to `main`
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of input files read
    pub files_read: usize,
    /// Number of restaurant entries read
    pub entries_read: usize,
    /// Number of entries skipped (malformed lines plus unparsable schedules)
    pub entries_skipped: usize,
    /// Rows in the normalized table
    pub rows_built: usize,
    /// Number of result items printed
    pub results: usize,
    /// Total processing time
    pub processing_time: Duration,
}

/// A built table together with how it was obtained
#[derive(Debug)]
pub struct LoadedSchedule {
    pub table: ScheduleTable,
    pub read_stats: ReadStats,
    pub build_stats: BuildStats,
    started: Instant,
}

impl LoadedSchedule {
    /// Statistics for a finished command that printed `results` items
    pub fn run_stats(&self, results: usize) -> RunStats {
        RunStats {
            files_read: self.read_stats.files_read,
            entries_read: self.read_stats.entries_read,
            entries_skipped: self.read_stats.lines_skipped + self.build_stats.entries_skipped(),
            rows_built: self.table.len(),
            results,
            processing_time: self.started.elapsed(),
        }
    }
}

/// Set up structured logging
pub fn setup_logging(args: &InputArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> args)
pub fn load_configuration(args: &InputArgs) -> Result<Config> {
    info!("Loading configuration");

    let config = Config::load_layered(args.config_file.as_deref())?
        .apply_overrides(&args.inputs, args.permissive);

    // Final validation
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Read every input and build the schedule table
pub async fn load_schedule(args: &InputArgs) -> Result<LoadedSchedule> {
    let started = Instant::now();
    let config = load_configuration(args)?;
    let reader = InputReader::from_config(&config);

    let spinner = args
        .show_progress()
        .then(|| create_spinner("Reading restaurant listings"));

    let result = async {
        let read = reader.read_paths(&config.input_paths).await?;
        if let Some(spinner) = &spinner {
            spinner.set_message(format!("Building schedule from {} entries", read.entries.len()));
        }
        let built = ScheduleTable::build(&read.entries, config.build_mode)?;
        Ok::<_, Error>((read.stats, built))
    }
    .await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let (read_stats, built) = result?;

    if !built.is_complete() && args.show_progress() {
        eprintln!(
            "{} skipped {} unparsable entries (run with -v for details)",
            "warning:".yellow().bold(),
            built.stats.entries_skipped()
        );
    }

    Ok(LoadedSchedule {
        table: built.table,
        read_stats,
        build_stats: built.stats,
        started,
    })
}

/// Create a spinner with appropriate styling
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Pretty-printed JSON for command output
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Quote a CSV field when it contains a separator, quote or line break
pub fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Join fields into one CSV record
pub fn csv_record<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|field| csv_escape(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
