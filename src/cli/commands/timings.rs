//! Timings command implementation
//!
//! Shows the normalized `<day>: <open> - <close>` timings of selected
//! restaurants.

use super::shared::{RunStats, csv_record, load_schedule, setup_logging, to_json};
use crate::Result;
use crate::app::services::schedule_table::RestaurantTimings;
use crate::cli::args::{OutputFormat, TimingsArgs};
use colored::*;
use tracing::{info, warn};

/// Timings command runner
pub async fn run_timings(args: &TimingsArgs) -> Result<RunStats> {
    setup_logging(&args.input)?;

    let schedule = load_schedule(&args.input).await?;
    let timings = schedule.table.timings_for(args.restaurants.as_slice());

    for unknown in timings.iter().filter(|t| t.timings.is_empty()) {
        warn!("No timings found for '{}'", unknown.restaurant);
    }
    info!("Listed timings for {} restaurants", timings.len());

    println!("{}", render(args.input.format, &timings)?);
    Ok(schedule.run_stats(timings.len()))
}

/// Format restaurant timings in the requested output format
pub fn render(format: OutputFormat, timings: &[RestaurantTimings]) -> Result<String> {
    match format {
        OutputFormat::Human => {
            let mut lines = Vec::new();
            for entry in timings {
                lines.push(entry.restaurant.bold().to_string());
                if entry.timings.is_empty() {
                    lines.push("  (no timings found)".dimmed().to_string());
                }
                lines.extend(entry.timings.iter().map(|timing| format!("  {}", timing)));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => to_json(timings),
        OutputFormat::Csv => {
            let mut lines = vec![csv_record(["restaurant", "timing"])];
            for entry in timings {
                lines.extend(
                    entry
                        .timings
                        .iter()
                        .map(|timing| csv_record([entry.restaurant.as_str(), timing.as_str()])),
                );
            }
            Ok(lines.join("\n"))
        }
    }
}
