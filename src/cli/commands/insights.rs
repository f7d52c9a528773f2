//! Insights command implementation

use super::shared::{RunStats, csv_record, load_schedule, setup_logging, to_json};
use crate::Result;
use crate::app::services::insights::Insights;
use crate::cli::args::{InsightsArgs, OutputFormat};
use colored::*;
use std::fmt::Display;
use tracing::info;

/// Insights command runner
pub async fn run_insights(args: &InsightsArgs) -> Result<RunStats> {
    setup_logging(&args.input)?;

    let schedule = load_schedule(&args.input).await?;
    let insights = Insights::compute(&schedule.table);
    info!(
        "Computed insights over {} rows of {} restaurants",
        schedule.table.len(),
        insights.total_restaurants
    );

    println!("{}", render(args.input.format, &insights)?);
    Ok(schedule.run_stats(1))
}

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

/// Label/value pairs in display order
fn metrics(insights: &Insights) -> Vec<(&'static str, String)> {
    vec![
        ("total_restaurants", insights.total_restaurants.to_string()),
        ("most_common_open_time", or_na(insights.most_common_open_time)),
        ("most_common_close_time", or_na(insights.most_common_close_time)),
        (
            "average_duration_hours",
            or_na(insights.average_duration_hours.map(|h| format!("{:.2}", h))),
        ),
        (
            "most_busy_hour",
            or_na(insights.most_busy_hour.map(|h| format!("{:02}:00", h))),
        ),
        ("weekend_restaurants", insights.weekend_restaurants.to_string()),
        ("sat_restaurants", insights.sat_restaurants.to_string()),
        ("sun_restaurants", insights.sun_restaurants.to_string()),
        (
            "consistent_operating_restaurants",
            insights.consistent_operating_restaurants.to_string(),
        ),
    ]
}

/// Format insights in the requested output format
pub fn render(format: OutputFormat, insights: &Insights) -> Result<String> {
    match format {
        OutputFormat::Human => {
            let mut lines = vec!["Schedule insights".bright_green().bold().to_string()];
            for (label, value) in metrics(insights) {
                let label = label.replace('_', " ");
                lines.push(format!("  {:<34} {}", label, value.bright_yellow()));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => to_json(insights),
        OutputFormat::Csv => {
            let mut lines = vec![csv_record(["metric", "value"])];
            lines.extend(
                metrics(insights)
                    .into_iter()
                    .map(|(label, value)| csv_record([label, value.as_str()])),
            );
            Ok(lines.join("\n"))
        }
    }
}
