//! Table command implementation
//!
//! Dumps the normalized schedule rows in build order.

use super::shared::{RunStats, csv_record, load_schedule, setup_logging, to_json};
use crate::Result;
use crate::app::services::schedule_table::ScheduleTable;
use crate::cli::args::{OutputFormat, TableArgs};
use colored::*;
use tracing::info;

/// Table command runner
pub async fn run_table(args: &TableArgs) -> Result<RunStats> {
    setup_logging(&args.input)?;

    let schedule = load_schedule(&args.input).await?;
    info!("Dumping {} schedule rows", schedule.table.len());

    println!("{}", render(args.input.format, &schedule.table)?);
    Ok(schedule.run_stats(schedule.table.len()))
}

/// Format the table rows in the requested output format
///
/// CSV output uses 24-hour `HH:MM` times; human and JSON output use the
/// 12-hour display form.
pub fn render(format: OutputFormat, table: &ScheduleTable) -> Result<String> {
    match format {
        OutputFormat::Human => {
            let width = table
                .iter()
                .map(|row| row.restaurant.chars().count())
                .max()
                .unwrap_or(0)
                .max("Restaurant".len());

            let header = format!("{:<width$}  Day  Open      Close", "Restaurant");
            let mut lines = vec![header.bold().to_string()];
            lines.extend(table.iter().map(|row| {
                format!(
                    "{:<width$}  {}  {}  {}",
                    row.restaurant, row.day, row.open, row.close
                )
            }));
            lines.push(format!("{} rows", table.len()).dimmed().to_string());
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => to_json(table.rows()),
        OutputFormat::Csv => {
            let mut lines = vec![csv_record(["restaurant", "day", "open", "close"])];
            lines.extend(table.iter().map(|row| {
                csv_record([
                    row.restaurant.clone(),
                    row.day.to_string(),
                    row.open.to_24_hour_string(),
                    row.close.to_24_hour_string(),
                ])
            }));
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::RestaurantEntry;

    fn sample_table() -> ScheduleTable {
        let entries = vec![RestaurantEntry::new(
            "Sudachi",
            "Wed 5 pm - 12:30 am / Sun 1 pm - 3 pm",
        )];
        ScheduleTable::from_entries(&entries).unwrap()
    }

    #[test]
    fn test_render_csv() {
        let output = render(OutputFormat::Csv, &sample_table()).unwrap();

        assert_eq!(
            output,
            "restaurant,day,open,close\n\
             Sudachi,Wed,17:00,23:59\n\
             Sudachi,Thu,00:00,00:30\n\
             Sudachi,Sun,13:00,15:00"
        );
    }

    #[test]
    fn test_render_json() {
        let output = render(OutputFormat::Json, &sample_table()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[1]["day"], "Thu");
        assert_eq!(value[1]["open"], "12:00 AM");
        assert_eq!(value[1]["close"], "12:30 AM");
    }

    #[test]
    fn test_render_human() {
        let output = render(OutputFormat::Human, &sample_table()).unwrap();

        assert!(output.contains("Sudachi     Wed  05:00 PM  11:59 PM"));
        assert!(output.contains("3 rows"));

        let output = render(OutputFormat::Human, &ScheduleTable::default()).unwrap();
        assert!(output.contains("0 rows"));
    }
}
