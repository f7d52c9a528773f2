//! Open command implementation
//!
//! Lists the restaurants open on a given day, or at a given time of that day.

use super::shared::{RunStats, csv_record, load_schedule, setup_logging, to_json};
use crate::Result;
use crate::app::services::schedule_table::ScheduleTable;
use crate::cli::args::{OpenArgs, OutputFormat};
use colored::*;
use serde_json::json;
use tracing::info;

/// Open command runner
pub async fn run_open(args: &OpenArgs) -> Result<RunStats> {
    setup_logging(&args.input)?;

    let schedule = load_schedule(&args.input).await?;
    let open = query(args, &schedule.table);
    info!("{} restaurants open", open.len());

    println!("{}", render(args, &open)?);
    Ok(schedule.run_stats(open.len()))
}

/// Restaurants open for the requested moment, in table order
pub fn query<'a>(args: &OpenArgs, table: &'a ScheduleTable) -> Vec<&'a str> {
    table.open_at(args.day, args.time)
}

/// Format the open restaurants in the requested output format
pub fn render(args: &OpenArgs, open: &[&str]) -> Result<String> {
    let moment = match args.time {
        Some(time) => format!("{} at {}", args.day, time),
        None => args.day.to_string(),
    };

    match args.input.format {
        OutputFormat::Human => {
            let mut lines = Vec::with_capacity(open.len() + 1);
            if open.is_empty() {
                lines.push(format!("No restaurants open on {}", moment).yellow().to_string());
            } else {
                lines.push(
                    format!("{} restaurants open on {}:", open.len(), moment)
                        .bright_green()
                        .bold()
                        .to_string(),
                );
                lines.extend(open.iter().map(|name| format!("  {}", name)));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => to_json(&json!({
            "day": args.day,
            "time": args.time,
            "restaurants": open,
        })),
        OutputFormat::Csv => {
            let mut lines = vec![csv_record(["restaurant"])];
            lines.extend(open.iter().map(|name| csv_record([*name])));
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{RestaurantEntry, TimeOfDay, WeekDay};
    use crate::cli::args::InputArgs;

    fn open_args(day: WeekDay, time: Option<TimeOfDay>, format: OutputFormat) -> OpenArgs {
        OpenArgs {
            input: InputArgs {
                format,
                ..Default::default()
            },
            day,
            time,
        }
    }

    fn sample_table() -> ScheduleTable {
        let entries = vec![
            RestaurantEntry::new("Sudachi", "Mon-Wed 5 pm - 12:30 am"),
            RestaurantEntry::new("Bonchon Chicken, Inc.", "Mon-Sun 11 am - 10 pm"),
        ];
        ScheduleTable::from_entries(&entries).unwrap()
    }

    #[test]
    fn test_query_after_midnight() {
        let table = sample_table();
        let args = open_args(WeekDay::Thu, TimeOfDay::from_hm(0, 15), OutputFormat::Human);

        assert_eq!(query(&args, &table), vec!["Sudachi"]);
    }

    #[test]
    fn test_render_human() {
        let table = sample_table();
        let args = open_args(WeekDay::Mon, TimeOfDay::from_hm(18, 0), OutputFormat::Human);
        let output = render(&args, &query(&args, &table)).unwrap();

        assert!(output.contains("Mon at 06:00 PM"));
        assert!(output.contains("  Sudachi"));
        assert!(output.contains("  Bonchon Chicken, Inc."));

        let args = open_args(WeekDay::Sun, TimeOfDay::from_hm(23, 0), OutputFormat::Human);
        let output = render(&args, &query(&args, &table)).unwrap();
        assert!(output.contains("No restaurants open on Sun at 11:00 PM"));
    }

    #[test]
    fn test_render_json() {
        let table = sample_table();
        let args = open_args(WeekDay::Tue, None, OutputFormat::Json);
        let output = render(&args, &query(&args, &table)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["day"], "Tue");
        assert!(value["time"].is_null());
        assert_eq!(
            value["restaurants"],
            json!(["Sudachi", "Bonchon Chicken, Inc."])
        );
    }

    #[test]
    fn test_render_csv_quotes_names() {
        let table = sample_table();
        let args = open_args(WeekDay::Fri, TimeOfDay::from_hm(12, 0), OutputFormat::Csv);
        let output = render(&args, &query(&args, &table)).unwrap();

        assert_eq!(output, "restaurant\n\"Bonchon Chicken, Inc.\"");
    }
}
