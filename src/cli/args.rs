//! Command-line argument definitions for the restaurant hours tool
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand shares the same input, logging and output options through a
//! flattened [`InputArgs`].

use crate::app::models::{TimeOfDay, WeekDay};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the restaurant hours tool
///
/// Normalizes free-text restaurant opening hours and answers questions about
/// them: who is open when, full timings per restaurant, and aggregate insights.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "restaurant-hours",
    version,
    about = "Normalize restaurant opening hours and query who is open when",
    long_about = "Reads restaurant listings such as \
                  'Paragon Restaurant & Bar, Mon-Fri 11:30 am - 10 pm / Sat 5:30 pm - 10 pm', \
                  expands day ranges, splits windows that run past midnight, and answers \
                  openness, timing and insight queries over the normalized schedule."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List restaurants open on a day, optionally at a specific time
    Open(OpenArgs),
    /// Show the normalized timings of specific restaurants
    Timings(TimingsArgs),
    /// Summarize the whole schedule
    Insights(InsightsArgs),
    /// Dump the normalized schedule table
    Table(TableArgs),
}

impl Commands {
    /// Input options shared by every subcommand
    pub fn input_args(&self) -> &InputArgs {
        match self {
            Commands::Open(args) => &args.input,
            Commands::Timings(args) => &args.input,
            Commands::Insights(args) => &args.input,
            Commands::Table(args) => &args.input,
        }
    }
}

/// Input, logging and output options
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct InputArgs {
    /// Input files, directories or glob patterns
    ///
    /// Repeat to read several inputs. Directories are searched recursively for
    /// files with the configured extension (csv by default).
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        action = clap::ArgAction::Append,
        help = "Input file, directory or glob pattern (repeatable)"
    )]
    pub inputs: Vec<PathBuf>,

    /// Configuration file path
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to JSON configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Skip restaurants whose schedule cannot be parsed instead of failing
    #[arg(long = "permissive", help = "Skip unparsable entries with a warning")]
    pub permissive: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides the progress spinner.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl InputArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the open command
#[derive(Debug, Clone, Parser)]
pub struct OpenArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Day of week (Mon, tue, SUN, ...)
    #[arg(short = 'd', long = "day", value_name = "DAY")]
    pub day: WeekDay,

    /// Time of day, e.g. "11:30 am", "9 pm" or "23:15"
    ///
    /// Without a time, every restaurant open at any point of the day is listed.
    #[arg(short = 't', long = "time", value_name = "TIME")]
    pub time: Option<TimeOfDay>,
}

/// Arguments for the timings command
#[derive(Debug, Clone, Parser)]
pub struct TimingsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Restaurant names, matched exactly
    #[arg(
        short = 'r',
        long = "restaurant",
        value_name = "NAME",
        required = true,
        num_args = 1..
    )]
    pub restaurants: Vec<String>,
}

/// Arguments for the insights command
#[derive(Debug, Clone, Parser)]
pub struct InsightsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the table command
#[derive(Debug, Clone, Parser)]
pub struct TableArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Commands {
        Args::try_parse_from(argv).unwrap().command.unwrap()
    }

    #[test]
    fn test_open_command_parsing() {
        let command = parse(&[
            "restaurant-hours",
            "open",
            "-i",
            "a.csv",
            "--input",
            "b.csv",
            "--day",
            "sat",
            "--time",
            "11:30 pm",
        ]);

        let Commands::Open(args) = command else {
            panic!("expected open command");
        };
        assert_eq!(args.day, WeekDay::Sat);
        assert_eq!(args.time, TimeOfDay::from_hm(23, 30));
        assert_eq!(
            args.input.inputs,
            vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]
        );
        assert_eq!(args.input.format, OutputFormat::Human);
    }

    #[test]
    fn test_open_accepts_24_hour_time() {
        let Commands::Open(args) = parse(&["restaurant-hours", "open", "-d", "Mon", "-t", "23:15"])
        else {
            panic!("expected open command");
        };
        assert_eq!(args.time, TimeOfDay::from_hm(23, 15));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Args::try_parse_from(["restaurant-hours", "open", "--day", "Funday"]).is_err());
        assert!(
            Args::try_parse_from(["restaurant-hours", "open", "--day", "Mon", "--time", "25:00"])
                .is_err()
        );
        assert!(Args::try_parse_from(["restaurant-hours", "timings"]).is_err());
        assert!(Args::try_parse_from(["restaurant-hours", "table", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_timings_command_parsing() {
        let command = parse(&[
            "restaurant-hours",
            "timings",
            "-r",
            "Sudachi",
            "Thai Stick Restaurant",
            "--format",
            "json",
        ]);

        assert_eq!(command.input_args().format, OutputFormat::Json);
        let Commands::Timings(args) = command else {
            panic!("expected timings command");
        };
        assert_eq!(args.restaurants, vec!["Sudachi", "Thai Stick Restaurant"]);
    }

    #[test]
    fn test_log_level() {
        let mut args = InputArgs::default();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = InputArgs::default();
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["restaurant-hours"]).unwrap();
        assert!(args.command.is_none());
    }
}
