//! Command implementations for the restaurant hours CLI
//!
//! Each subcommand lives in its own module and follows the same flow: set up
//! logging, load and build the schedule table, run the query, print the
//! result in the requested format.

pub mod insights;
pub mod open;
pub mod shared;
pub mod table;
pub mod timings;

pub use shared::RunStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `open`: restaurants open on a day or at a time
/// - `timings`: normalized timings of named restaurants
/// - `insights`: aggregate statistics over the whole schedule
/// - `table`: the normalized rows themselves
pub async fn run(args: Args) -> Result<RunStats> {
    let Some(command) = args.command else {
        return Err(Error::configuration("No command specified"));
    };

    match &command {
        Commands::Open(open_args) => open::run_open(open_args).await,
        Commands::Timings(timings_args) => timings::run_timings(timings_args).await,
        Commands::Insights(insights_args) => insights::run_insights(insights_args).await,
        Commands::Table(table_args) => table::run_table(table_args).await,
    }
}
