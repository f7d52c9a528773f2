use anyhow::Context;
use clap::Parser;
use restaurant_hours::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result: anyhow::Result<commands::RunStats> = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => {
                result.context("Command failed")
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for CTRL+C")?;
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(restaurant_hours::Error::processing_interrupted("Interrupted by user").into())
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - results have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Restaurant Hours - Opening hours normalizer and query tool");
    println!("==========================================================");
    println!();
    println!("Reads restaurant listings with free-text opening hours, normalizes them");
    println!("into per-day open/close intervals and answers questions about them.");
    println!();
    println!("USAGE:");
    println!("    restaurant-hours <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    open        List restaurants open on a day, optionally at a time");
    println!("    timings     Show normalized timings of specific restaurants");
    println!("    insights    Summarize the whole schedule");
    println!("    table       Dump the normalized schedule table");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Who is open on Saturday at 11:30 pm?");
    println!("    restaurant-hours open -i hours.csv --day Sat --time \"11:30 pm\"");
    println!();
    println!("    # Timings of two restaurants as JSON:");
    println!("    restaurant-hours timings -i hours.csv -r Sudachi -r \"Kushi Tsuru\" --format json");
    println!();
    println!("    # Insights over every csv file in a directory, skipping bad entries:");
    println!("    restaurant-hours insights -i listings/ --permissive");
    println!();
    println!("For detailed help on any command, use:");
    println!("    restaurant-hours <COMMAND> --help");
}
