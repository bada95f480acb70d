//! # tariff CLI entry point
//!
//! Parses command-line arguments and dispatches to the assess or schedule
//! handler. With no arguments the demo shipment is assessed.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tariff_cli::assess::{run_assess, AssessArgs};
use tariff_cli::schedule::{run_schedule, ScheduleArgs};

/// Tariff reasoner: computes the import duty owed on a shipment and explains
/// the base rate and surcharges behind it.
#[derive(Parser, Debug)]
#[command(name = "tariff", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    assess: AssessArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a tariff schedule file and summarise its rules and notices.
    Schedule(ScheduleArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("tariff CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Some(Commands::Schedule(args)) => run_schedule(&args),
        None => run_assess(&cli.assess),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
