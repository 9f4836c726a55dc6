//! Command-line interface for pathfinder
//!
//! Provides `get`, `months` and `normalize` subcommands over the library.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod get;
mod text;
mod utils;

/// Dotted-path config lookup and text cleaning for data pipelines
#[derive(Parser)]
#[command(name = "pathfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the config value at a dotted keyword
    Get(get::GetArgs),

    /// Translate Portuguese month names to English
    Months(text::MonthsArgs),

    /// Strip accents and special characters from a string
    Normalize(text::NormalizeArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // A set RUST_LOG replaces the level entirely; otherwise WARN, or DEBUG with --verbose.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Get(args) => get::run(args),
        Commands::Months(args) => text::run_months(args),
        Commands::Normalize(args) => text::run_normalize(args),
    }
}
