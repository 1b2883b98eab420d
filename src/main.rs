//! Display a run header and the kinematics derived from it

use clap::Parser;
use eyre::WrapErr;
use run_header::config;
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// We'll use eyre's type-erased result type throughout the application
type Result<T> = eyre::Result<T>;

/// Command line interface
#[derive(Debug, Parser)]
#[command(version, about = "Display a run header and its derived kinematics")]
struct Cli {
    /// Run card to be loaded
    #[arg(default_value = "run.card")]
    run_card: PathBuf,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Send diagnostics to stderr, at a level controlled by the command line
fn setup_logging(verbosity: u8, quiet: bool) {
    let level_filter = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();
    tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .init();
}

/// This will act as our main function, with suitable error handling
fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    // The work of loading, parsing, and checking the run card is offloaded to
    // the config module
    let run = config::load(&cli.run_card).wrap_err("Failed to load the run header")?;
    tracing::info!("Run header \"{}\" loaded", run.name());

    // Display it the way run headers have always been displayed, followed by
    // what can be derived from it
    run.print();
    print!("{}", run.kinematics());
    Ok(())
}
