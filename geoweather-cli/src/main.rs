//! Binary crate for the `geoweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Mapping lookup failures to messages and exit codes
//! - Human-friendly output formatting

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
