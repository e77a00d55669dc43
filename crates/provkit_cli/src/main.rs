//! provkit CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input validation failure, file error, or fatal validation stage
//!
//! Connectivity probe failures never affect the exit code.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const FAILURE: u8 = 1;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,provkit_request={0},provkit_backend={0},provkit_check={0},provkit_cli={0}",
            default_level
        ))
    });

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::execute(args).await,
        Commands::Validate(args) => commands::validate::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(ExitCodes::FAILURE)
        }
    }
}
