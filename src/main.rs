// tabmask - dataset anonymization pipeline
// Copyright (c) 2025 Tabmask Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use tabmask::cli::{Cli, Commands};
use tabmask::logging::init_logging;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("warn");
    if let Err(e) = init_logging(log_level) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "tabmask starting");

    // Execute command and get exit code
    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Mask(args) => args.execute(&cli.profile),
        Commands::Inspect(args) => args.execute(),
        Commands::Init(args) => args.execute(),
    }
}
