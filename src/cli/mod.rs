//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for tabmask using clap.
//! The CLI is the thin presentation shell around the pipeline façade: it
//! owns file reads and writes, the core stays I/O-free.

pub mod commands;

use clap::{Parser, Subcommand};

/// tabmask - dataset anonymization pipeline
#[derive(Parser, Debug)]
#[command(name = "tabmask")]
#[command(version, about, long_about = None)]
#[command(author = "Tabmask Contributors")]
pub struct Cli {
    /// Path to the masking profile file
    #[arg(short, long, default_value = crate::config::DEFAULT_PROFILE_PATH, env = "TABMASK_PROFILE")]
    pub profile: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TABMASK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask selected columns of a CSV or JSON file
    Mask(commands::mask::MaskArgs),

    /// Show the schema and sensitive-column suggestions for a file
    Inspect(commands::inspect::InspectArgs),

    /// Write a sample masking profile
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_mask() {
        let cli = Cli::parse_from(["tabmask", "mask", "data.csv"]);
        assert_eq!(cli.profile, "tabmask.toml");
        assert!(matches!(cli.command, Commands::Mask(_)));
    }

    #[test]
    fn test_cli_parse_with_profile() {
        let cli = Cli::parse_from(["tabmask", "--profile", "custom.toml", "mask", "data.csv"]);
        assert_eq!(cli.profile, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["tabmask", "--log-level", "debug", "inspect", "data.csv"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_inspect() {
        let cli = Cli::parse_from(["tabmask", "inspect", "data.json"]);
        assert!(matches!(cli.command, Commands::Inspect(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["tabmask", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_mask_flags() {
        let cli = Cli::parse_from([
            "tabmask", "mask", "data.csv", "--columns", "email,telefon", "--strategy", "hash",
            "--salt", "pepper",
        ]);
        let Commands::Mask(args) = cli.command else {
            panic!("expected mask command");
        };
        assert_eq!(args.columns, vec!["email", "telefon"]);
        assert_eq!(args.strategy.as_deref(), Some("hash"));
        assert_eq!(args.salt.as_deref(), Some("pepper"));
    }
}
