//! Structured logging setup using tracing
//!
//! Console logging with a configurable level. `RUST_LOG` takes precedence
//! over the level passed on the command line.
//!
//! # Example
//!
//! ```no_run
//! use tabmask::logging::init_logging;
//!
//! init_logging("info").expect("Failed to initialize logging");
//! tracing::info!("Application started");
//! ```

use crate::domain::{Result, TabmaskError};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// # Errors
///
/// Returns a configuration error when the level string is not one of
/// trace, debug, info, warn, error.
pub fn init_logging(log_level_str: &str) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tabmask={log_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Parse a log level string
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(TabmaskError::Configuration(format!(
            "Invalid log level: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert!(parse_log_level("verbose").is_err());
    }
}
