//! Masking profile configuration
//!
//! A profile captures a reusable masking setup: which columns to mask,
//! which strategy, the hash salt, and the output format. Profiles are
//! loaded from a TOML file and can be overridden with `TABMASK_*`
//! environment variables; CLI flags override both.

use crate::domain::{DataFormat, Result, TabmaskError};
use crate::masking::MaskingStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Default profile file name
pub const DEFAULT_PROFILE_PATH: &str = "tabmask.toml";

/// A reusable masking configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaskProfile {
    /// Columns to mask; empty means "use the detector's suggestions"
    #[serde(default)]
    pub columns: Vec<String>,

    /// Masking strategy
    #[serde(default)]
    pub strategy: MaskingStrategy,

    /// Salt mixed into the hash strategy's input
    #[serde(default)]
    pub salt: String,

    /// Output format; absent means "same as the input"
    #[serde(default)]
    pub output_format: Option<DataFormat>,
}

impl MaskProfile {
    /// Load a profile from a TOML file
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file cannot be read or does
    /// not parse as a profile.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TabmaskError::Configuration(format!(
                "Failed to read profile {}: {e}",
                path.display()
            ))
        })?;
        let profile: MaskProfile = toml::from_str(&content)?;
        Ok(profile)
    }

    /// Load a profile, falling back to defaults when the file is absent,
    /// then apply environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut profile = if path.exists() {
            tracing::debug!(path = %path.display(), "Loading masking profile");
            Self::from_file(path)?
        } else {
            MaskProfile::default()
        };
        profile.apply_env_overrides()?;
        profile.validate()?;
        Ok(profile)
    }

    /// Apply `TABMASK_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TABMASK_STRATEGY") {
            self.strategy = MaskingStrategy::from_str(&val)
                .map_err(TabmaskError::Configuration)?;
        }

        if let Ok(val) = std::env::var("TABMASK_SALT") {
            self.salt = val;
        }

        if let Ok(val) = std::env::var("TABMASK_COLUMNS") {
            self.columns = val
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Ok(val) = std::env::var("TABMASK_OUTPUT_FORMAT") {
            let format = DataFormat::from_str(&val)
                .map_err(|e| TabmaskError::Configuration(e.to_string()))?;
            self.output_format = Some(format);
        }

        Ok(())
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<()> {
        if self.columns.iter().any(|c| c.trim().is_empty()) {
            return Err(TabmaskError::Configuration(
                "Profile contains an empty column name".to_string(),
            ));
        }

        if !self.salt.is_empty() && self.strategy != MaskingStrategy::Hash {
            tracing::warn!(
                strategy = %self.strategy,
                "Salt is set but only the hash strategy consumes it"
            );
        }

        Ok(())
    }

    /// Commented sample profile, written by `tabmask init`
    pub fn sample() -> &'static str {
        r#"# tabmask masking profile

# Columns to mask. Leave empty to use the sensitive-column detector.
columns = ["email", "telefon"]

# Strategy: "mask", "hash", "random", or "redact".
strategy = "mask"

# Salt mixed into the hash strategy's input. Ignored by other strategies.
salt = ""

# Output format: "delimited" (csv) or "structured" (json).
# Remove to keep the input format.
# output_format = "delimited"
"#
    }
}
