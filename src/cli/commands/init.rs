//! Init command implementation
//!
//! Writes a commented sample masking profile.

use crate::config::{MaskProfile, DEFAULT_PROFILE_PATH};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the profile
    #[arg(short, long, default_value = DEFAULT_PROFILE_PATH)]
    pub output: PathBuf,

    /// Overwrite an existing profile
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        if self.output.exists() && !self.force {
            eprintln!(
                "❌ {} already exists, pass --force to overwrite",
                self.output.display()
            );
            return Ok(2);
        }

        std::fs::write(&self.output, MaskProfile::sample())?;
        println!("✅ Wrote sample profile to {}", self.output.display());
        Ok(0)
    }
}
