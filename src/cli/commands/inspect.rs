//! Inspect command implementation
//!
//! Parses a file and prints its schema, row counts, skipped rows, and the
//! detector's sensitive-column suggestions without masking anything.

use crate::pipeline::Pipeline;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input file (CSV or JSON)
    pub input: PathBuf,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let pipeline = Pipeline::new();
        let origin = self
            .input
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("data")
            .to_string();

        let content = std::fs::read_to_string(&self.input)?;
        let parsed = match pipeline.parse(&content, &origin, None) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("❌ Failed to parse {}: {e}", self.input.display());
                return Ok(3);
            }
        };

        let dataset = &parsed.dataset;
        let suggested = pipeline.suggest_sensitive_columns(dataset);

        println!("📄 {}", dataset.origin);
        println!();
        println!("  Format:       {}", dataset.format);
        println!("  Rows:         {}", dataset.row_count());
        println!("  Columns:      {}", dataset.column_count());
        if parsed.skipped_rows > 0 {
            println!("  Skipped rows: {}", parsed.skipped_rows);
        }
        println!();
        println!("  Column                         Sensitive?");
        println!("  ------                         ----------");
        for column in &dataset.columns {
            let marker = if suggested.contains(column) {
                "⚠️  yes"
            } else {
                "no"
            };
            println!("  {column:<30} {marker}");
        }

        if suggested.is_empty() {
            println!();
            println!("  No sensitive columns suggested.");
        }

        Ok(0)
    }
}
