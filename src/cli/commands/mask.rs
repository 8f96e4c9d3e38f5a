//! Mask command implementation
//!
//! Reads a file, parses it through the pipeline, resolves the column
//! selection (flags take precedence over the profile, which takes
//! precedence over the detector's suggestions), masks, and writes the
//! serialized result next to the input.

use crate::config::MaskProfile;
use crate::domain::{DataFormat, Dataset, Record};
use crate::masking::MaskingStrategy;
use crate::pipeline::Pipeline;
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Input file (CSV or JSON)
    pub input: PathBuf,

    /// Columns to mask, comma-separated; overrides the profile and the
    /// detector suggestions
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Masking strategy (mask, hash, random, redact)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Salt for the hash strategy
    #[arg(long)]
    pub salt: Option<String>,

    /// Declared input format (csv, json); sniffed from content when omitted
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output format (csv, json); defaults to the input format
    #[arg(long)]
    pub output_format: Option<String>,

    /// Output file path; derived from the input name when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a three-row preview instead of writing any output
    #[arg(long)]
    pub preview: bool,
}

impl MaskArgs {
    /// Execute the mask command
    pub fn execute(&self, profile_path: &str) -> anyhow::Result<i32> {
        let profile = match MaskProfile::load(profile_path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("❌ Failed to load profile: {e}");
                return Ok(2);
            }
        };

        let declared_format = match parse_format_flag(self.format.as_deref()) {
            Ok(format) => format,
            Err(message) => {
                eprintln!("❌ {message}");
                return Ok(2);
            }
        };
        let output_format = match parse_format_flag(self.output_format.as_deref()) {
            Ok(format) => format.or(profile.output_format),
            Err(message) => {
                eprintln!("❌ {message}");
                return Ok(2);
            }
        };
        let strategy = match &self.strategy {
            Some(s) => match MaskingStrategy::from_str(s) {
                Ok(strategy) => strategy,
                Err(message) => {
                    eprintln!("❌ {message}");
                    return Ok(2);
                }
            },
            None => profile.strategy,
        };
        let salt = self.salt.as_deref().unwrap_or(&profile.salt);

        let pipeline = Pipeline::new();
        let origin = self
            .input
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("data")
            .to_string();

        let content = std::fs::read_to_string(&self.input)?;
        let parsed = match pipeline.parse(&content, &origin, declared_format) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("❌ Failed to parse {}: {e}", self.input.display());
                return Ok(3);
            }
        };

        if parsed.skipped_rows > 0 {
            eprintln!(
                "⚠️  Skipped {} row(s) with a mismatched field count",
                parsed.skipped_rows
            );
        }

        let selected = self.resolve_columns(&pipeline, &parsed.dataset, &profile);
        if selected.is_empty() {
            eprintln!("❌ No columns selected and the detector found nothing to suggest");
            eprintln!("   Pass --columns or list them in the profile");
            return Ok(2);
        }

        if self.preview {
            let rows = pipeline.preview(&parsed.dataset, &selected, strategy, salt);
            print_preview(&parsed.dataset, &rows, &selected, strategy);
            return Ok(0);
        }

        let outcome = pipeline.mask(&parsed.dataset, &selected, strategy, salt);
        let serialized = pipeline.serialize(&outcome.dataset, output_format)?;

        let output_path = self.output.clone().unwrap_or_else(|| {
            let name = pipeline.output_file_name(&outcome.dataset, output_format);
            self.input.with_file_name(name)
        });
        std::fs::write(&output_path, serialized)?;

        println!("✅ Masked data written to {}", output_path.display());
        println!();
        println!("  Rows:         {}", outcome.dataset.row_count());
        println!("  Columns:      {}", selected.join(", "));
        println!("  Strategy:     {strategy} ({})", strategy.description());
        println!(
            "  Masked cells: {} of {} ({:.1}%)",
            outcome.masked_count,
            outcome.total_cells,
            outcome.masked_fraction() * 100.0
        );
        println!("  Elapsed:      {:.3}s", outcome.elapsed.as_secs_f64());

        Ok(0)
    }

    /// Columns from flags, then the profile, then the detector
    fn resolve_columns(
        &self,
        pipeline: &Pipeline,
        dataset: &Dataset,
        profile: &MaskProfile,
    ) -> Vec<String> {
        if !self.columns.is_empty() {
            return dedup(self.columns.clone());
        }
        if !profile.columns.is_empty() {
            return dedup(profile.columns.clone());
        }
        pipeline
            .suggest_sensitive_columns(dataset)
            .into_iter()
            .collect()
    }
}

fn parse_format_flag(flag: Option<&str>) -> Result<Option<DataFormat>, String> {
    match flag {
        None => Ok(None),
        Some(value) => DataFormat::from_str(value)
            .map(Some)
            .map_err(|e| e.to_string()),
    }
}

fn dedup(columns: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    columns
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

/// Print a preview table: header row, then the transformed rows
fn print_preview(
    dataset: &Dataset,
    rows: &[Record],
    selected: &[String],
    strategy: MaskingStrategy,
) {
    println!(
        "🔍 Preview ({} row(s), strategy: {strategy}, masking: {})",
        rows.len(),
        selected.join(", ")
    );
    println!();
    println!("  {}", dataset.columns.join(" | "));
    for row in rows {
        let fields: Vec<&str> = dataset
            .columns
            .iter()
            .map(|column| row.get_or_empty(column))
            .collect();
        println!("  {}", fields.join(" | "));
    }
}
