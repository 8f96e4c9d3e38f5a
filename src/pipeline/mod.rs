//! Pipeline façade
//!
//! The entry points an external caller uses: detect format, parse, detect
//! sensitive columns, mask (or preview a mask), and serialize. The façade
//! composes the codecs, the detector, and the masking engine; it performs
//! no file or network I/O itself — the calling shell owns disk writes.

use crate::codec::{delimited, structured};
use crate::detect::SensitiveColumnDetector;
use crate::domain::{DataFormat, Dataset, MaskOutcome, ParseOutcome, Record, Result};
use crate::masking::{self, MaskingStrategy};
use chrono::Local;
use std::collections::BTreeSet;
use std::path::Path;

/// Composes parsing, detection, masking, and serialization
///
/// # Examples
///
/// ```
/// use tabmask::pipeline::Pipeline;
/// use tabmask::masking::MaskingStrategy;
///
/// # fn example() -> tabmask::domain::Result<()> {
/// let pipeline = Pipeline::new();
/// let parsed = pipeline.parse("id,email\n1,a@b.com\n", "people.csv", None)?;
///
/// let selected: Vec<String> = pipeline
///     .suggest_sensitive_columns(&parsed.dataset)
///     .into_iter()
///     .collect();
/// let outcome = pipeline.mask(&parsed.dataset, &selected, MaskingStrategy::Mask, "");
///
/// let output = pipeline.serialize(&outcome.dataset, None)?;
/// assert!(output.starts_with("id,email\n"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    detector: SensitiveColumnDetector,
}

impl Pipeline {
    /// Create a pipeline with the built-in detector lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with a custom detector
    pub fn with_detector(detector: SensitiveColumnDetector) -> Self {
        Self { detector }
    }

    /// Sniff the format of raw content from its first non-whitespace
    /// character: `[` or `{` routes to the structured codec, anything else
    /// to the delimited codec
    pub fn sniff_format(&self, content: &str) -> DataFormat {
        let trimmed = content.trim_start();
        if trimmed.starts_with('[') || trimmed.starts_with('{') {
            DataFormat::Structured
        } else {
            DataFormat::Delimited
        }
    }

    /// Parse raw content with a declared format, or sniff one
    ///
    /// # Errors
    ///
    /// Propagates the selected codec's parse errors; see
    /// [`ParseError`](crate::domain::ParseError) for the taxonomy.
    pub fn parse(
        &self,
        content: &str,
        origin: &str,
        declared_format: Option<DataFormat>,
    ) -> Result<ParseOutcome> {
        let format = declared_format.unwrap_or_else(|| self.sniff_format(content));
        tracing::debug!(origin = %origin, format = %format, declared = declared_format.is_some(), "Parsing input");

        match format {
            DataFormat::Delimited => delimited::parse(content, origin),
            DataFormat::Structured => structured::parse(content, origin),
        }
    }

    /// Suggest columns likely to hold PII; advisory only
    pub fn suggest_sensitive_columns(&self, dataset: &Dataset) -> BTreeSet<String> {
        self.detector.suggest(&dataset.columns)
    }

    /// Mask the selected columns, producing a fresh dataset and statistics
    pub fn mask(
        &self,
        dataset: &Dataset,
        selected_columns: &[String],
        strategy: MaskingStrategy,
        salt: &str,
    ) -> MaskOutcome {
        masking::mask(dataset, selected_columns, strategy, salt)
    }

    /// Preview the mask on the first rows without touching the dataset
    pub fn preview(
        &self,
        dataset: &Dataset,
        selected_columns: &[String],
        strategy: MaskingStrategy,
        salt: &str,
    ) -> Vec<Record> {
        masking::preview(dataset, selected_columns, strategy, salt)
    }

    /// Serialize a dataset in the given format, defaulting to the format
    /// it was parsed from
    ///
    /// # Errors
    ///
    /// Only the structured codec can fail, and only on serde_json
    /// plumbing; delimited serialization is total.
    pub fn serialize(&self, dataset: &Dataset, format: Option<DataFormat>) -> Result<String> {
        match format.unwrap_or(dataset.format) {
            DataFormat::Delimited => Ok(delimited::serialize(dataset)),
            DataFormat::Structured => structured::serialize(dataset),
        }
    }

    /// Suggested output file name: original base name, `_masked_`, a
    /// timestamp, and the format's extension
    pub fn output_file_name(&self, dataset: &Dataset, format: Option<DataFormat>) -> String {
        let format = format.unwrap_or(dataset.format);
        let base = Path::new(&dataset.origin)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("data");
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        format!("{base}_masked_{timestamp}.{}", format.extension())
    }
}
