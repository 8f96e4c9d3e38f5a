//! Batch masking over a dataset
//!
//! The engine never mutates its input: [`mask`] builds a fresh
//! [`Dataset`] with the same schema, row order, and row count, so a
//! caller holding a reference to the pre-mask dataset observes no change.
//! This is what makes repeated preview-with-a-different-strategy and
//! undo workflows possible without re-parsing.

use crate::domain::{Dataset, MaskOutcome, Record};
use crate::masking::strategy::{transform, MaskingStrategy};
use std::time::Instant;

/// Rows shown by [`preview`]
pub const PREVIEW_ROWS: usize = 3;

/// Apply a strategy to the selected columns of a dataset
///
/// Every non-empty cell in a selected column is rewritten with
/// [`transform`]; empty cells are left untouched and not counted. Row
/// order and unselected columns are preserved exactly.
///
/// An empty selection is a valid no-op with `total_cells == 0`, not an
/// error; callers that consider it invalid should check before invoking.
///
/// # Examples
///
/// ```
/// use tabmask::codec::delimited;
/// use tabmask::masking::{mask, MaskingStrategy};
///
/// let parsed = delimited::parse("id,email\n1,a@b.com\n", "demo.csv").unwrap();
/// let outcome = mask(
///     &parsed.dataset,
///     &["email".to_string()],
///     MaskingStrategy::Redact,
///     "",
/// );
///
/// assert_eq!(outcome.masked_count, 1);
/// assert_eq!(outcome.dataset.rows[0].get("email"), Some("[GIZLI]"));
/// // The source dataset is untouched
/// assert_eq!(parsed.dataset.rows[0].get("email"), Some("a@b.com"));
/// ```
pub fn mask(
    dataset: &Dataset,
    selected_columns: &[String],
    strategy: MaskingStrategy,
    salt: &str,
) -> MaskOutcome {
    let start = Instant::now();
    let total_cells = dataset.row_count() * selected_columns.len();
    let mut masked_count = 0;

    let rows: Vec<Record> = dataset
        .rows
        .iter()
        .map(|row| mask_record(row, selected_columns, strategy, salt, &mut masked_count))
        .collect();

    let masked = Dataset::new(
        dataset.format,
        dataset.columns.clone(),
        rows,
        dataset.origin.clone(),
    );
    let elapsed = start.elapsed();

    tracing::info!(
        strategy = %strategy,
        columns = selected_columns.len(),
        rows = masked.row_count(),
        masked_count,
        total_cells,
        elapsed_ms = elapsed.as_millis() as u64,
        "Masking completed"
    );

    MaskOutcome {
        dataset: masked,
        masked_count,
        total_cells,
        elapsed,
    }
}

/// Transform the first `min(3, row_count)` rows without building a new
/// dataset or statistics
///
/// Used for low-cost what-if display; side-effect-free relative to the
/// source dataset.
pub fn preview(
    dataset: &Dataset,
    selected_columns: &[String],
    strategy: MaskingStrategy,
    salt: &str,
) -> Vec<Record> {
    let mut unused = 0;
    dataset
        .rows
        .iter()
        .take(PREVIEW_ROWS)
        .map(|row| mask_record(row, selected_columns, strategy, salt, &mut unused))
        .collect()
}

fn mask_record(
    row: &Record,
    selected_columns: &[String],
    strategy: MaskingStrategy,
    salt: &str,
    masked_count: &mut usize,
) -> Record {
    let mut masked = row.clone();
    for column in selected_columns {
        match row.get(column) {
            Some(value) if !value.is_empty() => {
                masked.set(column.clone(), transform(value, strategy, salt));
                *masked_count += 1;
            }
            // Absent column or empty value: leave untouched, don't count
            _ => {}
        }
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DataFormat, Dataset};

    fn dataset_with_emails() -> Dataset {
        let rows = vec![
            [
                ("id".to_string(), "1".to_string()),
                ("email".to_string(), "a@b.com".to_string()),
            ]
            .into_iter()
            .collect(),
            [
                ("id".to_string(), "2".to_string()),
                ("email".to_string(), String::new()),
            ]
            .into_iter()
            .collect(),
        ];
        Dataset::new(
            DataFormat::Delimited,
            vec!["id".to_string(), "email".to_string()],
            rows,
            "people.csv",
        )
    }

    #[test]
    fn test_mask_counts_only_non_empty_cells() {
        let dataset = dataset_with_emails();
        let outcome = mask(
            &dataset,
            &["email".to_string()],
            MaskingStrategy::Redact,
            "",
        );

        assert_eq!(outcome.masked_count, 1);
        assert_eq!(outcome.total_cells, 2);
        assert_eq!(outcome.dataset.rows[0].get("email"), Some("[GIZLI]"));
        // Empty value is left untouched
        assert_eq!(outcome.dataset.rows[1].get("email"), Some(""));
    }

    #[test]
    fn test_mask_preserves_source_and_unselected_columns() {
        let dataset = dataset_with_emails();
        let before = dataset.clone();

        let outcome = mask(
            &dataset,
            &["email".to_string()],
            MaskingStrategy::Hash,
            "s",
        );

        assert_eq!(dataset, before);
        assert_eq!(outcome.dataset.rows[0].get("id"), Some("1"));
        assert_eq!(outcome.dataset.columns, dataset.columns);
        assert_eq!(outcome.dataset.row_count(), dataset.row_count());
    }

    #[test]
    fn test_mask_empty_selection_is_noop() {
        let dataset = dataset_with_emails();
        let outcome = mask(&dataset, &[], MaskingStrategy::Mask, "");

        assert_eq!(outcome.masked_count, 0);
        assert_eq!(outcome.total_cells, 0);
        assert_eq!(outcome.masked_fraction(), 0.0);
        assert_eq!(outcome.dataset.rows, dataset.rows);
    }

    #[test]
    fn test_mask_unknown_column_is_noop_for_that_column() {
        let dataset = dataset_with_emails();
        let outcome = mask(
            &dataset,
            &["missing".to_string()],
            MaskingStrategy::Redact,
            "",
        );

        assert_eq!(outcome.masked_count, 0);
        assert_eq!(outcome.total_cells, 2);
        assert_eq!(outcome.dataset.rows, dataset.rows);
    }

    #[test]
    fn test_preview_limited_to_three_rows() {
        let mut dataset = dataset_with_emails();
        for i in 3..=5 {
            let row = [
                ("id".to_string(), i.to_string()),
                ("email".to_string(), format!("user{i}@example.com")),
            ]
            .into_iter()
            .collect();
            dataset.rows.push(row);
        }

        let rows = preview(
            &dataset,
            &["email".to_string()],
            MaskingStrategy::Redact,
            "",
        );

        assert_eq!(rows.len(), PREVIEW_ROWS);
        assert_eq!(rows[0].get("email"), Some("[GIZLI]"));
        // Source untouched
        assert_eq!(dataset.rows[0].get("email"), Some("a@b.com"));
    }

    #[test]
    fn test_preview_shorter_dataset() {
        let dataset = dataset_with_emails();
        let rows = preview(&dataset, &["email".to_string()], MaskingStrategy::Mask, "");
        assert_eq!(rows.len(), 2);
    }
}
