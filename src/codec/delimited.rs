//! Delimited-text codec
//!
//! Parses and serializes comma-separated text with RFC4180-style quoting.
//! The field grammar is single-pass with no backtracking: a double quote
//! toggles quoted mode, two consecutive double quotes inside quoted mode
//! emit one literal quote, and an unquoted comma ends the current field.
//! Every emitted field is trimmed of surrounding whitespace.
//!
//! Rows whose field count disagrees with the header are skipped and
//! counted, never fatal; the skip count is surfaced on [`ParseOutcome`]
//! for diagnostics.

use crate::domain::{DataFormat, Dataset, ParseError, ParseOutcome, Record, Result};

/// Parse delimited text into a dataset
///
/// Line 0 is the header; every subsequent non-blank line is a data row.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] when no non-blank lines remain,
/// [`ParseError::InvalidHeader`] when the header yields zero columns, and
/// [`ParseError::NoDataRows`] when every data line was skipped.
pub fn parse(content: &str, origin: &str) -> Result<ParseOutcome> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ParseError::EmptyInput.into());
    }

    let columns = split_line(lines[0]);
    if columns.is_empty() {
        return Err(ParseError::InvalidHeader.into());
    }

    let mut rows = Vec::with_capacity(lines.len() - 1);
    let mut skipped_rows = 0;

    for (index, line) in lines.iter().enumerate().skip(1) {
        let fields = split_line(line);
        if fields.len() != columns.len() {
            tracing::warn!(
                line = index + 1,
                expected = columns.len(),
                found = fields.len(),
                "Skipping row with mismatched field count"
            );
            skipped_rows += 1;
            continue;
        }

        let record: Record = columns.iter().cloned().zip(fields).collect();
        rows.push(record);
    }

    if rows.is_empty() {
        return Err(ParseError::NoDataRows.into());
    }

    tracing::debug!(
        origin = %origin,
        columns = columns.len(),
        rows = rows.len(),
        skipped = skipped_rows,
        "Parsed delimited input"
    );

    Ok(ParseOutcome {
        dataset: Dataset::new(DataFormat::Delimited, columns, rows, origin),
        skipped_rows,
    })
}

/// Serialize a dataset as delimited text
///
/// The header row is always emitted. Each data row emits one field per
/// schema column in schema order, with empty string for absent values,
/// newline-terminated.
pub fn serialize(dataset: &Dataset) -> String {
    let mut out = String::new();

    let header: Vec<String> = dataset.columns.iter().map(|c| escape_field(c)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in &dataset.rows {
        let fields: Vec<String> = dataset
            .columns
            .iter()
            .map(|column| escape_field(row.get_or_empty(column)))
            .collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

/// Split one line through the quoted-field grammar
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                // Two consecutive quotes inside quoted mode emit one
                // literal quote and do not toggle
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            other => current.push(other),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Quote a field if it contains a comma, a double quote, or a newline
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TabmaskError;

    #[test]
    fn test_parse_basic() {
        let outcome = parse("id,name\n1,Ali\n2,Veli\n", "test.csv").unwrap();
        let dataset = &outcome.dataset;

        assert_eq!(dataset.columns, vec!["id", "name"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.rows[0].get("name"), Some("Ali"));
        assert_eq!(dataset.rows[1].get("id"), Some("2"));
        assert_eq!(outcome.skipped_rows, 0);
        assert_eq!(dataset.format, DataFormat::Delimited);
        assert_eq!(dataset.origin, "test.csv");
    }

    #[test]
    fn test_parse_quoted_fields() {
        let outcome = parse(
            "name,note\n\"Doe, John\",\"said \"\"hi\"\"\"\n",
            "quoted.csv",
        )
        .unwrap();
        let row = &outcome.dataset.rows[0];

        assert_eq!(row.get("name"), Some("Doe, John"));
        assert_eq!(row.get("note"), Some("said \"hi\""));
    }

    #[test]
    fn test_parse_trims_fields_and_skips_blank_lines() {
        let outcome = parse("id , name\n\n 1 ,  Ali \n\n", "test.csv").unwrap();
        assert_eq!(outcome.dataset.columns, vec!["id", "name"]);
        assert_eq!(outcome.dataset.rows[0].get("name"), Some("Ali"));
    }

    #[test]
    fn test_parse_skips_mismatched_rows() {
        let outcome = parse("a,b\n1,2\n1,2,3\nonly-one\n3,4\n", "test.csv").unwrap();
        assert_eq!(outcome.dataset.row_count(), 2);
        assert_eq!(outcome.skipped_rows, 2);
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse("\n  \n", "empty.csv").unwrap_err();
        assert!(matches!(
            err,
            TabmaskError::Parse(ParseError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_no_data_rows() {
        let err = parse("a,b\n1,2,3\n", "bad.csv").unwrap_err();
        assert!(matches!(err, TabmaskError::Parse(ParseError::NoDataRows)));
    }

    #[test]
    fn test_serialize_escapes() {
        let row: Record = [
            ("name".to_string(), "Doe, John".to_string()),
            ("note".to_string(), "said \"hi\"".to_string()),
        ]
        .into_iter()
        .collect();
        let dataset = Dataset::new(
            DataFormat::Delimited,
            vec!["name".to_string(), "note".to_string()],
            vec![row],
            "out.csv",
        );

        let text = serialize(&dataset);
        assert_eq!(text, "name,note\n\"Doe, John\",\"said \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_serialize_absent_value_as_empty() {
        let row: Record = [("a".to_string(), "1".to_string())].into_iter().collect();
        let dataset = Dataset::new(
            DataFormat::Delimited,
            vec!["a".to_string(), "b".to_string()],
            vec![row],
            "out.csv",
        );

        assert_eq!(serialize(&dataset), "a,b\n1,\n");
    }

    #[test]
    fn test_round_trip() {
        let input = "id,email\n1,a@b.com\n2,c@d.org\n";
        let parsed = parse(input, "rt.csv").unwrap();
        let text = serialize(&parsed.dataset);
        let reparsed = parse(&text, "rt.csv").unwrap();

        assert_eq!(parsed.dataset.columns, reparsed.dataset.columns);
        assert_eq!(parsed.dataset.rows, reparsed.dataset.rows);
    }
}
