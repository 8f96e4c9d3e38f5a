//! Structured-object codec
//!
//! Parses and serializes the JSON array-of-flat-objects format. The column
//! schema is the sorted union of every key appearing in any object, so
//! heterogeneous records are all representable. Leaf values form a closed
//! set (string, number, bool, null); nested objects and arrays are
//! rejected with [`ParseError::InvalidStructure`] rather than silently
//! stringified.
//!
//! Serialization emits every schema column per row, with empty string
//! normalized to an explicit `null`. This is an intentional lossy
//! normalization: `null` round-trips to empty string, but empty string
//! round-trips to `null`. Downstream consumers may depend on either
//! convention, so it is preserved rather than "fixed".

use crate::domain::{DataFormat, Dataset, ParseError, ParseOutcome, Record, Result};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Parse a JSON array of flat objects into a dataset
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] for blank input,
/// [`ParseError::InvalidStructure`] when the top level is not an array of
/// objects or a leaf value is nested, and [`ParseError::NoDataRows`] when
/// the array is empty.
pub fn parse(content: &str, origin: &str) -> Result<ParseOutcome> {
    if content.trim().is_empty() {
        return Err(ParseError::EmptyInput.into());
    }

    let value: Value = serde_json::from_str(content)
        .map_err(|e| ParseError::InvalidStructure(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ParseError::InvalidStructure("top level is not an array".to_string()).into());
    };

    if items.is_empty() {
        return Err(ParseError::NoDataRows.into());
    }

    let mut objects = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => objects.push(map),
            other => {
                return Err(ParseError::InvalidStructure(format!(
                    "element {index} is not an object: {other}"
                ))
                .into());
            }
        }
    }

    // Schema = sorted union of every key in any object, not just the first
    let columns: Vec<String> = objects
        .iter()
        .flat_map(|obj| obj.keys().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    let mut rows = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        let mut record = Record::new();
        for column in &columns {
            let text = match object.get(column) {
                Some(value) => leaf_to_string(value, index, column)?,
                None => String::new(),
            };
            record.set(column.clone(), text);
        }
        rows.push(record);
    }

    tracing::debug!(
        origin = %origin,
        columns = columns.len(),
        rows = rows.len(),
        "Parsed structured input"
    );

    Ok(ParseOutcome {
        dataset: Dataset::new(DataFormat::Structured, columns, rows, origin),
        skipped_rows: 0,
    })
}

/// Serialize a dataset as an indented JSON array of objects
///
/// # Errors
///
/// Only fails on serde_json plumbing, which cannot happen for the value
/// tree built here; the signature keeps the codec interface uniform.
pub fn serialize(dataset: &Dataset) -> Result<String> {
    let mut items = Vec::with_capacity(dataset.rows.len());

    for row in &dataset.rows {
        // serde_json's default Map keeps keys sorted
        let mut object = Map::new();
        for column in &dataset.columns {
            let value = match row.get(column) {
                Some(text) if !text.is_empty() => Value::String(text.to_string()),
                // Empty string is normalized to an explicit null on export
                _ => Value::Null,
            };
            object.insert(column.clone(), value);
        }
        items.push(Value::Object(object));
    }

    Ok(serde_json::to_string_pretty(&Value::Array(items))?)
}

/// Convert one leaf value to its string form
fn leaf_to_string(value: &Value, row: usize, column: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
        Value::Null => Ok(String::new()),
        Value::Object(_) | Value::Array(_) => Err(ParseError::InvalidStructure(format!(
            "nested value at row {row}, column \"{column}\""
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TabmaskError;

    #[test]
    fn test_parse_basic() {
        let outcome = parse(
            r#"[{"id": 1, "email": "a@b.com"}, {"id": 2, "email": "c@d.org"}]"#,
            "test.json",
        )
        .unwrap();
        let dataset = &outcome.dataset;

        assert_eq!(dataset.columns, vec!["email", "id"]);
        assert_eq!(dataset.rows[0].get("id"), Some("1"));
        assert_eq!(dataset.rows[1].get("email"), Some("c@d.org"));
        assert_eq!(dataset.format, DataFormat::Structured);
        assert_eq!(outcome.skipped_rows, 0);
    }

    #[test]
    fn test_parse_heterogeneous_keys() {
        // Schema is the union of all keys, absent keys fill with ""
        let outcome = parse(r#"[{"a": "x"}, {"b": "y"}]"#, "test.json").unwrap();
        let dataset = &outcome.dataset;

        assert_eq!(dataset.columns, vec!["a", "b"]);
        assert_eq!(dataset.rows[0].get("a"), Some("x"));
        assert_eq!(dataset.rows[0].get("b"), Some(""));
        assert_eq!(dataset.rows[1].get("a"), Some(""));
        assert_eq!(dataset.rows[1].get("b"), Some("y"));
    }

    #[test]
    fn test_parse_leaf_conversions() {
        let outcome = parse(
            r#"[{"n": 3.5, "b": true, "z": null, "s": "text"}]"#,
            "test.json",
        )
        .unwrap();
        let row = &outcome.dataset.rows[0];

        assert_eq!(row.get("n"), Some("3.5"));
        assert_eq!(row.get("b"), Some("true"));
        assert_eq!(row.get("z"), Some(""));
        assert_eq!(row.get("s"), Some("text"));
    }

    #[test]
    fn test_parse_rejects_nested_values() {
        let err = parse(r#"[{"a": {"nested": 1}}]"#, "test.json").unwrap_err();
        assert!(matches!(
            err,
            TabmaskError::Parse(ParseError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse(r#"{"a": 1}"#, "test.json").unwrap_err();
        assert!(matches!(
            err,
            TabmaskError::Parse(ParseError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_parse_empty_array() {
        let err = parse("[]", "test.json").unwrap_err();
        assert!(matches!(err, TabmaskError::Parse(ParseError::NoDataRows)));
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse("   ", "test.json").unwrap_err();
        assert!(matches!(err, TabmaskError::Parse(ParseError::EmptyInput)));
    }

    #[test]
    fn test_serialize_empty_becomes_null() {
        let row: Record = [
            ("a".to_string(), "x".to_string()),
            ("b".to_string(), String::new()),
        ]
        .into_iter()
        .collect();
        let dataset = Dataset::new(
            DataFormat::Structured,
            vec!["a".to_string(), "b".to_string()],
            vec![row],
            "out.json",
        );

        let text = serialize(&dataset).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["a"], Value::String("x".to_string()));
        assert_eq!(value[0]["b"], Value::Null);
    }

    #[test]
    fn test_round_trip_preserves_non_empty_values() {
        let input = r#"[{"id": "1", "name": "Ali"}, {"id": "2", "name": "Veli"}]"#;
        let parsed = parse(input, "rt.json").unwrap();
        let text = serialize(&parsed.dataset).unwrap();
        let reparsed = parse(&text, "rt.json").unwrap();

        assert_eq!(parsed.dataset.columns, reparsed.dataset.columns);
        assert_eq!(parsed.dataset.rows, reparsed.dataset.rows);
    }
}
