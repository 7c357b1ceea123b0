//! Parsing of raw JSON record arrays.
//!
//! Fetching the bytes is the caller's job; this module only turns a JSON
//! document of the form `[{...}, {...}]` into raw records.

use crate::error::{PrepError, Result};
use log::debug;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<Value>> {
    let document: Value = serde_json::from_reader(reader)?;
    into_records(document)
}

pub fn load_records_from_str(json: &str) -> Result<Vec<Value>> {
    let document: Value = serde_json::from_str(json)?;
    into_records(document)
}

pub fn load_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = load_records_from_reader(BufReader::new(file))?;
    debug!("loaded {} raw records from {}", records.len(), path.display());
    Ok(records)
}

fn into_records(document: Value) -> Result<Vec<Value>> {
    match document {
        Value::Array(records) => Ok(records),
        other => Err(PrepError::Format(format!(
            "expected a JSON array of records, found {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str() {
        let records = load_records_from_str(
            r#"[{"Name": "chevrolet chevelle malibu", "Horsepower": 130, "Miles_per_Gallon": 18},
                {"Name": "citroen ds-21 pallas", "Horsepower": 115, "Miles_per_Gallon": null}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Horsepower"], 130);
        assert!(records[1]["Miles_per_Gallon"].is_null());
    }

    #[test]
    fn test_load_from_reader() {
        let bytes = br#"[{"a": 1}]"#;
        let records = load_records_from_reader(&bytes[..]).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_non_array_document_is_rejected() {
        let err = load_records_from_str(r#"{"Horsepower": 1}"#).unwrap_err();
        assert!(matches!(err, PrepError::Format(_)));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            load_records_from_str("[{"),
            Err(PrepError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_records_from_path("/nonexistent/cars.json"),
            Err(PrepError::Io(_))
        ));
    }
}
