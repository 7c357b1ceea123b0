//! Observations and the extraction of feature/label values from raw records.

use crate::dataset::Dataset;
use log::{debug, warn};
use serde_json::Value;

/// One observation with both quantities present.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub feature: f64,
    pub label: f64,
}

impl Record {
    pub fn new(feature: f64, label: f64) -> Self {
        Self { feature, label }
    }
}

/// Pulls the feature and label values out of a raw record.
///
/// Returning `None` marks the value as missing.
pub trait Extract<T: ?Sized> {
    fn feature(&self, raw: &T) -> Option<f64>;
    fn label(&self, raw: &T) -> Option<f64>;
}

impl<T, F, L> Extract<T> for (F, L)
where
    F: Fn(&T) -> Option<f64>,
    L: Fn(&T) -> Option<f64>,
{
    fn feature(&self, raw: &T) -> Option<f64> {
        (self.0)(raw)
    }

    fn label(&self, raw: &T) -> Option<f64> {
        (self.1)(raw)
    }
}

/// Field names of the feature and label inside a JSON object record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldNames {
    pub feature: String,
    pub label: String,
}

impl FieldNames {
    pub fn new(feature: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            label: label.into(),
        }
    }

    fn number(raw: &Value, field: &str) -> Option<f64> {
        raw.get(field).and_then(Value::as_f64)
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self::new("Horsepower", "Miles_per_Gallon")
    }
}

impl Extract<Value> for FieldNames {
    fn feature(&self, raw: &Value) -> Option<f64> {
        Self::number(raw, &self.feature)
    }

    fn label(&self, raw: &Value) -> Option<f64> {
        Self::number(raw, &self.label)
    }
}

/// Keeps the records whose feature and label are both present, in input order.
///
/// NaN and infinite values count as missing.
pub fn filter_valid<T, E>(raw: &[T], extract: &E) -> Dataset
where
    E: Extract<T> + ?Sized,
{
    let records: Vec<Record> = raw
        .iter()
        .filter_map(|r| {
            let feature = extract.feature(r).filter(|v| v.is_finite())?;
            let label = extract.label(r).filter(|v| v.is_finite())?;
            Some(Record::new(feature, label))
        })
        .collect();

    let dropped = raw.len() - records.len();
    if dropped > 0 {
        debug!("dropped {} of {} records with a missing field", dropped, raw.len());
    }
    if records.is_empty() && !raw.is_empty() {
        warn!("none of the {} input records has both fields", raw.len());
    }

    Dataset::new(records)
}
