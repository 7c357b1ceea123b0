use crate::error::{PrepError, Result};
use crate::record::FieldNames;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings for a preparation run. Every field has a default, so `{}` is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrepConfig {
    pub feature_field: String,
    pub label_field: String,
    /// Seed for the shuffle; fresh entropy when absent.
    pub seed: Option<u64>,
    /// Fraction of records held out for validation.
    pub validation_split: Option<f64>,
}

impl Default for PrepConfig {
    fn default() -> Self {
        let fields = FieldNames::default();
        Self {
            feature_field: fields.feature,
            label_field: fields.label,
            seed: None,
            validation_split: None,
        }
    }
}

impl PrepConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.feature_field.is_empty() || self.label_field.is_empty() {
            return Err(PrepError::Config(
                "feature_field and label_field must not be empty".to_string(),
            ));
        }
        if let Some(split) = self.validation_split {
            if !(split > 0.0 && split < 1.0) {
                return Err(PrepError::Config(format!(
                    "validation_split must be between 0 and 1, got {split}"
                )));
            }
        }
        Ok(())
    }

    pub fn field_names(&self) -> FieldNames {
        FieldNames::new(&self.feature_field, &self.label_field)
    }
}
