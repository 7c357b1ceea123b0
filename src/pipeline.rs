//! End-to-end preparation: filter, shuffle, split, bound and normalize.

use crate::config::PrepConfig;
use crate::dataset::Dataset;
use crate::error::{PrepError, Result};
use crate::points::ScatterPoint;
use crate::preprocessing::{Bounds, MinMaxScaler, denormalize_all, normalize};
use crate::record::{Extract, FieldNames, filter_valid};
use crate::{Matrix, Vector};
use log::{debug, info, warn};
use ndarray::{Axis, s};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

/// Normalized, order-aligned feature and label columns plus the bounds needed
/// to map values back to original units.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedDataset {
    features: Vector,
    labels: Vector,
    pub feature_bounds: Bounds,
    pub label_bounds: Bounds,
}

impl NormalizedDataset {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &Vector {
        &self.features
    }

    pub fn labels(&self) -> &Vector {
        &self.labels
    }

    /// Model inputs as an `n x 1` matrix.
    pub fn inputs(&self) -> Matrix {
        self.features.clone().insert_axis(Axis(1))
    }

    /// Model targets as an `n x 1` matrix.
    pub fn targets(&self) -> Matrix {
        self.labels.clone().insert_axis(Axis(1))
    }

    /// Scales raw feature values with the stored feature bounds.
    pub fn normalize_inputs(&self, raw: &Vector) -> Vector {
        normalize(raw, &self.feature_bounds)
    }

    /// Maps normalized model outputs back to label units.
    pub fn denormalize_predictions(&self, predictions: &Vector) -> Vector {
        denormalize_all(predictions, &self.label_bounds)
    }

    /// Points in original units, in the dataset's (shuffled) order.
    pub fn to_points(&self) -> Vec<ScatterPoint> {
        let xs = denormalize_all(&self.features, &self.feature_bounds);
        let ys = denormalize_all(&self.labels, &self.label_bounds);
        xs.iter()
            .zip(ys.iter())
            .map(|(&x, &y)| ScatterPoint::new(x, y))
            .collect()
    }

    /// Head/tail split; both halves keep the bounds computed over the full data.
    pub fn train_validation_split(&self, validation_fraction: f64) -> Result<(Self, Self)> {
        if !(validation_fraction > 0.0 && validation_fraction < 1.0) {
            return Err(PrepError::InvalidSplit(validation_fraction));
        }

        let n_validation = (self.len() as f64 * validation_fraction).round() as usize;
        let n_train = self.len() - n_validation;

        let train = Self {
            features: self.features.slice(s![..n_train]).to_owned(),
            labels: self.labels.slice(s![..n_train]).to_owned(),
            feature_bounds: self.feature_bounds,
            label_bounds: self.label_bounds,
        };
        let validation = Self {
            features: self.features.slice(s![n_train..]).to_owned(),
            labels: self.labels.slice(s![n_train..]).to_owned(),
            feature_bounds: self.feature_bounds,
            label_bounds: self.label_bounds,
        };

        Ok((train, validation))
    }
}

/// Turns raw records into a [`NormalizedDataset`] using `extract` to read the
/// feature and label of each record.
#[derive(Clone, Debug)]
pub struct DataPreparer<E> {
    extract: E,
}

impl<E> DataPreparer<E> {
    pub fn new(extract: E) -> Self {
        Self { extract }
    }

    pub fn prepare<T, R>(&self, raw: &[T], rng: &mut R) -> Result<NormalizedDataset>
    where
        E: Extract<T>,
        R: Rng + ?Sized,
    {
        prepare(raw, &self.extract, rng)
    }

    pub fn prepare_seeded<T>(&self, raw: &[T], seed: u64) -> Result<NormalizedDataset>
    where
        E: Extract<T>,
    {
        self.prepare(raw, &mut StdRng::seed_from_u64(seed))
    }
}

impl DataPreparer<FieldNames> {
    pub fn from_config(config: &PrepConfig) -> Self {
        Self::new(config.field_names())
    }
}

/// Bounds and normalizes an already filtered and shuffled dataset.
fn normalize_dataset(dataset: &Dataset) -> Result<NormalizedDataset> {
    let (features, labels) = dataset.split();

    let mut feature_scaler = MinMaxScaler::new();
    let mut label_scaler = MinMaxScaler::new();
    let normalized_features = feature_scaler.fit_transform(&features)?;
    let normalized_labels = label_scaler.fit_transform(&labels)?;

    let feature_bounds = feature_scaler.bounds().ok_or(PrepError::NotFitted)?;
    let label_bounds = label_scaler.bounds().ok_or(PrepError::NotFitted)?;

    for (name, bounds) in [("feature", &feature_bounds), ("label", &label_bounds)] {
        if bounds.is_degenerate() {
            warn!("all {name} values equal {}, normalizing to 0", bounds.min);
        }
    }

    info!(
        "prepared {} records: feature in [{}, {}], label in [{}, {}]",
        dataset.len(),
        feature_bounds.min,
        feature_bounds.max,
        label_bounds.min,
        label_bounds.max
    );

    Ok(NormalizedDataset {
        features: normalized_features,
        labels: normalized_labels,
        feature_bounds,
        label_bounds,
    })
}

/// Runs the full pipeline over `raw` with a caller-supplied random source.
pub fn prepare<T, E, R>(raw: &[T], extract: &E, rng: &mut R) -> Result<NormalizedDataset>
where
    E: Extract<T> + ?Sized,
    R: Rng + ?Sized,
{
    let mut dataset = filter_valid(raw, extract);
    debug!("{} of {} records are complete", dataset.len(), raw.len());
    if dataset.is_empty() {
        return Err(PrepError::EmptyInput);
    }
    dataset.shuffle(rng);
    normalize_dataset(&dataset)
}

/// Prepares JSON records as described by `config`, seeding the shuffle from
/// `config.seed` when set.
pub fn prepare_with_config(raw: &[Value], config: &PrepConfig) -> Result<NormalizedDataset> {
    config.validate()?;
    let preparer = DataPreparer::from_config(config);
    match config.seed {
        Some(seed) => preparer.prepare_seeded(raw, seed),
        None => preparer.prepare(raw, &mut StdRng::from_entropy()),
    }
}
