use crate::error::{PrepError, Result};
use crate::points::ScatterPoint;
use crate::record::Record;
use crate::{Matrix, Vector};
use ndarray::Axis;
use rand::Rng;
use rand::seq::SliceRandom;

/// Ordered sequence of complete records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Permutes the records in place (Fisher-Yates) using `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.records.shuffle(rng);
    }

    /// Splits into order-aligned feature and label columns.
    pub fn split(&self) -> (Vector, Vector) {
        let features = self.records.iter().map(|r| r.feature).collect();
        let labels = self.records.iter().map(|r| r.label).collect();
        (features, labels)
    }

    /// Feature column as an `n x 1` matrix.
    pub fn feature_matrix(&self) -> Matrix {
        let (features, _) = self.split();
        features.insert_axis(Axis(1))
    }

    /// Label column as an `n x 1` matrix.
    pub fn label_matrix(&self) -> Matrix {
        let (_, labels) = self.split();
        labels.insert_axis(Axis(1))
    }

    /// Head/tail split of the current order; the tail holds `test_fraction` of the records.
    pub fn train_test_split(&self, test_fraction: f64) -> Result<(Self, Self)> {
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(PrepError::InvalidSplit(test_fraction));
        }

        let n_test = (self.len() as f64 * test_fraction).round() as usize;
        let n_train = self.len() - n_test;
        let (train, test) = self.records.split_at(n_train);

        Ok((Self::new(train.to_vec()), Self::new(test.to_vec())))
    }

    /// Records as `{x, y}` points in original units.
    pub fn to_points(&self) -> Vec<ScatterPoint> {
        self.records
            .iter()
            .map(|r| ScatterPoint::new(r.feature, r.label))
            .collect()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
