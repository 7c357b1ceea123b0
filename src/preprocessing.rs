use crate::Vector;
use crate::error::{PrepError, Result};

/// Minimum and maximum of one quantity, used for min-max scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
            return Err(PrepError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// All values were equal, so there is no natural scale.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Exact minimum and maximum of `values`.
pub fn compute_bounds(values: &Vector) -> Result<Bounds> {
    if values.is_empty() {
        return Err(PrepError::EmptyInput);
    }

    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(PrepError::NonFiniteValue { index, value });
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    Bounds::new(min, max)
}

/// Scales one value into `[0, 1]`; degenerate bounds map everything to 0.
pub fn normalize_value(value: f64, bounds: &Bounds) -> f64 {
    if bounds.is_degenerate() {
        return 0.0;
    }
    (value - bounds.min) / bounds.range()
}

pub fn normalize(values: &Vector, bounds: &Bounds) -> Vector {
    values.mapv(|v| normalize_value(v, bounds))
}

/// Inverse of [`normalize_value`]. Degenerate bounds always give back `min`.
pub fn denormalize(normalized: f64, bounds: &Bounds) -> f64 {
    if bounds.is_degenerate() {
        return bounds.min;
    }
    normalized * bounds.range() + bounds.min
}

pub fn denormalize_all(normalized: &Vector, bounds: &Bounds) -> Vector {
    normalized.mapv(|v| denormalize(v, bounds))
}

#[derive(Clone, Debug, Default)]
pub struct MinMaxScaler {
    bounds: Option<Bounds>,
}

impl MinMaxScaler {
    pub fn new() -> Self {
        Self { bounds: None }
    }

    pub fn from_bounds(bounds: Bounds) -> Self {
        Self {
            bounds: Some(bounds),
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn fit(&mut self, data: &Vector) -> Result<()> {
        self.bounds = Some(compute_bounds(data)?);
        Ok(())
    }

    pub fn transform(&self, data: &Vector) -> Result<Vector> {
        let bounds = self.bounds.as_ref().ok_or(PrepError::NotFitted)?;
        Ok(normalize(data, bounds))
    }

    pub fn fit_transform(&mut self, data: &Vector) -> Result<Vector> {
        self.fit(data)?;
        self.transform(data)
    }

    pub fn inverse_transform(&self, data: &Vector) -> Result<Vector> {
        let bounds = self.bounds.as_ref().ok_or(PrepError::NotFitted)?;
        Ok(denormalize_all(data, bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use ndarray_rand::RandomExt;
    use ndarray_rand::rand_distr::Uniform;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_compute_bounds() {
        let bounds = compute_bounds(&array![3.0, -1.5, 7.25, 0.0]).unwrap();
        assert_eq!(bounds, Bounds { min: -1.5, max: 7.25 });
    }

    #[test]
    fn test_compute_bounds_empty() {
        assert!(matches!(
            compute_bounds(&Vector::zeros(0)),
            Err(PrepError::EmptyInput)
        ));
    }

    #[test]
    fn test_compute_bounds_rejects_non_finite_values() {
        assert!(matches!(
            compute_bounds(&array![f64::NAN, 1.0, 2.0]),
            Err(PrepError::NonFiniteValue { index: 0, .. })
        ));
        assert!(matches!(
            compute_bounds(&array![1.0, f64::NEG_INFINITY]),
            Err(PrepError::NonFiniteValue { index: 1, .. })
        ));

        let mut scaler = MinMaxScaler::new();
        assert!(scaler.fit(&array![3.0, f64::NAN]).is_err());
        assert_eq!(scaler.bounds(), None);
    }

    #[test]
    fn test_compute_bounds_rejects_overflowing_range() {
        assert!(matches!(
            compute_bounds(&array![-1.0e308, 0.0, 1.0e308]),
            Err(PrepError::InvalidBounds { .. })
        ));
        assert!(Bounds::new(-f64::MAX, f64::MAX).is_err());
        // wide but representable range still works
        let bounds = compute_bounds(&array![-1.0e307, 0.0, 1.0e307]).unwrap();
        let normalized = normalize(&array![-1.0e307, 1.0e307], &bounds);
        assert_eq!(normalized, array![0.0, 1.0]);
    }

    #[test]
    fn test_bounds_rejects_inverted_and_non_finite() {
        assert!(Bounds::new(2.0, 1.0).is_err());
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY).is_err());
        assert!(Bounds::new(1.0, 1.0).unwrap().is_degenerate());
    }

    #[test]
    fn test_normalize_range_and_endpoints() {
        let values = array![130.0, 165.0, 150.0, 140.0];
        let bounds = compute_bounds(&values).unwrap();
        let normalized = normalize(&values, &bounds);

        assert_eq!(normalized[0], 0.0);
        assert_eq!(normalized[1], 1.0);
        assert!(normalized.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_degenerate_fallback() {
        let values = array![5.0, 5.0, 5.0];
        let bounds = compute_bounds(&values).unwrap();
        assert_eq!(bounds, Bounds { min: 5.0, max: 5.0 });

        let normalized = normalize(&values, &bounds);
        assert_eq!(normalized, array![0.0, 0.0, 0.0]);
        assert_eq!(denormalize(0.0, &bounds), 5.0);
        assert_eq!(denormalize(0.7, &bounds), 5.0);
    }

    #[test]
    fn test_round_trip_random_values() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let values = Vector::random_using(64, Uniform::new(-1.0e3, 1.0e3), &mut rng);
            let bounds = compute_bounds(&values).unwrap();
            let restored = denormalize_all(&normalize(&values, &bounds), &bounds);

            for (a, b) in values.iter().zip(restored.iter()) {
                assert_abs_diff_eq!(a, b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_scaler_requires_fit() {
        let scaler = MinMaxScaler::new();
        assert!(matches!(
            scaler.transform(&array![1.0]),
            Err(PrepError::NotFitted)
        ));
        assert!(scaler.inverse_transform(&array![1.0]).is_err());
    }

    #[test]
    fn test_scaler_fit_transform_inverse() {
        let data = array![10.0, 20.0, 15.0];
        let mut scaler = MinMaxScaler::new();

        let scaled = scaler.fit_transform(&data).unwrap();
        assert_eq!(scaled, array![0.0, 1.0, 0.5]);
        assert_eq!(scaler.bounds(), Some(Bounds { min: 10.0, max: 20.0 }));

        let restored = scaler.inverse_transform(&scaled).unwrap();
        assert_abs_diff_eq!(restored[2], 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scaler_from_bounds_scales_new_values() {
        let scaler = MinMaxScaler::from_bounds(Bounds::new(0.0, 200.0).unwrap());
        let scaled = scaler.transform(&array![50.0, 250.0]).unwrap();
        assert_abs_diff_eq!(scaled[0], 0.25, epsilon = 1e-12);
        // values outside the fitted range are not clamped
        assert_abs_diff_eq!(scaled[1], 1.25, epsilon = 1e-12);
    }
}
