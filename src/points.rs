//! `{x, y}` pairs for a scatter plot, always in original units.

use crate::error::Result;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

impl ScatterPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Renders points as a JSON array of `{"x": .., "y": ..}` objects.
pub fn points_to_json(points: &[ScatterPoint]) -> Result<String> {
    Ok(serde_json::to_string(points)?)
}
