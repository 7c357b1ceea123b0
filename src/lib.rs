//! Data preparation for single-feature regression: turns raw records into
//! shuffled, min-max normalized columns and keeps the bounds needed to map
//! model outputs back to original units.
//!
//! ```rust
//! use mpg_prep::{DataPreparer, FieldNames};
//! use serde_json::json;
//!
//! let raw = vec![
//!     json!({"Horsepower": 130, "Miles_per_Gallon": 18}),
//!     json!({"Horsepower": null, "Miles_per_Gallon": 20}),
//!     json!({"Horsepower": 165, "Miles_per_Gallon": 15}),
//! ];
//!
//! let prepared = DataPreparer::new(FieldNames::default())
//!     .prepare_seeded(&raw, 42)
//!     .unwrap();
//! assert_eq!(prepared.len(), 2);
//! assert_eq!(prepared.inputs().shape(), &[2, 1]);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod points;
pub mod preprocessing;
pub mod record;

pub use config::PrepConfig;
pub use dataset::Dataset;
pub use error::{PrepError, Result};
pub use pipeline::{DataPreparer, NormalizedDataset, prepare, prepare_with_config};
pub use points::ScatterPoint;
pub use preprocessing::{Bounds, MinMaxScaler, compute_bounds, denormalize, normalize};
pub use record::{Extract, FieldNames, Record, filter_valid};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
