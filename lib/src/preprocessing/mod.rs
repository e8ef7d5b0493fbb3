//! Data preprocessing for the training pipeline.
//!
//! Only min-max scaling is needed: the feature (and optionally the target) is
//! rescaled to `[0, 1]` so one fixed learning rate stays stable whatever the
//! magnitude of the raw values.
//!
//! # Example
//!
//! ```
//! use linfit::preprocessing::{denormalize, normalize};
//!
//! let (scaled, min, max) = normalize(&[10.0, 20.0, 30.0]).unwrap();
//! assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
//! assert_eq!(denormalize(&scaled, min, max).unwrap(), vec![10.0, 20.0, 30.0]);
//! ```

pub mod minmax;

pub use minmax::{denormalize, normalize, FittedMinMaxScaler, MinMaxScaler, NormalizationBounds};
