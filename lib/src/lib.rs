//! # linfit
//!
//! Single-feature linear regression (`price ≈ theta0 + theta1 * km`) trained by
//! batch gradient descent, with strict separation between training and inference.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: the model carries its training state in the type
//!   system (`Unfitted` vs `Fitted`); only a fitted model can predict.
//! - **Training/Inference Separation**: a trained model holds only `theta0` and
//!   `theta1`; losses, the optimizer and the training loop live elsewhere.
//! - **Original units at the boundary**: training works on min-max normalized
//!   data, but every parameter that leaves the trainer is in raw units, so the
//!   predictor needs no knowledge of the normalization.
//!
//! ## Quick Start
//!
//! ```rust
//! use linfit::dataset::Samples;
//! use linfit::metrics::Metrics;
//! use linfit::model::InferenceModel;
//! use linfit::trainer::Trainer;
//!
//! let km = vec![240000.0, 139800.0, 150500.0, 185530.0, 176000.0, 114800.0];
//! let price = vec![3650.0, 3800.0, 4400.0, 4450.0, 5250.0, 5350.0];
//! let samples = Samples::new(km, price).unwrap();
//!
//! let report = Trainer::builder().iterations(2000).build().unwrap().fit(&samples).unwrap();
//! let estimate = report.model.predict(&100000.0);
//!
//! let preds = report.model.predict_batch(samples.x());
//! let metrics = Metrics::calculate_all(samples.y(), &preds).unwrap();
//! assert!(metrics.mse >= 0.0);
//! # let _ = estimate;
//! ```
//!
//! ## Module Structure
//!
//! - `dataset` — CSV loading and the `Samples` container
//! - `preprocessing` — min-max normalization
//! - `model` — the linear model and its state markers
//! - `loss` — mean squared error and its gradient
//! - `optimizer` — plain gradient descent
//! - `trainer` — the training loop and loss history
//! - `metrics` — MSE, RMSE, MAE and R²
//! - `serialization` — the JSON parameter record

pub mod dataset;

pub mod error;

/// Loss functions for model training.
pub mod loss;

/// Regression quality metrics.
pub mod metrics;

/// Linear model with compile-time state safety.
pub mod model;

/// Parameter update rule.
pub mod optimizer;

pub mod preprocessing;

pub mod serialization;

/// High-level training loop orchestration.
pub mod trainer;

pub use dataset::{CsvLoader, Samples};
pub use error::{LinfitError, Result};
pub use metrics::{Metrics, RegressionMetrics};
pub use model::{predict, Fitted, LinearModel, LinearParams, Unfitted};
pub use serialization::ParameterRecord;
pub use trainer::{train, Trainer, TrainerConfig, TrainingReport};
