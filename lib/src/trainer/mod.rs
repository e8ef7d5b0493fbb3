//! Batch gradient descent for the single-feature linear model.
//!
//! The trainer owns one training run end to end:
//! 1. fit min-max bounds on `x` (and on `y` when target normalization is on),
//! 2. start from `theta0 = theta1 = 0` and take exactly `iterations` full-batch
//!    gradient steps on the normalized data,
//! 3. map the normalized-space parameters back to the original units.
//!
//! Everything a run produces (fitted model, bounds, loss history) comes back in a
//! [`TrainingReport`]; nothing is kept in the trainer between calls.
//!
//! # Example
//!
//! ```
//! use linfit::dataset::Samples;
//! use linfit::trainer::Trainer;
//!
//! let x: Vec<f64> = (0..10).map(f64::from).collect();
//! let y: Vec<f64> = x.iter().map(|v| 3.0 + 2.0 * v).collect();
//! let samples = Samples::new(x, y).unwrap();
//!
//! let trainer = Trainer::builder()
//!     .learning_rate(0.1)
//!     .iterations(5000)
//!     .build()
//!     .unwrap();
//! let report = trainer.fit(&samples).unwrap();
//!
//! assert!((report.model.theta0() - 3.0).abs() < 1e-2);
//! assert!((report.model.theta1() - 2.0).abs() < 1e-2);
//! ```

pub mod history;

pub use history::LossHistory;

use crate::dataset::Samples;
use crate::error::{LinfitError, Result};
use crate::loss::MSELoss;
use crate::model::{Fitted, LinearModel, LinearParams, LinearRegression, TrainableModel};
use crate::optimizer::GradientDescent;
use crate::preprocessing::{MinMaxScaler, NormalizationBounds};
use log::{debug, info};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Hyperparameters of a training run.
///
/// Defaults:
/// - `learning_rate`: 0.1
/// - `iterations`: 10 000
/// - `normalize_target`: false
/// - `record_history`: true
/// - `log_every`: 1 000
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    pub learning_rate: f64,
    pub iterations: usize,
    /// Also min-max scale `y` before the loop.
    pub normalize_target: bool,
    /// Keep the per-iteration MSE in the report.
    pub record_history: bool,
    /// Emit a `debug!` line every `log_every` iterations; `0` disables it.
    pub log_every: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            iterations: 10_000,
            normalize_target: false,
            record_history: true,
            log_every: 1_000,
        }
    }
}

/// Fluent builder for a [`Trainer`], starting from [`TrainerConfig::default`].
#[derive(Debug, Clone, Default)]
pub struct TrainerBuilder {
    config: TrainerConfig,
}

impl TrainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    pub fn normalize_target(mut self, normalize_target: bool) -> Self {
        self.config.normalize_target = normalize_target;
        self
    }

    pub fn record_history(mut self, record_history: bool) -> Self {
        self.config.record_history = record_history;
        self
    }

    pub fn log_every(mut self, log_every: usize) -> Self {
        self.config.log_every = log_every;
        self
    }

    /// # Errors
    /// [`LinfitError::InvalidHyperparameter`] for a non-positive or non-finite learning rate.
    pub fn build(self) -> Result<Trainer> {
        Trainer::from_config(self.config)
    }
}

/// Immutable, reusable gradient-descent trainer.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainerConfig,
    optimizer: GradientDescent,
    loss_fn: MSELoss,
}

/// Everything one call to [`Trainer::fit`] produced.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// Model with parameters in original units.
    pub model: LinearModel<Fitted>,
    /// Bounds fitted on the training feature; reuse them for held-out data.
    pub x_bounds: NormalizationBounds,
    /// Bounds fitted on the training target, when target normalization was on.
    pub y_bounds: Option<NormalizationBounds>,
    /// Empty unless `record_history` was set.
    pub history: LossHistory,
    pub iterations: usize,
}

impl TrainingReport {
    pub fn params(&self) -> LinearParams {
        self.model.params()
    }

    pub fn target_normalized(&self) -> bool {
        self.y_bounds.is_some()
    }
}

impl Trainer {
    pub fn builder() -> TrainerBuilder {
        TrainerBuilder::new()
    }

    pub fn from_config(config: TrainerConfig) -> Result<Self> {
        let optimizer = GradientDescent::new(config.learning_rate)?;
        Ok(Self {
            config,
            optimizer,
            loss_fn: MSELoss,
        })
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Runs the full training loop on `samples`.
    ///
    /// # Errors
    /// - [`LinfitError::EmptyDataset`] if there are no samples
    /// - [`LinfitError::DegenerateRange`] if `x` (or `y`, when normalized) is constant
    /// - [`LinfitError::NonFiniteParameters`] if the run diverged; lower the learning rate
    pub fn fit(&self, samples: &Samples) -> Result<TrainingReport> {
        if samples.is_empty() {
            return Err(LinfitError::EmptyDataset("cannot train on zero samples"));
        }

        let (x_scaler, x_norm) = MinMaxScaler::new().fit_transform(samples.x())?;
        let (y_bounds, y_ref) = if self.config.normalize_target {
            let (y_scaler, y_norm) = MinMaxScaler::new().fit_transform(samples.y())?;
            (Some(y_scaler.bounds()), y_norm)
        } else {
            (None, samples.y().to_vec())
        };

        let x = Array1::from(x_norm);
        let y = Array1::from(y_ref);

        let mut model = LinearRegression::new();
        let mut history = if self.config.record_history {
            LossHistory::with_capacity(self.config.iterations)
        } else {
            LossHistory::default()
        };

        for iteration in 0..self.config.iterations {
            let preds = model.forward(&x);
            let grad_preds = self.loss_fn.grad_wrt_prediction(&preds, &y);
            let grads = model.backward(&x, &grad_preds);
            let new_params = self.optimizer.step(model.params(), &grads);

            if self.config.record_history || self.should_log(iteration) {
                let loss = self.loss_fn.loss(&preds, &y);
                if self.config.record_history {
                    history.record(loss);
                }
                if self.should_log(iteration) {
                    debug!("iteration {iteration}: loss = {loss}");
                }
            }

            model.update_params(&new_params);
        }

        let normalized = *model.params();
        let params = to_original_units(normalized, &x_scaler.bounds(), y_bounds.as_ref());
        if !params.is_finite() {
            return Err(LinfitError::NonFiniteParameters {
                theta0: params.theta0,
                theta1: params.theta1,
            });
        }

        info!(
            "trained on {} samples for {} iterations: theta0 = {:.4}, theta1 = {:.6}",
            samples.len(),
            self.config.iterations,
            params.theta0,
            params.theta1
        );

        Ok(TrainingReport {
            model: LinearModel::<Fitted>::new(params),
            x_bounds: x_scaler.bounds(),
            y_bounds,
            history,
            iterations: self.config.iterations,
        })
    }

    fn should_log(&self, iteration: usize) -> bool {
        self.config.log_every > 0 && iteration % self.config.log_every == 0
    }
}

/// Maps parameters learned on normalized data back to the units of the raw data.
///
/// With only `x` normalized:
/// ```text
/// theta1' = theta1 / (x_max - x_min)
/// theta0' = theta0 - theta1' * x_min
/// ```
/// With `y` normalized as well, the line is additionally rescaled by `y_max - y_min`
/// and shifted by `y_min`.
pub fn to_original_units(
    params: LinearParams,
    x_bounds: &NormalizationBounds,
    y_bounds: Option<&NormalizationBounds>,
) -> LinearParams {
    let LinearParams { theta0, theta1 } = params;
    let x_range = x_bounds.range();
    match y_bounds {
        None => {
            let theta1_real = theta1 / x_range;
            LinearParams::new(theta0 - theta1_real * x_bounds.min, theta1_real)
        }
        Some(y_bounds) => {
            let y_range = y_bounds.range();
            let theta1_real = theta1 * y_range / x_range;
            let theta0_real = y_bounds.min + y_range * (theta0 - theta1 * x_bounds.min / x_range);
            LinearParams::new(theta0_real, theta1_real)
        }
    }
}

/// One-shot training with explicit hyperparameters, returning `(theta0, theta1)`
/// in original units.
pub fn train(
    x: &[f64],
    y: &[f64],
    learning_rate: f64,
    iterations: usize,
    normalize_target: bool,
) -> Result<(f64, f64)> {
    let samples = Samples::new(x.to_vec(), y.to_vec())?;
    let report = Trainer::builder()
        .learning_rate(learning_rate)
        .iterations(iterations)
        .normalize_target(normalize_target)
        .record_history(false)
        .build()?
        .fit(&samples)?;
    Ok((report.model.theta0(), report.model.theta1()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;
    use crate::model::InferenceModel;

    fn linear_samples() -> Samples {
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 + 2.0 * v).collect();
        Samples::new(x, y).unwrap()
    }

    fn car_samples() -> Samples {
        let km = vec![
            240000.0, 139800.0, 150500.0, 185530.0, 176000.0, 114800.0, 166800.0, 89000.0,
            144500.0, 84000.0, 82029.0, 63060.0, 74000.0, 97500.0, 67000.0, 76025.0, 48235.0,
            93000.0, 60949.0, 65674.0, 54000.0, 68500.0, 22899.0, 61789.0,
        ];
        let price = vec![
            3650.0, 3800.0, 4400.0, 4450.0, 5250.0, 5350.0, 5800.0, 5990.0, 5999.0, 6200.0,
            6390.0, 6390.0, 6600.0, 6800.0, 6800.0, 6900.0, 6900.0, 6990.0, 7490.0, 7555.0,
            7990.0, 7990.0, 7990.0, 8290.0,
        ];
        Samples::new(km, price).unwrap()
    }

    // === TrainerBuilder Tests ===

    #[test]
    fn test_trainer_builder_default_values() {
        let trainer = Trainer::builder().build().unwrap();
        assert_eq!(trainer.config(), &TrainerConfig::default());
        assert_eq!(trainer.config().learning_rate, 0.1);
        assert_eq!(trainer.config().iterations, 10_000);
        assert!(!trainer.config().normalize_target);
        assert!(trainer.config().record_history);
    }

    #[test]
    fn test_trainer_builder_chaining() {
        let trainer = Trainer::builder()
            .learning_rate(0.05)
            .iterations(250)
            .normalize_target(true)
            .record_history(false)
            .log_every(0)
            .build()
            .unwrap();

        let config = trainer.config();
        assert_eq!(config.learning_rate, 0.05);
        assert_eq!(config.iterations, 250);
        assert!(config.normalize_target);
        assert!(!config.record_history);
        assert_eq!(config.log_every, 0);
    }

    #[test]
    fn test_trainer_builder_rejects_bad_learning_rate() {
        let err = Trainer::builder().learning_rate(-1.0).build().unwrap_err();
        assert!(matches!(err, LinfitError::InvalidHyperparameter(_)));
    }

    // === Trainer Tests ===

    #[test]
    fn test_fit_perfect_line_converges() {
        let samples = linear_samples();
        let (theta0, theta1) = train(samples.x(), samples.y(), 0.1, 5000, false).unwrap();

        assert!((theta0 - 3.0).abs() < 1e-2, "theta0 = {theta0}");
        assert!((theta1 - 2.0).abs() < 1e-2, "theta1 = {theta1}");

        let preds = crate::model::predict(theta0, theta1, samples.x());
        let r2 = Metrics::r2(samples.y(), &preds).unwrap();
        assert!((r2 - 1.0).abs() < 1e-6, "r2 = {r2}");
    }

    #[test]
    fn test_fit_perfect_line_with_target_normalization() {
        let samples = linear_samples();
        let (theta0, theta1) = train(samples.x(), samples.y(), 0.1, 5000, true).unwrap();

        assert!((theta0 - 3.0).abs() < 1e-2, "theta0 = {theta0}");
        assert!((theta1 - 2.0).abs() < 1e-2, "theta1 = {theta1}");
    }

    #[test]
    fn test_both_conventions_agree_on_real_data() {
        let samples = car_samples();
        let (a0, a1) = train(samples.x(), samples.y(), 0.5, 20_000, false).unwrap();
        let (b0, b1) = train(samples.x(), samples.y(), 0.5, 20_000, true).unwrap();

        assert!((a0 - b0).abs() < 1.0, "{a0} vs {b0}");
        assert!((a1 - b1).abs() < 1e-5, "{a1} vs {b1}");
        // Price drops with mileage.
        assert!(a1 < 0.0);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let samples = car_samples();
        let trainer = Trainer::builder().iterations(2000).build().unwrap();
        let a = trainer.fit(&samples).unwrap();
        let b = trainer.fit(&samples).unwrap();

        assert_eq!(a.params().theta0.to_bits(), b.params().theta0.to_bits());
        assert_eq!(a.params().theta1.to_bits(), b.params().theta1.to_bits());
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_fit_records_one_loss_per_iteration() {
        let report = Trainer::builder()
            .iterations(300)
            .build()
            .unwrap()
            .fit(&linear_samples())
            .unwrap();

        assert_eq!(report.history.len(), 300);
        let first = report.history.first().unwrap();
        let last = report.history.last().unwrap();
        assert!(last < first, "loss should decrease: {first} -> {last}");
    }

    #[test]
    fn test_fit_without_history() {
        let report = Trainer::builder()
            .iterations(50)
            .record_history(false)
            .build()
            .unwrap()
            .fit(&linear_samples())
            .unwrap();
        assert!(report.history.is_empty());
    }

    #[test]
    fn test_fit_zero_iterations_returns_zero_line() {
        let report = Trainer::builder()
            .iterations(0)
            .build()
            .unwrap()
            .fit(&linear_samples())
            .unwrap();
        assert_eq!(report.params(), LinearParams::new(0.0, 0.0));
    }

    #[test]
    fn test_fit_first_step_updates_both_params_from_same_state() {
        // x_norm = [0, 1], y = [1, 3]; from (0, 0): error = [-1, -3]
        // g0 = -2, g1 = -1.5 -> with lr 1: theta = (2, 1.5) in normalized space.
        let samples = Samples::new(vec![0.0, 1.0], vec![1.0, 3.0]).unwrap();
        let report = Trainer::builder()
            .learning_rate(1.0)
            .iterations(1)
            .build()
            .unwrap()
            .fit(&samples)
            .unwrap();
        assert_eq!(report.params(), LinearParams::new(2.0, 1.5));
    }

    #[test]
    fn test_fit_reports_bounds() {
        let report = Trainer::builder()
            .iterations(10)
            .normalize_target(true)
            .build()
            .unwrap()
            .fit(&linear_samples())
            .unwrap();

        assert_eq!(report.x_bounds, NormalizationBounds::new(0.0, 9.0).unwrap());
        assert_eq!(report.y_bounds, Some(NormalizationBounds::new(3.0, 21.0).unwrap()));
        assert!(report.target_normalized());
    }

    #[test]
    fn test_fit_empty_dataset() {
        let samples = Samples::new(vec![], vec![]).unwrap();
        let err = Trainer::builder().build().unwrap().fit(&samples).unwrap_err();
        assert!(matches!(err, LinfitError::EmptyDataset(_)));
    }

    #[test]
    fn test_fit_constant_feature() {
        let samples = Samples::new(vec![4.0, 4.0, 4.0], vec![1.0, 2.0, 3.0]).unwrap();
        let err = Trainer::builder().build().unwrap().fit(&samples).unwrap_err();
        assert!(matches!(err, LinfitError::DegenerateRange { .. }));
    }

    #[test]
    fn test_fit_constant_target_only_fails_when_normalized() {
        let samples = Samples::new(vec![1.0, 2.0, 3.0], vec![7.0, 7.0, 7.0]).unwrap();

        let plain = Trainer::builder().iterations(5000).build().unwrap().fit(&samples).unwrap();
        assert!((plain.model.predict(&2.0) - 7.0).abs() < 1e-3);

        let err = Trainer::builder()
            .normalize_target(true)
            .build()
            .unwrap()
            .fit(&samples)
            .unwrap_err();
        assert!(matches!(err, LinfitError::DegenerateRange { .. }));
    }

    #[test]
    fn test_fit_divergence_is_an_error() {
        let err = Trainer::builder()
            .learning_rate(50.0)
            .iterations(2000)
            .build()
            .unwrap()
            .fit(&car_samples())
            .unwrap_err();
        assert!(matches!(err, LinfitError::NonFiniteParameters { .. }));
    }

    #[test]
    fn test_train_length_mismatch() {
        let err = train(&[1.0, 2.0], &[1.0], 0.1, 10, false).unwrap_err();
        assert!(matches!(err, LinfitError::LengthMismatch { .. }));
    }

    // === Denormalization Tests ===

    #[test]
    fn test_to_original_units_feature_only() {
        let x_bounds = NormalizationBounds::new(10.0, 20.0).unwrap();
        // y = 1 + 4 * x_norm, x_norm = (x - 10) / 10  =>  y = -3 + 0.4 x
        let real = to_original_units(LinearParams::new(1.0, 4.0), &x_bounds, None);
        assert!((real.theta0 + 3.0).abs() < 1e-12);
        assert!((real.theta1 - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_to_original_units_feature_and_target() {
        let x_bounds = NormalizationBounds::new(0.0, 9.0).unwrap();
        let y_bounds = NormalizationBounds::new(3.0, 21.0).unwrap();
        // y_norm = x_norm  =>  y = 3 + 2x
        let real = to_original_units(LinearParams::new(0.0, 1.0), &x_bounds, Some(&y_bounds));
        assert!((real.theta0 - 3.0).abs() < 1e-12);
        assert!((real.theta1 - 2.0).abs() < 1e-12);
    }
}
