//! Single-feature linear model `y = theta0 + theta1 * x`.
//!
//! - [`LinearRegression`] = `LinearModel<Unfitted>`, driven by the trainer in normalized space.
//! - `LinearModel<Fitted>`, inference-only, parameters in the original units of the data.
//!
use crate::model::{Fitted, InferenceModel, ParamOps, TrainableModel, Unfitted};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Intercept and slope of the fitted line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    pub theta0: f64,
    pub theta1: f64,
}

impl LinearParams {
    pub fn new(theta0: f64, theta1: f64) -> Self {
        Self { theta0, theta1 }
    }

    pub fn is_finite(&self) -> bool {
        self.theta0.is_finite() && self.theta1.is_finite()
    }
}

impl ParamOps for LinearParams {
    fn add(&self, other: &Self) -> Self {
        Self {
            theta0: self.theta0 + other.theta0,
            theta1: self.theta1 + other.theta1,
        }
    }

    fn scale(&self, factor: f64) -> Self {
        Self {
            theta0: self.theta0 * factor,
            theta1: self.theta1 * factor,
        }
    }
}

/// Applies the line to every input, preserving order and length.
pub fn predict(theta0: f64, theta1: f64, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| theta0 + theta1 * x).collect()
}

/// A linear model with its state at the type level.
///
/// - `S = Unfitted`: implements [`TrainableModel`].
/// - `S = Fitted`: implements [`InferenceModel`].
#[derive(Debug, Clone)]
pub struct LinearModel<S> {
    params: LinearParams,
    _state: PhantomData<S>,
}

impl<S> LinearModel<S> {
    pub fn theta0(&self) -> f64 {
        self.params.theta0
    }

    pub fn theta1(&self) -> f64 {
        self.params.theta1
    }
}

impl LinearModel<Fitted> {
    /// Wraps final parameters, already in original units.
    pub fn new(params: LinearParams) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    pub fn params(&self) -> LinearParams {
        self.params
    }
}

impl InferenceModel for LinearModel<Fitted> {
    type InputSingle = f64;
    type OutputSingle = f64;
    type InputBatch = [f64];
    type OutputBatch = Vec<f64>;

    fn predict(&self, input: &f64) -> f64 {
        self.params.theta0 + self.params.theta1 * input
    }

    fn predict_batch(&self, input: &[f64]) -> Vec<f64> {
        predict(self.params.theta0, self.params.theta1, input)
    }
}

/// Forward pass: `theta0 + theta1 * x`
/// Backward pass: `∇theta0 = Σ grad`, `∇theta1 = x · grad`
impl TrainableModel for LinearModel<Unfitted> {
    type Input = Array1<f64>;
    type Prediction = Array1<f64>;
    type Params = LinearParams;
    type Gradients = LinearParams;

    fn forward(&self, x: &Array1<f64>) -> Array1<f64> {
        let LinearParams { theta0, theta1 } = self.params;
        x.mapv(|xi| theta0 + theta1 * xi)
    }

    fn backward(&self, x: &Array1<f64>, grad_output: &Array1<f64>) -> LinearParams {
        LinearParams {
            theta0: grad_output.sum(),
            theta1: x.dot(grad_output),
        }
    }

    fn params(&self) -> &LinearParams {
        &self.params
    }

    fn update_params(&mut self, params: &LinearParams) {
        self.params = *params;
    }
}

/// Alias for an **unfitted** linear regression model.
pub type LinearRegression = LinearModel<Unfitted>;

impl LinearRegression {
    /// Zero-initialized model.
    pub fn new() -> Self {
        Self::from_params(LinearParams::default())
    }

    /// Model starting from explicit parameters (warm start, tests).
    pub fn from_params(params: LinearParams) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}
