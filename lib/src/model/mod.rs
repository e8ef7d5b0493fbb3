//! Linear model with its training state encoded in the type.
//!
//! Training and inference are kept apart: [`TrainableModel`] is implemented only by
//! the unfitted model and exposes the forward/backward passes the trainer drives,
//! [`InferenceModel`] only by the fitted model and exposes prediction.

pub mod linear;
pub mod state;

pub use linear::{predict, LinearModel, LinearParams, LinearRegression};
pub use state::{Fitted, Unfitted};

/// Interface the trainer uses to run gradient steps on a model.
pub trait TrainableModel {
    type Input;
    type Prediction;
    type Params;
    type Gradients;

    fn forward(&self, input: &Self::Input) -> Self::Prediction;

    /// Gradients of the loss w.r.t. the parameters, given `∂L/∂prediction`.
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients;

    fn params(&self) -> &Self::Params;

    fn update_params(&mut self, new_params: &Self::Params);
}

/// Arithmetic needed by the optimizer to combine parameters and gradients.
pub trait ParamOps: Clone {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, factor: f64) -> Self;
}

/// Prediction interface of a fitted model.
pub trait InferenceModel {
    type InputSingle;
    type OutputSingle;
    type InputBatch: ?Sized;
    type OutputBatch;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle;
    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch;
}
