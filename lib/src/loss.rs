//! Mean squared error loss used by the trainer.

use ndarray::Array1;

/// Mean Squared Error: `L = (1/n) * Σ(pred_i - target_i)^2`
///
/// Gradient w.r.t. prediction: `∂L/∂pred = (pred - target) / n`.
/// The factor of 2 is omitted and absorbed into the learning rate, so the
/// resulting parameter gradients are `mean(error)` and `mean(error * x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MSELoss;

impl MSELoss {
    /// Scalar loss value, used for the loss history.
    pub fn loss(&self, pred: &Array1<f64>, target: &Array1<f64>) -> f64 {
        let diff = pred - target;
        diff.dot(&diff) / diff.len() as f64
    }

    pub fn grad_wrt_prediction(&self, pred: &Array1<f64>, target: &Array1<f64>) -> Array1<f64> {
        let n = pred.len() as f64;
        (pred - target) / n
    }
}
