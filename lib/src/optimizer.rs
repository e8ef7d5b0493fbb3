//! Parameter update rule.

use crate::error::{LinfitError, Result};
use crate::model::ParamOps;

/// Plain batch gradient descent:
/// ```text
/// θ ← θ - η · ∇L(θ)
/// ```
/// Stateless, no momentum and no adaptive step: η is fixed for the whole run.
///
/// # Example
/// ```
/// use linfit::model::LinearParams;
/// use linfit::optimizer::GradientDescent;
///
/// let gd = GradientDescent::new(0.1).unwrap();
/// let next = gd.step(&LinearParams::new(1.0, 1.0), &LinearParams::new(10.0, -10.0));
/// assert_eq!(next, LinearParams::new(0.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// # Errors
    /// [`LinfitError::InvalidHyperparameter`] unless `learning_rate` is finite and positive.
    pub fn new(learning_rate: f64) -> Result<Self> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(LinfitError::InvalidHyperparameter(format!(
                "learning rate must be a finite positive number, got {learning_rate}"
            )));
        }
        Ok(Self { learning_rate })
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the updated parameters; inputs are left untouched, so every
    /// component is moved using gradients of the same pre-update parameters.
    pub fn step<P: ParamOps>(&self, params: &P, gradients: &P) -> P {
        params.add(&gradients.scale(-self.learning_rate))
    }
}
