//! Min-Max Scaler.
//!
//! Rescales a single numeric sequence to `[0, 1]`:
//! ```text
//! x_scaled = (x - x_min) / (x_max - x_min)
//! ```
//! and maps scaled values back with the exact inverse
//! ```text
//! x = x_scaled * (x_max - x_min) + x_min
//! ```
//!
//! Bounds are learned once by [`MinMaxScaler::fit`] and then reused verbatim by the
//! returned [`FittedMinMaxScaler`], so held-out data is scaled with the training bounds.
//!
//! # Example
//! ```
//! use linfit::preprocessing::MinMaxScaler;
//!
//! let train = [10_000.0, 50_000.0, 90_000.0];
//! let scaler = MinMaxScaler::new().fit(&train).unwrap();
//! assert_eq!(scaler.transform(&[50_000.0]), vec![0.5]);
//! assert_eq!(scaler.inverse_transform(&[1.0]), vec![90_000.0]);
//! ```

use crate::error::{LinfitError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Learned `(min, max)` pair of a sequence. Invariant: `min < max` once fitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationBounds {
    pub min: f64,
    pub max: f64,
}

impl NormalizationBounds {
    /// Computes the bounds of `values`.
    ///
    /// # Errors
    /// - [`LinfitError::EmptyDataset`] if `values` is empty
    /// - [`LinfitError::DegenerateRange`] if all values are equal
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(LinfitError::EmptyDataset("cannot normalize an empty sequence"));
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::new(min, max)
    }

    /// Builds bounds from an explicit pair, rejecting `min >= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min == max {
            return Err(LinfitError::DegenerateRange { value: min });
        }
        match min.partial_cmp(&max) {
            Some(Ordering::Less) => Ok(Self { min, max }),
            _ => Err(LinfitError::InvalidHyperparameter(format!(
                "normalization bounds must satisfy min < max, got min = {min}, max = {max}"
            ))),
        }
    }

    /// `max - min`, strictly positive.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// MinMaxScaler (unfitted).
#[derive(Debug, Clone, Copy, Default)]
pub struct MinMaxScaler;

impl MinMaxScaler {
    pub fn new() -> Self {
        Self
    }

    /// Learn bounds from the training sequence.
    pub fn fit(&self, data: &[f64]) -> Result<FittedMinMaxScaler> {
        let bounds = NormalizationBounds::from_values(data)?;
        Ok(FittedMinMaxScaler { bounds })
    }

    /// Fit and transform in one step, keeping the fitted scaler for later reuse.
    pub fn fit_transform(&self, data: &[f64]) -> Result<(FittedMinMaxScaler, Vec<f64>)> {
        let fitted = self.fit(data)?;
        let scaled = fitted.transform(data);
        Ok((fitted, scaled))
    }
}

/// Fitted MinMaxScaler ready for inference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedMinMaxScaler {
    bounds: NormalizationBounds,
}

impl FittedMinMaxScaler {
    pub fn from_bounds(bounds: NormalizationBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> NormalizationBounds {
        self.bounds
    }

    pub fn min(&self) -> f64 {
        self.bounds.min
    }

    pub fn max(&self) -> f64 {
        self.bounds.max
    }

    /// Scale values with the fitted bounds. Values outside the training range
    /// land outside `[0, 1]`; that is expected for held-out data.
    pub fn transform(&self, data: &[f64]) -> Vec<f64> {
        let NormalizationBounds { min, .. } = self.bounds;
        let range = self.bounds.range();
        data.iter().map(|&x| (x - min) / range).collect()
    }

    pub fn inverse_transform(&self, data: &[f64]) -> Vec<f64> {
        let NormalizationBounds { min, .. } = self.bounds;
        let range = self.bounds.range();
        data.iter().map(|&x| x * range + min).collect()
    }
}

/// Normalize `xs` to `[0, 1]` with its own bounds, returning `(xs_norm, min, max)`.
pub fn normalize(xs: &[f64]) -> Result<(Vec<f64>, f64, f64)> {
    let (fitted, scaled) = MinMaxScaler::new().fit_transform(xs)?;
    Ok((scaled, fitted.min(), fitted.max()))
}

/// Inverse of [`normalize`].
///
/// # Errors
/// [`LinfitError::DegenerateRange`] when `min == max`, since no normalization
/// could have produced `xs_norm` from such bounds.
pub fn denormalize(xs_norm: &[f64], min: f64, max: f64) -> Result<Vec<f64>> {
    let bounds = NormalizationBounds::new(min, max)?;
    Ok(FittedMinMaxScaler::from_bounds(bounds).inverse_transform(xs_norm))
}
