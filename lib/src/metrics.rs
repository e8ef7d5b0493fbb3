//! Regression quality metrics.
//!
//! All metrics take the true targets first and the predictions second, and
//! refuse to produce a number when the quantity is undefined: empty input is
//! [`LinfitError::EmptyDataset`], and R² of a constant target is
//! [`LinfitError::ZeroVariance`] rather than a made-up `0` or `1`.

use crate::error::{LinfitError, Result};
use serde::Serialize;
use std::fmt;

/// Metrics for evaluating regression models.
pub struct Metrics;

impl Metrics {
    /// Mean Squared Error.
    ///
    /// MSE = mean((y_true - y_pred)^2)
    pub fn mse(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
        check_lengths(y_true, y_pred)?;
        Ok(sum_squared_residuals(y_true, y_pred) / y_true.len() as f64)
    }

    /// Root Mean Squared Error, in the units of the target.
    pub fn rmse(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
        Ok(Self::mse(y_true, y_pred)?.sqrt())
    }

    /// Mean Absolute Error.
    ///
    /// MAE = mean(|y_true - y_pred|)
    pub fn mae(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
        check_lengths(y_true, y_pred)?;
        let sum_abs: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).abs())
            .sum();
        Ok(sum_abs / y_true.len() as f64)
    }

    /// Coefficient of determination.
    ///
    /// R² = 1 - SS_res / SS_tot
    ///
    /// where:
    /// - SS_res = sum((y_true - y_pred)^2)
    /// - SS_tot = sum((y_true - mean(y_true))^2)
    ///
    /// Can be negative when the model is worse than predicting the mean.
    pub fn r2(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
        check_lengths(y_true, y_pred)?;

        // Decided on the values: the rounded mean of a constant like 0.1 is off
        // by an ulp, which would leave a tiny non-zero SS_tot.
        if y_true.iter().all(|&t| t == y_true[0]) {
            return Err(LinfitError::ZeroVariance);
        }

        let mean_true = y_true.iter().sum::<f64>() / y_true.len() as f64;
        let ss_tot: f64 = y_true.iter().map(|&t| (t - mean_true).powi(2)).sum();

        Ok(1.0 - sum_squared_residuals(y_true, y_pred) / ss_tot)
    }

    /// All metrics at once.
    pub fn calculate_all(y_true: &[f64], y_pred: &[f64]) -> Result<RegressionMetrics> {
        let mse = Self::mse(y_true, y_pred)?;
        Ok(RegressionMetrics {
            mse,
            rmse: mse.sqrt(),
            mae: Self::mae(y_true, y_pred)?,
            r2: Self::r2(y_true, y_pred)?,
        })
    }
}

fn check_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.is_empty() {
        return Err(LinfitError::EmptyDataset("cannot evaluate on zero samples"));
    }
    if y_true.len() != y_pred.len() {
        return Err(LinfitError::LengthMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    Ok(())
}

fn sum_squared_residuals(y_true: &[f64], y_pred: &[f64]) -> f64 {
    y_true
        .iter()
        .zip(y_pred)
        .map(|(&t, &p)| (t - p).powi(2))
        .sum()
}

/// MSE, RMSE, MAE and R² of one prediction run. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
}

impl fmt::Display for RegressionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MSE  = {:.2}", self.mse)?;
        writeln!(f, "RMSE = {:.2}", self.rmse)?;
        writeln!(f, "MAE  = {:.2}", self.mae)?;
        write!(f, "R²   = {:.4}", self.r2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mse_perfect() {
        let y = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Metrics::mse(&y, &y).unwrap(), 0.0);
    }

    #[test]
    fn test_mse_error() {
        let y_true = [1.0, 2.0, 3.0, 4.0];
        let y_pred = [2.0, 3.0, 4.0, 5.0];
        assert!((Metrics::mse(&y_true, &y_pred).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mae() {
        let y_true = [3.0, -0.5, 2.0, 7.0];
        let y_pred = [2.5, 0.0, 2.0, 8.0];
        assert!((Metrics::mae(&y_true, &y_pred).unwrap() - 0.5).abs() < 1e-12);
        assert!((Metrics::mse(&y_true, &y_pred).unwrap() - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_r2_known_value() {
        let y_true = [3.0, -0.5, 2.0, 7.0];
        let y_pred = [2.5, 0.0, 2.0, 8.0];
        let r2 = Metrics::r2(&y_true, &y_pred).unwrap();
        assert!((r2 - 0.948_608_137).abs() < 1e-6, "r2 = {r2}");
    }

    #[test]
    fn test_r2_perfect() {
        let y = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Metrics::r2(&y, &y).unwrap(), 1.0);
    }

    #[test]
    fn test_r2_mean_predictor_is_zero() {
        let y_true = [1.0, 2.0, 3.0];
        let y_pred = [2.0, 2.0, 2.0];
        assert!(Metrics::r2(&y_true, &y_pred).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_r2_can_be_negative() {
        let y_true = [1.0, 2.0, 3.0];
        let y_pred = [3.0, 2.0, 1.0];
        assert!(Metrics::r2(&y_true, &y_pred).unwrap() < 0.0);
    }

    #[test]
    fn test_r2_constant_target_is_zero_variance() {
        let y_true = [7.0, 7.0, 7.0];
        for y_pred in [[7.0, 7.0, 7.0], [1.0, 2.0, 3.0]] {
            let err = Metrics::r2(&y_true, &y_pred).unwrap_err();
            assert!(matches!(err, LinfitError::ZeroVariance));
        }
    }

    #[test]
    fn test_r2_inexact_constant_target_is_zero_variance() {
        let cases: [(&[f64], &[f64]); 2] = [
            (&[0.1, 0.1, 0.1], &[1.1, 1.1, 1.1]),
            (&[0.7; 5], &[0.0, 0.5, 0.7, 1.0, 2.0]),
        ];
        for (y_true, y_pred) in cases {
            let res = Metrics::r2(y_true, y_pred);
            assert!(
                matches!(res, Err(LinfitError::ZeroVariance)),
                "constant target {y_true:?} gave {res:?}"
            );
        }
    }

    #[test]
    fn test_calculate_all_inexact_constant_target_fails() {
        let err = Metrics::calculate_all(&[0.1; 4], &[0.2; 4]).unwrap_err();
        assert!(matches!(err, LinfitError::ZeroVariance));
    }

    #[test]
    fn test_metrics_non_negative() {
        let y_true = [10.0, -4.0, 0.5, 3.0];
        let y_pred = [-2.0, 6.0, 0.5, 100.0];
        assert!(Metrics::mse(&y_true, &y_pred).unwrap() >= 0.0);
        assert!(Metrics::mae(&y_true, &y_pred).unwrap() >= 0.0);
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(
            Metrics::mse(&[], &[]).unwrap_err(),
            LinfitError::EmptyDataset(_)
        ));
        assert!(matches!(
            Metrics::mae(&[], &[]).unwrap_err(),
            LinfitError::EmptyDataset(_)
        ));
        assert!(matches!(
            Metrics::r2(&[], &[]).unwrap_err(),
            LinfitError::EmptyDataset(_)
        ));
    }

    #[test]
    fn test_length_mismatch_fails() {
        let err = Metrics::mse(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, LinfitError::LengthMismatch { .. }));
    }

    #[test]
    fn test_calculate_all() {
        let y = [1.0, 2.0, 3.0, 4.0];
        let metrics = Metrics::calculate_all(&y, &y).unwrap();
        assert_eq!(metrics.mse, 0.0);
        assert_eq!(metrics.rmse, 0.0);
        assert_eq!(metrics.mae, 0.0);
        assert_eq!(metrics.r2, 1.0);
    }

    #[test]
    fn test_metrics_display() {
        let metrics = RegressionMetrics {
            mse: 445645.25,
            rmse: 667.57,
            mae: 557.83,
            r2: 0.73297,
        };
        let text = metrics.to_string();
        assert!(text.contains("MSE  = 445645.25"));
        assert!(text.contains("R²   = 0.7330"));
    }
}
