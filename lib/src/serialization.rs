//! Persistence of fitted parameters.
//!
//! A training run and a later prediction run share nothing but a small JSON
//! record:
//! ```json
//! { "theta0": 8499.6, "theta1": -0.0214, "x_min": 22899.0, "x_max": 240000.0,
//!   "target_normalized": false }
//! ```
//! `theta0`/`theta1` are always in original units, so a predictor can apply
//! them to raw inputs directly. The normalization bounds and the
//! `target_normalized` flag record how the parameters were produced.
//! Records written by older tools with `min_x`/`max_x` keys still load.

use crate::error::{LinfitError, Result};
use crate::model::{Fitted, LinearModel, LinearParams};
use crate::preprocessing::NormalizationBounds;
use crate::trainer::TrainingReport;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// On-disk representation of a fitted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub theta0: f64,
    pub theta1: f64,
    #[serde(default, alias = "min_x", skip_serializing_if = "Option::is_none")]
    pub x_min: Option<f64>,
    #[serde(default, alias = "max_x", skip_serializing_if = "Option::is_none")]
    pub x_max: Option<f64>,
    /// Whether the target was min-max scaled during training.
    #[serde(default)]
    pub target_normalized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_max: Option<f64>,
}

impl ParameterRecord {
    /// Record holding only the two coefficients.
    pub fn from_params(params: LinearParams) -> Self {
        Self {
            theta0: params.theta0,
            theta1: params.theta1,
            x_min: None,
            x_max: None,
            target_normalized: false,
            y_min: None,
            y_max: None,
        }
    }

    pub fn from_report(report: &TrainingReport) -> Self {
        Self {
            x_min: Some(report.x_bounds.min),
            x_max: Some(report.x_bounds.max),
            target_normalized: report.target_normalized(),
            y_min: report.y_bounds.map(|b| b.min),
            y_max: report.y_bounds.map(|b| b.max),
            ..Self::from_params(report.params())
        }
    }

    pub fn params(&self) -> LinearParams {
        LinearParams::new(self.theta0, self.theta1)
    }

    /// Feature bounds seen during training, when the record carries them.
    pub fn x_bounds(&self) -> Option<NormalizationBounds> {
        match (self.x_min, self.x_max) {
            (Some(min), Some(max)) => NormalizationBounds::new(min, max).ok(),
            _ => None,
        }
    }

    /// Inference model for the stored coefficients.
    pub fn to_model(&self) -> Result<LinearModel<Fitted>> {
        self.validate()?;
        Ok(LinearModel::<Fitted>::new(self.params()))
    }

    fn validate(&self) -> Result<()> {
        if !self.params().is_finite() {
            return Err(LinfitError::NonFiniteParameters {
                theta0: self.theta0,
                theta1: self.theta1,
            });
        }
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    /// [`LinfitError::NonFiniteParameters`] if either coefficient is NaN or infinite;
    /// such a record is never written.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        std::fs::write(path, json)?;
        debug!("saved parameters to '{}'", path.display());
        Ok(())
    }

    /// # Errors
    /// - [`LinfitError::MissingParameterFile`] if `path` does not exist
    /// - [`LinfitError::MalformedParameterFile`] if it is not a valid record
    /// - [`LinfitError::NonFiniteParameters`] if the coefficients are not finite
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LinfitError::MissingParameterFile {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let record: Self =
            serde_json::from_str(&text).map_err(|source| LinfitError::MalformedParameterFile {
                path: path.to_path_buf(),
                source,
            })?;
        record.validate()?;
        debug!("loaded parameters from '{}'", path.display());
        Ok(record)
    }
}
