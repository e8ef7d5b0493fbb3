use crate::cmd::prompt;

use linfit::model::InferenceModel;
use linfit::{CsvLoader, LinfitError, Metrics, ParameterRecord, Samples, Trainer};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::{Path, PathBuf};

/* =================== Public configuration types =================== */

#[derive(Debug)]
pub struct Config {
    pub params_path: PathBuf,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub enum Action {
    Train(Train),
    Predict(Predict),
    Evaluate(Evaluate),
}

#[derive(Debug, Clone)]
pub struct Train {
    pub data_path: PathBuf,
    pub strict: bool,
    pub delimiter: u8,
    pub learning_rate: f64,
    pub iterations: usize,
    pub normalize_target: bool,
    /// In `[0, 1)`; `0` trains on every row.
    pub test_ratio: f64,
    pub seed: Option<u64>,
    pub history_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Predict {
    pub km: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Evaluate {
    pub data_path: PathBuf,
    pub strict: bool,
    pub delimiter: u8,
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("dataset '{}': {source}", path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        source: LinfitError,
    },
    #[error(transparent)]
    Linfit(#[from] LinfitError),
}

/* =================== Entry point =================== */

impl Config {
    pub fn run(&self) -> Result<(), CmdError> {
        match &self.action {
            Action::Train(t) => self.run_train(t),
            Action::Predict(p) => self.run_predict(p),
            Action::Evaluate(e) => self.run_evaluate(e),
        }
    }
}

/* =================== Actions =================== */

impl Config {
    fn run_train(&self, t: &Train) -> Result<(), CmdError> {
        let samples = load_samples(&t.data_path, t.strict, t.delimiter)?;

        let (train_set, test_set) = if t.test_ratio > 0.0 {
            let train_ratio = 1.0 - t.test_ratio;
            let (train_set, test_set) = match t.seed {
                Some(seed) => samples.split(train_ratio, &mut StdRng::seed_from_u64(seed))?,
                None => samples.split(train_ratio, &mut rand::rng())?,
            };
            info!("split into {} train / {} test samples", train_set.len(), test_set.len());
            (train_set, Some(test_set))
        } else {
            (samples, None)
        };

        let trainer = Trainer::builder()
            .learning_rate(t.learning_rate)
            .iterations(t.iterations)
            .normalize_target(t.normalize_target)
            .record_history(t.history_path.is_some())
            .build()?;
        let report = trainer.fit(&train_set)?;

        // History first: a failed write must leave the previous record in place.
        if let Some(path) = &t.history_path {
            report.history.save_csv(path)?;
            info!("loss history ({} iterations) written to '{}'", report.history.len(), path.display());
        }

        let record = ParameterRecord::from_report(&report);
        record.save_to_file(&self.params_path)?;
        info!("parameters saved to '{}'", self.params_path.display());

        println!("theta0 = {:.6}", record.theta0);
        println!("theta1 = {:.6}", record.theta1);

        print_scores("train", &report.model, &train_set);
        if let Some(test_set) = test_set.filter(|s| !s.is_empty()) {
            print_scores("test", &report.model, &test_set);
        }
        Ok(())
    }

    fn run_predict(&self, p: &Predict) -> Result<(), CmdError> {
        let record = ParameterRecord::load_from_file(&self.params_path)?;
        let model = record.to_model()?;

        let km = match p.km {
            Some(km) if km.is_finite() => km,
            Some(km) => return Err(LinfitError::InvalidNumericInput(km.to_string()).into()),
            None => prompt::read_km(io::stdin().lock(), &mut io::stdout())?,
        };

        if km < 0.0 {
            warn!("a mileage of {km} km is negative");
        } else if let Some(bounds) = record.x_bounds() {
            if km < bounds.min || km > bounds.max {
                warn!(
                    "{km} km is outside the training range [{}, {}], the estimate is an extrapolation",
                    bounds.min, bounds.max
                );
            }
        }

        let price = model.predict(&km);
        if price < 0.0 {
            warn!("the estimated price is negative, the model does not hold at this mileage");
        } else if price == 0.0 {
            warn!("the estimated price is zero");
        }

        println!("Estimated price for {km} km: {price:.2}");
        Ok(())
    }

    fn run_evaluate(&self, e: &Evaluate) -> Result<(), CmdError> {
        let record = ParameterRecord::load_from_file(&self.params_path)?;
        let model = record.to_model()?;
        let samples = load_samples(&e.data_path, e.strict, e.delimiter)?;

        let preds = model.predict_batch(samples.x());
        let metrics = Metrics::calculate_all(samples.y(), &preds)?;
        println!("{metrics}");
        Ok(())
    }
}

/* =================== Helpers =================== */

fn load_samples(path: &Path, strict: bool, delimiter: u8) -> Result<Samples, CmdError> {
    let report = CsvLoader::new()
        .strict(strict)
        .delimiter(delimiter)
        .load(path)
        .map_err(|source| CmdError::Dataset {
            path: path.to_path_buf(),
            source,
        })?;
    if !report.skipped.is_empty() {
        warn!("{} malformed rows skipped", report.skipped.len());
    }
    Ok(report.samples)
}

/// Scores are informative only: an undefined metric is logged, not fatal.
fn print_scores<M>(label: &str, model: &M, samples: &Samples)
where
    M: InferenceModel<InputBatch = [f64], OutputBatch = Vec<f64>>,
{
    let preds = model.predict_batch(samples.x());
    match Metrics::calculate_all(samples.y(), &preds) {
        Ok(m) => println!(
            "{label}: MSE = {:.2}, RMSE = {:.2}, MAE = {:.2}, R² = {:.4}",
            m.mse, m.rmse, m.mae, m.r2
        ),
        Err(e) => warn!("cannot score the {label} set: {e}"),
    }
}
