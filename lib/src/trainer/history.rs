use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Per-iteration MSE recorded during one training run, in normalized space.
///
/// Diagnostic only: it is handed back to the caller of `fit` and never
/// persisted alongside the model parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LossHistory {
    losses: Vec<f64>,
}

#[derive(Serialize)]
struct HistoryRow {
    iteration: usize,
    mse: f64,
}

impl LossHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            losses: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, loss: f64) {
        self.losses.push(loss);
    }

    pub fn losses(&self) -> &[f64] {
        &self.losses
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.losses.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.losses.last().copied()
    }

    /// Writes `iteration,mse` rows, for plotting the convergence curve elsewhere.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (iteration, &mse) in self.losses.iter().enumerate() {
            wtr.serialize(HistoryRow { iteration, mse })?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }
}
