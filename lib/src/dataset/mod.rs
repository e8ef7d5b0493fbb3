//! In-memory paired samples and their loaders.
//!
//! A [`Samples`] value holds two equal-length sequences: the feature `x`
//! (e.g. mileage) and the target `y` (e.g. price). It is built once per run,
//! then only read by the scaler, the trainer and the metrics.
//!
//! # Example
//!
//! ```
//! use linfit::dataset::Samples;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let samples = Samples::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let (train, test) = samples.split(0.8, &mut rng).unwrap();
//! assert_eq!((train.len(), test.len()), (4, 1));
//! ```

use crate::error::{LinfitError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

pub mod loader;
pub use self::loader::{CsvLoader, LoadReport};

/// Paired feature/target sequences of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Samples {
    /// # Errors
    /// [`LinfitError::LengthMismatch`] if `x` and `y` differ in length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(LinfitError::LengthMismatch {
                expected: x.len(),
                got: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Shuffles the pairs and splits them into `(train, test)`.
    ///
    /// The train part holds `floor(n * train_ratio)` samples; with a ratio of
    /// `1.0` the test part is empty. Pairs are never separated.
    ///
    /// # Errors
    /// [`LinfitError::InvalidHyperparameter`] unless `0 < train_ratio <= 1`.
    pub fn split<R: Rng + ?Sized>(&self, train_ratio: f64, rng: &mut R) -> Result<(Self, Self)> {
        if !(train_ratio > 0.0 && train_ratio <= 1.0) {
            return Err(LinfitError::InvalidHyperparameter(format!(
                "train ratio must be in (0, 1], got {train_ratio}"
            )));
        }

        let mut pairs: Vec<(f64, f64)> = self.x.iter().copied().zip(self.y.iter().copied()).collect();
        pairs.shuffle(rng);

        let train_size = (pairs.len() as f64 * train_ratio) as usize;
        let test_pairs = pairs.split_off(train_size);

        Ok((Self::from_pairs(pairs), Self::from_pairs(test_pairs)))
    }

    fn from_pairs(pairs: Vec<(f64, f64)>) -> Self {
        let (x, y) = pairs.into_iter().unzip();
        Self { x, y }
    }
}
