mod trainer;

pub use trainer::Trainer;

use crate::{data::Dataset, model::Model};

/// Default step length.
pub const LEARNING_RATE: f64 = 0.001;
/// Default amount of full-batch epochs.
pub const EPOCHS: usize = 2000;

/// Fixed knobs of a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparams {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl Hyperparams {
    pub fn new(learning_rate: f64, epochs: usize) -> Self {
        Self {
            learning_rate,
            epochs,
        }
    }
}

impl Default for Hyperparams {
    fn default() -> Self {
        Self::new(LEARNING_RATE, EPOCHS)
    }
}

/// Fits `y = a*x + b` to `dataset` by full-batch gradient descent.
///
/// Pure and deterministic: the same dataset and hyperparameters always give
/// bit-identical results.
///
/// # Panics
/// If `dataset` is empty.
pub fn fit(dataset: &Dataset, hyperparams: &Hyperparams) -> Model {
    Trainer::new(dataset, hyperparams).run()
}
