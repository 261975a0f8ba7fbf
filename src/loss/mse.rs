use super::LossFn;
use crate::{data::Sample, model::ops};

/// Mean squared error loss function.
///
/// The gradient it reports is the mean residual gradient, without the factor
/// of two that differentiating the square would add; the learning rate
/// absorbs it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, params: &[f64], samples: &[Sample]) -> f64 {
        ops::mse(params, samples)
    }

    fn loss_prime(&self, params: &[f64], grad: &mut [f64], samples: &[Sample]) {
        ops::mse_grad(params, grad, samples)
    }
}
