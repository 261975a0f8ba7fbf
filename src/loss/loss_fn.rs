use crate::data::Sample;

pub trait LossFn {
    fn loss(&self, params: &[f64], samples: &[Sample]) -> f64;
    fn loss_prime(&self, params: &[f64], grad: &mut [f64], samples: &[Sample]);
}
