use log::debug;

use super::Hyperparams;
use crate::{
    data::Dataset,
    loss::{LossFn, Mse},
    model::{Model, NUM_PARAMS},
    optimization::{GradientDescent, Optimizer},
};

/// Full-batch trainer for a line. Contains the relevant components needed
/// for fitting: the dataset, the parameters, the optimizer and the loss.
///
/// Every `step` uses the gradient over the whole dataset. There is no
/// shuffling, no early stopping and no convergence check: `run` always
/// finishes the configured amount of epochs.
pub struct Trainer<'d, O = GradientDescent, L = Mse>
where
    O: Optimizer,
    L: LossFn,
{
    dataset: &'d Dataset,
    optimizer: O,
    loss_fn: L,

    params: [f64; NUM_PARAMS],
    grad: [f64; NUM_PARAMS],
    epoch: usize,
    epochs: usize,
}

impl<'d> Trainer<'d> {
    /// Returns a gradient descent trainer under mean squared error, starting
    /// from `a = 0, b = 0`.
    ///
    /// # Arguments
    /// * `dataset` - The samples to fit; must be non-empty.
    /// * `hyperparams` - Learning rate and amount of epochs.
    pub fn new(dataset: &'d Dataset, hyperparams: &Hyperparams) -> Self {
        let optimizer = GradientDescent::new(hyperparams.learning_rate);
        Self::with_parts(dataset, optimizer, Mse, hyperparams.epochs)
    }
}

impl<'d, O, L> Trainer<'d, O, L>
where
    O: Optimizer,
    L: LossFn,
{
    /// Returns a new `Trainer` from its parts.
    ///
    /// # Arguments
    /// * `dataset` - The samples to fit; must be non-empty.
    /// * `optimizer` - Dictates how parameters move on each gradient.
    /// * `loss_fn` - Measures the fit and provides its gradient.
    /// * `epochs` - Total epochs `run` will reach.
    ///
    /// # Panics
    /// If `dataset` is empty.
    pub fn with_parts(dataset: &'d Dataset, optimizer: O, loss_fn: L, epochs: usize) -> Self {
        assert!(!dataset.is_empty(), "dataset must be non-empty");

        Self {
            dataset,
            optimizer,
            loss_fn,
            params: [0.0; NUM_PARAMS],
            grad: [0.0; NUM_PARAMS],
            epoch: 0,
            epochs,
        }
    }

    /// Epochs completed so far.
    #[inline]
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// The current `[a, b]` parameters.
    #[inline]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Loss at the current parameters.
    pub fn loss(&self) -> f64 {
        self.loss_fn.loss(&self.params, self.dataset.samples())
    }

    /// Performs a single epoch: one gradient over the whole dataset and one
    /// parameter update.
    pub fn step(&mut self) {
        self.loss_fn
            .loss_prime(&self.params, &mut self.grad, self.dataset.samples());
        self.optimizer.update_params(&mut self.params, &self.grad);
        self.epoch += 1;
    }

    /// Runs the remaining epochs and scores the result.
    ///
    /// # Returns
    /// The fitted model.
    pub fn run(mut self) -> Model {
        while self.epoch < self.epochs {
            self.step();
        }

        let model = Model::from_params(&self.params, self.loss());
        debug!(
            slope = model.slope,
            intercept = model.intercept,
            loss = model.loss,
            epochs = self.epoch,
            samples = self.dataset.len();
            "fit finished"
        );

        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_origin() {
        let ds = Dataset::default();
        let trainer = Trainer::new(&ds, &Hyperparams::default());
        assert_eq!(trainer.params(), &[0.0, 0.0]);
        assert_eq!(trainer.epoch(), 0);
    }

    #[test]
    fn first_step_follows_the_mean_gradient() {
        // default dataset: da = mean(-x * x) = -3.5, db = mean(-x) = -1.5
        let ds = Dataset::default();
        let mut trainer = Trainer::new(&ds, &Hyperparams::default());

        trainer.step();

        assert!((trainer.params()[0] - 0.0035).abs() < 1e-15);
        assert!((trainer.params()[1] - 0.0015).abs() < 1e-15);
        assert_eq!(trainer.epoch(), 1);
    }

    #[test]
    fn run_stops_at_the_configured_epochs() {
        let ds = Dataset::default();
        let hp = Hyperparams::new(0.001, 7);
        let mut trainer = Trainer::new(&ds, &hp);
        trainer.step();
        trainer.step();

        let stepped = trainer.run();
        let direct = Trainer::new(&ds, &hp).run();

        assert_eq!(stepped, direct);
    }

    #[test]
    fn zero_epochs_scores_the_initial_line() {
        let ds = Dataset::default();
        let model = Trainer::new(&ds, &Hyperparams::new(0.001, 0)).run();

        assert_eq!(model.slope, 0.0);
        assert_eq!(model.intercept, 0.0);
        // mean(x^2) over 0..=3
        assert_eq!(model.loss, 3.5);
    }

    #[test]
    #[should_panic(expected = "dataset must be non-empty")]
    fn empty_dataset_panics() {
        let ds = Dataset::new(vec![]);
        Trainer::new(&ds, &Hyperparams::default());
    }
}
