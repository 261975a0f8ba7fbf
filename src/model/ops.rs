//! Math kernels for the 1D line under squared error.
use rayon::prelude::*;

use super::{INTERCEPT, NUM_PARAMS, SLOPE, view::LineView};
use crate::data::Sample;

/// Datasets at least this long are reduced in parallel.
pub const PAR_THRESHOLD: usize = 4096;

/// Samples per parallel chunk. Partial sums are combined in chunk order, so
/// the result does not depend on how many threads rayon runs.
const CHUNK_SIZE: usize = 1024;

/// Computes the mean gradient of the squared residuals for y = a*x + b:
///
/// - d/da = (1/n) * sum_i (err_i * x_i)
/// - d/db = (1/n) * sum_i (err_i)
///
/// where err_i = a*x_i + b - y_i. Writes `[da, db]` into `grads`.
///
/// Requirements:
/// - params: flat [a, b]
/// - grads: flat [da, db]
/// - samples: non-empty
pub fn mse_grad(params: &[f64], grads: &mut [f64], samples: &[Sample]) {
    assert!(!samples.is_empty(), "dataset must be non-empty");
    assert!(params.len() >= NUM_PARAMS, "params too small for a line");
    assert!(grads.len() >= NUM_PARAMS, "grads too small for a line");

    let view = LineView::new(params);
    let (da, db) = reduce(
        samples,
        (0.0_f64, 0.0_f64),
        |chunk| grad_sums(view, chunk),
        |l, r| (l.0 + r.0, l.1 + r.1),
    );

    let n = samples.len() as f64;
    grads[SLOPE] = da / n;
    grads[INTERCEPT] = db / n;
}

/// Mean squared error of the line over `samples`:
///
/// loss = (1/n) * sum_i (a*x_i + b - y_i)^2
pub fn mse(params: &[f64], samples: &[Sample]) -> f64 {
    assert!(!samples.is_empty(), "dataset must be non-empty");

    let view = LineView::new(params);
    let total = reduce(samples, 0.0_f64, |chunk| squared_sum(view, chunk), |l, r| l + r);

    total / samples.len() as f64
}

fn grad_sums(view: LineView<'_>, samples: &[Sample]) -> (f64, f64) {
    let mut da = 0.0;
    let mut db = 0.0;

    for s in samples {
        let err = view.predict(s.x) - s.y;
        da += err * s.x;
        db += err;
    }

    (da, db)
}

fn squared_sum(view: LineView<'_>, samples: &[Sample]) -> f64 {
    samples
        .iter()
        .map(|s| (view.predict(s.x) - s.y).powi(2))
        .fold(0.0, |acc, e| acc + e)
}

fn reduce<T, P, C>(samples: &[Sample], zero: T, partial: P, combine: C) -> T
where
    T: Copy + Send,
    P: Fn(&[Sample]) -> T + Sync,
    C: Fn(T, T) -> T,
{
    if samples.len() < PAR_THRESHOLD {
        return partial(samples);
    }

    samples
        .par_chunks(CHUNK_SIZE)
        .map(|chunk| partial(chunk))
        .collect::<Vec<_>>()
        .into_iter()
        .fold(zero, combine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    #[test]
    fn grad_matches_hand_computed_case() {
        // y = 2x + 1 with a = b = 0
        // errs: [-3, -5, -7]
        // da = (-3*1 + -5*2 + -7*3) / 3 = -34/3
        // db = (-3 + -5 + -7) / 3 = -5
        let ds = Dataset::from_pairs([(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
        let params = [0.0, 0.0];
        let mut grads = [0.0, 0.0];

        mse_grad(&params, &mut grads, ds.samples());

        assert!((grads[SLOPE] + 34.0 / 3.0).abs() < 1e-12);
        assert!((grads[INTERCEPT] + 5.0).abs() < 1e-12);
    }

    #[test]
    fn grad_vanishes_on_exact_fit() {
        let ds = Dataset::from_pairs([(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
        let mut grads = [1.0, 1.0];

        mse_grad(&[2.0, 1.0], &mut grads, ds.samples());

        assert_eq!(grads, [0.0, 0.0]);
    }

    #[test]
    fn mse_is_mean_of_squared_residuals() {
        let ds = Dataset::from_pairs([(0.0, 1.0), (1.0, 1.0)]);
        // residuals with a = 1, b = 0: [-1, 0]
        assert_eq!(mse(&[1.0, 0.0], ds.samples()), 0.5);
    }

    #[test]
    fn parallel_reduction_agrees_with_sequential_sums() {
        let ds = Dataset::from_pairs(
            (0..PAR_THRESHOLD * 2).map(|i| (i as f64 * 1e-3, (i % 7) as f64)),
        );
        let params = [0.25, -0.5];
        let mut grads = [0.0, 0.0];

        mse_grad(&params, &mut grads, ds.samples());

        let (da, db) = grad_sums(LineView::new(&params), ds.samples());
        let n = ds.len() as f64;
        assert!((grads[SLOPE] - da / n).abs() < 1e-9);
        assert!((grads[INTERCEPT] - db / n).abs() < 1e-9);

        let expected = squared_sum(LineView::new(&params), ds.samples()) / n;
        assert!((mse(&params, ds.samples()) - expected).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "dataset must be non-empty")]
    fn empty_dataset_is_a_contract_violation() {
        mse(&[0.0, 0.0], &[]);
    }
}
