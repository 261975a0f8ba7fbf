pub mod ops;
pub mod view;

use std::fmt;

use serde::Serialize;

pub use view::LineView;

/// Offset of the slope in a flat parameter buffer.
pub const SLOPE: usize = 0;
/// Offset of the intercept in a flat parameter buffer.
pub const INTERCEPT: usize = 1;
/// Parameters in a line: `[a, b]`.
pub const NUM_PARAMS: usize = 2;

/// A fitted line `y = slope * x + intercept` and its mean squared error
/// against the dataset it was fit on.
///
/// Always derived from a dataset; it carries no history of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Model {
    pub slope: f64,
    pub intercept: f64,
    pub loss: f64,
}

impl Model {
    /// Builds a model from a flat `[a, b]` buffer and the loss it scored.
    pub fn from_params(params: &[f64], loss: f64) -> Self {
        let view = LineView::new(params);
        Self {
            slope: view.slope(),
            intercept: view.intercept(),
            loss,
        }
    }

    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// The caption shown above the chart.
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y = {:.3} x + {:.3} (loss {:.4})",
            self.slope, self.intercept, self.loss
        )
    }
}
