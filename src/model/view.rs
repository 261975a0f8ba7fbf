use super::{INTERCEPT, NUM_PARAMS, SLOPE};

/// A read-only view over a flat `[slope, intercept]` parameter buffer.
///
/// The view *does not own* the parameters.
#[derive(Debug, Clone, Copy)]
pub struct LineView<'a> {
    params: &'a [f64],
}

impl<'a> LineView<'a> {
    pub fn new(params: &'a [f64]) -> Self {
        debug_assert!(params.len() >= NUM_PARAMS);
        Self { params }
    }

    #[inline]
    pub fn slope(&self) -> f64 {
        self.params[SLOPE]
    }

    #[inline]
    pub fn intercept(&self) -> f64 {
        self.params[INTERCEPT]
    }

    /// y = a*x + b
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope() * x + self.intercept()
    }
}
