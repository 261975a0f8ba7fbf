use crate::data::Dataset;

/// Axis ranges for a dataset.
///
/// The ranges always contain `0` and reach at least `1`, so a dataset that
/// sits on a single point still gets a usable plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn of(dataset: &Dataset) -> Self {
        let floor = Self {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        };

        dataset.iter().fold(floor, |b, s| Self {
            min_x: b.min_x.min(s.x),
            max_x: b.max_x.max(s.x),
            min_y: b.min_y.min(s.y),
            max_y: b.max_y.max(s.y),
        })
    }

    /// Where `x` sits between `min_x` (0) and `max_x` (1).
    #[inline]
    pub fn fraction_x(&self, x: f64) -> f64 {
        fraction(x, self.min_x, self.max_x)
    }

    /// Where `y` sits between `min_y` (0) and `max_y` (1).
    #[inline]
    pub fn fraction_y(&self, y: f64) -> f64 {
        fraction(y, self.min_y, self.max_y)
    }
}

/// Works on halves, so ranges wider than `f64::MAX` stay finite. A zero or
/// non-finite range is measured as if it were `1` wide.
fn fraction(v: f64, min: f64, max: f64) -> f64 {
    let half_span = max / 2.0 - min / 2.0;
    if half_span == 0.0 || !half_span.is_finite() {
        return v - min;
    }

    (v / 2.0 - min / 2.0) / half_span
}
