/// A single observation (x, y).
///
/// Both components are finite; `Sample::new` refuses anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    /// Creates a sample, or `None` if either component is NaN or infinite.
    #[inline]
    pub fn new(x: f64, y: f64) -> Option<Self> {
        (x.is_finite() && y.is_finite()).then_some(Self { x, y })
    }
}

impl From<Sample> for (f64, f64) {
    fn from(s: Sample) -> Self {
        (s.x, s.y)
    }
}

/// The ordered samples a line gets fit to.
///
/// Immutable once built: a new upload produces a new `Dataset`, it never
/// appends to an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Builds a dataset from already validated samples, keeping their order.
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Builds a dataset from raw pairs, dropping any non-finite pair.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let samples = pairs
            .into_iter()
            .filter_map(|(x, y)| Sample::new(x, y))
            .collect();

        Self { samples }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Returns the samples as `(x, y)` tuples, in order.
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.samples.iter().copied().map(Into::into).collect()
    }
}

/// Four points on `y = x`, shown before anything is uploaded.
impl Default for Dataset {
    fn default() -> Self {
        Self::from_pairs([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)])
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rejects_non_finite_components() {
        assert!(Sample::new(1.0, 2.0).is_some());
        assert!(Sample::new(f64::NAN, 2.0).is_none());
        assert!(Sample::new(1.0, f64::INFINITY).is_none());
        assert!(Sample::new(f64::NEG_INFINITY, 0.0).is_none());
    }

    #[test]
    fn default_dataset_is_the_identity_line() {
        let ds = Dataset::default();
        assert_eq!(ds.len(), 4);
        assert_eq!(
            ds.to_pairs(),
            vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]
        );
    }

    #[test]
    fn from_pairs_keeps_order_and_drops_non_finite() {
        let ds = Dataset::from_pairs([(5.0, 5.0), (f64::NAN, 1.0), (1.0, 1.0)]);
        assert_eq!(ds.to_pairs(), vec![(5.0, 5.0), (1.0, 1.0)]);
    }
}
