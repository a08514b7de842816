use rand::Rng;

/// A small discrete weighted-choice sampler, for simulators that need to
/// draw from a handful of outcomes (e.g. measurement results) with
/// caller-supplied probabilities rather than a uniform coin flip.
#[derive(Debug, Clone)]
pub struct Choices {
    cumulative_weights: Vec<f64>,
}

impl Choices {
    /// # Panics
    /// Panics if `weights` is empty or any weight is negative.
    #[must_use]
    pub fn new(weights: &[f64]) -> Self {
        assert!(!weights.is_empty(), "Choices needs at least one weight");
        let mut total = 0.0;
        let cumulative_weights = weights
            .iter()
            .map(|w| {
                assert!(*w >= 0.0, "Choices weights must be non-negative");
                total += w;
                total
            })
            .collect();
        Self { cumulative_weights }
    }

    /// Samples an index in `0..weights.len()` proportional to its weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let total = *self.cumulative_weights.last().unwrap();
        let draw = rng.random::<f64>() * total;
        self.cumulative_weights
            .iter()
            .position(|&c| draw < c)
            .unwrap_or(self.cumulative_weights.len() - 1)
    }
}
