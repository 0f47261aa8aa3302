use crate::types::SlopeSample;
use nalgebra::Vector2;
use std::collections::VecDeque;

/// Bounded FIFO of raw per-frame aggregates for one side.
#[derive(Clone, Debug)]
pub struct History {
    samples: VecDeque<Vector2<f64>>,
    capacity: usize,
}

impl History {
    /// Create an empty history. A zero capacity is clamped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Fold a new aggregate into the moving average and return the average.
    ///
    /// The result is the mean of the retained samples plus `sample`, so a fold
    /// on an empty history returns `sample` unchanged. The oldest entry is
    /// evicted once the history grows past its capacity.
    pub fn fold(&mut self, sample: SlopeSample) -> SlopeSample {
        let new = Vector2::new(sample.slope, sample.x_at_ref);
        let sum = self
            .samples
            .iter()
            .fold(Vector2::<f64>::zeros(), |acc, s| acc + s);
        let mean = (sum + new) / (self.samples.len() + 1) as f64;

        self.samples.push_back(new);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
        SlopeSample::new(mean.x, mean.y)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Retained samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = SlopeSample> + '_ {
        self.samples.iter().map(|v| SlopeSample::new(v.x, v.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn first_fold_returns_sample() {
        let mut h = History::new(15);
        let out = h.fold(SlopeSample::new(-0.5, 590.0));
        assert_eq!(out, SlopeSample::new(-0.5, 590.0));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn fold_is_mean_of_all_samples_within_capacity() {
        let mut h = History::new(4);
        let slopes = [0.5f64, 0.6, 0.7, 0.8];
        let mut last = SlopeSample::new(0.0, 0.0);
        for (i, s) in slopes.iter().enumerate() {
            last = h.fold(SlopeSample::new(*s, 100.0 * (i + 1) as f64));
        }
        assert!(approx_eq(last.slope, 0.65), "slope={}", last.slope);
        assert!(approx_eq(last.x_at_ref, 250.0), "x={}", last.x_at_ref);
    }

    #[test]
    fn capacity_bounds_length_and_evicts_oldest() {
        let capacity = 3;
        let mut h = History::new(capacity);
        h.fold(SlopeSample::new(10.0, 1000.0));
        for _ in 0..capacity {
            h.fold(SlopeSample::new(0.5, 100.0));
            assert!(h.len() <= capacity);
        }
        assert_eq!(h.len(), capacity);
        assert!(h.iter().all(|s| s.slope == 0.5));
        let out = h.fold(SlopeSample::new(0.5, 100.0));
        assert_eq!(out, SlopeSample::new(0.5, 100.0));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut h = History::new(0);
        assert_eq!(h.capacity(), 1);
        h.fold(SlopeSample::new(0.6, 10.0));
        let out = h.fold(SlopeSample::new(0.8, 30.0));
        assert!(approx_eq(out.slope, 0.7));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn clear_behaves_like_fresh_history() {
        let mut h = History::new(5);
        h.fold(SlopeSample::new(0.7, 400.0));
        h.fold(SlopeSample::new(0.6, 420.0));
        h.clear();
        assert!(h.is_empty());
        let out = h.fold(SlopeSample::new(0.55, 333.0));
        assert_eq!(out, History::new(5).fold(SlopeSample::new(0.55, 333.0)));
    }
}
