use crate::types::{Side, SlopeSample};
use nalgebra::Vector2;
use serde::Serialize;

/// Candidate samples collected for one side during a single frame.
#[derive(Clone, Debug, Serialize)]
pub struct Bucket {
    pub side: Side,
    pub samples: Vec<SlopeSample>,
}

impl Bucket {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            samples: Vec::new(),
        }
    }

    pub fn push(&mut self, sample: SlopeSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Unweighted mean of a bucket's slopes and reference-row x values.
///
/// Returns `None` for an empty bucket: the side has no aggregate this frame.
pub fn aggregate(bucket: &Bucket) -> Option<SlopeSample> {
    if bucket.is_empty() {
        return None;
    }
    let sum = bucket
        .samples
        .iter()
        .fold(Vector2::<f64>::zeros(), |acc, s| {
            acc + Vector2::new(s.slope, s.x_at_ref)
        });
    let mean = sum / bucket.len() as f64;
    Some(SlopeSample::new(mean.x, mean.y))
}
