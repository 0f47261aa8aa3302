use super::history::History;
use crate::types::{Side, SlopeSample};
use log::debug;

/// Smoothing state for one continuous frame sequence (a video clip or an
/// independent batch of images).
///
/// A context must never be shared between unrelated sequences: call
/// [`SequenceContext::reset`] (or create a new context) whenever a new
/// sequence starts, otherwise the previous sequence's lane geometry leaks into
/// the first frames of the next one. The core cannot detect a missing reset.
///
/// Frames of one sequence must be folded in temporal order. Every mutating
/// call takes `&mut self`, so a context is driven by one thread at a time.
#[derive(Clone, Debug)]
pub struct SequenceContext {
    left: History,
    right: History,
    frames_seen: u64,
}

impl SequenceContext {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            left: History::new(history_capacity),
            right: History::new(history_capacity),
            frames_seen: 0,
        }
    }

    /// Fold this frame's aggregate for `side` and return the smoothed estimate.
    pub fn fold(&mut self, side: Side, sample: SlopeSample) -> SlopeSample {
        self.history_mut(side).fold(sample)
    }

    /// Clears both histories.
    pub fn reset(&mut self) {
        debug!(
            "SequenceContext::reset after {} frames (left={} right={})",
            self.frames_seen,
            self.left.len(),
            self.right.len()
        );
        self.left.clear();
        self.right.clear();
        self.frames_seen = 0;
    }

    pub fn history(&self, side: Side) -> &History {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn history_mut(&mut self, side: Side) -> &mut History {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Number of frames processed since creation or the last reset.
    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    pub(crate) fn mark_frame(&mut self) {
        self.frames_seen += 1;
    }
}
