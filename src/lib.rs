#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod sequence;
pub mod tracker;
pub mod types;

// Stage-level building blocks, public for tools and tests.
pub mod classify;
pub mod config;
pub mod extrapolate;
pub mod io;
pub mod smoothing;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracker + per-sequence state.
pub use crate::smoothing::SequenceContext;
pub use crate::tracker::{LaneParams, LaneTracker};
pub use crate::types::{FrameGeometry, LaneLine, Segment, Side, SlopeSample};

// High-level diagnostics returned by the tracker.
pub use crate::diagnostics::FrameReport;

// Whole-sequence driver.
pub use crate::sequence::{run_sequence, run_sequences, FrameSequence, SequenceOutput};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use lane_tracker::prelude::*;
///
/// let tracker = LaneTracker::new(LaneParams::default());
/// let mut ctx = tracker.new_context();
/// let segments = [Segment::new(400, 500, 500, 450)];
/// let lines = tracker.process(&mut ctx, &segments, FrameGeometry::new(960, 540));
/// assert_eq!(lines[0].endpoints(), [322, 539, 726, 337]);
/// ```
pub mod prelude {
    pub use crate::{FrameGeometry, LaneLine, LaneParams, LaneTracker, SequenceContext};
    pub use crate::{Segment, Side};
}
