//! Sequence driver: runs whole frame sequences through a [`LaneTracker`].
//!
//! Every sequence gets its own [`SequenceContext`], reset before the first
//! frame. Frames inside a sequence are processed strictly in order; distinct
//! sequences share nothing and can be processed in parallel.

use crate::diagnostics::FrameReport;
use crate::smoothing::SequenceContext;
use crate::tracker::LaneTracker;
use crate::types::{FrameGeometry, Segment};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One independent run of frames (a clip or an unrelated image batch).
///
/// A `None` frame means the detector reported no segments at all.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FrameSequence {
    pub name: String,
    #[serde(default)]
    pub frames: Vec<Option<Vec<Segment>>>,
}

impl FrameSequence {
    pub fn new(name: impl Into<String>, frames: Vec<Option<Vec<Segment>>>) -> Self {
        Self {
            name: name.into(),
            frames,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SequenceOutput {
    pub name: String,
    pub reports: Vec<FrameReport>,
    pub elapsed_ms: f64,
}

impl SequenceOutput {
    pub fn line_count(&self) -> usize {
        self.reports.iter().map(|r| r.lines.len()).sum()
    }
}

/// Reset `ctx` and run `frames` through the tracker in order.
pub fn run_sequence(
    tracker: &LaneTracker,
    ctx: &mut SequenceContext,
    frames: &[Option<Vec<Segment>>],
    frame: FrameGeometry,
) -> Vec<FrameReport> {
    ctx.reset();
    frames
        .iter()
        .map(|segments| {
            let segments = segments.as_deref().unwrap_or(&[]);
            tracker.process_with_diagnostics(ctx, segments, frame)
        })
        .collect()
}

/// Run every sequence on a fresh context; results keep the input order.
pub fn run_sequences(
    tracker: &LaneTracker,
    sequences: &[FrameSequence],
    frame: FrameGeometry,
    parallel: bool,
) -> Vec<SequenceOutput> {
    let run_one = |seq: &FrameSequence| {
        let start = Instant::now();
        let mut ctx = tracker.new_context();
        let reports = run_sequence(tracker, &mut ctx, &seq.frames, frame);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "run_sequences: '{}' frames={} elapsed_ms={:.3}",
            seq.name,
            reports.len(),
            elapsed_ms
        );
        SequenceOutput {
            name: seq.name.clone(),
            reports,
            elapsed_ms,
        }
    };

    if parallel {
        sequences.par_iter().map(run_one).collect()
    } else {
        sequences.iter().map(run_one).collect()
    }
}
