//! Tracker pipeline driving one frame end-to-end.
//!
//! [`LaneTracker`] holds only immutable parameters; all state carried across
//! frames lives in the caller's [`SequenceContext`]. Typical usage:
//! ```no_run
//! use lane_tracker::{FrameGeometry, LaneParams, LaneTracker, Segment};
//!
//! # fn example(frames: Vec<Vec<Segment>>) {
//! let tracker = LaneTracker::new(LaneParams::default());
//! let mut ctx = tracker.new_context();
//! let frame = FrameGeometry::new(960, 540);
//! for segments in &frames {
//!     for line in tracker.process(&mut ctx, segments, frame) {
//!         println!("{:?}: {:?}", line.side, line.endpoints());
//!     }
//! }
//! # }
//! ```
use super::params::LaneParams;
use crate::classify::{aggregate, classify_segments};
use crate::diagnostics::{FrameReport, SmoothingStage, TimingBreakdown};
use crate::extrapolate::extrapolate_line;
use crate::smoothing::SequenceContext;
use crate::types::{FrameGeometry, LaneLine, Segment, Side};
use log::{debug, warn};
use std::time::Instant;

/// Per-frame lane tracker: classify → aggregate → smooth → extrapolate.
#[derive(Clone, Debug)]
pub struct LaneTracker {
    params: LaneParams,
}

impl LaneTracker {
    pub fn new(params: LaneParams) -> Self {
        if params.history_capacity == 0 {
            warn!("LaneTracker::new history_capacity=0, clamping to 1");
        }
        Self { params }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Fresh smoothing context sized for this tracker's history window.
    pub fn new_context(&self) -> SequenceContext {
        SequenceContext::new(self.params.history_capacity)
    }

    /// Process one frame and return zero, one or two lane lines
    /// (right before left).
    pub fn process(
        &self,
        ctx: &mut SequenceContext,
        segments: &[Segment],
        frame: FrameGeometry,
    ) -> Vec<LaneLine> {
        self.process_with_diagnostics(ctx, segments, frame).lines
    }

    /// Process one frame and return the lines together with a detailed report.
    pub fn process_with_diagnostics(
        &self,
        ctx: &mut SequenceContext,
        segments: &[Segment],
        frame: FrameGeometry,
    ) -> FrameReport {
        let frame_index = ctx.frames_seen();
        debug!(
            "LaneTracker::process start frame={} w={} h={} segments={}",
            frame_index,
            frame.width,
            frame.height,
            segments.len()
        );
        let total_start = Instant::now();

        let classified = classify_segments(segments, frame, &self.params);
        let classify_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let counts = &classified.counts;
        debug!(
            "LaneTracker::process classify total={} vertical={} flat={} out_of_range={} left={} right={}",
            counts.total,
            counts.vertical,
            counts.near_horizontal,
            counts.out_of_range,
            counts.left,
            counts.right
        );

        let smooth_start = Instant::now();
        let mut lines = Vec::with_capacity(2);
        let mut smoothing = Vec::with_capacity(2);
        for side in Side::ALL {
            let bucket = classified.bucket(side);
            let agg = aggregate(bucket);
            let smoothed = agg.map(|sample| ctx.fold(side, sample));
            if let Some(estimate) = smoothed {
                let line = extrapolate_line(side, estimate, frame, &self.params);
                debug!(
                    "LaneTracker::process {} slope={:.3} x_ref={:.1} -> {:?}",
                    side.as_str(),
                    estimate.slope,
                    estimate.x_at_ref,
                    line.endpoints()
                );
                lines.push(line);
            } else {
                debug!("LaneTracker::process {} skipped (empty bucket)", side.as_str());
            }
            smoothing.push(SmoothingStage {
                side,
                bucket_len: bucket.len(),
                aggregate: agg,
                smoothed,
                history_len: ctx.history(side).len(),
            });
        }
        let smooth_ms = smooth_start.elapsed().as_secs_f64() * 1000.0;
        ctx.mark_frame();

        FrameReport {
            frame_index,
            lines,
            classification: classified.counts,
            smoothing,
            timing: TimingBreakdown {
                classify_ms,
                smooth_ms,
                total_ms: total_start.elapsed().as_secs_f64() * 1000.0,
            },
        }
    }
}
