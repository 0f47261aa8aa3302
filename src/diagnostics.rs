//! Structured per-frame diagnostics returned by
//! [`LaneTracker::process_with_diagnostics`](crate::LaneTracker::process_with_diagnostics).

use crate::classify::ClassificationCounts;
use crate::types::{LaneLine, Side, SlopeSample};
use serde::Serialize;

/// Smoothing outcome for one side in one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothingStage {
    pub side: Side,
    /// Number of segments that landed in the side's bucket.
    pub bucket_len: usize,
    /// Mean of the bucket, `None` when the bucket was empty.
    pub aggregate: Option<SlopeSample>,
    /// Moving average after folding `aggregate`; absent when nothing was folded.
    pub smoothed: Option<SlopeSample>,
    /// History length after the fold.
    pub history_len: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub classify_ms: f64,
    pub smooth_ms: f64,
    pub total_ms: f64,
}

/// Full report for one processed frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    /// Index of the frame within its sequence (0 after a reset).
    pub frame_index: u64,
    pub lines: Vec<LaneLine>,
    pub classification: ClassificationCounts,
    pub smoothing: Vec<SmoothingStage>,
    pub timing: TimingBreakdown,
}

impl FrameReport {
    pub fn line(&self, side: Side) -> Option<&LaneLine> {
        self.lines.iter().find(|l| l.side == side)
    }

    pub fn stage(&self, side: Side) -> Option<&SmoothingStage> {
        self.smoothing.iter().find(|s| s.side == side)
    }
}
