//! Lane tracker orchestrating the per-frame pipeline.
//!
//! Overview
//! - Classifies the frame's raw segments into left/right buckets by slope
//!   window (see [`crate::classify`]).
//! - Reduces each non-empty bucket to an unweighted mean (slope, x at the
//!   reference row).
//! - Folds each mean into the side's moving average held by the caller's
//!   [`SequenceContext`](crate::SequenceContext).
//! - Extrapolates every smoothed estimate from the bottom row of the frame
//!   to the top of the region of interest.
//!
//! Modules
//! - [`params`] - configuration types used by the tracker and CLI.
//! - `pipeline` - the [`LaneTracker`] implementation.
//!
//! A side with no qualifying segments produces no line and leaves its history
//! untouched, so callers must tolerate frames with only one or no lines.

pub mod params;
mod pipeline;

pub use params::LaneParams;
pub use pipeline::LaneTracker;
