//! Slope-based segment classification and per-frame aggregation.
//!
//! Each frame's raw segments are sorted into two [`Bucket`]s:
//!
//! - Vertical segments (`x1 == x2`) are dropped, their slope is undefined.
//! - Near-horizontal segments (`|slope| < min_abs_slope`) are dropped; they are
//!   mostly road texture and would blow up the `1/slope` terms below.
//! - Every surviving segment is summarised by its slope and the x coordinate
//!   where its supporting line crosses the reference row
//!   `y_ref = height * ref_height_fraction`. Expressing segments at a common
//!   row lets geometrically distinct pieces of the same boundary be averaged.
//! - Positive slopes inside `[min_pos_slope, max_pos_slope]` go to the right
//!   bucket, negative slopes inside `[min_neg_slope, max_neg_slope]` to the
//!   left one. Everything else is treated as a non-lane artifact.
//!
//! Buckets are rebuilt every frame. [`aggregate`] reduces a bucket to one
//! unweighted mean sample, or `None` when nothing qualified this frame.

mod bucket;
mod classifier;

pub use bucket::{aggregate, Bucket};
pub use classifier::{classify_segments, ClassificationCounts, Classified};
