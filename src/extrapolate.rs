//! Extrapolation of a smoothed lane estimate to pixel endpoints.
//!
//! The estimate is stored as a slope and the x where the line crosses the
//! reference row. The extrapolated line always spans from the bottom row of
//! the frame (`height - 1`) up to the top of the region of interest
//! (`height * roi_top_fraction`, truncated).

use crate::tracker::params::LaneParams;
use crate::types::{FrameGeometry, LaneLine, Side, SlopeSample};

/// Vertical span shared by every extrapolated line of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSpan {
    pub y_bottom: i32,
    pub y_top: i32,
}

impl LineSpan {
    pub fn for_frame(frame: FrameGeometry, params: &LaneParams) -> Self {
        let height = i32::try_from(frame.height).unwrap_or(i32::MAX);
        Self {
            y_bottom: height - 1,
            y_top: frame.row_at(params.roi_top_fraction) as i32,
        }
    }
}

/// Convert a smoothed estimate into a [`LaneLine`] for `side`.
///
/// X coordinates are truncated toward zero.
pub fn extrapolate_line(
    side: Side,
    estimate: SlopeSample,
    frame: FrameGeometry,
    params: &LaneParams,
) -> LaneLine {
    let y_ref = frame.row_at(params.ref_height_fraction);
    let intercept = y_ref - estimate.slope * estimate.x_at_ref;
    let span = LineSpan::for_frame(frame, params);
    let x_at = |y: i32| ((y as f64 - intercept) / estimate.slope) as i32;
    LaneLine {
        side,
        x1: x_at(span.y_bottom),
        y1: span.y_bottom,
        x2: x_at(span.y_top),
        y2: span.y_top,
    }
}
