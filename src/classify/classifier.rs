use super::bucket::Bucket;
use crate::tracker::params::LaneParams;
use crate::types::{FrameGeometry, Segment, Side, SlopeSample};
use serde::Serialize;

/// Per-frame counters emitted by the classifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationCounts {
    pub total: usize,
    pub vertical: usize,
    pub near_horizontal: usize,
    pub out_of_range: usize,
    pub left: usize,
    pub right: usize,
}

/// Output of [`classify_segments`]: both buckets and the counters.
#[derive(Clone, Debug)]
pub struct Classified {
    pub left: Bucket,
    pub right: Bucket,
    pub counts: ClassificationCounts,
}

impl Classified {
    pub fn bucket(&self, side: Side) -> &Bucket {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Sorts a frame's raw segments into left/right buckets by slope range.
///
/// Pure function of its inputs. An empty `segments` slice is the
/// "detector found nothing" case and yields two empty buckets.
pub fn classify_segments(
    segments: &[Segment],
    frame: FrameGeometry,
    params: &LaneParams,
) -> Classified {
    let y_ref = frame.row_at(params.ref_height_fraction);
    let mut left = Bucket::new(Side::Left);
    let mut right = Bucket::new(Side::Right);
    let mut counts = ClassificationCounts {
        total: segments.len(),
        ..Default::default()
    };

    for seg in segments {
        let Some(slope) = seg.slope() else {
            counts.vertical += 1;
            continue;
        };
        if slope.abs() < params.min_abs_slope {
            counts.near_horizontal += 1;
            continue;
        }
        let intercept = seg.intercept(slope);
        let sample = SlopeSample::new(slope, (y_ref - intercept) / slope);

        match side_for_slope(slope, params) {
            Some(Side::Right) => right.push(sample),
            Some(Side::Left) => left.push(sample),
            None => counts.out_of_range += 1,
        }
    }

    counts.left = left.len();
    counts.right = right.len();
    Classified {
        left,
        right,
        counts,
    }
}

/// Side whose inclusive slope window contains `slope`, right window first.
fn side_for_slope(slope: f64, params: &LaneParams) -> Option<Side> {
    if (params.min_pos_slope..=params.max_pos_slope).contains(&slope) {
        Some(Side::Right)
    } else if (params.min_neg_slope..=params.max_neg_slope).contains(&slope) {
        Some(Side::Left)
    } else {
        None
    }
}
