use serde::{Deserialize, Serialize};

/// Raw line segment reported by the upstream detector, in pixel coordinates.
///
/// Serialized as a bare `[x1, y1, x2, y2]` array, matching the layout most
/// probabilistic Hough implementations emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Segment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Slope `dy/dx`, or `None` for vertical segments.
    pub fn slope(&self) -> Option<f64> {
        if self.x1 == self.x2 {
            return None;
        }
        Some((self.y2 - self.y1) as f64 / (self.x2 - self.x1) as f64)
    }

    /// Y-intercept of the segment's supporting line for a given slope.
    #[inline]
    pub fn intercept(&self, slope: f64) -> f64 {
        self.y2 as f64 - slope * self.x2 as f64
    }
}

impl From<[i32; 4]> for Segment {
    fn from(v: [i32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Segment> for [i32; 4] {
    fn from(s: Segment) -> Self {
        [s.x1, s.y1, s.x2, s.y2]
    }
}

/// Lane boundary side. Decided by slope range only, never by screen position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Right, Side::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Frame dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
}

impl FrameGeometry {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Row at `fraction` of the frame height, measured from the top.
    #[inline]
    pub fn row_at(&self, fraction: f64) -> f64 {
        self.height as f64 * fraction
    }
}

/// (slope, x at reference row) pair: one bucket entry, a per-frame aggregate
/// or a smoothed estimate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlopeSample {
    pub slope: f64,
    pub x_at_ref: f64,
}

impl SlopeSample {
    pub const fn new(slope: f64, x_at_ref: f64) -> Self {
        Self { slope, x_at_ref }
    }
}

/// Final extrapolated lane boundary for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneLine {
    pub side: Side,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LaneLine {
    pub fn endpoints(&self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_segment_has_no_slope() {
        assert_eq!(Segment::new(10, 0, 10, 50).slope(), None);
    }

    #[test]
    fn slope_and_intercept_follow_end_point() {
        let seg = Segment::new(400, 500, 500, 450);
        let slope = seg.slope().unwrap();
        assert_eq!(slope, -0.5);
        assert_eq!(seg.intercept(slope), 700.0);
    }

    #[test]
    fn segment_serializes_as_array() {
        let seg = Segment::new(1, 2, 3, 4);
        let json = serde_json::to_string(&seg).unwrap();
        assert_eq!(json, "[1,2,3,4]");
        let back: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seg);
    }
}
