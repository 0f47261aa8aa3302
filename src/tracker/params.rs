//! Parameter types configuring the lane tracker stages.
//!
//! This module groups the slope acceptance windows used by the classifier,
//! the moving-average window of the smoother and the two row fractions that
//! anchor the reference line and the extrapolated lane span.
//!
//! Defaults are tuned for forward-facing dash-cam footage where lane
//! boundaries meet the bottom of the frame at roughly 30 to 40 degrees.

use serde::{Deserialize, Serialize};

/// Tracker-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Segments with `|slope|` below this are discarded as near-horizontal.
    pub min_abs_slope: f64,
    /// Inclusive slope window for the right boundary (image y grows downward).
    pub min_pos_slope: f64,
    pub max_pos_slope: f64,
    /// Inclusive slope window for the left boundary.
    pub min_neg_slope: f64,
    pub max_neg_slope: f64,
    /// Number of per-frame aggregates kept in the moving-average window (>=1).
    pub history_capacity: usize,
    /// Fraction of frame height where extrapolated lines stop (top of the ROI).
    pub roi_top_fraction: f64,
    /// Fraction of frame height of the reference row used to average segments.
    pub ref_height_fraction: f64,
}

impl Default for LaneParams {
    fn default() -> Self {
        Self {
            min_abs_slope: 0.01,
            min_pos_slope: 0.5,
            max_pos_slope: 0.8,
            min_neg_slope: -0.8,
            max_neg_slope: -0.5,
            history_capacity: 15,
            roi_top_fraction: 5.0 / 8.0,
            ref_height_fraction: 3.0 / 4.0,
        }
    }
}

impl LaneParams {
    /// Checks the parameters for values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        let values = [
            ("min_abs_slope", self.min_abs_slope),
            ("min_pos_slope", self.min_pos_slope),
            ("max_pos_slope", self.max_pos_slope),
            ("min_neg_slope", self.min_neg_slope),
            ("max_neg_slope", self.max_neg_slope),
            ("roi_top_fraction", self.roi_top_fraction),
            ("ref_height_fraction", self.ref_height_fraction),
        ];
        if let Some((name, v)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{name} must be finite, got {v}"));
        }
        if self.min_abs_slope < 0.0 {
            return Err(format!(
                "min_abs_slope must be non-negative, got {}",
                self.min_abs_slope
            ));
        }
        if self.min_pos_slope > self.max_pos_slope {
            return Err(format!(
                "positive slope window is empty: [{}, {}]",
                self.min_pos_slope, self.max_pos_slope
            ));
        }
        if self.min_neg_slope > self.max_neg_slope {
            return Err(format!(
                "negative slope window is empty: [{}, {}]",
                self.min_neg_slope, self.max_neg_slope
            ));
        }
        if self.history_capacity == 0 {
            return Err("history_capacity must be at least 1".to_string());
        }
        for (name, v) in [
            ("roi_top_fraction", self.roi_top_fraction),
            ("ref_height_fraction", self.ref_height_fraction),
        ] {
            if v <= 0.0 || v > 1.0 {
                return Err(format!("{name} must lie in (0, 1], got {v}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = LaneParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.history_capacity, 15);
        assert_eq!(params.roi_top_fraction, 0.625);
        assert_eq!(params.ref_height_fraction, 0.75);
    }

    #[test]
    fn rejects_inverted_windows_and_empty_history() {
        let inverted = LaneParams {
            min_pos_slope: 0.9,
            ..Default::default()
        };
        let err = inverted.validate().unwrap_err();
        assert!(err.contains("positive slope window"), "{err}");

        let empty = LaneParams {
            history_capacity: 0,
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let nan = LaneParams {
            max_neg_slope: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().unwrap_err().contains("max_neg_slope"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params: LaneParams = serde_json::from_str(r#"{ "history_capacity": 5 }"#).unwrap();
        assert_eq!(params.history_capacity, 5);
        assert_eq!(params.min_pos_slope, 0.5);
    }
}
