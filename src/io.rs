//! JSON I/O for segment input files and lane output files.
//!
//! - `read_segments_file`: load per-sequence raw segments produced upstream.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::diagnostics::FrameReport;
use crate::sequence::{FrameSequence, SequenceOutput};
use crate::types::{FrameGeometry, LaneLine};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw segments for one or more independent sequences of equally sized frames.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentsFile {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub sequences: Vec<FrameSequence>,
}

impl SegmentsFile {
    pub fn geometry(&self) -> FrameGeometry {
        FrameGeometry::new(self.width, self.height)
    }

    /// Rejects frame sizes the tracker cannot address in pixel coordinates.
    pub fn validate(&self) -> Result<(), String> {
        if self.height == 0 || i32::try_from(self.height).is_err() {
            return Err(format!(
                "frame height must lie in 1..={}, got {}",
                i32::MAX,
                self.height
            ));
        }
        if i32::try_from(self.width).is_err() {
            return Err(format!(
                "frame width must not exceed {}, got {}",
                i32::MAX,
                self.width
            ));
        }
        Ok(())
    }

    pub fn frame_count(&self) -> usize {
        self.sequences.iter().map(|s| s.frames.len()).sum()
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanesFile {
    pub width: u32,
    pub height: u32,
    pub sequences: Vec<SequenceLanes>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceLanes {
    pub name: String,
    pub elapsed_ms: f64,
    pub frames: Vec<FrameLanes>,
}

#[derive(Clone, Debug, Serialize)]
pub struct FrameLanes {
    pub lines: Vec<LaneLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<FrameReport>,
}

impl LanesFile {
    pub fn from_outputs(
        frame: FrameGeometry,
        outputs: Vec<SequenceOutput>,
        include_diagnostics: bool,
    ) -> Self {
        let sequences = outputs
            .into_iter()
            .map(|out| SequenceLanes {
                name: out.name,
                elapsed_ms: out.elapsed_ms,
                frames: out
                    .reports
                    .into_iter()
                    .map(|report| FrameLanes {
                        lines: report.lines.clone(),
                        report: include_diagnostics.then_some(report),
                    })
                    .collect(),
            })
            .collect();
        Self {
            width: frame.width,
            height: frame.height,
            sequences,
        }
    }
}

pub fn read_segments_file(path: &Path) -> Result<SegmentsFile, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read segments {}: {e}", path.display()))?;
    let file: SegmentsFile = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse segments {}: {e}", path.display()))?;
    file.validate()
        .map_err(|e| format!("Invalid segments {}: {e}", path.display()))?;
    Ok(file)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_file_accepts_null_frames() {
        let json = r#"{
            "width": 960,
            "height": 540,
            "sequences": [
                { "name": "clip", "frames": [null, [], [[400, 500, 500, 450]]] }
            ]
        }"#;
        let file: SegmentsFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.geometry(), FrameGeometry::new(960, 540));
        assert_eq!(file.frame_count(), 3);
        let frames = &file.sequences[0].frames;
        assert!(frames[0].is_none());
        assert_eq!(frames[1].as_deref(), Some(&[][..]));
        assert_eq!(frames[2].as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn frame_height_must_fit_pixel_coordinates() {
        let file = |height: u32| SegmentsFile {
            width: 960,
            height,
            sequences: Vec::new(),
        };
        assert!(file(540).validate().is_ok());
        assert!(file(0).validate().is_err());
        let err = file(1 << 31).validate().unwrap_err();
        assert!(err.contains("frame height"), "{err}");
    }

    #[test]
    fn missing_segments_file_reports_path() {
        let err = read_segments_file(Path::new("/nonexistent/segments.json")).unwrap_err();
        assert!(err.contains("/nonexistent/segments.json"), "{err}");
    }
}
