mod common;

use common::synthetic_segments::lane_dashes;
use lane_tracker::io::{LanesFile, SegmentsFile};
use lane_tracker::{run_sequences, FrameSequence, LaneParams, LaneTracker, Side};

fn clip(name: &str, x_left: f64, x_right: f64, frames: usize) -> FrameSequence {
    let frames = (0..frames)
        .map(|i| {
            if i % 5 == 4 {
                // detector dropout
                return None;
            }
            let mut segs = lane_dashes(x_left + i as f64, -0.7, 540, 340, 10);
            segs.extend(lane_dashes(x_right - i as f64, 0.65, 540, 340, 10));
            Some(segs)
        })
        .collect();
    FrameSequence::new(name, frames)
}

#[test]
fn sequences_do_not_leak_into_each_other() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tracker = LaneTracker::new(LaneParams::default());
    let file = SegmentsFile {
        width: 960,
        height: 540,
        sequences: vec![clip("a", 100.0, 900.0, 12), clip("b", 250.0, 700.0, 12)],
    };
    let frame = file.geometry();

    let together = run_sequences(&tracker, &file.sequences, frame, true);
    let alone = run_sequences(&tracker, &file.sequences[1..], frame, false);
    let lines = |reports: &[lane_tracker::FrameReport]| {
        reports.iter().map(|r| r.lines.clone()).collect::<Vec<_>>()
    };
    assert_eq!(together[1].name, "b");
    assert_eq!(lines(&together[1].reports), lines(&alone[0].reports));

    let dropout = &together[0].reports[4];
    assert!(dropout.lines.is_empty());
    assert!(dropout.stage(Side::Left).unwrap().smoothed.is_none());
}

#[test]
fn lanes_file_attaches_reports_on_request() {
    let tracker = LaneTracker::new(LaneParams::default());
    let sequences = vec![clip("a", 100.0, 900.0, 3)];
    let frame = lane_tracker::FrameGeometry::new(960, 540);

    let outputs = run_sequences(&tracker, &sequences, frame, false);
    let lean = LanesFile::from_outputs(frame, outputs.clone(), false);
    let full = LanesFile::from_outputs(frame, outputs, true);
    assert!(lean.sequences[0].frames.iter().all(|f| f.report.is_none()));
    assert!(full.sequences[0].frames.iter().all(|f| f.report.is_some()));

    let json = serde_json::to_value(&lean).unwrap();
    let first = &json["sequences"][0]["frames"][0];
    assert_eq!(first["lines"].as_array().map(Vec::len), Some(2));
    assert!(first.get("report").is_none());
}
