use lane_tracker::config;
use lane_tracker::io::{read_segments_file, write_json_file, LanesFile};
use lane_tracker::{run_sequences, LaneTracker};
use log::info;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let segments = read_segments_file(&config.input)?;
    let frame = segments.geometry();
    info!(
        "Loaded {} frames in {} sequences ({}x{}) from {}",
        segments.frame_count(),
        segments.sequences.len(),
        frame.width,
        frame.height,
        config.input.display()
    );

    let tracker = LaneTracker::new(config.params);
    let start = Instant::now();
    let outputs = run_sequences(&tracker, &segments.sequences, frame, config.parallel);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let line_count: usize = outputs.iter().map(|o| o.line_count()).sum();

    let lanes = LanesFile::from_outputs(frame, outputs, config.include_diagnostics);
    write_json_file(&config.output.lanes_json, &lanes)?;

    println!(
        "Processed {} frames in {} sequences; {} lines emitted ({:.3} ms)",
        segments.frame_count(),
        segments.sequences.len(),
        line_count,
        elapsed_ms
    );
    println!("Saved lanes to {}", config.output.lanes_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: lane_tracker <config.json>".to_string()
}
