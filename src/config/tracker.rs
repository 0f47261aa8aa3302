use crate::tracker::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TrackerToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: LaneParams,
    /// Process independent sequences on the rayon pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Attach the per-frame report to every output frame.
    #[serde(default)]
    pub include_diagnostics: bool,
    pub output: TrackerOutputConfig,
}

fn default_parallel() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct TrackerOutputConfig {
    #[serde(rename = "lanes_json")]
    pub lanes_json: PathBuf,
}

/// Parse and validate a tool config from a JSON string.
pub fn parse_config(data: &str) -> Result<TrackerToolConfig, String> {
    let config: TrackerToolConfig =
        serde_json::from_str(data).map_err(|e| format!("Failed to parse config: {e}"))?;
    config
        .params
        .validate()
        .map_err(|e| format!("Invalid tracker params: {e}"))?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<TrackerToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{e} ({})", path.display()))
}
