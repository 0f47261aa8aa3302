//! JSON configuration for the command-line tool.

pub mod tracker;

pub use tracker::{load_config, parse_config, TrackerOutputConfig, TrackerToolConfig};
