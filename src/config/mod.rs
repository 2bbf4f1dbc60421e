//! Configuration module for transcript-tagger
//!
//! Loads the run settings (model, temperature, prompt template) from YAML.

mod settings;

pub use settings::{RunConfig, CONFIG_FILE};
