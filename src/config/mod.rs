//! Configuration module
//!
//! Handles:
//! - `langid.toml` (model location, training limits, tolerance, server)
//! - `LANGID_*` environment overrides

mod settings;

pub use settings::{
    ClassifierConfig, Config, ModelConfig, ServerConfig, TrainingConfig, CONFIG_FILE_NAME,
};
