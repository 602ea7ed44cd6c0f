//! Layered service configuration
//!
//! Priority, lowest first:
//! 1. Built-in defaults
//! 2. `langid.toml` in the working directory, or the file passed explicitly
//! 3. `LANGID_*` environment variables
//! 4. CLI flags (applied by the binary)
//!
//! ```toml
//! [model]
//! path = "trained_model.bin"
//!
//! [training]
//! max_field_len = 100000000
//!
//! [classifier]
//! tolerance = 1e-10
//!
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//! max_query_chars = 100000
//! ```

use crate::classifier::DEFAULT_TOLERANCE;
use crate::error::{LangIdError, LangIdResult};
use crate::train::DEFAULT_MAX_FIELD_LEN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Looked up in the working directory when no file is named explicitly.
pub const CONFIG_FILE_NAME: &str = "langid.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub training: TrainingConfig,
    pub classifier: ClassifierConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Where `train` writes and `serve`/`classify` read the model
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("trained_model.bin"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Maximum characters in a single CSV field
    pub max_field_len: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_field_len: DEFAULT_MAX_FIELD_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Scores closer than this are a tie
    pub tolerance: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Longest query the web front-end accepts, in characters
    pub max_query_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_query_chars: 100_000,
        }
    }
}

impl Config {
    /// Load from file and environment. Not validated here: callers apply
    /// command-line overrides first, then call [`Config::validate`].
    ///
    /// An explicitly named file must exist and parse. The implicit
    /// `langid.toml` is optional; if it is broken a warning is logged and
    /// defaults are used.
    pub fn load(explicit: Option<&Path>) -> LangIdResult<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = Path::new(CONFIG_FILE_NAME);
                if implicit.exists() {
                    match Self::from_file(implicit) {
                        Ok(config) => config,
                        Err(e) => {
                            warn!("Ignoring {}: {}", implicit.display(), e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML file. Missing sections and keys take their defaults.
    pub fn from_file(path: &Path) -> LangIdResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LangIdError::io(path, e))?;
        let config = toml::from_str(&content)
            .map_err(|e| LangIdError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `LANGID_*` overrides from `lookup` (normally the process
    /// environment).
    pub fn apply_env_with<F>(&mut self, lookup: F) -> LangIdResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("LANGID_MODEL_PATH") {
            self.model.path = PathBuf::from(path);
        }
        if let Some(host) = lookup("LANGID_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("LANGID_PORT") {
            self.server.port = parse_env("LANGID_PORT", &port)?;
        }
        if let Some(len) = lookup("LANGID_MAX_FIELD_LEN") {
            self.training.max_field_len = parse_env("LANGID_MAX_FIELD_LEN", &len)?;
        }
        if let Some(tolerance) = lookup("LANGID_TOLERANCE") {
            self.classifier.tolerance = parse_env("LANGID_TOLERANCE", &tolerance)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> LangIdResult<()> {
        let tolerance = self.classifier.tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(LangIdError::InvalidConfig(format!(
                "classifier.tolerance must be a positive finite number, got {tolerance}"
            )));
        }
        if self.training.max_field_len == 0 {
            return Err(LangIdError::InvalidConfig(
                "training.max_field_len must be at least 1".to_string(),
            ));
        }
        if self.server.max_query_chars == 0 {
            return Err(LangIdError::InvalidConfig(
                "server.max_query_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> LangIdResult<String> {
        toml::to_string_pretty(self).map_err(|e| LangIdError::InvalidConfig(e.to_string()))
    }

    /// Write a commented example config unless `path` already exists.
    /// Returns whether a file was written.
    pub fn init_file(path: &Path) -> LangIdResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, EXAMPLE_CONFIG).map_err(|e| LangIdError::io(path, e))?;
        Ok(true)
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> LangIdResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| LangIdError::InvalidConfig(format!("{key}={value:?}: {e}")))
}

const EXAMPLE_CONFIG: &str = r#"# langid configuration

[model]
# Written by `langid train`, read by `langid serve` and `langid classify`
# path = "trained_model.bin"

[training]
# Largest CSV field accepted, in characters
# max_field_len = 100000000

[classifier]
# Scores closer than this are reported as a tie
# tolerance = 1e-10

[server]
# host = "127.0.0.1"
# port = 5000
# Queries longer than this are rejected with 413
# max_query_chars = 100000
"#;
