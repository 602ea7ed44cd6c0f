//! Trained-model persistence
//!
//! The model is a single bitcode blob written atomically (temp file in the
//! destination directory, then rename). Loading happens once at startup;
//! the resulting [`ModelStore`] is cheap to clone and never mutated.

use super::{LanguageLabel, LanguageVector, TrainedModel};
use crate::error::{LangIdError, LangIdResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Current on-disk layout.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct ModelFileRef<'a> {
    format_version: u32,
    trained_at: &'a str,
    languages: &'a IndexMap<LanguageLabel, LanguageVector>,
}

#[derive(Deserialize)]
struct ModelFile {
    format_version: u32,
    trained_at: String,
    languages: IndexMap<LanguageLabel, LanguageVector>,
}

/// Write `model` to `path`, replacing any existing file atomically.
pub fn save_model(model: &TrainedModel, path: &Path) -> LangIdResult<()> {
    if model.is_empty() {
        return Err(LangIdError::EmptyModel);
    }

    let trained_at = chrono::Utc::now().to_rfc3339();
    let file = ModelFileRef {
        format_version: FORMAT_VERSION,
        trained_at: &trained_at,
        languages: &model.languages,
    };
    let bytes = bitcode::serialize(&file).map_err(|e| LangIdError::ModelEncode(e.to_string()))?;

    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent_dir).map_err(|e| LangIdError::io(parent_dir, e))?;

    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| LangIdError::io(parent_dir, e))?;
    temp_file
        .write_all(&bytes)
        .and_then(|_| temp_file.as_file().sync_all())
        .map_err(|e| LangIdError::io(temp_file.path(), e))?;
    temp_file
        .persist(path)
        .map_err(|e| LangIdError::io(path, e.error))?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Read a model written by [`save_model`]. Returns the model and its
/// training timestamp.
pub fn load_model(path: &Path) -> LangIdResult<(TrainedModel, String)> {
    let bytes = std::fs::read(path).map_err(|e| LangIdError::io(path, e))?;
    let file: ModelFile = bitcode::deserialize(&bytes).map_err(|e| LangIdError::ModelDecode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if file.format_version != FORMAT_VERSION {
        return Err(LangIdError::ModelVersion {
            found: file.format_version,
            expected: FORMAT_VERSION,
        });
    }
    if file.languages.is_empty() {
        return Err(LangIdError::EmptyModel);
    }

    Ok((TrainedModel::from_languages(file.languages), file.trained_at))
}

/// Read-only handle to the model loaded at startup.
#[derive(Debug, Clone)]
pub struct ModelStore {
    model: Arc<TrainedModel>,
    path: Option<PathBuf>,
    trained_at: Option<String>,
}

impl ModelStore {
    /// Load the persisted model. Any failure here is fatal for a server.
    pub fn load(path: &Path) -> LangIdResult<Self> {
        let (model, trained_at) = load_model(path)?;
        info!(
            "Loaded {} languages ({} trigram dimensions) from {}",
            model.language_count(),
            model.dimension_count(),
            path.display()
        );
        Ok(Self {
            model: Arc::new(model),
            path: Some(path.to_path_buf()),
            trained_at: Some(trained_at),
        })
    }

    /// Wrap an in-memory model that was never persisted.
    pub fn from_model(model: TrainedModel) -> Self {
        Self {
            model: Arc::new(model),
            path: None,
            trained_at: None,
        }
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    pub fn language_count(&self) -> usize {
        self.model.language_count()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn trained_at(&self) -> Option<&str> {
        self.trained_at.as_deref()
    }
}
