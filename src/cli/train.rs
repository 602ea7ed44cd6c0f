//! `langid train`

use anyhow::{Context, Result};
use langid::config::Config;
use langid::model::save_model;
use langid::train::{train_from_files, CorpusReader};
use std::path::PathBuf;
use tracing::info;

pub fn run(config: &Config, inputs: &[PathBuf]) -> Result<()> {
    config.validate()?;

    let reader = CorpusReader::new(config.training.max_field_len);
    info!(
        "Training on {} file(s), max field length {}",
        inputs.len(),
        reader.max_field_len()
    );

    let (model, report) = train_from_files(inputs, &reader).context("Training failed")?;
    save_model(&model, &config.model.path)
        .with_context(|| format!("Failed to save model to {}", config.model.path.display()))?;

    println!(
        "Trained {} languages from {} records ({} trigram dimensions)",
        report.languages, report.records, report.dimensions
    );
    println!("Model saved to {}", config.model.path.display());
    Ok(())
}
