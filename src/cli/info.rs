//! `langid info`

use anyhow::{Context, Result};
use langid::config::Config;
use langid::model::{LanguageLabel, ModelStore};

pub fn run(config: &Config, json: bool) -> Result<()> {
    config.validate()?;

    let store = ModelStore::load(&config.model.path)
        .with_context(|| format!("Failed to load model {}", config.model.path.display()))?;
    let labels: Vec<&str> = store.model().labels().map(LanguageLabel::as_str).collect();

    if json {
        let value = serde_json::json!({
            "model": config.model.path,
            "trained_at": store.trained_at(),
            "language_count": store.language_count(),
            "languages": labels,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Model:     {}", config.model.path.display());
    if let Some(trained_at) = store.trained_at() {
        println!("Trained:   {}", trained_at);
    }
    println!("Languages: {}", store.language_count());
    for label in labels {
        println!("  {}", label);
    }
    Ok(())
}
