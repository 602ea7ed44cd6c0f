//! `langid classify`

use anyhow::{Context, Result};
use langid::classifier::{Classification, Classifier};
use langid::config::Config;
use langid::model::ModelStore;
use langid::server::pages::tie_notice;
use std::io::Read;
use std::path::PathBuf;

/// Where the text to classify comes from
#[derive(Debug)]
pub enum Input {
    Text(String),
    File(PathBuf),
    Stdin,
}

pub fn run(config: &Config, input: Input, show_scores: bool, json: bool) -> Result<()> {
    config.validate()?;

    let store = ModelStore::load(&config.model.path)
        .with_context(|| format!("Failed to load model {}", config.model.path.display()))?;
    let classifier = Classifier::with_tolerance(store.model(), config.classifier.tolerance)?;

    let (text, result) = match input {
        Input::Text(text) => {
            let result = classifier.classify(&text)?;
            (text, result)
        }
        Input::File(path) => {
            let result = classifier
                .classify_file(&path)
                .with_context(|| format!("Failed to classify {}", path.display()))?;
            // Scores need the text again; only read it when asked for.
            let text = if show_scores {
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?
            } else {
                String::new()
            };
            (text, result)
        }
        Input::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read standard input")?;
            let result = classifier.classify(&buf)?;
            (buf, result)
        }
    };

    if json {
        let mut value = serde_json::to_value(&result)?;
        if show_scores {
            value["scores"] = serde_json::to_value(classifier.scores(&text))?;
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match &result {
        Classification::Language { label } => println!("{label}"),
        Classification::Tie { candidates } => println!("{}", tie_notice(candidates)),
    }

    if show_scores {
        println!();
        for (label, score) in classifier.scores(&text) {
            println!("  {:<20} {:.6}", label.as_str(), score);
        }
    }

    Ok(())
}
