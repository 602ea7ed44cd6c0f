//! `langid serve`

use anyhow::{Context, Result};
use langid::config::Config;
use langid::model::ModelStore;
use langid::server::{self, AppState};
use tokio::runtime::Runtime;

/// Load the model, then serve until Ctrl-C. A missing or unreadable model
/// stops here, before anything is bound.
pub fn run(config: &Config) -> Result<()> {
    config.validate()?;

    let store = ModelStore::load(&config.model.path)
        .with_context(|| format!("Failed to load model {}", config.model.path.display()))?;
    let state = AppState::new(store, config.classifier.tolerance, config.server.max_query_chars)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let rt = Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(async {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        server::serve(listener, state).await.context("Server error")
    })
}
