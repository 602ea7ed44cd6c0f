//! Web front-end
//!
//! Two routes:
//! - `GET /`                 trained-language count and a query form
//! - `GET /classify?q=TEXT`  classification result or tie notice
//!
//! The model is loaded before the router is built and handed in as shared
//! state; handlers only ever read it.

pub mod pages;

use crate::classifier::{Classification, Classifier};
use crate::error::LangIdResult;
use crate::model::ModelStore;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

/// State shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    store: ModelStore,
    tolerance: f64,
    max_query_chars: usize,
}

impl AppState {
    pub fn new(store: ModelStore, tolerance: f64, max_query_chars: usize) -> LangIdResult<Self> {
        // Reject a bad tolerance at startup rather than on every request.
        Classifier::with_tolerance(store.model(), tolerance)?;
        Ok(Self {
            store,
            tolerance,
            max_query_chars,
        })
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    fn classify(&self, text: &str) -> LangIdResult<Classification> {
        Classifier::with_tolerance(self.store.model(), self.tolerance)?.classify(text)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ClassifyParams {
    pub q: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/classify", get(classify))
        .with_state(state)
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_index(state.store.language_count()))
}

pub async fn classify(State(state): State<AppState>, Query(params): Query<ClassifyParams>) -> Response {
    let Some(query) = params.q else {
        return (
            StatusCode::BAD_REQUEST,
            Html(pages::render_error("Missing query", "Add some text with ?q=...")),
        )
            .into_response();
    };

    let len = query.chars().count();
    if len > state.max_query_chars {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Html(pages::render_error(
                "Query too long",
                &format!("{} characters given, at most {} accepted", len, state.max_query_chars),
            )),
        )
            .into_response();
    }

    match state.classify(&query) {
        Ok(result) => {
            debug!("/classify: {} chars -> {}", len, result);
            Html(pages::render_result(&query, &result)).into_response()
        }
        Err(e) => {
            error!("Classification failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::render_error("Classification failed", &e.to_string())),
            )
                .into_response()
        }
    }
}
