//! HTTP surface.
//!
//! A small axum router:
//!
//! | Route | Response |
//! |---|---|
//! | `GET /` | landing page (HTML) |
//! | `GET /uses` | uses page (HTML) |
//! | `GET /og?title=…` | 1200×630 PNG preview card |
//! | anything else | 404 page |
//!
//! Handlers share nothing mutable — the state is the loaded config behind an
//! `Arc`, and the preview renderer builds its typesetter per request, so any
//! number of requests can run concurrently without coordination.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::{og, pages};

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
struct AppState {
    config: Arc<SiteConfig>,
}

/// Query parameters accepted by the preview endpoint.
#[derive(Debug, Deserialize)]
struct PreviewParams {
    title: Option<String>,
}

/// Build the site router for the given config.
pub fn router(config: SiteConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };
    Router::new()
        .route("/", get(home))
        .route("/uses", get(uses))
        .route("/og", get(preview_image))
        .fallback(not_found)
        .with_state(state)
}

/// Bind the configured address and serve until the process is stopped.
pub async fn serve(config: SiteConfig) -> Result<(), ServeError> {
    let addr = config.bind_addr();
    let app = router(config);
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn home(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_home(&state.config, pages::SITE_POSTS).into_string())
}

async fn uses(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_uses(&state.config).into_string())
}

async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(pages::render_not_found(&state.config).into_string()),
    )
}

async fn preview_image(
    Query(params): Query<PreviewParams>,
    State(state): State<AppState>,
) -> Result<Response, (StatusCode, String)> {
    let title = og::effective_title(params.title.as_deref());
    let bytes = og::render_png(title).map_err(|err| {
        tracing::error!(%err, "preview render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CACHE_CONTROL,
                format!("public, max-age={}", state.config.preview.cache_max_age),
            ),
        ],
        bytes,
    )
        .into_response())
}
