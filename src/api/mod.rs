//! API module
//!
//! Contains the HTTP route handlers and the router wiring them together.

pub mod quotes;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;

/// Build the application router with request tracing and permissive CORS
pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/quotes", get(quotes::get_quotes))
        .route("/health", get(quotes::health_check))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive()) // Allow CORS from any origin
        .with_state(config)
}
