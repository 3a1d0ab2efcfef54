//! Quote API handlers
//!
//! Contains the HTTP handlers serving worksheet rows as JSON.

use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::sheets::{QuoteRecord, SheetsClient};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status indicator (e.g., "healthy")
    pub status: String,
    /// Version of the running server
    pub version: String,
}

/// GET /quotes - Return every row of the quotes worksheet
///
/// Authenticates and reads the worksheet on every call, so the response
/// always reflects the live sheet. Any failure along the way becomes a
/// 500 with an `{"error": ...}` body.
pub async fn get_quotes(
    State(config): State<Arc<Config>>,
) -> Result<Json<Vec<QuoteRecord>>, AppError> {
    let client = SheetsClient::connect(&config.sheets).await?;
    let records = client.fetch_records().await?;
    tracing::info!(count = records.len(), "Fetched quotes from worksheet");
    Ok(Json(records))
}

/// GET /health - Health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
