//! Error types and error handling for the application
//!
//! This module defines the application error that route handlers return.
//! Every failure on the fetch path is caught at this one boundary and
//! rendered as a 500 response with body `{"error": "<message>"}`, so the
//! response stays valid JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::sheets::SheetsError;

/// Application-level error types
///
/// The service has a single failure taxonomy: anything that goes wrong while
/// authenticating to or reading from the spreadsheet backend. No subtype is
/// distinguished at the HTTP boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Authenticating to or fetching from the spreadsheet backend failed
    #[error("{0}")]
    Upstream(#[from] SheetsError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Upstream(err) = self;
        let message = err.to_string();
        tracing::error!(error = %message, "quote fetch failed");

        let body = Json(json!({ "error": message }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
