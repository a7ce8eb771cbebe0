//! Maps analysis failures onto HTTP responses.
//!
//! Validation failures are the only non-200 outcome. Every other failure,
//! including a panic inside the handler, is answered with a canned payload.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use symptom_core::{AnalysisError, SymptomAnalysis};
use tracing::{debug, error, warn};

/// Wrapper giving [`AnalysisError`] an HTTP representation.
#[derive(Debug)]
pub struct AppError(pub AnalysisError);

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        Self(err)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let err = self.0;
        match &err {
            AnalysisError::Validation(msg) => debug!("Rejected request: {}", msg),
            AnalysisError::ResponseParse { source, .. } => {
                warn!("Serving degraded response, provider content was not the schema: {}", source)
            }
            other => error!("Error analyzing symptoms: {}", other),
        }

        match err.fallback_analysis() {
            Some(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
            None => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: err.to_string() }),
            )
                .into_response(),
        }
    }
}

/// Answers a panicked request with the global fallback payload.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);

    (StatusCode::OK, Json(SymptomAnalysis::unavailable())).into_response()
}
