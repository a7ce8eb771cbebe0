//! Symptom analysis endpoint.

use std::sync::Arc;

use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};
use symptom_core::{AnalysisError, SymptomAnalysis};

use crate::error::AppError;
use crate::ServerState;

/// Analyzes free-text symptoms.
///
/// Takes the raw body, and its rejection, so a malformed or unreadable payload
/// reaches the catch-all fallback instead of an extractor error response.
pub async fn analyze_symptoms(
    State(state): State<Arc<ServerState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SymptomAnalysis>, AppError> {
    let body = body.map_err(|e| AnalysisError::Unexpected(format!("unreadable request body: {}", e)))?;
    let analysis = state.analyzer.handle(&body).await?;
    Ok(Json(analysis))
}
