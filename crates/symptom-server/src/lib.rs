//! Axum router and shared state for the symptom API.
//!
//! Routes:
//!
//! - `POST /api/analyze-symptoms` — educational analysis of free-text symptoms
//! - `GET /health` — liveness probe

pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response};
use axum::routing::{get, post, MethodRouter};
use axum::Router;
use symptom_config::AppConfig;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::services::analysis::SymptomAnalysisHandler;

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub analyzer: SymptomAnalysisHandler,
}

impl ServerState {
    /// Builds the state from an explicit configuration value.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            analyzer: SymptomAnalysisHandler::new(config),
        }
    }
}

/// Path of the analyze endpoint.
pub const ANALYZE_ROUTE: &str = "/api/analyze-symptoms";

/// Builds the application router with CORS, request tracing and panic recovery.
pub fn build_router(state: Arc<ServerState>) -> Router {
    build_router_with(state, post(handlers::analyze::analyze_symptoms))
}

/// Builds the application router around the given analyze route handler.
///
/// The analyze route has no body size limit, so oversized requests still reach
/// the handler and its fallback.
pub fn build_router_with(
    state: Arc<ServerState>,
    analyze: MethodRouter<Arc<ServerState>>,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route(ANALYZE_ROUTE, analyze)
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
