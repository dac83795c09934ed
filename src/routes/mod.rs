//! HTTP route handlers for the service.
//!
//! The route table is explicit: each of the four endpoints is bound to a
//! literal method and path. Unknown paths and wrong methods fall through to
//! the framework defaults (404 and 405).
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod cicd;
pub mod echo;
pub mod health;
pub mod info;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/info", get(info::info))
        .route("/echo", post(echo::echo))
        .route("/cicd-test", get(cicd::cicd_test))
        .with_state(state)
        // Low-level HTTP trace events (debug level)
        .layer(TraceLayer::new_for_http())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
