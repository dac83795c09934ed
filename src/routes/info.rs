//! Application info endpoint.

use axum::Json;
use serde::Serialize;

use crate::config::{APP_NAME, APP_STATUS, APP_VERSION};

/// Informational payload returned by GET /info.
///
/// Constructed fresh per request; the content is fixed.
#[derive(Debug, Serialize)]
pub struct InfoPayload {
    pub app: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

impl InfoPayload {
    fn current() -> Self {
        Self {
            app: APP_NAME,
            version: APP_VERSION,
            status: APP_STATUS,
        }
    }
}

/// Info handler.
///
/// Returns a JSON object describing the application name, version, and status.
pub async fn info() -> Json<InfoPayload> {
    tracing::info!("Received /info request");
    Json(InfoPayload::current())
}
