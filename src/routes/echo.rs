//! Echo endpoint: reflects a submitted JSON object unchanged.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Echo handler.
///
/// Accepts any JSON object and returns it verbatim. Values may be any JSON
/// type, including nested objects and arrays; no validation or transformation
/// is applied. A malformed or non-object body is rejected with 400.
pub async fn echo(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let Json(input) = payload?;
    tracing::info!(body = %serde_json::Value::Object(input.clone()), "Received /echo request");
    Ok(Json(input))
}
