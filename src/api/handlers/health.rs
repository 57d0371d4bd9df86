//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::PingResponse;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health/ping`
///
/// Always answers `{"message": "pong"}`; no downstream checks.
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}
