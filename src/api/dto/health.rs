//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness probe response.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: String,
}
