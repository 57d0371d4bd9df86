//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution increments the link's click counter atomically at the store
/// layer before the redirect is returned.
///
/// The response is `302 Found` with the original URL in the `Location`
/// header.
///
/// # Errors
///
/// - 400 Bad Request for a blank code
/// - 404 Not Found if the short code doesn't exist
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original = state.link_service.resolve(&code).await?;

    debug!(code = %code, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, original)]))
}
