//! Handlers for link creation and listing endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse, LinkDto};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened link.
///
/// # Endpoint
///
/// `POST /links` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "original": "https://example.com/x" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Link created",
///   "shortCode": "abc123",
///   "url": "https://sho.rt/abc123"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL is missing or invalid
/// - 401 Unauthorized without a valid token (enforced by middleware)
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let created = state.link_service.create_link(payload.original).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            message: "Link created".to_string(),
            short_code: created.short_code,
            url: created.short_url,
        }),
    ))
}

/// Lists all stored links.
///
/// # Endpoint
///
/// `GET /links/all` (Bearer token required)
///
/// Visibility is global: the authenticated claim is not used for per-user
/// scoping.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkDto>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkDto::from).collect()))
}
