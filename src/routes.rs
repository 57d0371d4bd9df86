//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /auth/register` - Create an account (public)
//! - `POST /auth/login`    - Exchange credentials for a bearer token (public)
//! - `POST /links`         - Shorten a URL (Bearer token required)
//! - `GET  /links/all`     - List all stored links (Bearer token required)
//! - `GET  /{code}`        - Short link redirect (public)
//! - `GET  /health/ping`   - Liveness probe (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on the protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    create_link_handler, list_links_handler, login_handler, ping_handler, redirect_handler,
    register_handler,
};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = Router::new()
        .route("/links", post(create_link_handler))
        .route("/links/all", get(list_links_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let public = Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/health/ping", get(ping_handler))
        .route("/{code}", get(redirect_handler));

    let router = Router::new()
        .merge(protected)
        .merge(public)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
