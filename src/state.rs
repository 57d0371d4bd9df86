use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, TokenService};
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};

/// Shared application state injected into all handlers.
///
/// Services are constructed once at startup with their repository
/// dependencies and shared across requests via `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub token_service: Arc<TokenService>,
}
