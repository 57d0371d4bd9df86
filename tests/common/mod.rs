#![allow(dead_code)]

use shortly::application::services::{AuthService, LinkService, TokenService};
use shortly::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use shortly::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const BASE_URL: &str = "https://sho.rt";
pub const JWT_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let link_repo = Arc::new(PgLinkRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool));

    let token_service = Arc::new(TokenService::new(JWT_SECRET));
    let link_service = Arc::new(LinkService::new(link_repo, BASE_URL.to_string()));
    let auth_service = Arc::new(AuthService::new(user_repo, token_service.clone()));

    AppState {
        link_service,
        auth_service,
        token_service,
    }
}

/// Issues a token the auth middleware accepts, without going through login.
pub fn bearer_token() -> String {
    TokenService::new(JWT_SECRET).issue("a@b.com").unwrap()
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (original, short_code) VALUES ($1, $2)")
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn link_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_users(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}
