//! User registration and login service.

use std::sync::{Arc, LazyLock};

use serde_json::json;

use crate::application::services::TokenService;
use crate::domain::entities::NewUser;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Hash verified when a login targets an unknown email, so that "no such
/// user" and "wrong password" take the same time and return the same error.
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("placeholder").expect("argon2 hashing of a constant succeeds"));

/// Service for registering users and authenticating logins.
///
/// Passwords are hashed with Argon2id before storage and verified on login;
/// both run on the blocking thread pool to keep the CPU-heavy work off the
/// request path. Successful logins are exchanged for a signed bearer token.
pub struct AuthService<U: UserRepository> {
    users: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service.
    pub fn new(users: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Registers a new user.
    ///
    /// No token is issued; the caller logs in separately.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingField`] if email or password is empty.
    /// Returns [`AppError::Conflict`] if a user with the email exists.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::missing_field(
                "Email and password are required",
                json!({}),
            ));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict(
                "User already exists",
                json!({ "email": email }),
            ));
        }

        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| {
                tracing::error!("hashing task panicked: {}", e);
                AppError::internal("Failed to hash password", json!({}))
            })?
            .map_err(|e| {
                tracing::error!("password hashing failed: {}", e);
                AppError::internal("Failed to hash password", json!({}))
            })?;

        let user = self
            .users
            .create(NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "user registered");

        Ok(())
    }

    /// Authenticates a user and issues a bearer token.
    ///
    /// An unknown email and a wrong password produce the same error; nothing
    /// in the response distinguishes the two cases.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if credentials do not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self.users.find_by_email(email).await?;

        let stored_hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(|| DUMMY_HASH.clone());

        let password = password.to_string();
        let verified = tokio::task::spawn_blocking(move || {
            verify_password(&password, &stored_hash).unwrap_or(false)
        })
        .await
        .map_err(|e| {
            tracing::error!("verification task panicked: {}", e);
            AppError::internal("Failed to verify password", json!({}))
        })?;

        let user = match user {
            Some(user) if verified => user,
            _ => {
                tracing::warn!("login failed");
                return Err(AppError::unauthorized("Unauthorized", json!({})));
            }
        };

        self.tokens.issue(&user.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn test_tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new("test-signing-secret"))
    }

    fn create_test_user(id: i64, email: &str, password: &str) -> User {
        User::new(
            id,
            email.to_string(),
            hash_password(password).unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "a@b.com")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .withf(|new_user| {
                new_user.email == "a@b.com" && new_user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|new_user| {
                Ok(User::new(
                    1,
                    new_user.email,
                    new_user.password_hash,
                    Utc::now(),
                ))
            });

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let result = service.register("a@b.com", "secret").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().times(0);
        mock_repo.expect_create().times(0);

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let result = service.register("", "secret").await;
        assert!(matches!(result.unwrap_err(), AppError::MissingField { .. }));

        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().times(0);
        mock_repo.expect_create().times(0);

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let result = service.register("a@b.com", "").await;
        assert!(matches!(result.unwrap_err(), AppError::MissingField { .. }));
    }

    #[tokio::test]
    async fn test_register_conflict_creates_nothing() {
        let mut mock_repo = MockUserRepository::new();

        let existing = create_test_user(1, "a@b.com", "secret");
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_create().times(0);

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let result = service.register("a@b.com", "other-password").await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_login_success_issues_valid_token() {
        let mut mock_repo = MockUserRepository::new();

        let user = create_test_user(1, "a@b.com", "secret");
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let tokens = test_tokens();
        let service = AuthService::new(Arc::new(mock_repo), tokens.clone());

        let token = service.login("a@b.com", "secret").await.unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, "a@b.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut mock_repo = MockUserRepository::new();

        let user = create_test_user(1, "a@b.com", "secret");
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let result = service.login("a@b.com", "wrong").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_error_as_wrong_password() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let unknown = service.login("nobody@b.com", "secret").await.unwrap_err();

        let mut mock_repo = MockUserRepository::new();
        let user = create_test_user(1, "a@b.com", "secret");
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(mock_repo), test_tokens());

        let wrong = service.login("a@b.com", "wrong").await.unwrap_err();

        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(matches!(unknown, AppError::Unauthorized { .. }));
        assert!(matches!(wrong, AppError::Unauthorized { .. }));
    }
}
