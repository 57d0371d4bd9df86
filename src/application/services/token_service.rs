//! JWT issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Bearer token lifetime.
const TOKEN_TTL_SECONDS: i64 = 3600;

/// Claims embedded in issued tokens.
///
/// `sub` carries the authenticated email. The decoded claims are forwarded to
/// protected handlers via request extensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Service for signing and validating bearer tokens.
///
/// Tokens are HS256-signed with a server-held secret and expire after one
/// hour. Verification checks both the signature and the expiry.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Creates a new token service from the signing secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a signed token carrying the email claim, valid for one hour.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails.
    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECONDS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("JWT encoding failed: {}", e);
            AppError::internal("Failed to issue token", json!({}))
        })
    }

    /// Verifies a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, expired, or
    /// wrongly-signed tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Invalid or expired token" }),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> TokenService {
        TokenService::new("test-signing-secret")
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = create_test_service();

        let token = service.issue("a@b.com").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECONDS);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();

        let result = service.verify("invalid.token.here");
        assert!(matches!(
            result.unwrap_err(),
            AppError::Unauthorized { .. }
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service1 = create_test_service();
        let service2 = TokenService::new("a-different-secret");

        let token = service1.issue("a@b.com").unwrap();
        assert!(service2.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = create_test_service();

        // Expired beyond the default validation leeway.
        let now = Utc::now();
        let claims = Claims {
            sub: "a@b.com".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let encoding_key = EncodingKey::from_secret(b"test-signing-secret");
        let token = encode(&Header::default(), &claims, &encoding_key).unwrap();

        let result = service.verify(&token);
        assert!(
            matches!(result, Err(AppError::Unauthorized { .. })),
            "expected expired token to be rejected, got {:?}",
            result
        );
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = create_test_service();

        let mut token = service.issue("a@b.com").unwrap();
        token.pop();
        token.push('x');

        assert!(service.verify(&token).is_err());
    }
}
