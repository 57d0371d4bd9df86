//! Link creation, resolution, and listing service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// A freshly created short link.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub short_code: String,
    pub short_url: String,
}

/// Service for creating, resolving, and listing shortened links.
///
/// Validates candidate URLs, generates unique short codes, and counts clicks
/// on resolution. State lives entirely in the injected repository; nothing is
/// cached across requests.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the externally visible prefix for short URLs, e.g.
    /// `https://sho.rt`.
    pub fn new(repository: Arc<R>, base_url: String) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Creates a short link for the given URL.
    ///
    /// The URL must be a non-empty absolute http/https URL with a host and a
    /// top-level domain. The generated code is 6 lowercase-alphanumeric
    /// characters; generation retries on collision with an existing code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if validation fails (nothing is
    /// written to the store in that case).
    pub async fn create_link(&self, original: String) -> Result<CreatedLink, AppError> {
        let original = validate_url(&original).map_err(|e| {
            AppError::invalid_url("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let short_code = self.generate_unique_code().await?;

        let link = self
            .repository
            .create(NewLink {
                original,
                short_code,
            })
            .await?;

        tracing::info!(code = %link.short_code, "short link created");

        Ok(CreatedLink {
            short_url: self.short_url(&link.short_code),
            short_code: link.short_code,
        })
    }

    /// Resolves a short code to its original URL, counting the click.
    ///
    /// The click counter is incremented atomically at the store layer, so
    /// concurrent resolutions of the same code each count exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCode`] for an empty or blank code.
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if code.trim().is_empty() {
            return Err(AppError::invalid_code("Invalid code", json!({})));
        }

        let link = self
            .repository
            .increment_clicks(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))?;

        Ok(link.original)
    }

    /// Lists all stored links in store-defined order.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_all().await
    }

    /// Constructs the externally visible short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Generates a short code not yet present in the store.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
