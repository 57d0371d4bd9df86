//! URL validation for link creation.
//!
//! Candidate URLs must be absolute http/https URLs with a registrable host.
//! Validation happens before any store write.

use url::{Host, Url};

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL host must include a top-level domain")]
    MissingTld,
}

/// Validates a candidate URL for shortening.
///
/// # Rules
///
/// 1. Non-empty after trimming whitespace
/// 2. Parses as an absolute URL
/// 3. Scheme is `http` or `https` (rejects `javascript:`, `data:`, `file:`, ...)
/// 4. Host is present
/// 5. Host is a dotted domain name whose final label is alphabetic and at
///    least two characters (`localhost` and IP addresses are rejected)
///
/// Returns the trimmed URL unchanged; the original string is what gets
/// stored and redirected to.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/x").is_ok());
/// assert!(validate_url("http://localhost:3000").is_err());
/// assert!(validate_url("ftp://example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::InvalidFormat("empty URL".to_string()));
    }

    let url =
        Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    let host = match url.host() {
        Some(host) => host,
        None => return Err(UrlValidationError::MissingHost),
    };

    let domain = match host {
        Host::Domain(domain) => domain,
        // IP literals have no top-level domain.
        Host::Ipv4(_) | Host::Ipv6(_) => return Err(UrlValidationError::MissingTld),
    };

    let host = domain.trim_end_matches('.');
    let tld = host.rsplit('.').next().unwrap_or("");
    if tld == host || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(UrlValidationError::MissingTld);
    }

    Ok(trimmed.to_string())
}
