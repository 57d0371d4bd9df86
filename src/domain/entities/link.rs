//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counter.
///
/// Represents the mapping between a short code and the original URL. The
/// click counter only ever grows; links are never deleted.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub original: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original: String,
        short_code: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original,
            short_code,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// The click counter starts at 0 and the creation timestamp is assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original: String,
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "https://example.com".to_string(),
            "abc123".to_string(),
            0,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.original, "https://example.com");
        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            original: "https://rust-lang.org".to_string(),
            short_code: "xyz789".to_string(),
        };

        assert_eq!(new_link.original, "https://rust-lang.org");
        assert_eq!(new_link.short_code, "xyz789");
    }
}
