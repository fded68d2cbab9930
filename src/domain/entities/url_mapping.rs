//! URL mapping entity: one short identifier pointing at one original URL.

use chrono::{DateTime, Utc};

/// A stored mapping between a short identifier and an original URL.
///
/// Mappings are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub short_url: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(short_url: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_url,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub short_url: i64,
    pub original_url: String,
}

impl NewUrlMapping {
    pub fn new(short_url: i64, original_url: impl Into<String>) -> Self {
        Self {
            short_url,
            original_url: original_url.into(),
        }
    }

    /// Turns the insert payload into a stored mapping with the given timestamp.
    pub fn into_mapping(self, created_at: DateTime<Utc>) -> UrlMapping {
        UrlMapping::new(self.short_url, self.original_url, created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = UrlMapping::new(1, "https://example.com".to_string(), now);

        assert_eq!(mapping.short_url, 1);
        assert_eq!(mapping.original_url, "https://example.com");
        assert_eq!(mapping.created_at, now);
    }

    #[test]
    fn test_new_mapping_into_mapping() {
        let now = Utc::now();
        let mapping = NewUrlMapping::new(7, "https://rust-lang.org").into_mapping(now);

        assert_eq!(mapping.short_url, 7);
        assert_eq!(mapping.original_url, "https://rust-lang.org");
        assert_eq!(mapping.created_at, now);
    }
}
