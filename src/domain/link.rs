//! Link record entity representing a registered short-link mapping.

use chrono::{DateTime, Utc};

/// A registered short link.
///
/// Maps a normalized alias token to a normalized absolute destination URL.
/// Records are immutable after creation: there is no update, delete, or
/// expiry path, so the struct carries no lifecycle columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// Store-assigned identifier, immutable.
    pub id: i64,
    /// Normalized alias token, unique across all live records.
    pub short_token: String,
    /// Normalized absolute destination URL.
    pub destination: String,
    /// Set once at insertion.
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Creates a new LinkRecord instance.
    pub fn new(id: i64, short_token: String, destination: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_token,
            destination,
            created_at,
        }
    }
}

/// Input data for registering a new link.
///
/// Both fields must already be validated and normalized by the validator;
/// the registry does not re-check them.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_token: String,
    pub destination: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_record_creation() {
        let now = Utc::now();
        let record = LinkRecord::new(
            1,
            "my-link".to_string(),
            "https://example.com/guide".to_string(),
            now,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.short_token, "my-link");
        assert_eq!(record.destination, "https://example.com/guide");
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            short_token: "docs".to_string(),
            destination: "https://rust-lang.org/".to_string(),
        };

        assert_eq!(new_link.short_token, "docs");
        assert_eq!(new_link.destination, "https://rust-lang.org/");
    }
}
