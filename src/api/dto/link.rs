//! DTOs for link registration and resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::LinkRecord;

/// Request to register a short link.
///
/// Fields default to empty strings when absent so that "field missing" and
/// "field empty" are reported the same way by the validator.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub short_token: String,
    #[serde(default)]
    pub destination: String,
}

/// A registered link as returned to clients.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub short_token: String,
    pub destination: String,
    /// Seconds since epoch.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl From<LinkRecord> for LinkResponse {
    fn from(record: LinkRecord) -> Self {
        Self {
            id: record.id,
            short_token: record.short_token,
            destination: record.destination,
            created_at: record.created_at,
        }
    }
}
