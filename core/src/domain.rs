//! Domain models for the PassGuard service

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::{CoreError, Result};

/// A recorded client "ping"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    /// Unique identifier, assigned at creation
    pub id: Uuid,
    /// Caller supplied name, not required to be unique
    pub client_name: String,
    /// Creation time (UTC)
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Build a new record with a fresh id and the current time
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }

    /// Render the record as a store document.
    ///
    /// The timestamp is kept as an ISO-8601 string rather than a native
    /// date type, at nanosecond resolution.
    pub fn to_document(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "client_name": self.client_name,
            "timestamp": self.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        })
    }

    /// Restore a record from a store document, ignoring unknown fields
    pub fn from_document(doc: serde_json::Value) -> Result<Self> {
        let stored: StoredStatusCheck = serde_json::from_value(doc)?;
        Ok(Self {
            id: stored.id,
            client_name: stored.client_name,
            timestamp: parse_timestamp(&stored.timestamp)?,
        })
    }
}

#[derive(Deserialize)]
struct StoredStatusCheck {
    id: Uuid,
    client_name: String,
    timestamp: String,
}

/// Parse an ISO-8601 timestamp; values without an offset are taken as UTC
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| CoreError::Internal(format!("Invalid stored timestamp '{}': {}", value, e)))
}

/// Create status check request
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// Password breach check request
///
/// `Debug` is implemented by hand so the password never reaches a log line.
#[derive(Clone, Deserialize)]
pub struct PasswordCheckRequest {
    pub password: String,
}

impl std::fmt::Debug for PasswordCheckRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCheckRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Password breach check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCheckResponse {
    pub is_breached: bool,
    pub breach_count: u64,
    pub message: String,
    pub source: String,
}
