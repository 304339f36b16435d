//! Client Timestamp Conversion
//!
//! The ingest endpoint accepts the client's timestamp either as an ISO-8601
//! string or as an integer epoch in milliseconds. `ClientTimestamp` captures
//! both wire forms and converts them into the store's `DateTime<Utc>`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Timestamp as sent by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientTimestamp {
    /// Milliseconds since the Unix epoch
    EpochMillis(i64),
    /// ISO-8601 / RFC 3339 text
    Text(String),
}

impl ClientTimestamp {
    /// Convert into the store's timestamp representation
    ///
    /// # Errors
    ///
    /// Returns `SharedError::TimestampError` when the value is neither a
    /// recognised ISO-8601 form nor an in-range epoch value.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, SharedError> {
        match self {
            Self::EpochMillis(ms) => from_epoch_millis(*ms),
            Self::Text(text) => parse_text(text),
        }
    }
}

impl From<DateTime<Utc>> for ClientTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Text(value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

fn from_epoch_millis(ms: i64) -> Result<DateTime<Utc>, SharedError> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .ok_or_else(|| SharedError::timestamp(ms.to_string(), "epoch milliseconds out of range"))
}

fn parse_text(text: &str) -> Result<DateTime<Utc>, SharedError> {
    let trimmed = text.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    // Zone-less forms are read as UTC
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    if let Ok(ms) = trimmed.parse::<i64>() {
        return from_epoch_millis(ms);
    }

    Err(SharedError::timestamp(
        text,
        "expected an ISO-8601 instant or epoch milliseconds",
    ))
}
