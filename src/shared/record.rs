/**
 * Record Data Structures
 *
 * This module defines the two shapes a message takes on its way through the
 * system:
 *
 * - `Submission` is authored by the desktop client and queued for delivery.
 * - `Record` is what the document store holds once the ingest endpoint has
 *   stamped the submission with a server timestamp and the store has given it
 *   an id.
 *
 * Both serialize with camelCase keys (`sleepMs`, `timestampClient`,
 * `timestampServer`) and RFC 3339 timestamps so the JSON matches what the
 * HTTP API and the real-time stream carry.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client-authored message awaiting delivery to the ingest endpoint
///
/// Created by the submission form and never modified once it has been
/// enqueued.
///
/// # Example
/// ```rust
/// use dataqueue::shared::Submission;
///
/// let submission = Submission::new("alice", "hello", 250);
/// assert_eq!(submission.sleep_ms, 250);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Display name of the person sending the message
    pub sender: String,
    /// Message text
    pub message: String,
    /// Artificial delay the ingest endpoint applies before writing
    pub sleep_ms: u64,
    /// Instant the client created the submission
    pub timestamp_client: DateTime<Utc>,
}

impl Submission {
    /// Create a submission stamped with the current UTC time
    pub fn new(sender: impl Into<String>, message: impl Into<String>, sleep_ms: u64) -> Self {
        Self::at(sender, message, sleep_ms, Utc::now())
    }

    /// Create a submission with an explicit client timestamp
    pub fn at(
        sender: impl Into<String>,
        message: impl Into<String>,
        sleep_ms: u64,
        timestamp_client: DateTime<Utc>,
    ) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
            sleep_ms,
            timestamp_client,
        }
    }

    /// Compact JSON rendering used in notifications and status banners
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// A persisted record as held by the document store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Store-assigned unique identifier
    pub id: String,
    pub sender: String,
    pub message: String,
    pub sleep_ms: u64,
    pub timestamp_client: DateTime<Utc>,
    /// Instant the ingest endpoint persisted the record
    pub timestamp_server: DateTime<Utc>,
}

/// A server-stamped record that has not been given an id yet
///
/// The ingest endpoint builds one of these and hands it to the store, which
/// assigns the id on append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub sender: String,
    pub message: String,
    pub sleep_ms: u64,
    pub timestamp_client: DateTime<Utc>,
    pub timestamp_server: DateTime<Utc>,
}

impl RecordDraft {
    /// Attach the store-assigned id
    pub fn into_record(self, id: String) -> Record {
        Record {
            id,
            sender: self.sender,
            message: self.message,
            sleep_ms: self.sleep_ms,
            timestamp_client: self.timestamp_client,
            timestamp_server: self.timestamp_server,
        }
    }
}

/// Sort records by server timestamp, newest first
///
/// The sort is stable, so records written in the same instant keep their
/// relative order.
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| b.timestamp_server.cmp(&a.timestamp_server));
}
