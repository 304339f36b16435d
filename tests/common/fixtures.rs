//! Record and submission fixtures

use chrono::{DateTime, TimeZone, Utc};
use dataqueue::shared::{Record, RecordDraft, Submission};

pub fn at_secs(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// Record whose server timestamp is `server_secs` seconds after the epoch
pub fn record(id: &str, sender: &str, server_secs: i64) -> Record {
    RecordDraft {
        sender: sender.to_string(),
        message: format!("message {}", id),
        sleep_ms: 0,
        timestamp_client: at_secs(0),
        timestamp_server: at_secs(server_secs),
    }
    .into_record(id.to_string())
}

pub fn draft(message: &str, server_secs: i64) -> RecordDraft {
    RecordDraft {
        sender: "alice".to_string(),
        message: message.to_string(),
        sleep_ms: 0,
        timestamp_client: at_secs(0),
        timestamp_server: at_secs(server_secs),
    }
}

pub fn submission(message: &str) -> Submission {
    Submission::at("alice", message, 0, at_secs(1_700_000_000))
}
