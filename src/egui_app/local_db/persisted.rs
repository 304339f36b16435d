//! Typed accessors for persisted UI state
//!
//! Values are stored as JSON under fixed keys and never expire.

use crate::egui_app::local_db::{LocalStorage, StorageError};
use crate::shared::Submission;

/// Key holding the last sender name typed into the form
pub const SENDER_KEY: &str = "sender";

/// Key holding the last successfully delivered submission
pub const LAST_SEND_KEY: &str = "lastSend";

pub async fn load_sender<S: LocalStorage + ?Sized>(storage: &S) -> Result<Option<String>, StorageError> {
    load_json(storage, SENDER_KEY).await
}

pub async fn save_sender<S: LocalStorage + ?Sized>(storage: &S, sender: &str) -> Result<(), StorageError> {
    save_json(storage, SENDER_KEY, &sender).await
}

pub async fn load_last_send<S: LocalStorage + ?Sized>(storage: &S) -> Result<Option<Submission>, StorageError> {
    load_json(storage, LAST_SEND_KEY).await
}

pub async fn save_last_send<S: LocalStorage + ?Sized>(
    storage: &S,
    submission: &Submission,
) -> Result<(), StorageError> {
    save_json(storage, LAST_SEND_KEY, submission).await
}

async fn load_json<S, T>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    S: LocalStorage + ?Sized,
    T: serde::de::DeserializeOwned,
{
    match storage.get(key).await? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(None),
    }
}

async fn save_json<S, T>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: LocalStorage + ?Sized,
    T: serde::Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw).await
}
