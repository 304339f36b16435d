//! Background persistence of the sender name
//!
//! The form reports every keystroke. Edits go into a `watch` channel and a
//! single task writes them one at a time; edits that arrive while a write is
//! running collapse into the newest value, so the stored name always ends up
//! as the last one typed.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::egui_app::local_db::{persisted, LocalStorage};

/// Handle feeding sender name edits to the writer task
#[derive(Debug)]
pub struct SenderWriter {
    latest: watch::Sender<String>,
    task: JoinHandle<()>,
}

impl SenderWriter {
    /// Start the writer task on `runtime`
    ///
    /// `initial` is the value already stored; it is not written again.
    pub fn spawn(runtime: &Handle, storage: Arc<dyn LocalStorage>, initial: String) -> Self {
        let (latest, mut edits) = watch::channel(initial);

        let task = runtime.spawn(async move {
            while edits.changed().await.is_ok() {
                let sender = edits.borrow_and_update().clone();
                if let Err(e) = persisted::save_sender(storage.as_ref(), &sender).await {
                    tracing::warn!("Failed to persist sender name: {}", e);
                }
            }
            tracing::debug!("Sender writer stopped");
        });

        Self { latest, task }
    }

    /// Record an edit; returns immediately
    pub fn update(&self, sender: &str) {
        self.latest.send_if_modified(|current| {
            if current == sender {
                return false;
            }
            sender.clone_into(current);
            true
        });
    }

    /// Stop accepting edits and wait until the newest one is stored
    pub async fn flush(self) {
        let Self { latest, task } = self;
        drop(latest);
        if let Err(e) = task.await {
            tracing::warn!("Sender writer task failed: {}", e);
        }
    }
}
