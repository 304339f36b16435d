use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Runtime;

use crate::egui_app::api_client::{ClientError, IngestApi};
use crate::egui_app::config::Config;
use crate::egui_app::form::SubmissionForm;
use crate::egui_app::live_table::LiveTable;
use crate::egui_app::local_db::{persisted, LocalStorage, SenderWriter};
use crate::egui_app::notifications::{Notification, Toasts};
use crate::egui_app::queue::{deliver, DeliveryOutcome, QueueController};
use crate::egui_app::realtime::ChangeFeed;
use crate::shared::{MessageResponse, Submission};

/// Central application state shared across egui views.
///
/// Network and storage work runs on `runtime`; results come back over
/// `std::sync::mpsc` channels that `tick` polls once per frame.
pub struct AppState {
    pub config: Config,
    pub form: SubmissionForm,
    pub form_error: Option<String>,
    pub queue: QueueController,
    pub table: LiveTable,
    pub toasts: Toasts,
    /// Last submission the server accepted from this client
    pub last_send: Option<Submission>,
    pub cleanup_in_progress: bool,

    runtime: Arc<Runtime>,
    api: Arc<dyn IngestApi>,
    storage: Arc<dyn LocalStorage>,
    sender_writer: Option<SenderWriter>,
    delivery_result: Option<Receiver<DeliveryOutcome>>,
    cleanup_result: Option<Receiver<Result<MessageResponse, ClientError>>>,
}

impl AppState {
    pub fn new(
        config: Config,
        runtime: Arc<Runtime>,
        api: Arc<dyn IngestApi>,
        storage: Arc<dyn LocalStorage>,
        feed: &dyn ChangeFeed,
    ) -> Self {
        let mut table = LiveTable::new();
        table.attach(feed);
        let sender_writer = SenderWriter::spawn(runtime.handle(), storage.clone(), String::new());

        Self {
            config,
            form: SubmissionForm::new(),
            form_error: None,
            queue: QueueController::new(),
            table,
            toasts: Toasts::new(),
            last_send: None,
            cleanup_in_progress: false,
            runtime,
            api,
            storage,
            sender_writer: Some(sender_writer),
            delivery_result: None,
            cleanup_result: None,
        }
    }

    /// Load the persisted sender name and last send
    ///
    /// Blocks on the runtime, so call it before the UI starts.
    pub fn restore_persisted(&mut self) {
        let storage = self.storage.clone();
        let (sender, last_send) = self.runtime.block_on(async move {
            let sender = persisted::load_sender(storage.as_ref()).await;
            let last_send = persisted::load_last_send(storage.as_ref()).await;
            (sender, last_send)
        });

        match sender {
            Ok(Some(sender)) => self.form.sender = sender,
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to restore sender name: {}", e),
        }
        match last_send {
            Ok(last_send) => self.last_send = last_send,
            Err(e) => tracing::warn!("Failed to restore last send: {}", e),
        }
    }

    /// Advance background work; call once per frame
    pub fn tick(&mut self) {
        self.table.poll();
        self.check_delivery_result();
        self.dispatch_next();
        self.check_cleanup_result();
        self.toasts.expire(Instant::now());
    }

    /// Whether any background work is outstanding
    pub fn is_busy(&self) -> bool {
        !self.queue.is_empty() || self.cleanup_in_progress
    }

    /// Validate the form and queue its rows
    pub fn submit_form(&mut self) {
        match self.form.submit() {
            Ok(submissions) => {
                self.form_error = None;
                self.queue.enqueue_all(submissions);
            }
            Err(e) => self.form_error = Some(e.to_string()),
        }
    }

    /// Persist the sender name after an edit
    ///
    /// Writes happen in order on a single background task.
    pub fn save_sender(&self) {
        if let Some(writer) = &self.sender_writer {
            writer.update(&self.form.sender);
        }
    }

    /// Wait for pending sender name writes; call once on exit
    pub fn flush_pending(&mut self) {
        if let Some(writer) = self.sender_writer.take() {
            self.runtime.block_on(writer.flush());
        }
    }

    /// Ask the server to delete every record
    pub fn request_cleanup(&mut self) {
        if self.cleanup_in_progress {
            return;
        }
        self.cleanup_in_progress = true;

        let api = self.api.clone();
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            let _ = tx.send(api.cleanup().await);
        });
        self.cleanup_result = Some(rx);
    }

    fn dispatch_next(&mut self) {
        if self.delivery_result.is_some() {
            return;
        }
        let Some(submission) = self.queue.poll_dispatch() else {
            return;
        };

        let api = self.api.clone();
        let storage = self.storage.clone();
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            let outcome = deliver(api.as_ref(), storage.as_ref(), submission).await;
            let _ = tx.send(outcome);
        });
        self.delivery_result = Some(rx);
    }

    fn check_delivery_result(&mut self) {
        let Some(rx) = &self.delivery_result else {
            return;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(std::sync::mpsc::TryRecvError::Empty) => return,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                tracing::error!("[Queue] Delivery task ended without a result");
                self.delivery_result = None;
                if let Some(submission) = self.queue.complete() {
                    self.toasts.push(Notification::failed(&submission));
                }
                return;
            }
        };

        self.delivery_result = None;
        self.queue.complete();
        self.toasts.push(outcome.notification());
        if outcome.is_success() {
            self.last_send = Some(outcome.submission);
        }
    }

    fn check_cleanup_result(&mut self) {
        let Some(rx) = &self.cleanup_result else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(std::sync::mpsc::TryRecvError::Empty) => return,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                Err(ClientError::Status {
                    status: 0,
                    message: "cleanup task ended without a result".to_string(),
                })
            }
        };

        self.cleanup_result = None;
        self.cleanup_in_progress = false;
        match result {
            Ok(response) => {
                self.toasts.push(Notification::success(response.message));
            }
            Err(e) => {
                tracing::warn!("[Cleanup] Failed: {}", e);
                self.toasts.push(Notification::error(format!("Cleanup failed: {}", e)));
            }
        }
    }
}
