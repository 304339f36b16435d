//! Scripted `IngestApi` implementations

use dataqueue::egui_app::{ClientError, IngestApi};
use dataqueue::shared::{MessageResponse, Submission};
use futures_util::future::BoxFuture;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Records call order and concurrency; fails messages listed in `reject`
pub struct RecordingApi {
    pub reject: Vec<String>,
    pub delay: Duration,
    pub received: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl RecordingApi {
    pub fn new(delay: Duration) -> Self {
        Self {
            reject: Vec::new(),
            delay,
            received: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(mut self, message: &str) -> Self {
        self.reject.push(message.to_string());
        self
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

impl IngestApi for RecordingApi {
    fn add_data<'a>(&'a self, submission: &'a Submission) -> BoxFuture<'a, Result<MessageResponse, ClientError>> {
        Box::pin(async move {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            self.received.lock().unwrap().push(submission.message.clone());

            tokio::time::sleep(self.delay).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.reject.contains(&submission.message) {
                Err(ClientError::Status {
                    status: 500,
                    message: "Error Adding Data".to_string(),
                })
            } else {
                Ok(MessageResponse::new("Data added successfully"))
            }
        })
    }

    fn cleanup(&self) -> BoxFuture<'_, Result<MessageResponse, ClientError>> {
        Box::pin(async { Ok(MessageResponse::new("Data deleted successfully")) })
    }
}
