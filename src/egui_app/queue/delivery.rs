//! Delivery drivers
//!
//! `deliver` performs one ingest call and records the outcome; `drain` runs
//! a `QueueController` to completion. The UI uses `deliver` directly and
//! feeds the result back into the controller on the next frame.

use crate::egui_app::api_client::{ClientError, IngestApi};
use crate::egui_app::local_db::{persisted, LocalStorage};
use crate::egui_app::notifications::Notification;
use crate::egui_app::queue::QueueController;
use crate::shared::Submission;

/// Result of delivering one submission
#[derive(Debug)]
pub struct DeliveryOutcome {
    pub submission: Submission,
    pub result: Result<(), ClientError>,
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Toast describing the outcome
    pub fn notification(&self) -> Notification {
        match &self.result {
            Ok(()) => Notification::delivered(&self.submission),
            Err(_) => Notification::failed(&self.submission),
        }
    }
}

/// Send one submission and persist it as the last send on success
///
/// A failure to persist is logged and does not turn a delivered submission
/// into a failed one.
pub async fn deliver<A, S>(api: &A, storage: &S, submission: Submission) -> DeliveryOutcome
where
    A: IngestApi + ?Sized,
    S: LocalStorage + ?Sized,
{
    let result = match api.add_data(&submission).await {
        Ok(response) => {
            tracing::info!("[Queue] Delivered: {}", response.message);
            if let Err(e) = persisted::save_last_send(storage, &submission).await {
                tracing::warn!("[Queue] Failed to persist last send: {}", e);
            }
            Ok(())
        }
        Err(e) => {
            tracing::warn!("[Queue] Delivery failed: {}", e);
            Err(e)
        }
    };

    DeliveryOutcome { submission, result }
}

/// Deliver every queued submission in order, one at a time
///
/// Failed entries are dropped and the queue moves on. Returns the outcome
/// of each delivery in the order they completed.
pub async fn drain<A, S>(controller: &mut QueueController, api: &A, storage: &S) -> Vec<DeliveryOutcome>
where
    A: IngestApi + ?Sized,
    S: LocalStorage + ?Sized,
{
    let mut outcomes = Vec::with_capacity(controller.len());

    while let Some(submission) = controller.poll_dispatch() {
        let outcome = deliver(api, storage, submission).await;
        controller.complete();
        outcomes.push(outcome);
    }

    outcomes
}
