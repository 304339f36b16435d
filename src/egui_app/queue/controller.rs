/**
 * Queue Controller
 *
 * Explicit state machine for sequential delivery:
 *
 * ```text
 * Idle ──(queue non-empty, poll_dispatch)──▶ Dispatching(head)
 * Dispatching ──(response of any outcome, complete)──▶ Idle, head popped
 * ```
 *
 * The dispatched submission stays at the head of the queue until its
 * response arrives, so `len()` counts the in-flight entry as well.
 */

use std::collections::VecDeque;

use crate::shared::Submission;

/// What the controller is doing right now
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DispatchState {
    #[default]
    Idle,
    Dispatching(Submission),
}

/// Ordered queue of submissions with at most one in flight
#[derive(Debug, Default)]
pub struct QueueController {
    queue: VecDeque<Submission>,
    state: DispatchState,
}

impl QueueController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submission behind everything already queued
    pub fn enqueue(&mut self, submission: Submission) {
        tracing::debug!("[Queue] Enqueued {}", submission.to_json());
        self.queue.push_back(submission);
    }

    pub fn enqueue_all(&mut self, submissions: impl IntoIterator<Item = Submission>) {
        for submission in submissions {
            self.enqueue(submission);
        }
    }

    /// Start the next delivery if nothing is in flight
    ///
    /// Returns the submission to send, or `None` when a delivery is already
    /// in progress or the queue is empty.
    pub fn poll_dispatch(&mut self) -> Option<Submission> {
        if !matches!(self.state, DispatchState::Idle) {
            return None;
        }

        let head = self.queue.front()?.clone();
        self.state = DispatchState::Dispatching(head.clone());
        Some(head)
    }

    /// Record that the in-flight delivery has finished, whatever its outcome
    ///
    /// Pops the head of the queue and returns it. Does nothing while idle.
    pub fn complete(&mut self) -> Option<Submission> {
        match std::mem::take(&mut self.state) {
            DispatchState::Dispatching(_) => self.queue.pop_front(),
            DispatchState::Idle => None,
        }
    }

    /// The submission currently in flight
    pub fn current(&self) -> Option<&Submission> {
        match &self.state {
            DispatchState::Dispatching(submission) => Some(submission),
            DispatchState::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DispatchState::Idle)
    }

    /// Number of submissions not yet answered, including the one in flight
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Submission> {
        self.queue.iter()
    }
}
