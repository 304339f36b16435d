/**
 * Live Table
 *
 * Working set behind the records table. While attached to a `ChangeFeed`
 * every snapshot replaces the whole set, which is then sorted newest first.
 * Detaching (or dropping the table) drops the subscription.
 */

use std::collections::BTreeSet;

use crate::egui_app::realtime::{ChangeFeed, FeedStatus, FeedSubscription, FeedUpdate};
use crate::shared::{sort_newest_first, Record};

#[derive(Debug, Default)]
pub struct LiveTable {
    records: Vec<Record>,
    loaded: bool,
    status: Option<FeedStatus>,
    sender_filter: Option<String>,
    subscription: Option<FeedSubscription>,
}

impl LiveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `feed`, replacing any previous subscription
    pub fn attach(&mut self, feed: &dyn ChangeFeed) {
        self.subscription = Some(feed.subscribe());
    }

    /// Release the subscription
    pub fn detach(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("[Feed] Live table detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Apply every pending update from the subscription
    ///
    /// Returns true when the working set changed.
    pub fn poll(&mut self) -> bool {
        let Some(subscription) = &self.subscription else {
            return false;
        };

        let mut changed = false;
        for update in subscription.poll() {
            match update {
                FeedUpdate::Snapshot(records) => {
                    self.apply_snapshot(records);
                    changed = true;
                }
                FeedUpdate::Status(status) => self.status = Some(status),
            }
        }
        changed
    }

    /// Replace the working set with `records`, newest first
    pub fn apply_snapshot(&mut self, mut records: Vec<Record>) {
        sort_newest_first(&mut records);
        self.records = records;
        self.loaded = true;
    }

    /// True until the first snapshot arrives
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    pub fn status(&self) -> Option<&FeedStatus> {
        self.status.as_ref()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records passing the sender filter, in display order
    pub fn visible_records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |record| match &self.sender_filter {
            Some(sender) => &record.sender == sender,
            None => true,
        })
    }

    /// Distinct senders in the working set, sorted
    pub fn senders(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.sender.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn sender_filter(&self) -> Option<&str> {
        self.sender_filter.as_deref()
    }

    pub fn set_sender_filter(&mut self, sender: Option<String>) {
        self.sender_filter = sender;
    }
}
