//! Ordering invariants for the live table and the client queue

use chrono::{DateTime, Utc};
use dataqueue::egui_app::QueueController;
use dataqueue::shared::{sort_newest_first, ClientTimestamp, Submission};
use proptest::prelude::*;

use crate::common::{at_secs, record};

proptest! {
    #[test]
    fn sorted_snapshots_are_newest_first(secs in proptest::collection::vec(0i64..10_000, 0..50)) {
        let mut records: Vec<_> = secs
            .iter()
            .enumerate()
            .map(|(i, s)| record(&i.to_string(), "alice", *s))
            .collect();

        sort_newest_first(&mut records);

        for pair in records.windows(2) {
            prop_assert!(pair[0].timestamp_server >= pair[1].timestamp_server);
        }
    }

    #[test]
    fn queue_dispatches_in_enqueue_order(messages in proptest::collection::vec("[a-z]{1,8}", 0..20)) {
        let mut controller = QueueController::new();
        controller.enqueue_all(messages.iter().map(|m| Submission::at("alice", m.as_str(), 0, at_secs(0))));

        let mut dispatched = Vec::new();
        while let Some(next) = controller.poll_dispatch() {
            prop_assert!(controller.poll_dispatch().is_none());
            dispatched.push(next.message);
            controller.complete();
        }

        prop_assert_eq!(dispatched, messages);
        prop_assert!(controller.is_idle());
    }

    #[test]
    fn epoch_and_text_timestamps_agree(ms in -62_135_596_800_000i64..253_402_300_799_000) {
        let from_epoch = ClientTimestamp::EpochMillis(ms).to_utc().unwrap();
        let as_text: ClientTimestamp = from_epoch.into();

        prop_assert_eq!(as_text.to_utc().unwrap(), from_epoch);
        prop_assert_eq!(from_epoch, DateTime::<Utc>::from_timestamp_millis(ms).unwrap());
    }
}
