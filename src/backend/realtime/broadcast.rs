/**
 * Snapshot Broadcasting
 *
 * Stores publish the full collection to all subscribers through a
 * `tokio::sync::broadcast` channel. Every subscriber receives its own copy of
 * each snapshot; a subscriber that falls behind loses the oldest snapshots,
 * which is harmless because each snapshot supersedes the previous one.
 */

use crate::backend::store::Snapshot;
use tokio::sync::broadcast;

/// Broadcast sender for collection snapshots
pub type SnapshotBroadcast = broadcast::Sender<Snapshot>;

/// Publish a snapshot to all subscribers
///
/// # Returns
///
/// Number of active subscribers that received the snapshot (0 if none)
pub fn publish_snapshot(broadcast_tx: &SnapshotBroadcast, snapshot: Snapshot) -> usize {
    let size = snapshot.len();
    match broadcast_tx.send(snapshot) {
        Ok(subscriber_count) => {
            tracing::debug!(
                "[Realtime] Snapshot of {} records sent to {} subscribers",
                size,
                subscriber_count
            );
            subscriber_count
        }
        Err(_) => {
            // No subscribers, that's okay
            tracing::trace!("[Realtime] No subscribers for snapshot of {} records", size);
            0
        }
    }
}
