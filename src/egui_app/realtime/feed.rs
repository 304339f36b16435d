/**
 * Change Feed
 *
 * The live table subscribes to collection snapshots through `ChangeFeed`.
 * A subscription is a channel the UI polls each frame plus a guard; dropping
 * the `FeedSubscription` drops the guard, which ends the background task and
 * closes the HTTP stream.
 *
 * `SseChangeFeed` connects to `GET /api/data/subscribe`, reconnecting with
 * exponential backoff until the subscription is dropped.
 */

use std::sync::mpsc;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::egui_app::config::Config;
use crate::egui_app::realtime::sse::SseDecoder;
use crate::shared::api::{SNAPSHOT_EVENT, SUBSCRIBE_DATA_PATH};
use crate::shared::Record;

const INITIAL_RECONNECT_DELAY: Duration = Duration::from_millis(1000);
const MAX_RECONNECT_DELAY: Duration = Duration::from_secs(30);

/// Connection status reported by a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    Connecting,
    Connected,
    Retrying,
    Error(String),
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedUpdate {
    /// Full contents of the collection
    Snapshot(Vec<Record>),
    Status(FeedStatus),
}

/// Receiving half of a subscription, owned by the UI
#[derive(Debug)]
pub struct FeedSubscription {
    updates: mpsc::Receiver<FeedUpdate>,
    _guard: oneshot::Sender<()>,
}

/// Sending half of a subscription, owned by the producer
#[derive(Debug)]
pub struct FeedSender {
    updates: mpsc::Sender<FeedUpdate>,
    cancelled: oneshot::Receiver<()>,
}

/// Create a connected subscription pair
pub fn subscription_channel() -> (FeedSender, FeedSubscription) {
    let (updates_tx, updates_rx) = mpsc::channel();
    let (guard_tx, guard_rx) = oneshot::channel();

    (
        FeedSender {
            updates: updates_tx,
            cancelled: guard_rx,
        },
        FeedSubscription {
            updates: updates_rx,
            _guard: guard_tx,
        },
    )
}

impl FeedSubscription {
    /// Take every pending update (non-blocking)
    pub fn poll(&self) -> Vec<FeedUpdate> {
        self.updates.try_iter().collect()
    }
}

impl FeedSender {
    /// Deliver an update; returns false once the subscription is gone
    pub fn send(&self, update: FeedUpdate) -> bool {
        self.updates.send(update).is_ok()
    }

    /// A handle for sending updates while `cancelled` is being awaited
    pub fn updates(&self) -> mpsc::Sender<FeedUpdate> {
        self.updates.clone()
    }

    /// Resolves when the subscription is dropped
    pub async fn cancelled(&mut self) {
        let _ = (&mut self.cancelled).await;
    }
}

/// Source of collection snapshots
pub trait ChangeFeed {
    fn subscribe(&self) -> FeedSubscription;
}

/// `ChangeFeed` backed by the server's SSE endpoint
#[derive(Debug, Clone)]
pub struct SseChangeFeed {
    config: Config,
    client: Client,
    runtime: Handle,
}

impl SseChangeFeed {
    pub fn new(config: Config, runtime: Handle) -> Self {
        Self {
            config,
            client: Client::new(),
            runtime,
        }
    }
}

impl ChangeFeed for SseChangeFeed {
    fn subscribe(&self) -> FeedSubscription {
        let (sender, subscription) = subscription_channel();
        let url = self.config.api_url(SUBSCRIBE_DATA_PATH);
        let client = self.client.clone();

        self.runtime.spawn(async move {
            let mut sender = sender;
            let updates = sender.updates();
            tokio::select! {
                _ = run_feed(&client, &url, &updates) => {}
                _ = sender.cancelled() => {
                    tracing::debug!("[Feed] Subscription dropped, closing stream");
                }
            }
        });

        subscription
    }
}

/// Why a single connection ended
enum StreamEnd {
    /// The server closed the stream
    Closed,
    /// A request, status or read error; reconnect
    Failed(String),
    /// The subscriber went away
    Abandoned,
}

async fn run_feed(client: &Client, url: &str, updates: &mpsc::Sender<FeedUpdate>) {
    let mut reconnect_delay = INITIAL_RECONNECT_DELAY;

    loop {
        tracing::info!("[Feed] Subscribing to {}", url);
        if updates.send(FeedUpdate::Status(FeedStatus::Connecting)).is_err() {
            return;
        }

        match stream_snapshots(client, url, updates, &mut reconnect_delay).await {
            StreamEnd::Abandoned => return,
            StreamEnd::Closed => {
                tracing::info!("[Feed] Stream closed by server, reconnecting");
            }
            StreamEnd::Failed(reason) => {
                tracing::warn!("[Feed] {} (will retry)", reason);
                if updates.send(FeedUpdate::Status(FeedStatus::Error(reason))).is_err() {
                    return;
                }
            }
        }

        if updates.send(FeedUpdate::Status(FeedStatus::Retrying)).is_err() {
            return;
        }
        tokio::time::sleep(reconnect_delay).await;
        reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
    }
}

async fn stream_snapshots(
    client: &Client,
    url: &str,
    updates: &mpsc::Sender<FeedUpdate>,
    reconnect_delay: &mut Duration,
) -> StreamEnd {
    let response = match client.get(url).header("Accept", "text/event-stream").send().await {
        Ok(response) => response,
        Err(e) => return StreamEnd::Failed(format!("network: {}", e)),
    };

    if !response.status().is_success() {
        return StreamEnd::Failed(format!("http: {}", response.status()));
    }

    tracing::info!("[Feed] Connected");
    if updates.send(FeedUpdate::Status(FeedStatus::Connected)).is_err() {
        return StreamEnd::Abandoned;
    }
    *reconnect_delay = INITIAL_RECONNECT_DELAY;

    let mut decoder = SseDecoder::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => return StreamEnd::Failed(format!("stream: {}", e)),
        };

        for event in decoder.push(&chunk) {
            if event.event != SNAPSHOT_EVENT {
                continue;
            }

            match serde_json::from_str::<Vec<Record>>(&event.data) {
                Ok(records) => {
                    tracing::debug!("[Feed] Snapshot with {} records", records.len());
                    if updates.send(FeedUpdate::Snapshot(records)).is_err() {
                        return StreamEnd::Abandoned;
                    }
                }
                Err(e) => tracing::warn!("[Feed] Failed to parse snapshot: {}", e),
            }
        }
    }

    StreamEnd::Closed
}
