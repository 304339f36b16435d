//! Real-time snapshot feed
//!
//! - **`sse`** - incremental Server-Sent Events decoder
//! - **`feed`** - `ChangeFeed` trait, subscriptions and the SSE-backed feed

pub mod sse;
pub mod feed;

pub use feed::{subscription_channel, ChangeFeed, FeedSender, FeedStatus, FeedSubscription, FeedUpdate, SseChangeFeed};
pub use sse::{SseDecoder, SseEvent};
