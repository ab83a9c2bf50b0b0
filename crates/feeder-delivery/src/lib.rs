//! Rendering and delivery of finished feature tables.
//!
//! The engine hands over a [`feeder_core::types::FeatureTable`]; this
//! crate turns it into flat JSON records, splits them into payloads that
//! respect a transport byte limit, and ships them to a sink (a local
//! JSON file or an Azure Event Hubs REST endpoint).

mod chunk;
mod record;
mod sink;

pub use chunk::chunk_payloads;
pub use record::to_records;
pub use sink::{EventHubSink, JsonFileSink};

/// Default per-message payload limit (Event Hubs allows 256 KiB).
pub const DEFAULT_PAYLOAD_LIMIT: usize = 256 * 1024;
