//! Delivery sink trait definition.

use async_trait::async_trait;

use crate::error::DeliveryError;
use crate::types::FeatureTable;

/// A consumer of the finished feature table.
///
/// Sinks own serialization and transport concerns (record format,
/// payload limits, retries); the engine hands over the table and is done.
#[async_trait]
pub trait FeatureSink: Send + Sync {
    /// Deliver the feature table for one ticker.
    async fn deliver(&self, ticker: &str, table: &FeatureTable) -> Result<(), DeliveryError>;

    /// The sink name, for logs and diagnostics.
    fn name(&self) -> &str;
}
