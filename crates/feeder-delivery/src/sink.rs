//! Delivery sinks for rendered feature tables.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use feeder_core::error::DeliveryError;
use feeder_core::traits::FeatureSink;
use feeder_core::types::FeatureTable;

use crate::{chunk_payloads, to_records, DEFAULT_PAYLOAD_LIMIT};

/// Writes the full record set to a local file as a pretty-printed JSON
/// array. Useful for inspection and for feeding other tools offline.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl FeatureSink for JsonFileSink {
    async fn deliver(&self, ticker: &str, table: &FeatureTable) -> Result<(), DeliveryError> {
        let records = to_records(ticker, table);
        let body = serde_json::to_string_pretty(&records)?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(DeliveryError::Io)?;
        info!(
            ticker,
            rows = records.len(),
            path = %self.path.display(),
            "Wrote feature records"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

/// Ships records to an Azure Event Hubs REST endpoint.
///
/// Records are serialized into JSON-array payloads no larger than the
/// configured limit and POSTed one payload at a time. Authentication is
/// a caller-supplied SAS token sent in the `Authorization` header.
pub struct EventHubSink {
    client: reqwest::Client,
    base_url: String,
    sas_token: String,
    payload_limit: usize,
    max_retries: u32,
}

const RETRY_DELAY: Duration = Duration::from_secs(2);

impl EventHubSink {
    pub fn new(namespace: &str, hub: &str, sas_token: impl Into<String>) -> Self {
        Self::with_base_url(
            format!("https://{}.servicebus.windows.net/{}", namespace, hub),
            sas_token,
        )
    }

    /// Point the sink at an arbitrary endpoint. Used in tests.
    pub fn with_base_url(base_url: impl Into<String>, sas_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            sas_token: sas_token.into(),
            payload_limit: DEFAULT_PAYLOAD_LIMIT,
            max_retries: 3,
        }
    }

    pub fn with_payload_limit(mut self, limit: usize) -> Self {
        self.payload_limit = limit;
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url)
    }

    async fn post_payload(&self, payload: &str) -> Result<(), DeliveryError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let response = self
                .client
                .post(self.messages_url())
                .header("Authorization", self.sas_token.as_str())
                .header(
                    "Content-Type",
                    "application/vnd.microsoft.servicebus.json",
                )
                .body(payload.to_string())
                .send()
                .await;

            let error = match response {
                Ok(resp) if resp.status().is_success() => return Ok(()),
                Ok(resp) => format!("event hub returned status {}", resp.status()),
                Err(e) => format!("event hub request failed: {}", e),
            };
            if attempt > self.max_retries {
                return Err(DeliveryError::Transport(error));
            }
            warn!(attempt, error, "Event hub send failed, retrying");
            tokio::time::sleep(RETRY_DELAY).await;
        }
    }
}

#[async_trait]
impl FeatureSink for EventHubSink {
    async fn deliver(&self, ticker: &str, table: &FeatureTable) -> Result<(), DeliveryError> {
        let records = to_records(ticker, table);
        let payloads = chunk_payloads(&records, self.payload_limit)?;
        debug!(
            ticker,
            rows = records.len(),
            payloads = payloads.len(),
            "Sending feature records"
        );
        for payload in &payloads {
            self.post_payload(payload).await?;
        }
        info!(
            ticker,
            rows = records.len(),
            payloads = payloads.len(),
            "Delivered feature records"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "event-hub"
    }
}
