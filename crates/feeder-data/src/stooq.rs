//! Stooq HTTP price source.
//!
//! Downloads daily OHLCV history as CSV from stooq.com, which serves the
//! same column shape as the CSV source without authentication.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use feeder_core::error::DataError;
use feeder_core::traits::PriceSource;
use feeder_core::types::PriceTable;

use crate::csv_source::read_table;

const DEFAULT_BASE_URL: &str = "https://stooq.com/q/d/l/";

/// Remote daily-data source backed by stooq.com.
pub struct StooqSource {
    client: reqwest::Client,
    base_url: String,
}

impl StooqSource {
    /// Create a source against the public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a source against a custom endpoint (tests, mirrors).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request_url(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/?s={}&d1={}&d2={}&i=d",
            self.base_url,
            symbol.to_lowercase(),
            start.format("%Y%m%d"),
            end.format("%Y%m%d"),
        )
    }
}

impl Default for StooqSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for StooqSource {
    async fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceTable, DataError> {
        if symbol.is_empty() {
            return Err(DataError::SymbolNotFound(symbol.to_string()));
        }
        if start > end {
            return Err(DataError::InvalidDateRange { start, end });
        }

        let url = self.request_url(symbol, start, end);
        debug!(%url, "fetching daily history");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;
        if !response.status().is_success() {
            return Err(DataError::ConnectionError(format!(
                "{} returned {}",
                self.name(),
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;
        // Unknown tickers come back as a one-line notice, not CSV
        if !body.to_lowercase().starts_with("date") {
            return Err(DataError::SymbolNotFound(symbol.to_string()));
        }

        let table = read_table(body.as_bytes())?;
        if table.is_empty() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(table)
    }

    fn name(&self) -> &str {
        "stooq"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url() {
        let source = StooqSource::new();
        let url = source.request_url(
            "MSFT",
            NaiveDate::from_ymd_opt(2005, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2017, 6, 12).unwrap(),
        );
        assert_eq!(
            url,
            "https://stooq.com/q/d/l/?s=msft&d1=20050101&d2=20170612&i=d"
        );
    }

    #[tokio::test]
    async fn test_empty_symbol_rejected() {
        let source = StooqSource::new();
        let err = source
            .fetch(
                "",
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::SymbolNotFound(_)));
    }

    #[tokio::test]
    async fn test_inverted_range_rejected() {
        let source = StooqSource::new();
        let err = source
            .fetch(
                "MSFT",
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::InvalidDateRange { .. }));
    }
}
