//! Price source trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::DataError;
use crate::types::PriceTable;

/// A provider of historical daily OHLCV data.
///
/// Sources own all retrieval concerns (transport, ticker validation,
/// date parsing); the engine only ever sees a validated table.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch daily bars for one instrument between two dates, inclusive.
    ///
    /// Missing trading days are simply absent; the returned table is
    /// strictly ascending by date.
    async fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceTable, DataError>;

    /// The source name, for logs and diagnostics.
    fn name(&self) -> &str;
}
