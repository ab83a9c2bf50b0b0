//! CSV price source.

use async_trait::async_trait;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use feeder_core::error::{DataError, TableError};
use feeder_core::traits::PriceSource;
use feeder_core::types::{Bar, PriceTable};

/// CSV record format.
#[derive(Debug, Deserialize)]
pub(crate) struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// CSV file source for historical daily data.
pub struct CsvSource {
    path: String,
}

impl CsvSource {
    /// Create a new CSV source.
    pub fn new(path: &str) -> Result<Self, DataError> {
        if !Path::new(path).exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_string(),
        })
    }

    fn load(&self) -> Result<PriceTable, DataError> {
        let file = std::fs::File::open(&self.path)
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;
        read_table(file)
    }
}

#[async_trait]
impl PriceSource for CsvSource {
    async fn fetch(
        &self,
        _symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceTable, DataError> {
        if start > end {
            return Err(DataError::InvalidDateRange { start, end });
        }
        let table = self.load()?;
        let bars: Vec<Bar> = table
            .iter()
            .filter(|b| b.date >= start && b.date <= end)
            .copied()
            .collect();
        if bars.is_empty() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(PriceTable::new(bars)?)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse a whole CSV document into a validated table.
///
/// Rows are sorted by date before validation so out-of-order files load;
/// a duplicate date still fails.
pub(crate) fn read_table<R: Read>(input: R) -> Result<PriceTable, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    check_headers(&mut reader)?;

    let mut bars = Vec::new();
    for result in reader.deserialize() {
        let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
        bars.push(Bar::new(
            parse_date(&record.date)?,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume,
        ));
    }

    bars.sort_by_key(|b| b.date);
    Ok(PriceTable::new(bars)?)
}

fn check_headers<R: Read>(reader: &mut csv::Reader<R>) -> Result<(), DataError> {
    let headers = reader
        .headers()
        .map_err(|e| DataError::ParseError(e.to_string()))?;
    let lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    for required in ["date", "open", "high", "low", "close", "volume"] {
        let found = lower.iter().any(|h| {
            h == required || (required == "date" && h == "timestamp")
        });
        if !found {
            return Err(TableError::MissingColumn(required.to_string()).into());
        }
    }
    Ok(())
}

/// Parse various calendar date formats.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%Y%m%d"];

    for format in formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }
    // Datetime stamps: keep the calendar day
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}
