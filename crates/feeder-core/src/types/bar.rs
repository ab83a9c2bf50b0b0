//! Daily OHLCV bar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data.
///
/// Prices are f64 for fast indicator arithmetic; NaN marks an absent
/// quote on an illiquid day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Calendar date, the join and alignment key
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Typical price (HLC average).
    #[inline]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// The bar's range (high - low).
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// True-range bounds against the previous close: the greater of
    /// high/previous close and the lesser of low/previous close.
    #[inline]
    pub fn true_range_bounds(&self, prev_close: f64) -> (f64, f64) {
        (self.high.max(prev_close), self.low.min(prev_close))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_bar_calculations() {
        let bar = Bar::new(date("2024-01-15"), 100.0, 110.0, 95.0, 105.0, 1_000_000.0);

        assert!((bar.typical_price() - 103.333333).abs() < 0.001);
        assert!((bar.range() - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_true_range_bounds() {
        let bar = Bar::new(date("2024-01-15"), 100.0, 110.0, 95.0, 105.0, 1_000_000.0);

        // Previous close inside the range
        assert_eq!(bar.true_range_bounds(100.0), (110.0, 95.0));
        // Gap up: previous close below the low
        assert_eq!(bar.true_range_bounds(90.0), (110.0, 90.0));
        // Gap down: previous close above the high
        assert_eq!(bar.true_range_bounds(120.0), (120.0, 95.0));
    }
}
