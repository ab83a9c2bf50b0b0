//! Shared table fixtures for module tests.

use chrono::NaiveDate;
use feeder_core::types::{Bar, PriceTable};

/// Consecutive daily bars with close rising linearly from 100 by 1 point
/// per day, high = close + 1, low = close - 1, constant volume 1000.
pub fn linear_table(len: usize) -> PriceTable {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = (0..len)
        .map(|i| {
            let close = 100.0 + i as f64;
            Bar::new(
                start + chrono::Days::new(i as u64),
                close,
                close + 1.0,
                close - 1.0,
                close,
                1000.0,
            )
        })
        .collect();
    PriceTable::new(bars).unwrap()
}

/// Bars whose close alternates between 100 and 101, starting at 100.
pub fn alternating_table(len: usize) -> PriceTable {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = (0..len)
        .map(|i| {
            let close = if i % 2 == 0 { 100.0 } else { 101.0 };
            Bar::new(
                start + chrono::Days::new(i as u64),
                close,
                close + 1.0,
                close - 1.0,
                close,
                1000.0,
            )
        })
        .collect();
    PriceTable::new(bars).unwrap()
}
