//! Validated, date-ordered price history.

use chrono::NaiveDate;

use super::Bar;
use crate::error::TableError;

/// An ordered sequence of daily bars, strictly increasing by date.
///
/// Validated on construction and read-only afterwards: the engine derives
/// new columns from it but never mutates it.
#[derive(Debug, Clone)]
pub struct PriceTable {
    bars: Vec<Bar>,
}

impl PriceTable {
    /// Build a table from bars, validating the date index.
    ///
    /// Rejects duplicate or out-of-order dates, `high < low` (when both
    /// are finite) and negative volume. NaN prices are allowed; they mark
    /// illiquid days.
    pub fn new(bars: Vec<Bar>) -> Result<Self, TableError> {
        for (i, bar) in bars.iter().enumerate() {
            if i > 0 {
                let prev = bars[i - 1].date;
                if bar.date == prev {
                    return Err(TableError::DuplicateDate(bar.date));
                }
                if bar.date < prev {
                    return Err(TableError::NonAscendingDates {
                        position: i,
                        previous: prev,
                        current: bar.date,
                    });
                }
            }
            if bar.high.is_finite() && bar.low.is_finite() && bar.high < bar.low {
                return Err(TableError::InvalidBar {
                    date: bar.date,
                    reason: format!("high {} below low {}", bar.high, bar.low),
                });
            }
            if bar.volume.is_finite() && bar.volume < 0.0 {
                return Err(TableError::InvalidBar {
                    date: bar.date,
                    reason: format!("negative volume {}", bar.volume),
                });
            }
        }
        Ok(Self { bars })
    }

    /// Number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// The date index.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Extract open prices.
    pub fn opens(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.open).collect()
    }

    /// Extract high prices.
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Extract low prices.
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Extract close prices.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract volumes.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Extract typical prices.
    pub fn typical_prices(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.typical_price()).collect()
    }

    /// Iterate over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }
}
