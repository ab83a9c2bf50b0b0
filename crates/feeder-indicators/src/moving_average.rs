//! Moving average indicators.

use feeder_core::error::IndicatorError;
use feeder_core::traits::Indicator;
use feeder_core::types::{PriceTable, Series};

use crate::util::{ema, maybe_normalize, rolling_mean};

/// Simple Moving Average of the close (`MA_n`).
#[derive(Debug, Clone)]
pub struct Ma {
    window: usize,
    normalize: bool,
}

impl Ma {
    /// Create a new MA indicator.
    pub fn new(window: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "MA window must be positive".to_string(),
            ));
        }
        Ok(Self { window, normalize })
    }
}

impl Indicator for Ma {
    fn name(&self) -> String {
        format!("MA_{}", self.window)
    }

    fn warm_up(&self) -> usize {
        self.window - 1
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let values = rolling_mean(&table.closes(), self.window);
        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}

/// Exponential Moving Average of the close (`EMA_n`).
///
/// SMA-seeded after `n` observations, then recursive smoothing with
/// alpha = 2 / (n + 1).
#[derive(Debug, Clone)]
pub struct Ema {
    window: usize,
    normalize: bool,
}

impl Ema {
    /// Create a new EMA indicator.
    pub fn new(window: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "EMA window must be positive".to_string(),
            ));
        }
        Ok(Self { window, normalize })
    }
}

impl Indicator for Ema {
    fn name(&self) -> String {
        format!("EMA_{}", self.window)
    }

    fn warm_up(&self) -> usize {
        self.window - 1
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let values = ema(&table.closes(), self.window);
        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}
