//! Volume-derived indicators.

use feeder_core::error::IndicatorError;
use feeder_core::traits::Indicator;
use feeder_core::types::{PriceTable, Series};

use crate::util::{ema, maybe_normalize};

/// Chaikin Oscillator (`CHO_n_m`).
///
/// Difference of a fast and a slow EMA of the per-bar
/// accumulation/distribution line
/// `((2c - h - l) / (h - l)) * volume`, which is 0 on a zero-range bar.
#[derive(Debug, Clone)]
pub struct Cho {
    fast: usize,
    slow: usize,
    normalize: bool,
}

impl Cho {
    /// Create a new Chaikin oscillator.
    pub fn new(fast: usize, slow: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if fast == 0 || slow == 0 {
            return Err(IndicatorError::InvalidParameter(
                "CHO periods must be positive".to_string(),
            ));
        }
        if fast >= slow {
            return Err(IndicatorError::InvalidParameter(format!(
                "CHO fast period {fast} must be less than slow period {slow}"
            )));
        }
        Ok(Self {
            fast,
            slow,
            normalize,
        })
    }
}

impl Indicator for Cho {
    fn name(&self) -> String {
        format!("CHO_{}_{}", self.fast, self.slow)
    }

    fn warm_up(&self) -> usize {
        self.fast.max(self.slow) - 1
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let ad: Vec<f64> = table
            .iter()
            .map(|bar| {
                let range = bar.range();
                if range == 0.0 {
                    0.0
                } else {
                    (2.0 * bar.close - bar.high - bar.low) / range * bar.volume
                }
            })
            .collect();

        let fast = ema(&ad, self.fast);
        let slow = ema(&ad, self.slow);
        let values: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();

        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}

/// Williams Accumulation/Distribution (`WAD_n`).
///
/// A sequential recurrence over the whole history: each bar contributes
/// `price_move * volume` where the move is measured against the true
/// range bounds of the previous close, and WAD is the running sum of
/// those increments. The configured window only sets the fixed lead-in of
/// undefined rows; it does not parameterize the recurrence itself.
#[derive(Debug, Clone)]
pub struct Wad {
    window: usize,
    normalize: bool,
}

impl Wad {
    /// Create a new Williams A/D indicator.
    pub fn new(window: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "WAD window must be positive".to_string(),
            ));
        }
        Ok(Self { window, normalize })
    }
}

impl Indicator for Wad {
    fn name(&self) -> String {
        format!("WAD_{}", self.window)
    }

    fn warm_up(&self) -> usize {
        self.window
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let bars = table.bars();
        let mut values = vec![f64::NAN; bars.len()];

        let mut acc = 0.0;
        for t in 1..bars.len() {
            let prev_close = bars[t - 1].close;
            let close = bars[t].close;
            let price_move = if close.is_nan() || prev_close.is_nan() {
                f64::NAN
            } else if close > prev_close {
                let (true_high, _) = bars[t].true_range_bounds(prev_close);
                close - true_high
            } else if close < prev_close {
                let (_, true_low) = bars[t].true_range_bounds(prev_close);
                close - true_low
            } else {
                0.0
            };
            acc += price_move * bars[t].volume;
            if t >= self.window {
                values[t] = acc;
            }
        }

        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}
