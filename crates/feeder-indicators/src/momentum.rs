//! Momentum indicators.

use feeder_core::error::IndicatorError;
use feeder_core::traits::Indicator;
use feeder_core::types::{PriceTable, Series};

use crate::util::{diff, maybe_normalize, rolling_max, rolling_min};

/// Momentum (`MOM_n`): `close[t] - close[t-n]`.
#[derive(Debug, Clone)]
pub struct Mom {
    window: usize,
    normalize: bool,
}

impl Mom {
    /// Create a new momentum indicator.
    pub fn new(window: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "MOM window must be positive".to_string(),
            ));
        }
        Ok(Self { window, normalize })
    }
}

impl Indicator for Mom {
    fn name(&self) -> String {
        format!("MOM_{}", self.window)
    }

    fn warm_up(&self) -> usize {
        self.window
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let values = diff(&table.closes(), self.window);
        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}

/// Rate of Change (`ROC_n`): `(close[t] - close[t-n]) / close[t-n]`.
///
/// Percent-change form; a zero base close yields NaN at that bar.
#[derive(Debug, Clone)]
pub struct Roc {
    window: usize,
    normalize: bool,
}

impl Roc {
    /// Create a new rate-of-change indicator.
    pub fn new(window: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "ROC window must be positive".to_string(),
            ));
        }
        Ok(Self { window, normalize })
    }
}

impl Indicator for Roc {
    fn name(&self) -> String {
        format!("ROC_{}", self.window)
    }

    fn warm_up(&self) -> usize {
        self.window
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let closes = table.closes();
        let mut values = vec![f64::NAN; closes.len()];
        for t in self.window..closes.len() {
            let base = closes[t - self.window];
            if base != 0.0 {
                values[t] = (closes[t] - base) / base;
            }
        }
        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}

/// Relative Strength Index (`RSI_n`).
///
/// Wilder-smoothed averages of close-to-close gains and losses, rescaled
/// to 0-100 via `100 - 100 / (1 + RS)`.
#[derive(Debug, Clone)]
pub struct Rsi {
    window: usize,
    normalize: bool,
}

impl Rsi {
    /// Create a new RSI indicator.
    pub fn new(window: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "RSI window must be positive".to_string(),
            ));
        }
        Ok(Self { window, normalize })
    }
}

impl Indicator for Rsi {
    fn name(&self) -> String {
        format!("RSI_{}", self.window)
    }

    fn warm_up(&self) -> usize {
        self.window
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let closes = table.closes();
        let n = self.window;
        let mut values = vec![f64::NAN; closes.len()];

        if closes.len() > n {
            let changes: Vec<f64> = (1..closes.len()).map(|t| closes[t] - closes[t - 1]).collect();
            let gain = |c: f64| if c > 0.0 { c } else if c.is_nan() { c } else { 0.0 };
            let loss = |c: f64| if c < 0.0 { -c } else if c.is_nan() { c } else { 0.0 };

            let n_f64 = n as f64;
            let mut avg_gain = changes[..n].iter().map(|&c| gain(c)).sum::<f64>() / n_f64;
            let mut avg_loss = changes[..n].iter().map(|&c| loss(c)).sum::<f64>() / n_f64;
            values[n] = Self::rescale(avg_gain, avg_loss);

            // Wilder smoothing: avg = (prev_avg * (n-1) + value) / n
            for t in (n + 1)..closes.len() {
                let change = changes[t - 1];
                avg_gain = (avg_gain * (n_f64 - 1.0) + gain(change)) / n_f64;
                avg_loss = (avg_loss * (n_f64 - 1.0) + loss(change)) / n_f64;
                values[t] = Self::rescale(avg_gain, avg_loss);
            }
        }

        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}

impl Rsi {
    fn rescale(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_gain.is_nan() || avg_loss.is_nan() {
            f64::NAN
        } else if avg_loss == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        }
    }
}

/// Williams %R (`WPR_n`): `100 * (hh - close) / (hh - ll) - 100` where
/// `hh`/`ll` are the highest high and lowest low over the window.
///
/// Ranges -100..0; a flat window (`hh == ll`) yields NaN.
#[derive(Debug, Clone)]
pub struct Wpr {
    window: usize,
    normalize: bool,
}

impl Wpr {
    /// Create a new Williams %R indicator.
    pub fn new(window: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "WPR window must be positive".to_string(),
            ));
        }
        Ok(Self { window, normalize })
    }
}

impl Indicator for Wpr {
    fn name(&self) -> String {
        format!("WPR_{}", self.window)
    }

    fn warm_up(&self) -> usize {
        self.window - 1
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let closes = table.closes();
        let hh = rolling_max(&table.highs(), self.window);
        let ll = rolling_min(&table.lows(), self.window);

        let mut values = vec![f64::NAN; closes.len()];
        for t in (self.window - 1)..closes.len() {
            let range = hh[t] - ll[t];
            if range != 0.0 {
                values[t] = 100.0 * (hh[t] - closes[t]) / range - 100.0;
            }
        }
        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}

/// Acceleration (`AC_n_k`): momentum of momentum,
/// `MOM(MOM(close, k), n)`.
#[derive(Debug, Clone)]
pub struct Ac {
    window: usize,
    momentum_window: usize,
    normalize: bool,
}

impl Ac {
    /// Create a new acceleration indicator.
    pub fn new(window: usize, momentum_window: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if window == 0 || momentum_window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "AC windows must be positive".to_string(),
            ));
        }
        Ok(Self {
            window,
            momentum_window,
            normalize,
        })
    }
}

impl Indicator for Ac {
    fn name(&self) -> String {
        format!("AC_{}_{}", self.window, self.momentum_window)
    }

    fn warm_up(&self) -> usize {
        self.window + self.momentum_window
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let momentum = diff(&table.closes(), self.momentum_window);
        let values = diff(&momentum, self.window);
        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_table::{alternating_table, linear_table};

    #[test]
    fn test_mom_on_linear_close() {
        // 30 bars rising 1 point per day, MOM(5)
        let table = linear_table(30);
        let out = Mom::new(5, false).unwrap().compute(&table).unwrap();
        let series = &out[0];

        assert_eq!(series.leading_undefined(), 5);
        for t in 5..30 {
            assert!((series.get(t).unwrap() - 5.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_roc_matches_percent_change() {
        let table = linear_table(30);
        let closes = table.closes();
        let out = Roc::new(10, false).unwrap().compute(&table).unwrap();
        let series = &out[0];

        assert_eq!(series.leading_undefined(), 10);
        let expected = (closes[15] - closes[5]) / closes[5];
        assert!((series.get(15).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_roc_zero_base_is_undefined() {
        let mut bars: Vec<_> = linear_table(5).bars().to_vec();
        bars[0].close = 0.0;
        bars[0].low = -1.0;
        let table = feeder_core::types::PriceTable::new(bars).unwrap();

        let out = Roc::new(2, false).unwrap().compute(&table).unwrap();
        assert!(out[0].get(2).unwrap().is_nan());
        assert!(!out[0].get(3).unwrap().is_nan());
    }

    #[test]
    fn test_rsi_all_gains_is_100() {
        let table = linear_table(20);
        let out = Rsi::new(14, false).unwrap().compute(&table).unwrap();
        let series = &out[0];

        assert_eq!(series.leading_undefined(), 14);
        assert!((series.get(14).unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_alternating_is_bounded() {
        let table = alternating_table(40);
        let out = Rsi::new(14, false).unwrap().compute(&table).unwrap();
        for t in 14..40 {
            let v = out[0].get(t).unwrap();
            assert!(v > 0.0 && v < 100.0);
        }
    }

    #[test]
    fn test_wpr_scale() {
        let table = linear_table(20);
        let out = Wpr::new(14, false).unwrap().compute(&table).unwrap();
        let series = &out[0];

        assert_eq!(series.leading_undefined(), 13);
        for t in 13..20 {
            let v = series.get(t).unwrap();
            assert!(v >= -100.0 && v <= 0.0);
        }
        // Rising market: close near the window high
        // hh = close + 1, ll = close - 14, so WPR = 100 * 1/15 - 100
        let expected = 100.0 / 15.0 - 100.0;
        assert!((series.get(19).unwrap() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_wpr_flat_window_is_undefined() {
        let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = (0..5)
            .map(|i| {
                feeder_core::types::Bar::new(
                    start + chrono::Days::new(i as u64),
                    100.0,
                    100.0,
                    100.0,
                    100.0,
                    1000.0,
                )
            })
            .collect();
        let table = feeder_core::types::PriceTable::new(bars).unwrap();

        let out = Wpr::new(3, false).unwrap().compute(&table).unwrap();
        assert!(out[0].values().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_ac_warm_up_and_linear_zero() {
        let table = linear_table(20);
        let out = Ac::new(5, 5, false).unwrap().compute(&table).unwrap();
        let series = &out[0];

        assert_eq!(series.leading_undefined(), 10);
        // Constant momentum on a linear close: acceleration is zero
        for t in 10..20 {
            assert!(series.get(t).unwrap().abs() < 1e-10);
        }
    }
}
