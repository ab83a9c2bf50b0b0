//! Trend-strength indicators.

use feeder_core::error::IndicatorError;
use feeder_core::traits::Indicator;
use feeder_core::types::{PriceTable, Series};

use crate::util::{maybe_normalize, rolling_mean};

/// Average Directional Index (`ADX_n`).
///
/// Wilder's double smoothing: directional movement and true range are
/// smoothed over `n`, combined into DX, and DX is averaged over `n`
/// again. First defined value at row `2n - 1`.
#[derive(Debug, Clone)]
pub struct Adx {
    window: usize,
    normalize: bool,
}

impl Adx {
    /// Create a new ADX indicator.
    pub fn new(window: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "ADX window must be positive".to_string(),
            ));
        }
        Ok(Self { window, normalize })
    }
}

impl Indicator for Adx {
    fn name(&self) -> String {
        format!("ADX_{}", self.window)
    }

    fn warm_up(&self) -> usize {
        2 * self.window - 1
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let bars = table.bars();
        let len = bars.len();
        let n = self.window;
        let mut values = vec![f64::NAN; len];

        if len >= 2 * n {
            // Per-bar true range and directional movement, defined from row 1
            let mut tr = vec![0.0; len];
            let mut pdm = vec![0.0; len];
            let mut ndm = vec![0.0; len];
            for t in 1..len {
                let (h, l) = (bars[t].high, bars[t].low);
                let prev_close = bars[t - 1].close;
                tr[t] = (h - l)
                    .max((h - prev_close).abs())
                    .max((l - prev_close).abs());
                let up = h - bars[t - 1].high;
                let down = bars[t - 1].low - l;
                if up.is_nan() || down.is_nan() {
                    pdm[t] = f64::NAN;
                    ndm[t] = f64::NAN;
                } else {
                    pdm[t] = if up > down && up > 0.0 { up } else { 0.0 };
                    ndm[t] = if down > up && down > 0.0 { down } else { 0.0 };
                }
            }

            // Wilder running sums, seeded over rows 1..=n
            let mut sm_tr: f64 = tr[1..=n].iter().sum();
            let mut sm_pdm: f64 = pdm[1..=n].iter().sum();
            let mut sm_ndm: f64 = ndm[1..=n].iter().sum();

            let mut dx = vec![f64::NAN; len];
            dx[n] = Self::dx(sm_pdm, sm_ndm, sm_tr);
            for t in (n + 1)..len {
                sm_tr = sm_tr - sm_tr / n as f64 + tr[t];
                sm_pdm = sm_pdm - sm_pdm / n as f64 + pdm[t];
                sm_ndm = sm_ndm - sm_ndm / n as f64 + ndm[t];
                dx[t] = Self::dx(sm_pdm, sm_ndm, sm_tr);
            }

            // Second smoothing: seed ADX with the mean of the first n DX
            // values, then Wilder-average
            let mut adx = dx[n..2 * n].iter().sum::<f64>() / n as f64;
            values[2 * n - 1] = adx;
            for t in (2 * n)..len {
                adx = (adx * (n as f64 - 1.0) + dx[t]) / n as f64;
                values[t] = adx;
            }
        }

        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}

impl Adx {
    fn dx(sm_pdm: f64, sm_ndm: f64, sm_tr: f64) -> f64 {
        if sm_tr == 0.0 {
            return f64::NAN;
        }
        let di_plus = 100.0 * sm_pdm / sm_tr;
        let di_minus = 100.0 * sm_ndm / sm_tr;
        let sum = di_plus + di_minus;
        if sum == 0.0 {
            f64::NAN
        } else {
            100.0 * (di_plus - di_minus).abs() / sum
        }
    }
}

/// Commodity Channel Index (`CCI_n`):
/// `(tp - SMA(tp, n)) / (0.015 * MAD(tp, n))` with tp = (h + l + c) / 3.
///
/// A zero mean absolute deviation yields NaN. A zero-range bar
/// (high == low) is an illiquid print: its own CCI is undefined, while
/// its typical price still participates in the neighbouring windows.
#[derive(Debug, Clone)]
pub struct Cci {
    window: usize,
    normalize: bool,
}

impl Cci {
    /// Create a new CCI indicator.
    pub fn new(window: usize, normalize: bool) -> Result<Self, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidParameter(
                "CCI window must be positive".to_string(),
            ));
        }
        Ok(Self { window, normalize })
    }
}

impl Indicator for Cci {
    fn name(&self) -> String {
        format!("CCI_{}", self.window)
    }

    fn warm_up(&self) -> usize {
        self.window - 1
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let tps = table.typical_prices();
        let n = self.window;
        let sma_tp = rolling_mean(&tps, n);

        let mut values = vec![f64::NAN; tps.len()];
        for t in (n.saturating_sub(1))..tps.len() {
            let mean = sma_tp[t];
            let mad = tps[t + 1 - n..=t]
                .iter()
                .map(|v| (v - mean).abs())
                .sum::<f64>()
                / n as f64;
            let denom = 0.015 * mad;
            if denom != 0.0 {
                values[t] = (tps[t] - mean) / denom;
            }
        }

        for (t, bar) in table.iter().enumerate() {
            if bar.range() == 0.0 {
                values[t] = f64::NAN;
            }
        }

        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_table::linear_table;
    use chrono::NaiveDate;
    use feeder_core::types::{Bar, PriceTable};

    #[test]
    fn test_adx_warm_up_and_bounds() {
        let table = linear_table(40);
        let out = Adx::new(7, false).unwrap().compute(&table).unwrap();
        let series = &out[0];

        assert_eq!(series.leading_undefined(), 13);
        for t in 13..40 {
            let v = series.get(t).unwrap();
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_adx_strong_uptrend_is_high() {
        // Steady one-directional movement: +DM dominates, DX -> 100
        let table = linear_table(60);
        let out = Adx::new(14, false).unwrap().compute(&table).unwrap();
        assert!(out[0].get(59).unwrap() > 90.0);
    }

    #[test]
    fn test_adx_short_table_all_undefined() {
        let table = linear_table(10);
        let out = Adx::new(7, false).unwrap().compute(&table).unwrap();
        assert!(out[0].values().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_cci_linear_close() {
        let table = linear_table(30);
        let out = Cci::new(20, false).unwrap().compute(&table).unwrap();
        let series = &out[0];

        assert_eq!(series.leading_undefined(), 19);
        // Linear tp: deviation from the window mean is (n-1)/2 = 9.5,
        // MAD is mean(|..-9.5..9.5..|) = 5.0, so CCI = 9.5 / 0.075
        let expected = 9.5 / (0.015 * 5.0);
        assert!((series.get(19).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_cci_zero_range_bar_undefined_neighbors_defined() {
        // One locked bar (high == low) in otherwise normal data
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut bars: Vec<Bar> = (0..30)
            .map(|i| {
                let close = 100.0 + (i as f64 * 0.7).sin() * 5.0;
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
        bars[15].high = bars[15].close;
        bars[15].low = bars[15].close;
        let table = PriceTable::new(bars).unwrap();

        let out = Cci::new(10, false).unwrap().compute(&table).unwrap();
        assert!(out[0].get(15).unwrap().is_nan());
        assert!(!out[0].get(14).unwrap().is_nan());
        assert!(!out[0].get(16).unwrap().is_nan());
    }

    #[test]
    fn test_cci_constant_tp_is_undefined() {
        // MAD == 0: zero denominator resolves to NaN, not an error
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = (0..10)
            .map(|i| {
                Bar::new(
                    start + chrono::Days::new(i as u64),
                    100.0,
                    101.0,
                    99.0,
                    100.0,
                    1000.0,
                )
            })
            .collect();
        let table = PriceTable::new(bars).unwrap();

        let out = Cci::new(5, false).unwrap().compute(&table).unwrap();
        assert!(out[0].values().iter().all(|v| v.is_nan()));
    }
}
