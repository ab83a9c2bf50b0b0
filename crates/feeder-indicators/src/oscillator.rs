//! Price oscillators built from EMA differences.

use feeder_core::error::IndicatorError;
use feeder_core::traits::Indicator;
use feeder_core::types::{PriceTable, Series};

use crate::util::{ema, maybe_normalize};

fn check_fast_slow(label: &str, fast: usize, slow: usize) -> Result<(), IndicatorError> {
    if fast == 0 || slow == 0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "{label} periods must be positive"
        )));
    }
    if fast >= slow {
        return Err(IndicatorError::InvalidParameter(format!(
            "{label} fast period {fast} must be less than slow period {slow}"
        )));
    }
    Ok(())
}

/// Moving Average Convergence/Divergence (`MACD_n_m_s`).
///
/// Produces three series sharing the parameter suffix: the MACD line
/// (fast EMA minus slow EMA), the signal line (EMA of the MACD line) and
/// the histogram (line minus signal).
#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
    normalize: bool,
}

impl Macd {
    /// Create a new MACD indicator.
    pub fn new(fast: usize, slow: usize, signal: usize, normalize: bool) -> Result<Self, IndicatorError> {
        check_fast_slow("MACD", fast, slow)?;
        if signal == 0 {
            return Err(IndicatorError::InvalidParameter(
                "MACD signal period must be positive".to_string(),
            ));
        }
        Ok(Self {
            fast,
            slow,
            signal,
            normalize,
        })
    }

    fn suffix(&self) -> String {
        format!("{}_{}_{}", self.fast, self.slow, self.signal)
    }
}

impl Indicator for Macd {
    fn name(&self) -> String {
        format!("MACD_{}", self.suffix())
    }

    fn columns(&self) -> Vec<String> {
        vec![
            format!("MACD_{}", self.suffix()),
            format!("MACD_SIG_{}", self.suffix()),
            format!("MACD_HIST_{}", self.suffix()),
        ]
    }

    /// Warm-up of the slowest output (signal and histogram); the main
    /// line becomes defined `signal - 1` rows earlier.
    fn warm_up(&self) -> usize {
        self.slow + self.signal - 2
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let closes = table.closes();
        let fast = ema(&closes, self.fast);
        let slow = ema(&closes, self.slow);

        let line: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
        let signal = ema(&line, self.signal);
        let histogram: Vec<f64> = line.iter().zip(signal.iter()).map(|(l, s)| l - s).collect();

        let columns = self.columns();
        Ok(vec![
            Series::new(&columns[0], maybe_normalize(line, self.normalize)),
            Series::new(&columns[1], maybe_normalize(signal, self.normalize)),
            Series::new(&columns[2], maybe_normalize(histogram, self.normalize)),
        ])
    }
}

/// Percentage Price Oscillator (`PPO_n_m`):
/// `100 * (EMA(close, n) - EMA(close, m)) / EMA(close, m)`.
#[derive(Debug, Clone)]
pub struct Ppo {
    fast: usize,
    slow: usize,
    normalize: bool,
}

impl Ppo {
    /// Create a new PPO indicator.
    pub fn new(fast: usize, slow: usize, normalize: bool) -> Result<Self, IndicatorError> {
        check_fast_slow("PPO", fast, slow)?;
        Ok(Self {
            fast,
            slow,
            normalize,
        })
    }
}

impl Indicator for Ppo {
    fn name(&self) -> String {
        format!("PPO_{}_{}", self.fast, self.slow)
    }

    fn warm_up(&self) -> usize {
        self.slow - 1
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let closes = table.closes();
        let fast = ema(&closes, self.fast);
        let slow = ema(&closes, self.slow);

        let values: Vec<f64> = fast
            .iter()
            .zip(slow.iter())
            .map(|(&f, &s)| if s == 0.0 { f64::NAN } else { 100.0 * (f - s) / s })
            .collect();
        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}

/// Absolute Price Oscillator (`APO_n_m`):
/// `EMA(close, n) - EMA(close, m)`.
#[derive(Debug, Clone)]
pub struct Apo {
    fast: usize,
    slow: usize,
    normalize: bool,
}

impl Apo {
    /// Create a new APO indicator.
    pub fn new(fast: usize, slow: usize, normalize: bool) -> Result<Self, IndicatorError> {
        check_fast_slow("APO", fast, slow)?;
        Ok(Self {
            fast,
            slow,
            normalize,
        })
    }
}

impl Indicator for Apo {
    fn name(&self) -> String {
        format!("APO_{}_{}", self.fast, self.slow)
    }

    fn warm_up(&self) -> usize {
        self.slow - 1
    }

    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
        let closes = table.closes();
        let fast = ema(&closes, self.fast);
        let slow = ema(&closes, self.slow);

        let values: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
        Ok(vec![Series::new(
            self.name(),
            maybe_normalize(values, self.normalize),
        )])
    }
}
