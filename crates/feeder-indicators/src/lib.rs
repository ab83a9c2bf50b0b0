//! Technical indicators over daily OHLCV tables.
//!
//! This crate provides the fixed indicator catalogue of the feeder:
//! - Moving averages (MA, EMA)
//! - Momentum indicators (MOM, ROC, RSI, WPR, AC)
//! - Oscillators (MACD, PPO, APO)
//! - Trend indicators (ADX, CCI)
//! - Volume-derived indicators (CHO, WAD)
//!
//! Every indicator returns full-length series aligned to the input table,
//! with NaN marking the warm-up region and any numeric edge case. The
//! [`spec::IndicatorSpec`] enum is the serde-facing catalogue used by
//! configuration.

pub mod momentum;
pub mod moving_average;
pub mod oscillator;
pub mod spec;
pub mod trend;
pub mod util;
pub mod volume;

#[cfg(test)]
pub(crate) mod test_table;

pub use momentum::{Ac, Mom, Roc, Rsi, Wpr};
pub use moving_average::{Ema, Ma};
pub use oscillator::{Apo, Macd, Ppo};
pub use spec::IndicatorSpec;
pub use trend::{Adx, Cci};
pub use volume::{Cho, Wad};
