//! Indicator trait definition.

use crate::error::IndicatorError;
use crate::types::{PriceTable, Series};

/// A technical indicator over a daily price table.
///
/// Implementations are pure: they read the immutable table and return
/// fresh output series, one value per input row, with NaN at every
/// position where insufficient history exists. This makes indicator
/// evaluations mutually independent and safe to run in parallel.
pub trait Indicator: Send + Sync {
    /// Human label and diagnostic key, e.g. `RSI_14` or `MACD_12_26_9`.
    fn name(&self) -> String;

    /// Output column labels, in order. Most indicators produce one
    /// column; MACD produces three. These are the join keys and must be
    /// unique within a run.
    fn columns(&self) -> Vec<String> {
        vec![self.name()]
    }

    /// Number of leading positions that are necessarily undefined.
    fn warm_up(&self) -> usize;

    /// Compute the output series, index-aligned to the table.
    ///
    /// Numeric edge cases (zero denominators, short input) resolve to
    /// NaN, never an error; errors are reserved for genuinely unexpected
    /// calculation faults.
    fn compute(&self, table: &PriceTable) -> Result<Vec<Series>, IndicatorError>;
}
