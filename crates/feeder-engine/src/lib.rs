//! Orchestration of indicator computation over one price table.
//!
//! The engine holds the ordered list of requested indicators, rejects
//! duplicate output columns before any work starts, evaluates the
//! indicators (sequentially or in parallel; they only read the shared
//! immutable table) and left-joins every output series onto the price
//! table in request order.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use feeder_core::error::{EngineError, FeederError, IndicatorError};
use feeder_core::traits::Indicator;
use feeder_core::types::{FeatureTable, PriceTable, Series, PRICE_COLUMNS};

/// What to do when a single indicator fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the whole run with a full diagnostic (the default).
    #[default]
    Abort,
    /// Record the failure, log it, and keep the other indicators.
    Skip,
}

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Evaluate indicators on the rayon thread pool.
    pub parallel: bool,
    /// Failure policy for individual indicators.
    pub on_failure: FailurePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            on_failure: FailurePolicy::Abort,
        }
    }
}

/// An indicator that failed and was skipped under [`FailurePolicy::Skip`].
#[derive(Debug)]
pub struct SkippedIndicator {
    /// Indicator label with parameters, e.g. `RSI_14`.
    pub name: String,
    /// The error it failed with.
    pub error: IndicatorError,
}

/// The outcome of one engine run.
#[derive(Debug)]
pub struct Run {
    /// Price columns plus every successfully computed indicator column.
    pub features: FeatureTable,
    /// Indicators recorded-and-skipped; empty under the abort policy.
    pub skipped: Vec<SkippedIndicator>,
}

/// The indicator orchestrator.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Compute all requested indicators and join them onto the table.
    ///
    /// Column order follows request order; row count and date order are
    /// exactly the input table's.
    pub fn run(
        &self,
        table: &PriceTable,
        indicators: &[Box<dyn Indicator>],
    ) -> Result<Run, FeederError> {
        check_unique_columns(indicators)?;

        info!(
            rows = table.len(),
            indicators = indicators.len(),
            parallel = self.config.parallel,
            "computing indicators"
        );

        let results: Vec<Result<Vec<Series>, IndicatorError>> = if self.config.parallel {
            indicators.par_iter().map(|i| i.compute(table)).collect()
        } else {
            indicators.iter().map(|i| i.compute(table)).collect()
        };

        let mut features = FeatureTable::from_table(table);
        let mut skipped = Vec::new();
        for (indicator, result) in indicators.iter().zip(results) {
            match result {
                Ok(outputs) => {
                    for series in outputs {
                        features.join(series)?;
                    }
                }
                Err(error) => match self.config.on_failure {
                    FailurePolicy::Abort => {
                        return Err(EngineError::Indicator {
                            name: indicator.name(),
                            source: error,
                        }
                        .into())
                    }
                    FailurePolicy::Skip => {
                        warn!(indicator = %indicator.name(), %error, "indicator failed, skipping");
                        skipped.push(SkippedIndicator {
                            name: indicator.name(),
                            error,
                        });
                    }
                },
            }
        }

        debug!(
            columns = features.num_columns(),
            skipped = skipped.len(),
            "join complete"
        );
        Ok(Run { features, skipped })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Reject duplicate output column names before any computation starts.
///
/// The price columns are reserved; every indicator column must be unique
/// across the whole request list.
fn check_unique_columns(indicators: &[Box<dyn Indicator>]) -> Result<(), EngineError> {
    let mut seen: HashSet<String> = PRICE_COLUMNS.iter().map(|c| c.to_string()).collect();
    for indicator in indicators {
        for column in indicator.columns() {
            if !seen.insert(column.clone()) {
                return Err(EngineError::DuplicateColumn(column));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use feeder_core::types::Bar;
    use feeder_indicators::{Mom, Rsi};

    fn table(len: usize) -> PriceTable {
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

    struct Faulty;

    impl Indicator for Faulty {
        fn name(&self) -> String {
            "FAULTY_1".to_string()
        }

        fn warm_up(&self) -> usize {
            0
        }

        fn compute(&self, _table: &PriceTable) -> Result<Vec<Series>, IndicatorError> {
            Err(IndicatorError::Calculation("numeric state".to_string()))
        }
    }

    #[test]
    fn test_run_appends_columns_in_order() {
        let indicators: Vec<Box<dyn Indicator>> = vec![
            Box::new(Rsi::new(14, false).unwrap()),
            Box::new(Mom::new(5, false).unwrap()),
        ];
        let table = table(30);
        let run = Engine::default().run(&table, &indicators).unwrap();

        assert_eq!(run.features.num_rows(), 30);
        assert_eq!(
            run.features.column_names()[5..],
            ["RSI_14", "MOM_5"]
        );
        assert!(run.skipped.is_empty());
    }

    #[test]
    fn test_duplicate_columns_rejected_before_compute() {
        let indicators: Vec<Box<dyn Indicator>> = vec![
            Box::new(Rsi::new(14, false).unwrap()),
            Box::new(Rsi::new(14, true).unwrap()),
        ];
        let err = Engine::default().run(&table(30), &indicators).unwrap_err();
        assert!(matches!(
            err,
            FeederError::Engine(EngineError::DuplicateColumn(name)) if name == "RSI_14"
        ));
    }

    #[test]
    fn test_abort_policy_names_the_indicator() {
        let indicators: Vec<Box<dyn Indicator>> =
            vec![Box::new(Mom::new(5, false).unwrap()), Box::new(Faulty)];
        let err = Engine::default().run(&table(30), &indicators).unwrap_err();
        assert!(matches!(
            err,
            FeederError::Engine(EngineError::Indicator { name, .. }) if name == "FAULTY_1"
        ));
    }

    #[test]
    fn test_skip_policy_keeps_other_results() {
        let engine = Engine::new(EngineConfig {
            parallel: false,
            on_failure: FailurePolicy::Skip,
        });
        let indicators: Vec<Box<dyn Indicator>> =
            vec![Box::new(Faulty), Box::new(Mom::new(5, false).unwrap())];
        let run = engine.run(&table(30), &indicators).unwrap();

        assert_eq!(run.skipped.len(), 1);
        assert_eq!(run.skipped[0].name, "FAULTY_1");
        assert!(run.features.column("MOM_5").is_some());
        assert!(run.features.column("FAULTY_1").is_none());
    }
}
