//! Shared plumbing for the compute and send commands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{info, warn};

use feeder_config::AppConfig;
use feeder_core::traits::{Indicator, PriceSource};
use feeder_core::types::{FeatureTable, PriceTable};
use feeder_data::{CsvSource, StooqSource, TableCache};
use feeder_engine::{Engine, EngineConfig};

pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", text))
}

/// Pick the price source: an explicit CSV file wins, otherwise the
/// configured source kind.
pub fn build_source(config: &AppConfig, data: Option<&Path>) -> Result<Box<dyn PriceSource>> {
    if let Some(path) = data {
        let path = path.to_string_lossy();
        return Ok(Box::new(CsvSource::new(&path)?));
    }
    match config.source.kind.as_str() {
        "stooq" => Ok(Box::new(StooqSource::new())),
        "csv" => {
            let path = config
                .source
                .path
                .as_deref()
                .context("source.kind is 'csv' but source.path is not set")?;
            Ok(Box::new(CsvSource::new(path)?))
        }
        other => anyhow::bail!("Unknown source kind '{}'", other),
    }
}

pub fn build_indicators(config: &AppConfig) -> Result<Vec<Box<dyn Indicator>>> {
    let normalize = config.indicators.normalize;
    config
        .indicators
        .run_list()
        .iter()
        .map(|spec| spec.build(normalize).map_err(Into::into))
        .collect()
}

/// Fetch bars for one symbol, hitting the cache for a repeated symbol
/// within one invocation.
pub async fn fetch_table<'a>(
    source: &dyn PriceSource,
    cache: &'a mut TableCache,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<&'a PriceTable> {
    if cache.get(symbol, start, end).is_none() {
        let table = source
            .fetch(symbol, start, end)
            .await
            .with_context(|| format!("Failed to fetch bars for {}", symbol))?;
        info!(symbol, bars = table.len(), source = source.name(), "Fetched bars");
        cache.put(symbol, start, end, table);
    }
    cache
        .get(symbol, start, end)
        .context("cached table missing after insert")
}

/// Fetch bars for one symbol and compute the configured feature table.
pub async fn compute_features(
    source: &dyn PriceSource,
    cache: &mut TableCache,
    indicators: &[Box<dyn Indicator>],
    config: &AppConfig,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<FeatureTable> {
    let table = fetch_table(source, cache, symbol, start, end).await?;

    let engine = Engine::new(EngineConfig {
        parallel: config.indicators.parallel,
        on_failure: config.indicators.on_failure,
    });
    let run = engine.run(table, indicators)?;
    for skipped in &run.skipped {
        warn!(indicator = %skipped.name, error = %skipped.error, "Indicator skipped");
    }
    info!(
        symbol,
        rows = run.features.num_rows(),
        columns = run.features.num_columns(),
        "Computed features"
    );
    Ok(run.features)
}
