//! Compute command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use feeder_config::load_config;
use feeder_core::traits::FeatureSink;
use feeder_data::TableCache;
use feeder_delivery::JsonFileSink;

use crate::cli::commands::common;
use crate::cli::ComputeArgs;

pub async fn run(args: ComputeArgs, config_path: &Path) -> Result<()> {
    if args.symbols.is_empty() {
        anyhow::bail!("Please provide at least one symbol with --symbols (e.g. -S msft,aapl)");
    }
    let config = if config_path.exists() {
        load_config(config_path).context("Failed to load configuration")?
    } else {
        feeder_config::AppConfig::default()
    };

    let start = common::parse_date(&args.start)?;
    let end = common::parse_date(&args.end)?;
    let source = common::build_source(&config, args.data.as_deref())?;
    let indicators = common::build_indicators(&config)?;
    let mut cache = TableCache::new();

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create '{}'", args.out.display()))?;

    for symbol in &args.symbols {
        let features = common::compute_features(
            source.as_ref(),
            &mut cache,
            &indicators,
            &config,
            symbol,
            start,
            end,
        )
        .await?;
        let path = args.out.join(format!("{}.json", symbol.to_lowercase()));
        let sink = JsonFileSink::new(&path);
        sink.deliver(symbol, &features).await?;
        println!("{}: {} rows -> {}", symbol, features.num_rows(), path.display());
    }

    info!(symbols = args.symbols.len(), "Compute finished");
    Ok(())
}
