//! Send command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use feeder_config::load_config;
use feeder_core::traits::FeatureSink;
use feeder_data::TableCache;
use feeder_delivery::EventHubSink;

use crate::cli::commands::common;
use crate::cli::SendArgs;

pub async fn run(args: SendArgs, config_path: &Path) -> Result<()> {
    if args.symbols.is_empty() {
        anyhow::bail!("Please provide at least one symbol with --symbols (e.g. -S msft,aapl)");
    }
    let config = load_config(config_path).context("Failed to load configuration")?;
    if config.delivery.namespace.is_empty() || config.delivery.hub.is_empty() {
        anyhow::bail!("delivery.namespace and delivery.hub must be set to send");
    }
    let sas_token = std::env::var(&config.delivery.sas_token_env).with_context(|| {
        format!(
            "SAS token environment variable '{}' is not set",
            config.delivery.sas_token_env
        )
    })?;

    let start = common::parse_date(&args.start)?;
    let end = common::parse_date(&args.end)?;
    let source = common::build_source(&config, args.data.as_deref())?;
    let indicators = common::build_indicators(&config)?;
    let mut cache = TableCache::new();

    let sink = EventHubSink::new(&config.delivery.namespace, &config.delivery.hub, sas_token)
        .with_payload_limit(config.delivery.payload_limit);

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
        sink.deliver(symbol, &features).await?;
        println!("{}: {} rows sent", symbol, features.num_rows());
    }

    info!(symbols = args.symbols.len(), "Send finished");
    Ok(())
}
