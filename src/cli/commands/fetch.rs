//! Fetch command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use feeder_config::load_config;
use feeder_data::TableCache;

use crate::cli::commands::common;
use crate::cli::FetchArgs;

pub async fn run(args: FetchArgs, config_path: &Path) -> Result<()> {
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
    let source = common::build_source(&config, None)?;
    let mut cache = TableCache::new();

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create '{}'", args.out.display()))?;

    for symbol in &args.symbols {
        let table = common::fetch_table(source.as_ref(), &mut cache, symbol, start, end).await?;
        let path = args.out.join(format!("{}.csv", symbol.to_lowercase()));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to open '{}'", path.display()))?;
        writer.write_record(["Date", "Open", "High", "Low", "Close", "Volume"])?;
        for bar in table.iter() {
            writer.write_record([
                bar.date.to_string(),
                bar.open.to_string(),
                bar.high.to_string(),
                bar.low.to_string(),
                bar.close.to_string(),
                bar.volume.to_string(),
            ])?;
        }
        writer.flush()?;
        println!("{}: {} bars -> {}", symbol, table.len(), path.display());
    }

    info!(symbols = args.symbols.len(), "Fetch finished");
    Ok(())
}
