//! Validate configuration command.

use anyhow::Result;
use std::path::Path;

use feeder_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Source: {}", config.source.kind);
            println!("Normalize: {}", config.indicators.normalize);
            println!("Indicators: {}", config.indicators.run_list().len());
            if !config.delivery.namespace.is_empty() {
                println!(
                    "Delivery: {}.servicebus.windows.net/{}",
                    config.delivery.namespace, config.delivery.hub
                );
            }
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
