//! List indicators command.

use anyhow::Result;

use feeder_indicators::IndicatorSpec;

pub async fn run() -> Result<()> {
    println!("Default indicator run");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("  {:<18} {:>8}  columns", "name", "warm-up");
    println!("  ───────────────────────────────────────────────────────");

    for spec in IndicatorSpec::default_run() {
        let indicator = spec.build(false)?;
        println!(
            "  {:<18} {:>8}  {}",
            indicator.name(),
            indicator.warm_up(),
            indicator.columns().join(", ")
        );
    }

    println!();
    println!("Override the list with [[indicators.run]] entries in the config file.");

    Ok(())
}
