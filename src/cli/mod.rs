//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stocks-feeder")]
#[command(author, version, about = "Technical indicator feature feed for daily stock data")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download daily bars and write them to CSV files
    Fetch(FetchArgs),
    /// Compute indicator features and write them to JSON files
    Compute(ComputeArgs),
    /// Compute indicator features and send them to Azure Event Hubs
    Send(SendArgs),
    /// List the indicators computed by default
    Indicators,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct FetchArgs {
    /// Symbols to download (comma-separated)
    #[arg(short = 'S', long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,

    /// Output directory for per-symbol CSV files
    #[arg(short, long, default_value = "data")]
    pub out: PathBuf,
}

#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Symbols to process (comma-separated)
    #[arg(short = 'S', long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,

    /// Load bars from a CSV file instead of the HTTP source
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output directory for per-symbol JSON files
    #[arg(short, long, default_value = "features")]
    pub out: PathBuf,
}

#[derive(clap::Args)]
pub struct SendArgs {
    /// Symbols to process (comma-separated)
    #[arg(short = 'S', long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,

    /// Load bars from a CSV file instead of the HTTP source
    #[arg(long)]
    pub data: Option<PathBuf>,
}
