//! Error types for the stocks feeder.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level feeder error.
#[derive(Error, Debug)]
pub enum FeederError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Price table error: {0}")]
    Table(#[from] TableError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Price table validation errors.
///
/// These are raised immediately on malformed input; a table that fails
/// validation never reaches the indicator engine.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Dates not strictly ascending at row {position}: {previous} then {current}")]
    NonAscendingDates {
        position: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("Duplicate date: {0}")]
    DuplicateDate(NaiveDate),

    #[error("Invalid bar at {date}: {reason}")]
    InvalidBar { date: NaiveDate, reason: String },

    #[error("Column {column} has {actual} rows, table has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
}

/// Indicator calculation errors.
///
/// Insufficient history is deliberately not represented here: short input
/// yields undefined (NaN) values, never an error.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Calculation error: {0}")]
    Calculation(String),
}

/// Orchestration errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Duplicate output column: {0}")]
    DuplicateColumn(String),

    #[error("Indicator {name} failed: {source}")]
    Indicator {
        name: String,
        source: IndicatorError,
    },
}

/// Price source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Invalid date range: start {start} after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Table validation failed: {0}")]
    Validation(#[from] TableError),
}

/// Delivery sink errors.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Record of {bytes} bytes exceeds payload limit of {limit}")]
    RecordTooLarge { bytes: usize, limit: usize },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for feeder operations.
pub type FeederResult<T> = Result<T, FeederError>;
