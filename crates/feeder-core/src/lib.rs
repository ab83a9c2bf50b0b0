//! Core types and traits for the stocks feeder.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, PriceTable)
//! - Indicator output types (Series, FeatureTable)
//! - Core traits for indicators, price sources, and delivery sinks

pub mod error;
pub mod traits;
pub mod types;

pub use error::{FeederError, FeederResult};
pub use traits::*;
pub use types::*;
