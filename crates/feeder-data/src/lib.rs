//! Price history sources.
//!
//! Everything the engine must not care about lives here: transport,
//! header aliases, date parsing and range filtering. Every source hands
//! back a validated [`feeder_core::types::PriceTable`].

mod cache;
mod csv_source;
mod stooq;

pub use cache::TableCache;
pub use csv_source::CsvSource;
pub use stooq::StooqSource;
