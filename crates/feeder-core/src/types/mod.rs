//! Data model for the feeder.

mod bar;
mod feature;
mod series;
mod table;

pub use bar::Bar;
pub use feature::{FeatureTable, Value, PRICE_COLUMNS};
pub use series::Series;
pub use table::PriceTable;
