//! Trait definitions.

mod indicator;
mod sink;
mod source;

pub use indicator::Indicator;
pub use sink::FeatureSink;
pub use source::PriceSource;
