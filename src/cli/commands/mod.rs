//! CLI command implementations.

pub mod common;
pub mod compute;
pub mod fetch;
pub mod indicators;
pub mod send;
pub mod validate;
