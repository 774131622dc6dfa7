//! CLI library components for the SKU generator.

pub mod logging;
pub mod pipeline;
