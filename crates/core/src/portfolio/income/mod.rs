//! Income module - dividend income aggregation.

mod income_aggregator;
mod income_model;

pub use income_aggregator::*;
pub use income_model::*;
