//! Positions module - persisted aggregates and valuation.

mod positions_aggregator;
mod positions_model;

pub use positions_aggregator::*;
pub use positions_model::*;

#[cfg(test)]
mod positions_aggregator_tests;
