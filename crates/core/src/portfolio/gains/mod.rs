//! Gains module - realized-gain classification and sale projection.

mod gains_model;
mod realized_gains_calculator;
mod sale_simulator;

pub use gains_model::*;
pub use realized_gains_calculator::*;
pub use sale_simulator::*;
