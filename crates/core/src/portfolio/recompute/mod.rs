//! Recompute module - the ledger-facing service.

mod recompute_service;

pub use recompute_service::*;
