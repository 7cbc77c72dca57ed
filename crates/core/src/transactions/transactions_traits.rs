//! Repository trait for reading the transaction ledger.
//!
//! The ledger itself is owned and mutated by the surrounding application;
//! the engine only ever reads an immutable snapshot of it through this
//! interface, injected explicitly rather than reached through ambient
//! state.

use crate::portfolio::positions::PositionAggregate;
use crate::transactions::Transaction;
use crate::Result;

pub trait TransactionRepositoryTrait: Send + Sync {
    /// All transactions of the portfolio, every ticker plus cash entries.
    fn list_transactions(&self) -> Result<Vec<Transaction>>;

    /// Transactions for one ticker only.
    fn list_transactions_for_ticker(&self, ticker: &str) -> Result<Vec<Transaction>>;

    /// Currently persisted position aggregates; the recompute pass carries
    /// their user-curated fields forward.
    fn list_positions(&self) -> Result<Vec<PositionAggregate>>;
}
