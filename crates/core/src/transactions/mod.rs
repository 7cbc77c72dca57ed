//! Transactions module - ledger domain models, validation, and traits.

mod transactions_constants;
mod transactions_errors;
mod transactions_model;
mod transactions_traits;


pub use transactions_constants::*;
pub use transactions_errors::TransactionError;
pub use transactions_model::{validate_history, NewTransaction, Transaction, TransactionType};
pub use transactions_traits::TransactionRepositoryTrait;
