use thiserror::Error;

/// Errors raised at the transaction acceptance boundary.
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Invalid transaction data: {0}")]
    InvalidData(String),

    #[error("Transaction not found: {0}")]
    NotFound(String),
}
