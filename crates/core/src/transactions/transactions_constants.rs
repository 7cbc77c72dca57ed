/// Transaction types
///
/// Each constant represents one of the supported ledger entry categories.

/// Purchase of shares. Decreases cash and opens a new cost-basis lot.
pub const TRANSACTION_TYPE_BUY: &str = "BUY";

/// Disposal of shares. Increases cash and relieves open lots FIFO.
pub const TRANSACTION_TYPE_SELL: &str = "SELL";

/// Cash dividend paid out. Increases cash; no share movement.
pub const TRANSACTION_TYPE_DIVIDEND: &str = "DIVIDEND";

/// Dividend reinvested into shares. Opens a new cost-basis lot and is
/// never counted as cash income.
pub const TRANSACTION_TYPE_DIVIDEND_REINVEST: &str = "DIVIDEND_REINVEST";

/// Ticker-less cash movement (deposit, withdrawal, fee). Affects the
/// portfolio cash balance only.
pub const TRANSACTION_TYPE_CASH: &str = "CASH";

/// Transaction types that open a new cost-basis lot
pub const ACQUISITION_TRANSACTION_TYPES: [&str; 2] =
    [TRANSACTION_TYPE_BUY, TRANSACTION_TYPE_DIVIDEND_REINVEST];

/// Transaction types that require a per-share price
pub const PRICED_TRANSACTION_TYPES: [&str; 3] = [
    TRANSACTION_TYPE_BUY,
    TRANSACTION_TYPE_SELL,
    TRANSACTION_TYPE_DIVIDEND_REINVEST,
];

/// Checks if a transaction type opens a new cost-basis lot.
pub fn is_acquisition_type(transaction_type: &str) -> bool {
    ACQUISITION_TRANSACTION_TYPES.contains(&transaction_type)
}

/// Checks if a transaction type requires a per-share price.
pub fn is_priced_type(transaction_type: &str) -> bool {
    PRICED_TRANSACTION_TYPES.contains(&transaction_type)
}
