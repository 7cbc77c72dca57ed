//! Dividend income aggregation for a tax year.

use log::debug;
use rust_decimal::Decimal;

use crate::portfolio::income::income_model::DividendIncomeSummary;
use crate::transactions::{Transaction, TransactionType};

/// Sums the cash amounts of DIVIDEND transactions dated in the target
/// year. Reinvested dividends are acquisitions, not cash income, and are
/// never counted here.
pub fn dividend_income_for_year(transactions: &[Transaction], tax_year: i32) -> Decimal {
    transactions
        .iter()
        .filter(|transaction| {
            transaction.transaction_type == TransactionType::Dividend
                && transaction.year() == tax_year
        })
        .map(|transaction| transaction.amount)
        .sum()
}

/// Same aggregation with a per-ticker breakdown.
pub fn dividend_income_summary(
    transactions: &[Transaction],
    tax_year: i32,
) -> DividendIncomeSummary {
    debug!("Aggregating dividend income for {}", tax_year);
    let mut summary = DividendIncomeSummary::new(tax_year);
    for transaction in transactions {
        if transaction.transaction_type != TransactionType::Dividend
            || transaction.year() != tax_year
        {
            continue;
        }
        summary.add_income(transaction.ticker_or_empty(), transaction.amount);
    }
    summary
}
