//! Position and cash aggregate recomputation.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::{CalculatorError, Result};
use crate::portfolio::lots::{build_open_lots, is_quantity_significant, Lot};
use crate::portfolio::positions::positions_model::{
    PortfolioAggregates, PositionAggregate, PositionValuation,
};
use crate::transactions::Transaction;

/// Recomputes every per-ticker position aggregate and the portfolio cash
/// balance from the transaction history.
///
/// Idempotent over the same history. User-curated fields are copied from
/// the matching entry in `existing` and never recomputed; tickers whose
/// open quantity has dropped to zero are omitted, and regain those fields
/// from `existing` if they reopen later.
pub fn recompute_aggregates(
    transactions: &[Transaction],
    existing: &[PositionAggregate],
) -> Result<PortfolioAggregates> {
    debug!(
        "Recomputing aggregates over {} transactions",
        transactions.len()
    );

    let mut by_ticker: HashMap<String, Vec<Transaction>> = HashMap::new();
    for transaction in transactions {
        if let Some(ticker) = transaction.ticker.as_deref() {
            by_ticker
                .entry(ticker.to_string())
                .or_default()
                .push(transaction.clone());
        }
    }

    let existing_by_ticker: HashMap<&str, &PositionAggregate> = existing
        .iter()
        .map(|position| (position.ticker.as_str(), position))
        .collect();

    let mut positions = Vec::new();
    for (ticker, ticker_transactions) in &by_ticker {
        let lots = build_open_lots(ticker_transactions)?;
        let quantity: Decimal = lots.iter().map(|lot| lot.quantity).sum();
        if !is_quantity_significant(&quantity) {
            continue;
        }
        let total_cost_basis: Decimal = lots.iter().map(Lot::cost_basis).sum();
        let purchase_price = total_cost_basis / quantity;

        let purchase_date = ticker_transactions
            .iter()
            .filter(|transaction| transaction.transaction_type.is_acquisition())
            .map(|transaction| transaction.transaction_date)
            .min()
            .ok_or_else(|| {
                CalculatorError::Calculation(format!(
                    "Ticker {} has open lots but no acquisition transaction",
                    ticker
                ))
            })?;

        let prior = existing_by_ticker.get(ticker.as_str());
        positions.push(PositionAggregate {
            ticker: ticker.clone(),
            quantity,
            purchase_price,
            purchase_date,
            thesis_id: prior.and_then(|position| position.thesis_id.clone()),
            notes: prior.and_then(|position| position.notes.clone()),
            band_id: prior.and_then(|position| position.band_id.clone()),
        });
    }
    positions.sort_by(|a, b| a.ticker.cmp(&b.ticker));

    let cash_balance: Decimal = transactions
        .iter()
        .map(|transaction| transaction.amount)
        .sum();

    Ok(PortfolioAggregates {
        positions,
        cash_balance,
    })
}

/// Values a holding's open lots against an externally supplied quote.
pub fn value_position(lots: &[Lot], quote_price: Decimal) -> PositionValuation {
    let quantity: Decimal = lots.iter().map(|lot| lot.quantity).sum();
    let cost_basis: Decimal = lots.iter().map(Lot::cost_basis).sum();
    let market_value = quantity * quote_price;
    PositionValuation {
        market_value,
        cost_basis,
        unrealized_gain: market_value - cost_basis,
    }
}
