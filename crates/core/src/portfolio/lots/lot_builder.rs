//! FIFO lot builder - reduces a transaction history to its open lots.

use std::collections::VecDeque;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{CalculatorError, Result};
use crate::portfolio::lots::lots_model::{is_quantity_significant, Lot};
use crate::transactions::{Transaction, TransactionType};

/// One slice taken from an open lot while relieving a sale.
#[derive(Debug, Clone, PartialEq)]
pub struct LotSlice {
    pub purchase_date: NaiveDate,
    pub quantity: Decimal,
    pub cost_basis_per_share: Decimal,
}

/// Returns the history sorted by date ascending. The sort is stable:
/// same-day transactions keep their insertion order, since the ledger
/// defines no intra-day ordering.
pub fn sort_by_date(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by_key(|transaction| transaction.transaction_date);
    sorted
}

/// Relieves `quantity_to_sell` shares from the front of the lot queue,
/// oldest acquisition first, and returns the consumed slices.
///
/// The queue must cover the requested quantity: a sale against an empty
/// queue is `NoLotsAvailable`, and a shortfall is `InsufficientLots` with
/// the requested and available counts. A shortfall is never clamped to
/// the available quantity.
pub fn consume_lots_fifo(
    lots: &mut VecDeque<Lot>,
    quantity_to_sell: Decimal,
    ticker: &str,
    sale_date: NaiveDate,
) -> Result<Vec<LotSlice>> {
    if !quantity_to_sell.is_sign_positive() || quantity_to_sell.is_zero() {
        return Err(CalculatorError::InvalidTransaction(format!(
            "Quantity to sell must be positive, got {}",
            quantity_to_sell
        ))
        .into());
    }
    if lots.is_empty() {
        return Err(CalculatorError::NoLotsAvailable {
            ticker: ticker.to_string(),
            date: sale_date,
        }
        .into());
    }
    let available: Decimal = lots.iter().map(|lot| lot.quantity).sum();
    if quantity_to_sell > available {
        return Err(CalculatorError::InsufficientLots {
            ticker: ticker.to_string(),
            date: sale_date,
            requested: quantity_to_sell,
            available,
        }
        .into());
    }

    let mut remaining = quantity_to_sell;
    let mut slices = Vec::new();
    while remaining > Decimal::ZERO {
        let mut lot = match lots.pop_front() {
            Some(lot) => lot,
            None => break, // unreachable: availability was checked above
        };
        let quantity_from_lot = lot.quantity.min(remaining);
        slices.push(LotSlice {
            purchase_date: lot.purchase_date,
            quantity: quantity_from_lot,
            cost_basis_per_share: lot.cost_basis_per_share,
        });
        remaining -= quantity_from_lot;

        let left_in_lot = lot.quantity - quantity_from_lot;
        if is_quantity_significant(&left_in_lot) {
            lot.quantity = left_in_lot;
            lots.push_front(lot);
        }
    }
    Ok(slices)
}

/// Reduces the full transaction history of one ticker to its currently
/// open cost-basis lots. The input may be unsorted; it is never mutated.
pub fn build_open_lots(transactions: &[Transaction]) -> Result<Vec<Lot>> {
    let mut lots: VecDeque<Lot> = VecDeque::new();

    for transaction in sort_by_date(transactions) {
        match transaction.transaction_type {
            TransactionType::Buy | TransactionType::DividendReinvest => {
                if !transaction.quantity.is_sign_positive() || transaction.quantity.is_zero() {
                    return Err(CalculatorError::InvalidTransaction(format!(
                        "Acquisition {} must have a positive quantity, got {}",
                        transaction.id, transaction.quantity
                    ))
                    .into());
                }
                let price = transaction.price.ok_or_else(|| {
                    CalculatorError::InvalidTransaction(format!(
                        "Acquisition {} is missing a per-share price",
                        transaction.id
                    ))
                })?;
                lots.push_back(Lot {
                    purchase_date: transaction.transaction_date,
                    quantity: transaction.quantity,
                    cost_basis_per_share: price,
                });
            }
            TransactionType::Sell => {
                if !transaction.quantity.is_sign_negative() {
                    return Err(CalculatorError::InvalidTransaction(format!(
                        "SELL {} must have a negative quantity, got {}",
                        transaction.id, transaction.quantity
                    ))
                    .into());
                }
                consume_lots_fifo(
                    &mut lots,
                    transaction.qty_abs(),
                    transaction.ticker_or_empty(),
                    transaction.transaction_date,
                )?;
            }
            TransactionType::Dividend | TransactionType::Cash => {}
        }
    }

    Ok(lots
        .into_iter()
        .filter(|lot| is_quantity_significant(&lot.quantity))
        .collect())
}
