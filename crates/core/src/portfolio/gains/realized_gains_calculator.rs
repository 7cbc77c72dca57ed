//! Realized-gain calculation by replaying the full transaction history.

use std::collections::{HashMap, VecDeque};

use log::debug;
use rust_decimal::Decimal;

use crate::errors::{CalculatorError, Result};
use crate::portfolio::gains::gains_model::{
    is_long_term, GainsByTicker, RealizedGainsReport, TermType,
};
use crate::portfolio::lots::{consume_lots_fifo, sort_by_date, Lot};
use crate::tax::{tax_on_gains, TaxRateTable};
use crate::transactions::{Transaction, TransactionType};

#[derive(Default)]
struct GainAccumulator {
    short_term: Decimal,
    long_term: Decimal,
    has_short: bool,
    has_long: bool,
}

/// Classifies every sale of `tax_year` as short- or long-term and
/// aggregates the gains per ticker and in total.
///
/// The whole history is replayed in chronological order, not just the
/// target year: lots purchased in earlier years must be open for
/// consumption, and every sell relieves its lots so the queues stay
/// correct for later transactions. Gains accumulate into the totals only
/// when the sell itself falls in `tax_year`.
pub fn calculate_realized_gains(
    transactions: &[Transaction],
    tax_year: i32,
    rates: &TaxRateTable,
) -> Result<RealizedGainsReport> {
    debug!(
        "Calculating realized gains for {} over {} transactions",
        tax_year,
        transactions.len()
    );

    let mut queues: HashMap<String, VecDeque<Lot>> = HashMap::new();
    let mut accumulators: HashMap<String, GainAccumulator> = HashMap::new();

    for transaction in sort_by_date(transactions) {
        match transaction.transaction_type {
            TransactionType::Buy | TransactionType::DividendReinvest => {
                let ticker = require_ticker(&transaction)?;
                let price = require_price(&transaction)?;
                queues.entry(ticker).or_default().push_back(Lot {
                    purchase_date: transaction.transaction_date,
                    quantity: transaction.quantity,
                    cost_basis_per_share: price,
                });
            }
            TransactionType::Sell => {
                let ticker = require_ticker(&transaction)?;
                let sale_price = require_price(&transaction)?;
                let queue = queues.entry(ticker.clone()).or_default();
                let slices = consume_lots_fifo(
                    queue,
                    transaction.qty_abs(),
                    &ticker,
                    transaction.transaction_date,
                )?;

                if transaction.year() != tax_year {
                    continue;
                }
                let accumulator = accumulators.entry(ticker).or_default();
                for slice in slices {
                    let proceeds = slice.quantity * sale_price;
                    let gain = proceeds - slice.quantity * slice.cost_basis_per_share;
                    if is_long_term(slice.purchase_date, transaction.transaction_date) {
                        accumulator.long_term += gain;
                        accumulator.has_long = true;
                    } else {
                        accumulator.short_term += gain;
                        accumulator.has_short = true;
                    }
                }
            }
            TransactionType::Dividend | TransactionType::Cash => {}
        }
    }

    let mut by_ticker = HashMap::new();
    let mut total_short_term = Decimal::ZERO;
    let mut total_long_term = Decimal::ZERO;
    for (ticker, accumulator) in accumulators {
        total_short_term += accumulator.short_term;
        total_long_term += accumulator.long_term;
        by_ticker.insert(
            ticker,
            GainsByTicker {
                realized_gain: accumulator.short_term + accumulator.long_term,
                short_term_gain: accumulator.short_term,
                long_term_gain: accumulator.long_term,
                term_type: TermType::from_presence(accumulator.has_short, accumulator.has_long),
                tax_on_gains: tax_on_gains(accumulator.short_term, accumulator.long_term, rates),
            },
        );
    }

    Ok(RealizedGainsReport {
        total: total_short_term + total_long_term,
        total_short_term,
        total_long_term,
        by_ticker,
    })
}

fn require_ticker(transaction: &Transaction) -> Result<String> {
    match transaction.ticker.as_deref() {
        Some(ticker) if !ticker.trim().is_empty() => Ok(ticker.to_string()),
        _ => Err(CalculatorError::InvalidTransaction(format!(
            "{} {} requires a ticker",
            transaction.transaction_type.as_str(),
            transaction.id
        ))
        .into()),
    }
}

fn require_price(transaction: &Transaction) -> Result<Decimal> {
    transaction.price.ok_or_else(|| {
        CalculatorError::InvalidTransaction(format!(
            "{} {} requires a per-share price",
            transaction.transaction_type.as_str(),
            transaction.id
        ))
        .into()
    })
}
