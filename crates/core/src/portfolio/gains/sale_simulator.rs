//! Hypothetical-sale projection over open lots.

use std::collections::VecDeque;

use chrono::{NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{CalculatorError, Result};
use crate::portfolio::gains::gains_model::{is_long_term, SaleProjection};
use crate::portfolio::lots::{consume_lots_fifo, Lot, SaleChunk};
use crate::tax::{tax_on_gains, TaxRateTable};

/// Projects the tax consequence of selling `shares_to_sell` at
/// `sale_price` against the given open lots.
///
/// The stored lots never observe the simulation: consumption runs on a
/// copy. `sale_date` defaults to today. Requesting more shares than the
/// lots cover is an error, reported before any lot is touched.
pub fn simulate_sale(
    lots: &[Lot],
    shares_to_sell: Decimal,
    sale_price: Decimal,
    sale_date: Option<NaiveDate>,
    ticker: &str,
    rates: &TaxRateTable,
) -> Result<SaleProjection> {
    let sale_date = sale_date.unwrap_or_else(|| Utc::now().naive_utc().date());
    if !shares_to_sell.is_sign_positive() || shares_to_sell.is_zero() {
        return Err(CalculatorError::InvalidTransaction(format!(
            "Shares to sell must be positive, got {}",
            shares_to_sell
        ))
        .into());
    }
    debug!(
        "Simulating sale of {} {} @ {} on {}",
        shares_to_sell, ticker, sale_price, sale_date
    );

    let mut queue: VecDeque<Lot> = lots.to_vec().into();
    let slices = consume_lots_fifo(&mut queue, shares_to_sell, ticker, sale_date)?;

    let mut short_term_gain = Decimal::ZERO;
    let mut long_term_gain = Decimal::ZERO;
    let mut breakdown = Vec::with_capacity(slices.len());
    for slice in slices {
        let proceeds = slice.quantity * sale_price;
        let gain = proceeds - slice.quantity * slice.cost_basis_per_share;
        let long_term = is_long_term(slice.purchase_date, sale_date);
        if long_term {
            long_term_gain += gain;
        } else {
            short_term_gain += gain;
        }
        breakdown.push(SaleChunk {
            purchase_date: slice.purchase_date,
            quantity: slice.quantity,
            cost_basis_per_share: slice.cost_basis_per_share,
            proceeds,
            gain,
            long_term,
        });
    }

    Ok(SaleProjection {
        short_term_gain,
        long_term_gain,
        total_gain: short_term_gain + long_term_gain,
        estimated_tax: tax_on_gains(short_term_gain, long_term_gain, rates),
        breakdown,
    })
}
