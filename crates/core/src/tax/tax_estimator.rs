//! Estimated tax liability over gains and dividend income.

use rust_decimal::Decimal;

use crate::tax::tax_model::{RealizedGainsFigure, TaxEstimate, TaxRateTable};

/// Tax on a pair of gain buckets, each at its own rate. Losses are
/// clamped at zero: they never produce a credit, and no loss offset is
/// modeled.
pub fn tax_on_gains(
    short_term_gain: Decimal,
    long_term_gain: Decimal,
    rates: &TaxRateTable,
) -> Decimal {
    short_term_gain.max(Decimal::ZERO) * rates.short_term_capital_gains
        + long_term_gain.max(Decimal::ZERO) * rates.long_term_capital_gains
}

/// Estimated liability for a year's realized gains and dividend income.
pub fn estimate_tax(
    gains: RealizedGainsFigure,
    dividend_income: Decimal,
    rates: &TaxRateTable,
) -> TaxEstimate {
    let gains_tax = match gains {
        RealizedGainsFigure::Split {
            short_term,
            long_term,
        } => tax_on_gains(short_term, long_term, rates),
        RealizedGainsFigure::Total(total) => tax_on_gains(total, Decimal::ZERO, rates),
    };
    let tax_on_dividends = dividend_income.max(Decimal::ZERO) * rates.qualified_dividend;
    TaxEstimate {
        tax_on_gains: gains_tax,
        tax_on_dividends,
        estimated_tax_due: gains_tax + tax_on_dividends,
    }
}
