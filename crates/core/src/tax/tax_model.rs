//! Tax rate configuration and estimate models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LONG_TERM_CAPITAL_GAINS_RATE, DEFAULT_QUALIFIED_DIVIDEND_RATE,
    DEFAULT_SHORT_TERM_CAPITAL_GAINS_RATE,
};

/// Marginal rates applied to realized gains and dividend income.
///
/// The defaults are placeholder estimates, not tax advice; the embedding
/// application supplies the user's actual rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRateTable {
    pub short_term_capital_gains: Decimal,
    pub long_term_capital_gains: Decimal,
    pub qualified_dividend: Decimal,
}

impl Default for TaxRateTable {
    fn default() -> Self {
        TaxRateTable {
            short_term_capital_gains: parse_rate(DEFAULT_SHORT_TERM_CAPITAL_GAINS_RATE, 24),
            long_term_capital_gains: parse_rate(DEFAULT_LONG_TERM_CAPITAL_GAINS_RATE, 15),
            qualified_dividend: parse_rate(DEFAULT_QUALIFIED_DIVIDEND_RATE, 15),
        }
    }
}

fn parse_rate(value: &str, fallback_percent: i64) -> Decimal {
    Decimal::from_str_radix(value, 10).unwrap_or_else(|_| Decimal::new(fallback_percent, 2))
}

/// Realized-gain input for estimation. Figures without a term split are
/// taxed entirely at the short-term rate, the conservative reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RealizedGainsFigure {
    Split {
        short_term: Decimal,
        long_term: Decimal,
    },
    Total(Decimal),
}

/// Estimated liability over gains and dividend income for a tax year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxEstimate {
    pub tax_on_gains: Decimal,
    pub tax_on_dividends: Decimal,
    pub estimated_tax_due: Decimal,
}
