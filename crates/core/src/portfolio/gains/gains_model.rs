//! Realized-gain domain models and holding-period classification.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::LONG_TERM_HOLDING_DAYS;
use crate::portfolio::lots::SaleChunk;

/// Holding-period threshold as a Decimal day count.
fn long_term_holding_days() -> Decimal {
    Decimal::from_str_radix(LONG_TERM_HOLDING_DAYS, 10).unwrap_or_else(|_| dec!(365.25))
}

/// A gain is long-term only when the holding period strictly exceeds the
/// threshold: 366 whole days qualifies, 365 does not.
pub fn is_long_term(purchase_date: NaiveDate, sale_date: NaiveDate) -> bool {
    let held_days = Decimal::from((sale_date - purchase_date).num_days());
    held_days > long_term_holding_days()
}

/// Holding-period classification of a ticker's realized gains for a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TermType {
    ShortTerm,
    LongTerm,
    Mixed,
}

impl TermType {
    /// Classifies by which terms actually appear among a ticker's sale
    /// chunks for the year.
    pub fn from_presence(has_short: bool, has_long: bool) -> TermType {
        match (has_short, has_long) {
            (true, true) => TermType::Mixed,
            (false, true) => TermType::LongTerm,
            _ => TermType::ShortTerm,
        }
    }
}

/// Realized gains of one ticker for a tax year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GainsByTicker {
    pub realized_gain: Decimal,
    pub short_term_gain: Decimal,
    pub long_term_gain: Decimal,
    pub term_type: TermType,
    pub tax_on_gains: Decimal,
}

/// Portfolio-wide realized gains for a tax year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedGainsReport {
    pub total: Decimal,
    pub total_short_term: Decimal,
    pub total_long_term: Decimal,
    pub by_ticker: HashMap<String, GainsByTicker>,
}

/// Projected consequence of a hypothetical sale against open lots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleProjection {
    pub short_term_gain: Decimal,
    pub long_term_gain: Decimal,
    pub total_gain: Decimal,
    pub estimated_tax: Decimal,
    /// Per-lot decomposition, oldest acquisition first.
    pub breakdown: Vec<SaleChunk>,
}
