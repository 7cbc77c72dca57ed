//! Position aggregate domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The persisted per-ticker aggregate the recompute pass produces.
///
/// `thesis_id`, `notes`, and `band_id` are user-curated; they cannot be
/// derived from transactions and are carried forward verbatim from the
/// previously persisted aggregate on every recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAggregate {
    pub ticker: String,
    /// Total share count across the remaining open lots.
    pub quantity: Decimal,
    /// Average cost per share of the remaining open lots.
    pub purchase_price: Decimal,
    /// Date of the earliest acquisition transaction for this ticker.
    pub purchase_date: NaiveDate,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thesis_id: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_id: Option<String>,
}

/// Output of one full recompute pass over a portfolio's ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAggregates {
    pub positions: Vec<PositionAggregate>,
    /// Sum of the signed cash effect of every transaction, cash entries
    /// included.
    pub cash_balance: Decimal,
}

/// Market value of a holding against an externally supplied quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub market_value: Decimal,
    pub cost_basis: Decimal,
    pub unrealized_gain: Decimal,
}
