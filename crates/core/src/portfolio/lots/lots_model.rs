//! Cost-basis lot domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::QUANTITY_THRESHOLD;

/// Whether a share count is large enough to matter. Sub-threshold residues
/// from fractional-share arithmetic are treated as empty.
pub fn is_quantity_significant(quantity: &Decimal) -> bool {
    let threshold =
        Decimal::from_str_radix(QUANTITY_THRESHOLD, 10).unwrap_or_else(|_| Decimal::new(1, 8));
    quantity.abs() >= threshold
}

/// One still-open purchase tranche: shares acquired on a date at a price,
/// not yet fully sold. Lots for a ticker are totally ordered by
/// `purchase_date` ascending; that ordering is the FIFO consumption order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub purchase_date: NaiveDate,
    /// Remaining share count; only mutated within a single computation pass.
    pub quantity: Decimal,
    pub cost_basis_per_share: Decimal,
}

impl Lot {
    /// Total cost of the remaining shares in this lot.
    pub fn cost_basis(&self) -> Decimal {
        self.quantity * self.cost_basis_per_share
    }
}

/// The part of a sale satisfied by one lot. A single sale decomposes into
/// one chunk per lot it touches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleChunk {
    pub purchase_date: NaiveDate,
    pub quantity: Decimal,
    pub cost_basis_per_share: Decimal,
    pub proceeds: Decimal,
    pub gain: Decimal,
    pub long_term: bool,
}
