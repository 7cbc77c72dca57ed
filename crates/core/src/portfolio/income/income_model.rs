use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cash dividend income for one tax year, in total and per ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendIncomeSummary {
    pub year: i32,
    pub total: Decimal,
    pub by_ticker: HashMap<String, Decimal>,
}

impl DividendIncomeSummary {
    pub fn new(year: i32) -> Self {
        DividendIncomeSummary {
            year,
            total: Decimal::zero(),
            by_ticker: HashMap::new(),
        }
    }

    pub fn add_income(&mut self, ticker: &str, amount: Decimal) {
        *self
            .by_ticker
            .entry(ticker.to_string())
            .or_insert_with(Decimal::zero) += amount;
        self.total += amount;
    }
}
