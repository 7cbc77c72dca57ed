//! Transaction domain models.

use crate::transactions::transactions_constants::*;
use crate::transactions::transactions_errors::TransactionError;
use crate::Result;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Kind of ledger entry. Sign conventions follow the ledger: buys and
/// reinvestments carry positive quantity, sells negative, dividends and
/// cash movements zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
    DividendReinvest,
    Cash,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => TRANSACTION_TYPE_BUY,
            TransactionType::Sell => TRANSACTION_TYPE_SELL,
            TransactionType::Dividend => TRANSACTION_TYPE_DIVIDEND,
            TransactionType::DividendReinvest => TRANSACTION_TYPE_DIVIDEND_REINVEST,
            TransactionType::Cash => TRANSACTION_TYPE_CASH,
        }
    }

    /// Whether this type opens a new cost-basis lot.
    pub fn is_acquisition(&self) -> bool {
        is_acquisition_type(self.as_str())
    }

    /// Whether this type requires a per-share price.
    pub fn is_priced(&self) -> bool {
        is_priced_type(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == TRANSACTION_TYPE_BUY => Ok(TransactionType::Buy),
            s if s == TRANSACTION_TYPE_SELL => Ok(TransactionType::Sell),
            s if s == TRANSACTION_TYPE_DIVIDEND => Ok(TransactionType::Dividend),
            s if s == TRANSACTION_TYPE_DIVIDEND_REINVEST => Ok(TransactionType::DividendReinvest),
            s if s == TRANSACTION_TYPE_CASH => Ok(TransactionType::Cash),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

/// Domain model representing one immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Absent only for ticker-less cash movements.
    pub ticker: Option<String>,
    pub transaction_type: TransactionType,
    /// Calendar date; the ledger defines no intra-day ordering.
    pub transaction_date: NaiveDate,
    /// Signed share count: positive for buy/reinvest, negative for sell,
    /// zero for dividend/cash.
    pub quantity: Decimal,
    /// Per-share price; present for buy, sell, and dividend reinvestment.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Signed cash effect: positive inflow, negative outflow.
    pub amount: Decimal,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Absolute share count, regardless of sign convention.
    pub fn qty_abs(&self) -> Decimal {
        self.quantity.abs()
    }

    /// Per-share price, defaulting to zero if not set.
    pub fn price_or_zero(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }

    /// Calendar year of the transaction date.
    pub fn year(&self) -> i32 {
        self.transaction_date.year()
    }

    /// Ticker symbol, or the empty string for cash movements.
    pub fn ticker_or_empty(&self) -> &str {
        self.ticker.as_deref().unwrap_or("")
    }

    /// Validates the sign conventions and field presence for this entry.
    pub fn validate(&self) -> std::result::Result<(), TransactionError> {
        match self.transaction_type {
            TransactionType::Buy | TransactionType::DividendReinvest => {
                self.require_ticker()?;
                self.require_price()?;
                if !self.quantity.is_sign_positive() || self.quantity.is_zero() {
                    return Err(TransactionError::InvalidData(format!(
                        "{} {} must have a positive quantity, got {}",
                        self.transaction_type.as_str(),
                        self.id,
                        self.quantity
                    )));
                }
            }
            TransactionType::Sell => {
                self.require_ticker()?;
                self.require_price()?;
                if !self.quantity.is_sign_negative() {
                    return Err(TransactionError::InvalidData(format!(
                        "SELL {} must have a negative quantity, got {}",
                        self.id, self.quantity
                    )));
                }
            }
            TransactionType::Dividend => {
                self.require_ticker()?;
                if !self.quantity.is_zero() {
                    return Err(TransactionError::InvalidData(format!(
                        "DIVIDEND {} must have zero quantity, got {}",
                        self.id, self.quantity
                    )));
                }
            }
            TransactionType::Cash => {
                if self.ticker.is_some() {
                    return Err(TransactionError::InvalidData(format!(
                        "CASH {} must not reference a ticker",
                        self.id
                    )));
                }
                if !self.quantity.is_zero() {
                    return Err(TransactionError::InvalidData(format!(
                        "CASH {} must have zero quantity, got {}",
                        self.id, self.quantity
                    )));
                }
            }
        }
        Ok(())
    }

    fn require_ticker(&self) -> std::result::Result<(), TransactionError> {
        match self.ticker.as_deref() {
            Some(t) if !t.trim().is_empty() => Ok(()),
            _ => Err(TransactionError::InvalidData(format!(
                "{} {} requires a ticker",
                self.transaction_type.as_str(),
                self.id
            ))),
        }
    }

    fn require_price(&self) -> std::result::Result<(), TransactionError> {
        if self.price.is_none() {
            return Err(TransactionError::InvalidData(format!(
                "{} {} requires a per-share price",
                self.transaction_type.as_str(),
                self.id
            )));
        }
        Ok(())
    }
}

/// Validates every transaction of a history at the acceptance boundary.
/// The calculators assume histories have passed this check.
pub fn validate_history(transactions: &[Transaction]) -> Result<()> {
    for transaction in transactions {
        transaction.validate()?;
    }
    Ok(())
}

/// Input model for creating a new ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: Option<String>,
    pub ticker: Option<String>,
    pub transaction_type: String,
    pub transaction_date: String,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub notes: Option<String>,
}

impl NewTransaction {
    /// Validates the raw input fields without building a `Transaction`.
    pub fn validate(&self) -> std::result::Result<(), TransactionError> {
        if TransactionType::from_str(&self.transaction_type).is_err() {
            return Err(TransactionError::InvalidData(format!(
                "Unknown transaction type: {}",
                self.transaction_type
            )));
        }
        if NaiveDate::parse_from_str(&self.transaction_date, "%Y-%m-%d").is_err() {
            return Err(TransactionError::InvalidData(
                "Invalid date format. Expected YYYY-MM-DD".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the immutable ledger entry, generating an id when absent and
    /// enforcing the full sign-convention checks.
    pub fn into_transaction(self) -> std::result::Result<Transaction, TransactionError> {
        self.validate()?;
        let transaction_type = TransactionType::from_str(&self.transaction_type)
            .map_err(TransactionError::InvalidData)?;
        let transaction_date = NaiveDate::parse_from_str(&self.transaction_date, "%Y-%m-%d")
            .map_err(|e| TransactionError::InvalidData(e.to_string()))?;

        let transaction = Transaction {
            id: self
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            ticker: self.ticker,
            transaction_type,
            transaction_date,
            quantity: self.quantity.unwrap_or(Decimal::ZERO),
            price: self.price,
            amount: self.amount.unwrap_or(Decimal::ZERO),
            notes: self.notes,
        };
        transaction.validate()?;
        Ok(transaction)
    }
}
