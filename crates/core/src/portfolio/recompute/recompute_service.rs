//! Recompute service - the seam between the ledger and the calculators.
//!
//! The surrounding application calls `recompute` after every transaction
//! create/update/delete and persists the returned aggregates. The service
//! holds no locks: callers must serialize recomputes per portfolio.
//! Recomputes for different portfolios are independent.

use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::portfolio::gains;
use crate::portfolio::gains::{RealizedGainsReport, SaleProjection};
use crate::portfolio::income::{dividend_income_for_year, dividend_income_summary, DividendIncomeSummary};
use crate::portfolio::lots::{build_open_lots, Lot};
use crate::portfolio::positions::{recompute_aggregates, PortfolioAggregates};
use crate::tax::{self, RealizedGainsFigure, TaxEstimate, TaxRateTable};
use crate::transactions::{validate_history, TransactionRepositoryTrait};
use crate::Result;

pub struct RecomputeService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl RecomputeService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        RecomputeService { repository }
    }

    /// Recomputes the persisted position and cash aggregates after a
    /// ledger mutation. Validates the whole history first, so a malformed
    /// entry surfaces here instead of inside a calculator.
    pub fn recompute(&self) -> Result<PortfolioAggregates> {
        debug!("Recomputing portfolio aggregates");
        let transactions = self.repository.list_transactions()?;
        validate_history(&transactions)?;
        let existing = self.repository.list_positions()?;
        recompute_aggregates(&transactions, &existing)
    }

    /// Currently open cost-basis lots for one ticker.
    pub fn open_lots(&self, ticker: &str) -> Result<Vec<Lot>> {
        let transactions = self.repository.list_transactions_for_ticker(ticker)?;
        build_open_lots(&transactions)
    }

    /// Projects a hypothetical sale against the ticker's open lots.
    pub fn simulate_sale(
        &self,
        ticker: &str,
        shares_to_sell: Decimal,
        sale_price: Decimal,
        sale_date: Option<NaiveDate>,
        rates: &TaxRateTable,
    ) -> Result<SaleProjection> {
        let lots = self.open_lots(ticker)?;
        gains::simulate_sale(&lots, shares_to_sell, sale_price, sale_date, ticker, rates)
    }

    /// Realized gains for a tax year, per ticker and in total.
    pub fn realized_gains(
        &self,
        tax_year: i32,
        rates: &TaxRateTable,
    ) -> Result<RealizedGainsReport> {
        let transactions = self.repository.list_transactions()?;
        gains::calculate_realized_gains(&transactions, tax_year, rates)
    }

    /// Cash dividend income for a tax year.
    pub fn dividend_income(&self, tax_year: i32) -> Result<DividendIncomeSummary> {
        let transactions = self.repository.list_transactions()?;
        Ok(dividend_income_summary(&transactions, tax_year))
    }

    /// Combined estimate for a tax year: realized gains split by term,
    /// plus qualified dividend income.
    pub fn estimate_tax(&self, tax_year: i32, rates: &TaxRateTable) -> Result<TaxEstimate> {
        let transactions = self.repository.list_transactions()?;
        let gains_report = gains::calculate_realized_gains(&transactions, tax_year, rates)?;
        let dividend_income = dividend_income_for_year(&transactions, tax_year);
        Ok(tax::estimate_tax(
            RealizedGainsFigure::Split {
                short_term: gains_report.total_short_term,
                long_term: gains_report.total_long_term,
            },
            dividend_income,
            rates,
        ))
    }
}
