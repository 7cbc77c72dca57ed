//! Tests for the tax estimator.

#[cfg(test)]
mod tests {
    use crate::tax::{estimate_tax, tax_on_gains, RealizedGainsFigure, TaxEstimate, TaxRateTable};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_rates_are_the_documented_placeholders() {
        let rates = TaxRateTable::default();
        assert_eq!(rates.short_term_capital_gains, dec!(0.24));
        assert_eq!(rates.long_term_capital_gains, dec!(0.15));
        assert_eq!(rates.qualified_dividend, dec!(0.15));
    }

    #[test]
    fn test_split_gains_tax_each_bucket_at_its_rate() {
        // 800 × 0.24 + 5000 × 0.15 = 192 + 750
        let estimate = estimate_tax(
            RealizedGainsFigure::Split {
                short_term: dec!(800),
                long_term: dec!(5000),
            },
            Decimal::ZERO,
            &TaxRateTable::default(),
        );
        assert_eq!(estimate.tax_on_gains, dec!(942));
        assert_eq!(estimate.tax_on_dividends, Decimal::ZERO);
        assert_eq!(estimate.estimated_tax_due, dec!(942));
    }

    #[test]
    fn test_unsplit_total_is_taxed_as_short_term() {
        let estimate = estimate_tax(
            RealizedGainsFigure::Total(dec!(1000)),
            Decimal::ZERO,
            &TaxRateTable::default(),
        );
        assert_eq!(estimate.tax_on_gains, dec!(240));
    }

    #[test]
    fn test_losses_are_clamped_per_bucket() {
        let rates = TaxRateTable::default();
        // a short-term loss does not offset the long-term gain
        assert_eq!(tax_on_gains(dec!(-1000), dec!(2000), &rates), dec!(300));
        assert_eq!(tax_on_gains(dec!(-1000), dec!(-2000), &rates), Decimal::ZERO);
    }

    #[test]
    fn test_dividends_taxed_at_qualified_rate() {
        let estimate = estimate_tax(
            RealizedGainsFigure::Split {
                short_term: Decimal::ZERO,
                long_term: Decimal::ZERO,
            },
            dec!(500),
            &TaxRateTable::default(),
        );
        assert_eq!(estimate.tax_on_dividends, dec!(75));
        assert_eq!(estimate.estimated_tax_due, dec!(75));
    }

    #[test]
    fn test_negative_dividend_income_owes_nothing() {
        let estimate = estimate_tax(
            RealizedGainsFigure::Total(Decimal::ZERO),
            dec!(-100),
            &TaxRateTable::default(),
        );
        assert_eq!(
            estimate,
            TaxEstimate {
                tax_on_gains: Decimal::ZERO,
                tax_on_dividends: Decimal::ZERO,
                estimated_tax_due: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn test_custom_rate_table() {
        let rates = TaxRateTable {
            short_term_capital_gains: dec!(0.37),
            long_term_capital_gains: dec!(0.20),
            qualified_dividend: dec!(0.20),
        };
        let estimate = estimate_tax(
            RealizedGainsFigure::Split {
                short_term: dec!(100),
                long_term: dec!(100),
            },
            dec!(100),
            &rates,
        );
        assert_eq!(estimate.tax_on_gains, dec!(57));
        assert_eq!(estimate.tax_on_dividends, dec!(20));
        assert_eq!(estimate.estimated_tax_due, dec!(77));
    }
}
