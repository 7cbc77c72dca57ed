//! Tests for the position/cash aggregator.

#[cfg(test)]
mod tests {
    use crate::portfolio::lots::Lot;
    use crate::portfolio::positions::{
        recompute_aggregates, value_position, PositionAggregate,
    };
    use crate::transactions::{Transaction, TransactionType};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn entry(
        id: &str,
        ticker: Option<&str>,
        transaction_type: TransactionType,
        transaction_date: NaiveDate,
        quantity: Decimal,
        price: Option<Decimal>,
        amount: Decimal,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            ticker: ticker.map(str::to_string),
            transaction_type,
            transaction_date,
            quantity,
            price,
            amount,
            notes: None,
        }
    }

    fn buy(id: &str, ticker: &str, d: NaiveDate, quantity: Decimal, price: Decimal) -> Transaction {
        entry(
            id,
            Some(ticker),
            TransactionType::Buy,
            d,
            quantity,
            Some(price),
            -quantity * price,
        )
    }

    fn sell(id: &str, ticker: &str, d: NaiveDate, quantity: Decimal, price: Decimal) -> Transaction {
        entry(
            id,
            Some(ticker),
            TransactionType::Sell,
            d,
            -quantity,
            Some(price),
            quantity * price,
        )
    }

    fn cash(id: &str, d: NaiveDate, amount: Decimal) -> Transaction {
        entry(id, None, TransactionType::Cash, d, Decimal::ZERO, None, amount)
    }

    #[test]
    fn test_aggregates_follow_remaining_lots() {
        let history = vec![
            buy("b1", "AAPL", date(2023, 1, 10), dec!(100), dec!(150)),
            buy("b2", "AAPL", date(2023, 6, 1), dec!(50), dec!(160)),
            sell("s1", "AAPL", date(2024, 2, 1), dec!(120), dec!(200)),
        ];
        let aggregates = recompute_aggregates(&history, &[]).unwrap();
        assert_eq!(aggregates.positions.len(), 1);

        let position = &aggregates.positions[0];
        assert_eq!(position.ticker, "AAPL");
        // 30 shares remain, all from the 160 lot
        assert_eq!(position.quantity, dec!(30));
        assert_eq!(position.purchase_price, dec!(160));
        // earliest acquisition, not earliest surviving lot
        assert_eq!(position.purchase_date, date(2023, 1, 10));
    }

    #[test]
    fn test_purchase_price_averages_across_open_lots() {
        let history = vec![
            buy("b1", "AAPL", date(2023, 1, 10), dec!(10), dec!(100)),
            buy("b2", "AAPL", date(2023, 6, 1), dec!(10), dec!(200)),
        ];
        let aggregates = recompute_aggregates(&history, &[]).unwrap();
        assert_eq!(aggregates.positions[0].purchase_price, dec!(150));
    }

    #[test]
    fn test_user_curated_fields_survive_recompute() {
        let history = vec![buy("b1", "AAPL", date(2023, 1, 10), dec!(10), dec!(100))];
        let existing = vec![PositionAggregate {
            ticker: "AAPL".to_string(),
            quantity: dec!(999),
            purchase_price: dec!(1),
            purchase_date: date(2000, 1, 1),
            thesis_id: Some("thesis-7".to_string()),
            notes: Some("conviction hold".to_string()),
            band_id: Some("band-3".to_string()),
        }];
        let aggregates = recompute_aggregates(&history, &existing).unwrap();
        let position = &aggregates.positions[0];

        // derived fields are recomputed, user fields are carried verbatim
        assert_eq!(position.quantity, dec!(10));
        assert_eq!(position.purchase_price, dec!(100));
        assert_eq!(position.thesis_id.as_deref(), Some("thesis-7"));
        assert_eq!(position.notes.as_deref(), Some("conviction hold"));
        assert_eq!(position.band_id.as_deref(), Some("band-3"));
    }

    #[test]
    fn test_fully_sold_tickers_are_omitted() {
        let history = vec![
            buy("b1", "AAPL", date(2023, 1, 10), dec!(10), dec!(100)),
            sell("s1", "AAPL", date(2023, 6, 1), dec!(10), dec!(120)),
            buy("b2", "MSFT", date(2023, 2, 1), dec!(5), dec!(300)),
        ];
        let aggregates = recompute_aggregates(&history, &[]).unwrap();
        assert_eq!(aggregates.positions.len(), 1);
        assert_eq!(aggregates.positions[0].ticker, "MSFT");
    }

    #[test]
    fn test_cash_balance_sums_every_transaction() {
        let history = vec![
            cash("c1", date(2023, 1, 1), dec!(10000)),
            buy("b1", "AAPL", date(2023, 1, 10), dec!(10), dec!(100)),
            sell("s1", "AAPL", date(2023, 6, 1), dec!(5), dec!(120)),
            entry(
                "d1",
                Some("AAPL"),
                TransactionType::Dividend,
                date(2023, 7, 1),
                Decimal::ZERO,
                None,
                dec!(12.50),
            ),
        ];
        let aggregates = recompute_aggregates(&history, &[]).unwrap();
        // 10000 − 1000 + 600 + 12.50
        assert_eq!(aggregates.cash_balance, dec!(9612.50));
    }

    #[test]
    fn test_recompute_is_idempotent_and_ordered() {
        let history = vec![
            buy("b1", "MSFT", date(2023, 2, 1), dec!(5), dec!(300)),
            buy("b2", "AAPL", date(2023, 1, 10), dec!(10), dec!(100)),
        ];
        let first = recompute_aggregates(&history, &[]).unwrap();
        let second = recompute_aggregates(&history, &[]).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.positions[0].ticker, "AAPL");
        assert_eq!(first.positions[1].ticker, "MSFT");
    }

    #[test]
    fn test_value_position() {
        let lots = vec![
            Lot {
                purchase_date: date(2023, 1, 10),
                quantity: dec!(10),
                cost_basis_per_share: dec!(100),
            },
            Lot {
                purchase_date: date(2023, 6, 1),
                quantity: dec!(5),
                cost_basis_per_share: dec!(120),
            },
        ];
        let valuation = value_position(&lots, dec!(150));
        assert_eq!(valuation.market_value, dec!(2250));
        assert_eq!(valuation.cost_basis, dec!(1600));
        assert_eq!(valuation.unrealized_gain, dec!(650));
    }
}
