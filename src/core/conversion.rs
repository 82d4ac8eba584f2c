//! Cross-currency arithmetic over a [`RateTable`]

use crate::core::currency::Currency;
use crate::core::rates::RateTable;

/// Converts `amount` of `from` into `to`.
///
/// Every rate is expressed in RON, so conversions between two quoted
/// currencies go through the ratio of their RON rates.
pub fn convert(amount: f64, from: Currency, to: Currency, rates: &RateTable) -> f64 {
    if from == to {
        return amount;
    }
    match (from, to) {
        (Currency::Ron, other) => amount / rates.rate(other),
        (source, Currency::Ron) => amount * rates.rate(source),
        (source, other) => amount * (rates.rate(source) / rates.rate(other)),
    }
}

/// Converts `amount` of `from` into every other currency, in form order.
pub fn convert_all(amount: f64, from: Currency, rates: &RateTable) -> Vec<(Currency, f64)> {
    Currency::ALL
        .into_iter()
        .filter(|c| *c != from)
        .map(|to| (to, convert(amount, from, to, rates)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_rates() -> RateTable {
        RateTable::from_rows([("EUR", 5.0), ("USD", 4.5), ("GBP", 5.8)]).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.001,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_convert_from_ron() {
        let rates = sample_rates();
        assert_eq!(convert(100.0, Currency::Ron, Currency::Eur, &rates), 20.0);
        assert_close(convert(100.0, Currency::Ron, Currency::Usd, &rates), 22.222);
        assert_close(convert(100.0, Currency::Ron, Currency::Gbp, &rates), 17.241);
    }

    #[test]
    fn test_convert_from_eur() {
        let rates = sample_rates();
        assert_eq!(convert(10.0, Currency::Eur, Currency::Ron, &rates), 50.0);
        assert_close(convert(10.0, Currency::Eur, Currency::Usd, &rates), 11.111);
        assert_close(convert(10.0, Currency::Eur, Currency::Gbp, &rates), 8.621);
    }

    #[test]
    fn test_convert_to_same_currency_is_identity() {
        let rates = sample_rates();
        for currency in Currency::ALL {
            assert_eq!(convert(42.5, currency, currency, &rates), 42.5);
        }
    }

    #[test]
    fn test_convert_all_skips_source() {
        let rates = sample_rates();
        let result = convert_all(10.0, Currency::Usd, &rates);
        let targets: Vec<_> = result.iter().map(|(c, _)| *c).collect();
        assert_eq!(targets, vec![Currency::Ron, Currency::Eur, Currency::Gbp]);
        assert_eq!(result[0].1, 45.0);
    }

    fn rates_strategy() -> impl Strategy<Value = RateTable> {
        (0.01f64..1000.0, 0.01f64..1000.0, 0.01f64..1000.0).prop_map(|(eur, usd, gbp)| {
            RateTable::from_rows([("EUR", eur), ("USD", usd), ("GBP", gbp)]).unwrap()
        })
    }

    fn quoted() -> impl Strategy<Value = Currency> {
        prop::sample::select(Currency::QUOTED.to_vec())
    }

    proptest! {
        #[test]
        fn ron_round_trip_returns_amount(rates in rates_strategy(), amount in 0.0f64..1e9) {
            let eur = convert(amount, Currency::Ron, Currency::Eur, &rates);
            let back = eur * rates.rate(Currency::Eur);
            prop_assert!((back - amount).abs() <= amount.abs() * 1e-12 + 1e-9);
        }

        #[test]
        fn quoted_pairs_use_rate_ratio(
            rates in rates_strategy(),
            from in quoted(),
            to in quoted(),
            amount in -1e6f64..1e6
        ) {
            prop_assume!(from != to);
            let expected = amount * rates.rate(from) / rates.rate(to);
            let actual = convert(amount, from, to, &rates);
            prop_assert!((actual - expected).abs() <= expected.abs() * 1e-12 + 1e-9);
            prop_assert_eq!(
                convert(amount, from, Currency::Ron, &rates),
                amount * rates.rate(from)
            );
        }
    }
}
