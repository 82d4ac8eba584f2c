//! Exchange rate table and the source abstraction that produces it

use crate::core::currency::Currency;
use crate::core::error::{FetchError, ParseError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Anything that can produce a [`RateTable`] in a single retrieval.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch(&self) -> Result<RateTable, FetchError>;
}

/// Units of RON per one unit of each listed currency.
///
/// Built once and never refreshed. Construction guarantees that every
/// currency in [`Currency::QUOTED`] is present with a positive rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
    fetched_at: DateTime<Utc>,
}

impl RateTable {
    /// Builds a table from `(code, rate)` pairs. Later duplicates win.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut rates = BTreeMap::new();
        for (code, rate) in rows {
            let code = code.into();
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ParseError::InvalidRate {
                    value: rate.to_string(),
                    code,
                });
            }
            rates.insert(code, rate);
        }

        for currency in Currency::QUOTED {
            if !rates.contains_key(currency.code()) {
                return Err(ParseError::MissingCurrency(currency));
            }
        }

        Ok(RateTable {
            rates,
            fetched_at: Utc::now(),
        })
    }

    /// RON value of one unit of `currency`.
    pub fn rate(&self, currency: Currency) -> f64 {
        if currency.is_base() {
            return 1.0;
        }
        // Presence is checked in `from_rows`.
        self.rates.get(currency.code()).copied().unwrap_or(f64::NAN)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_keeps_all_codes() {
        let table = RateTable::from_rows([
            ("EUR", 4.97),
            ("USD", 4.58),
            ("GBP", 5.81),
            ("CHF", 5.12),
        ])
        .unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.rate(Currency::Eur), 4.97);
        assert_eq!(table.rate(Currency::Ron), 1.0);
        let codes: Vec<_> = table.iter().collect();
        assert_eq!(
            codes,
            vec![("CHF", 5.12), ("EUR", 4.97), ("GBP", 5.81), ("USD", 4.58)]
        );
    }

    #[test]
    fn test_missing_required_currency_fails() {
        let result = RateTable::from_rows([("EUR", 5.0), ("USD", 4.5)]);
        assert_eq!(result, Err(ParseError::MissingCurrency(Currency::Gbp)));

        let result = RateTable::from_rows(Vec::<(String, f64)>::new());
        assert_eq!(result, Err(ParseError::MissingCurrency(Currency::Eur)));
    }

    #[test]
    fn test_non_positive_rate_is_rejected() {
        let result = RateTable::from_rows([("EUR", 5.0), ("USD", 0.0), ("GBP", 5.8)]);
        assert!(matches!(
            result,
            Err(ParseError::InvalidRate { ref code, .. }) if code == "USD"
        ));

        let result = RateTable::from_rows([("EUR", f64::INFINITY), ("USD", 4.5), ("GBP", 5.8)]);
        assert!(result.is_err());
    }
}
