use crate::core::currency::Currency;
use std::num::ParseFloatError;
use thiserror::Error;

/// Failure to obtain a rate table from a rate source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request error: {source} for URL: {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} for URL: {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The rate page did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Rate table not found in page")]
    MissingTable,

    #[error("Rate row {row} has {found} cells, expected at least 3")]
    MissingColumns { row: usize, found: usize },

    #[error("Invalid rate '{value}' for currency: {code}")]
    InvalidRate { code: String, value: String },

    #[error("No rate found for currency: {0}")]
    MissingCurrency(Currency),
}

/// A conversion or edit event on the form was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Invalid amount '{text}' in {currency}")]
    Format {
        currency: Currency,
        text: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    #[error("Nothing to convert in {0}")]
    EmptySource(Currency),

    #[error("{0} is locked, press Backspace to clear")]
    Locked(Currency),
}
