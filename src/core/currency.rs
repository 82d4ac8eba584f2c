//! The fixed set of currencies the converter works with

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ron,
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    /// All currencies in form order, base currency first.
    pub const ALL: [Currency; 4] = [Currency::Ron, Currency::Eur, Currency::Usd, Currency::Gbp];

    /// Currencies whose rate must come from the rate page.
    pub const QUOTED: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Gbp];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Ron => "RON",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }

    pub fn is_base(self) -> bool {
        self == Currency::Ron
    }

    /// Position of this currency in [`Currency::ALL`].
    pub fn index(self) -> usize {
        match self {
            Currency::Ron => 0,
            Currency::Eur => 1,
            Currency::Usd => 2,
            Currency::Gbp => 3,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported currency: {0} (expected one of RON, EUR, USD, GBP)")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RON" => Ok(Currency::Ron),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}
