//! Core business logic abstractions

pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod form;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use currency::Currency;
pub use error::{FetchError, FormError, ParseError};
pub use form::{ConversionForm, Field, FieldState};
pub use rates::{RateSource, RateTable};
