//! Command line front ends over the core form and rate source

pub mod convert;
pub mod rates;
pub mod setup;
pub mod ui;
pub mod window;

use crate::core::{RateSource, RateTable};
use anyhow::{Context, Result};

/// Fetches the rate table once, showing a spinner while the request runs.
pub async fn fetch_rates(source: &dyn RateSource) -> Result<RateTable> {
    let pb = ui::new_spinner("Fetching BNR rates...");
    let result = source.fetch().await;
    pb.finish_and_clear();
    result.context("Failed to fetch exchange rates")
}
