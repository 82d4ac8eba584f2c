use crate::core::error::{FetchError, ParseError};
use crate::core::rates::{RateSource, RateTable};
use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

const USER_AGENT: &str = concat!("cursconv/", env!("CARGO_PKG_VERSION"));

// Cell positions within a rate row
const CODE_CELL: usize = 0;
const RATE_CELL: usize = 2;

/// Scrapes the daily BNR table published on cursbnr.ro.
pub struct CursBnrProvider {
    base_url: String,
}

impl CursBnrProvider {
    pub fn new(base_url: &str) -> Self {
        CursBnrProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}/", self.base_url)
    }
}

#[async_trait]
impl RateSource for CursBnrProvider {
    #[instrument(name = "CursBnrFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch(&self) -> Result<RateTable, FetchError> {
        let url = self.url();
        debug!("Requesting rate page from {}", url);

        let network = |source| FetchError::Network {
            url: url.clone(),
            source,
        };

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(network)?;
        let response = client.get(&url).send().await.map_err(network)?;

        debug!(response = ?response, "Received cursbnr response");

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status: response.status(),
            });
        }

        let body = response.text().await.map_err(network)?;
        let table = parse_rate_page(&body)?;
        debug!("Parsed {} rates", table.len());
        Ok(table)
    }
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("constant selector is valid")
}

/// Extracts `code -> RON rate` rows from the first `div.table-responsive`
/// of the page.
pub fn parse_rate_page(html: &str) -> Result<RateTable, ParseError> {
    let document = Html::parse_document(html);
    let container = document
        .select(&selector("div.table-responsive"))
        .next()
        .ok_or(ParseError::MissingTable)?;

    let row_selector = selector("tr");
    let cell_selector = selector("td");

    let mut rows = Vec::new();
    for (index, row) in container.select(&row_selector).enumerate() {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|td| td.text().collect::<String>().trim().to_string())
            .collect();

        // Header rows only carry <th>
        if cells.is_empty() {
            continue;
        }
        if cells.len() <= RATE_CELL {
            return Err(ParseError::MissingColumns {
                row: index,
                found: cells.len(),
            });
        }

        let code = cells[CODE_CELL].clone();
        let value = &cells[RATE_CELL];
        let rate = value.parse::<f64>().map_err(|_| ParseError::InvalidRate {
            code: code.clone(),
            value: value.clone(),
        })?;
        debug!(%code, rate, "Parsed rate row");
        rows.push((code, rate));
    }

    RateTable::from_rows(rows)
}
