//! Thin asynchronous client for the Albion Online Data price API.
//!
//! One request covers up to [`BATCH_SIZE`] item ids across every queried city;
//! the caller gets one [`BatchOutcome`] per request so partial failure stays
//! visible instead of silently truncating the scan.

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{BatchOutcome, ItemId, Quote};

const DEFAULT_BASE_URL: &str = "https://www.albion-online-data.com/api/v2/stats/prices/";
const USER_AGENT: &str = "albion-market-scanner/0.1.0";

/// Maximum number of item ids packed into a single request.
pub const BATCH_SIZE: usize = 50;

#[derive(Debug, Error)]
pub enum MarketClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

/// One quote object as returned by the stats endpoint. Prices default to 0
/// when the API omits them; the assembler drops those rows.
#[derive(Clone, Debug, Deserialize)]
struct QuoteDto {
    item_id: ItemId,
    city: String,
    #[serde(default)]
    sell_price_min: i64,
    #[serde(default)]
    buy_price_max: i64,
}

impl From<QuoteDto> for Quote {
    fn from(dto: QuoteDto) -> Self {
        Self {
            item_id: dto.item_id,
            city: dto.city,
            sell_price_min: dto.sell_price_min,
            buy_price_max: dto.buy_price_max,
        }
    }
}

#[derive(Clone)]
pub struct MarketClient {
    http: Client,
    base_url: Url,
}

impl MarketClient {
    pub fn new() -> Result<Self, MarketClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, MarketClientError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    /// Fetches quotes for every id, one sequential request per group of at
    /// most [`BATCH_SIZE`] ids. Never fails as a whole: each group reports its
    /// own outcome.
    pub async fn fetch_prices(&self, items: &[ItemId], cities: &[&str]) -> Vec<BatchOutcome> {
        let mut outcomes = Vec::with_capacity(items.len().div_ceil(BATCH_SIZE));
        for (index, group) in items.chunks(BATCH_SIZE).enumerate() {
            let outcome = match self.request_batch(group, cities).await {
                Ok(Some(quotes)) => {
                    debug!(batch = index, quotes = quotes.len(), "price batch fetched");
                    BatchOutcome::Fetched(quotes.into_iter().map(Quote::from).collect())
                }
                Ok(None) => BatchOutcome::Fetched(Vec::new()),
                Err(error) => {
                    warn!(batch = index, %error, "price batch failed");
                    BatchOutcome::Failed {
                        batch: index,
                        reason: error.to_string(),
                    }
                }
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    async fn request_batch(
        &self,
        group: &[ItemId],
        cities: &[&str],
    ) -> Result<Option<Vec<QuoteDto>>, MarketClientError> {
        let url = self.prices_url(group, cities)?;
        debug!(%url, "requesting price batch");
        let response = self.http.get(url).send().await?;
        if response.status() != StatusCode::OK {
            debug!(status = %response.status(), "non-200 price response, skipping batch");
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    fn prices_url(&self, group: &[ItemId], cities: &[&str]) -> Result<Url, MarketClientError> {
        let mut url = self.base_url.join(&group.join(","))?;
        url.query_pairs_mut()
            .append_pair("locations", &cities.join(","));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CITIES;

    fn ids(count: usize) -> Vec<ItemId> {
        (0..count).map(|i| format!("T4_ITEM_{i}")).collect()
    }

    #[test]
    fn test_batch_partitioning_is_ceil_of_fifty() {
        for (count, expected) in [(0, 0), (1, 1), (50, 1), (51, 2), (125, 3)] {
            assert_eq!(ids(count).chunks(BATCH_SIZE).count(), expected);
        }
        for group in ids(125).chunks(BATCH_SIZE) {
            assert!(group.len() <= BATCH_SIZE);
        }
    }

    #[test]
    fn test_prices_url_joins_ids_and_cities() {
        let client = MarketClient::new().expect("client");
        let items = vec!["T4_ORE".to_string(), "T5_WOOD".to_string()];
        let url = client
            .prices_url(&items, &CITIES)
            .expect("url")
            .to_string();
        assert!(
            url.starts_with("https://www.albion-online-data.com/api/v2/stats/prices/T4_ORE,T5_WOOD?")
        );
        assert!(url.contains("locations="));
        assert!(url.contains("Martlock"));
        assert!(url.contains("Caerleon"));
    }

    #[test]
    fn test_quote_dto_defaults_missing_prices_to_zero() {
        let quote: QuoteDto =
            serde_json::from_str(r#"{"item_id":"T4_ORE","city":"Martlock"}"#).expect("quote");
        assert_eq!(quote.sell_price_min, 0);
        assert_eq!(quote.buy_price_max, 0);
    }
}
