//! goldapi.io provider (authenticated endpoint variant).
//!
//! One GET per refresh with the API key in the `x-access-token` header.
//! The response is a JSON object carrying a numeric `price` field.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{PriceProvider, SpotPrice};
use crate::errors::{Result, TickerError};

const PROVIDER_ID: &str = "GOLDAPI";
const DEFAULT_BASE_URL: &str = "https://www.goldapi.io";

#[derive(Debug, Deserialize)]
struct GoldApiResponse {
    price: f64,
}

pub struct GoldApiProvider {
    client: Client,
    base_url: String,
}

impl GoldApiProvider {
    /// Timeout semantics stay with the client defaults; no explicit
    /// timeout is set.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different host. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for GoldApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for GoldApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn requires_key(&self) -> bool {
        true
    }

    async fn fetch_latest(&self, api_key: Option<&str>) -> Result<SpotPrice> {
        let api_key = api_key.ok_or(TickerError::MissingCredential)?;
        let url = format!("{}/api/XAU/USD", self.base_url);

        // A send error never produced an HTTP response; that is the one
        // retryable failure in the pipeline.
        let response = self
            .client
            .get(&url)
            .header("x-access-token", api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TickerError::Http {
                status: status.as_u16(),
                provider: PROVIDER_ID.to_string(),
            });
        }

        let body: GoldApiResponse = response
            .json()
            .await
            .map_err(|e| TickerError::Parse(e.to_string()))?;

        let price = Decimal::try_from(body.price)
            .map_err(|e| TickerError::Parse(format!("price {}: {}", body.price, e)))?;

        Ok(SpotPrice { price })
    }
}
