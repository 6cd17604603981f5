//! gold-api.com provider (unauthenticated endpoint variant).

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{PriceProvider, SpotPrice};
use crate::errors::{Result, TickerError};

const PROVIDER_ID: &str = "GOLD_API_PUBLIC";
const DEFAULT_BASE_URL: &str = "https://api.gold-api.com";

#[derive(Debug, Deserialize)]
struct PublicGoldResponse {
    price: f64,
}

pub struct PublicGoldProvider {
    client: Client,
    base_url: String,
}

impl PublicGoldProvider {
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

impl Default for PublicGoldProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceProvider for PublicGoldProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn requires_key(&self) -> bool {
        false
    }

    async fn fetch_latest(&self, _api_key: Option<&str>) -> Result<SpotPrice> {
        let url = format!("{}/price/XAU", self.base_url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TickerError::Http {
                status: status.as_u16(),
                provider: PROVIDER_ID.to_string(),
            });
        }

        let body: PublicGoldResponse = response
            .json()
            .await
            .map_err(|e| TickerError::Parse(e.to_string()))?;

        let price = Decimal::try_from(body.price)
            .map_err(|e| TickerError::Parse(format!("price {}: {}", body.price, e)))?;

        Ok(SpotPrice { price })
    }
}
