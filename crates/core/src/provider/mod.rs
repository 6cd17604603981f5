//! Price provider trait and endpoint variants.
//!
//! Two endpoint variants exist: the authenticated goldapi.io endpoint
//! (API key in an `x-access-token` header) and an unauthenticated public
//! endpoint. A deployment selects one via configuration.

mod goldapi;
mod public;

pub use goldapi::GoldApiProvider;
pub use public::PublicGoldProvider;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;

/// A fetched spot price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpotPrice {
    pub price: Decimal,
}

/// Trait for spot price providers.
///
/// Implement this to add a new price endpoint. The refresh service checks
/// [`requires_key`](Self::requires_key) before fetching and never calls
/// [`fetch_latest`](Self::fetch_latest) for a key-requiring provider
/// without a configured key.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier, used for logging and error reporting.
    fn id(&self) -> &'static str;

    /// Whether this endpoint variant needs an API key.
    fn requires_key(&self) -> bool;

    /// Fetch the latest XAU/USD spot price.
    ///
    /// `api_key` is present iff the user configured one; key-requiring
    /// providers may rely on it being `Some`.
    async fn fetch_latest(&self, api_key: Option<&str>) -> Result<SpotPrice>;
}

/// Which provider a deployment uses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProviderKind {
    /// goldapi.io, authenticated.
    GoldApi,
    /// Public endpoint, no key.
    Public,
}

impl ProviderKind {
    /// Parse a provider name from configuration. Unknown names fall back
    /// to the authenticated endpoint.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "public" => ProviderKind::Public,
            _ => ProviderKind::GoldApi,
        }
    }
}
