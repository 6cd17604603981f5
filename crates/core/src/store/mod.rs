//! Persistent state for the badge pipeline.
//!
//! The cached price and the user settings live in a small named-field
//! key-value record. The [`TickerStore`] trait abstracts the persistence
//! layer so the SQLite implementation and the in-memory test store are
//! interchangeable.

mod memory;
mod sqlite;

pub use memory::MemoryTickerStore;
pub use sqlite::SqliteTickerStore;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Everything the refresh pipeline reads at the start of a cycle.
///
/// Missing fields resolve to these defaults: no key, no cached price, no
/// last update, abbreviation off.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerState {
    /// API key for the authenticated endpoint variant, if configured.
    pub api_key: Option<String>,
    /// Last successfully fetched price.
    pub price: Option<Decimal>,
    /// When the cached price was fetched.
    pub last_update: Option<DateTime<Utc>>,
    /// Compress large prices with a "k" suffix.
    pub abbreviation: bool,
}

/// Partial settings update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub api_key: Option<String>,
    pub abbreviation: Option<bool>,
}

/// Storage interface for the cached price and user settings.
///
/// Single-writer, single-process: implementations synchronize their own
/// access but provide no cross-cycle transactional guarantee. A race
/// between two concurrent refresh completions is last-write-wins.
pub trait TickerStore: Send + Sync {
    /// Read the full state, resolving missing fields to defaults.
    fn get_state(&self) -> Result<TickerState>;

    /// Persist a fetched price and its timestamp as one unit.
    fn save_price(&self, price: Decimal, as_of: DateTime<Utc>) -> Result<()>;

    /// Apply a partial settings update.
    fn update_settings(&self, update: &SettingsUpdate) -> Result<()>;
}
