//! In-memory ticker store for tests and ephemeral deployments.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{SettingsUpdate, TickerState, TickerStore};
use crate::errors::Result;

#[derive(Default)]
pub struct MemoryTickerStore {
    state: Mutex<TickerState>,
}

impl MemoryTickerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: TickerState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }
}

impl TickerStore for MemoryTickerStore {
    fn get_state(&self) -> Result<TickerState> {
        Ok(self.state.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save_price(&self, price: Decimal, as_of: DateTime<Utc>) -> Result<()> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.price = Some(price);
        state.last_update = Some(as_of);
        Ok(())
    }

    fn update_settings(&self, update: &SettingsUpdate) -> Result<()> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(ref api_key) = update.api_key {
            state.api_key = Some(api_key.clone());
        }
        if let Some(abbreviation) = update.abbreviation {
            state.abbreviation = abbreviation;
        }
        Ok(())
    }
}
