//! SQLite-backed ticker store.
//!
//! State is a single `app_state` key-value table, one row per named field.
//! Unknown keys are ignored on read; unparseable values fall back to the
//! field default.

use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::warn;
use rusqlite::Connection;
use rust_decimal::Decimal;

use super::{SettingsUpdate, TickerState, TickerStore};
use crate::errors::{Result, TickerError};

const KEY_API_KEY: &str = "api_key";
const KEY_PRICE: &str = "price";
const KEY_LAST_UPDATE: &str = "last_update";
const KEY_ABBREVIATION: &str = "abbreviation";

impl From<rusqlite::Error> for TickerError {
    fn from(error: rusqlite::Error) -> Self {
        TickerError::Store(error.to_string())
    }
}

pub struct SqliteTickerStore {
    conn: Mutex<Connection>,
}

impl SqliteTickerStore {
    /// Open (and initialize if needed) the store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_state (
                setting_key TEXT PRIMARY KEY NOT NULL,
                setting_value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database, used by tests.
    #[cfg(test)]
    fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_state (
                setting_key TEXT PRIMARY KEY NOT NULL,
                setting_value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        // A poisoned lock means a writer panicked mid-statement; the
        // connection itself is still usable.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TickerStore for SqliteTickerStore {
    fn get_state(&self) -> Result<TickerState> {
        let conn = self.lock();
        let mut stmt = conn.prepare("SELECT setting_key, setting_value FROM app_state")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut state = TickerState::default();
        for row in rows {
            let (key, value) = row?;
            match key.as_str() {
                KEY_API_KEY => state.api_key = Some(value),
                KEY_PRICE => match Decimal::from_str(&value) {
                    Ok(price) => state.price = Some(price),
                    Err(_) => warn!("Ignoring unparseable cached price {:?}", value),
                },
                KEY_LAST_UPDATE => match DateTime::parse_from_rfc3339(&value) {
                    Ok(ts) => state.last_update = Some(ts.with_timezone(&Utc)),
                    Err(_) => warn!("Ignoring unparseable last_update {:?}", value),
                },
                KEY_ABBREVIATION => state.abbreviation = value.parse().unwrap_or(false),
                _ => {}
            }
        }
        Ok(state)
    }

    fn save_price(&self, price: Decimal, as_of: DateTime<Utc>) -> Result<()> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT OR REPLACE INTO app_state (setting_key, setting_value) VALUES (?1, ?2)",
            (KEY_PRICE, price.to_string()),
        )?;
        tx.execute(
            "INSERT OR REPLACE INTO app_state (setting_key, setting_value) VALUES (?1, ?2)",
            (KEY_LAST_UPDATE, as_of.to_rfc3339()),
        )?;
        tx.commit()?;
        Ok(())
    }

    fn update_settings(&self, update: &SettingsUpdate) -> Result<()> {
        let conn = self.lock();
        if let Some(ref api_key) = update.api_key {
            conn.execute(
                "INSERT OR REPLACE INTO app_state (setting_key, setting_value) VALUES (?1, ?2)",
                (KEY_API_KEY, api_key),
            )?;
        }
        if let Some(abbreviation) = update.abbreviation {
            conn.execute(
                "INSERT OR REPLACE INTO app_state (setting_key, setting_value) VALUES (?1, ?2)",
                (KEY_ABBREVIATION, abbreviation.to_string()),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_fields_resolve_to_defaults() {
        let store = SqliteTickerStore::open_in_memory().unwrap();
        let state = store.get_state().unwrap();

        assert_eq!(state.api_key, None);
        assert_eq!(state.price, None);
        assert_eq!(state.last_update, None);
        assert!(!state.abbreviation);
    }

    #[test]
    fn test_save_price_roundtrip() {
        let store = SqliteTickerStore::open_in_memory().unwrap();
        let as_of = Utc::now();

        store.save_price(dec!(2345.6), as_of).unwrap();

        let state = store.get_state().unwrap();
        assert_eq!(state.price, Some(dec!(2345.6)));
        assert_eq!(state.last_update, Some(as_of));
    }

    #[test]
    fn test_save_price_overwrites_previous_value() {
        let store = SqliteTickerStore::open_in_memory().unwrap();
        store.save_price(dec!(1800), Utc::now()).unwrap();

        let later = Utc::now();
        store.save_price(dec!(1850.25), later).unwrap();

        let state = store.get_state().unwrap();
        assert_eq!(state.price, Some(dec!(1850.25)));
        assert_eq!(state.last_update, Some(later));
    }

    #[test]
    fn test_partial_settings_update() {
        let store = SqliteTickerStore::open_in_memory().unwrap();
        store
            .update_settings(&SettingsUpdate {
                api_key: Some("secret".to_string()),
                abbreviation: None,
            })
            .unwrap();

        store
            .update_settings(&SettingsUpdate {
                api_key: None,
                abbreviation: Some(true),
            })
            .unwrap();

        let state = store.get_state().unwrap();
        assert_eq!(state.api_key.as_deref(), Some("secret"));
        assert!(state.abbreviation);
    }

    #[test]
    fn test_unparseable_price_falls_back_to_default() {
        let store = SqliteTickerStore::open_in_memory().unwrap();
        {
            let conn = store.lock();
            conn.execute(
                "INSERT OR REPLACE INTO app_state (setting_key, setting_value) VALUES (?1, ?2)",
                (KEY_PRICE, "not-a-number"),
            )
            .unwrap();
        }

        let state = store.get_state().unwrap();
        assert_eq!(state.price, None);
    }

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("goldbadge.db");

        {
            let store = SqliteTickerStore::open(&path).unwrap();
            store.save_price(dec!(1900), Utc::now()).unwrap();
        }

        let store = SqliteTickerStore::open(&path).unwrap();
        assert_eq!(store.get_state().unwrap().price, Some(dec!(1900)));
    }
}
