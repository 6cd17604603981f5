//! Server configuration from environment variables.

use goldbadge_core::{BadgeStyle, ProviderKind};

pub struct Config {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Path of the SQLite state database.
    pub db_path: String,
    /// Which price endpoint variant this deployment uses.
    pub provider: ProviderKind,
    /// Which renderer variant this deployment uses.
    pub badge_style: BadgeStyle,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("GB_LISTEN_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8470".to_string()),
            db_path: std::env::var("GB_DB_PATH").unwrap_or_else(|_| "goldbadge.db".to_string()),
            provider: ProviderKind::from_name(
                &std::env::var("GB_PROVIDER").unwrap_or_else(|_| "goldapi".to_string()),
            ),
            badge_style: BadgeStyle::from_name(
                &std::env::var("GB_BADGE_STYLE").unwrap_or_else(|_| "icon".to_string()),
            ),
        }
    }
}
