use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use goldbadge_core::{
    scheduler, GoldApiProvider, PriceProvider, ProviderKind, PublicGoldProvider, RefreshService,
    SchedulerHandle, SqliteTickerStore, TickerStore,
};

use crate::config::Config;
use crate::surface::SharedSurface;

pub struct AppState {
    pub store: Arc<dyn TickerStore>,
    pub surface: Arc<SharedSurface>,
    pub scheduler: SchedulerHandle,
}

pub fn init_tracing() {
    let log_format = std::env::var("GB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store: Arc<dyn TickerStore> = Arc::new(SqliteTickerStore::open(&config.db_path)?);
    tracing::info!("State database in use: {}", config.db_path);

    let provider: Arc<dyn PriceProvider> = match config.provider {
        ProviderKind::GoldApi => Arc::new(GoldApiProvider::new()),
        ProviderKind::Public => Arc::new(PublicGoldProvider::new()),
    };
    tracing::info!("Price provider: {}", provider.id());

    let surface = Arc::new(SharedSurface::default());
    let service = Arc::new(RefreshService::new(
        store.clone(),
        provider,
        surface.clone(),
        config.badge_style,
    ));
    let scheduler = scheduler::spawn(service);

    Ok(Arc::new(AppState {
        store,
        surface,
        scheduler,
    }))
}
