//! The refresh decision pipeline.
//!
//! One [`RefreshService::refresh`] call is one pass through the state
//! machine: read the cache, decide fetch-or-reuse, fetch if due, persist on
//! success, and render the resulting display state. Every failure resolves
//! to a visible badge state; nothing propagates to the caller except the
//! request to schedule a retry.


use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::constants::REFRESH_INTERVAL_SECS;
use crate::display::DisplayState;
use crate::errors::{RetryClass, TickerError};
use crate::provider::PriceProvider;
use crate::render::{BadgeRenderer, BadgeStyle, ToolbarSurface};
use crate::store::TickerStore;

/// How one refresh pass ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A fresh price was fetched, persisted and rendered.
    Fetched(Decimal),
    /// The cached price was still fresh and was rendered as-is.
    Reused(Decimal),
    /// A network-level failure; the caller should schedule exactly one
    /// deferred re-entry. The previous badge is left in place.
    RetryRequested,
    /// A sentinel state was rendered.
    Failed(DisplayState),
}

/// Drives the fetch-or-reuse decision and rendering.
///
/// Concurrent calls are not deduplicated: an alarm tick and a manual click
/// in close succession may both issue HTTP calls. The cache write is
/// last-write-wins in that case.
pub struct RefreshService {
    store: Arc<dyn TickerStore>,
    provider: Arc<dyn PriceProvider>,
    surface: Arc<dyn ToolbarSurface>,
    renderer: BadgeRenderer,
    refresh_interval: Duration,
}

impl RefreshService {
    pub fn new(
        store: Arc<dyn TickerStore>,
        provider: Arc<dyn PriceProvider>,
        surface: Arc<dyn ToolbarSurface>,
        style: BadgeStyle,
    ) -> Self {
        Self {
            store,
            provider,
            surface,
            renderer: BadgeRenderer::new(style),
            refresh_interval: Duration::seconds(REFRESH_INTERVAL_SECS as i64),
        }
    }

    /// Override the elapsed-time gate. Used by tests.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Run one refresh pass.
    ///
    /// `force` bypasses the elapsed-time gate (manual trigger).
    pub async fn refresh(&self, force: bool) -> RefreshOutcome {
        let state = match self.store.get_state() {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to read ticker state: {}", e);
                self.render(&DisplayState::Error, false);
                return RefreshOutcome::Failed(DisplayState::Error);
            }
        };

        if self.provider.requires_key() && state.api_key.is_none() {
            info!("No API key configured; skipping fetch");
            self.render(&DisplayState::NoKey, state.abbreviation);
            return RefreshOutcome::Failed(DisplayState::NoKey);
        }

        let now = Utc::now();
        let due = force
            || state
                .last_update
                .map_or(true, |last| now - last > self.refresh_interval);

        if !due {
            return match state.price {
                Some(price) => {
                    debug!("Using cached price {}", price);
                    self.render(&DisplayState::Price(price), state.abbreviation);
                    RefreshOutcome::Reused(price)
                }
                None => {
                    debug!("Cache fresh but empty; nothing to display");
                    self.render(&DisplayState::NoData, state.abbreviation);
                    RefreshOutcome::Failed(DisplayState::NoData)
                }
            };
        }

        debug!("Fetching price from {}", self.provider.id());
        match self.provider.fetch_latest(state.api_key.as_deref()).await {
            Ok(spot) => {
                info!("Fetched price {} from {}", spot.price, self.provider.id());
                if let Err(e) = self.store.save_price(spot.price, now) {
                    // The badge still shows the fetched price; only the
                    // cache misses this cycle.
                    warn!("Failed to persist price: {}", e);
                }
                self.render(&DisplayState::Price(spot.price), state.abbreviation);
                RefreshOutcome::Fetched(spot.price)
            }
            Err(e) => match e.retry_class() {
                RetryClass::ScheduleRetry => {
                    info!("Fetch failed ({}); retry requested", e);
                    RefreshOutcome::RetryRequested
                }
                RetryClass::Never => {
                    warn!("Fetch failed: {}", e);
                    let display = match e {
                        TickerError::MissingCredential => DisplayState::NoKey,
                        _ => DisplayState::Error,
                    };
                    self.render(&display, state.abbreviation);
                    RefreshOutcome::Failed(display)
                }
            },
        }
    }

    fn render(&self, state: &DisplayState, abbreviation: bool) {
        self.renderer.render(self.surface.as_ref(), state, abbreviation);
    }
}
