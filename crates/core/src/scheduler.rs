//! Refresh scheduling.
//!
//! A single loop owns all refresh invocations: a periodic tick (first tick
//! immediate, so the badge populates at startup), manual click triggers, and
//! the one-shot retry that a network failure requests. The retry is a
//! deferred task that feeds back into the same loop rather than a recursive
//! call, so each failure schedules at most one retry and the chain stays
//! observable.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::mpsc;

use crate::constants::{REFRESH_INTERVAL_SECS, RETRY_DELAY_SECS};
use crate::refresh::{RefreshOutcome, RefreshService};

/// What caused a refresh pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trigger {
    /// The periodic alarm fired.
    Interval,
    /// The user clicked the toolbar icon.
    Click,
    /// The deferred retry after a network failure.
    Retry,
}

impl Trigger {
    /// Manual triggers bypass the elapsed-time gate.
    pub fn forces(&self) -> bool {
        matches!(self, Trigger::Click)
    }
}

/// Handle for injecting triggers into a running scheduler.
#[derive(Clone)]
pub struct SchedulerHandle {
    tx: mpsc::Sender<Trigger>,
}

impl SchedulerHandle {
    /// Queue a trigger. Dropped silently if the scheduler has stopped.
    pub async fn trigger(&self, trigger: Trigger) {
        if self.tx.send(trigger).await.is_err() {
            warn!("Scheduler is no longer running; dropping {:?}", trigger);
        }
    }
}

/// Spawn the scheduler with the standard 30-minute period and 30-second
/// retry delay.
pub fn spawn(service: Arc<RefreshService>) -> SchedulerHandle {
    spawn_with(
        service,
        Duration::from_secs(REFRESH_INTERVAL_SECS),
        Duration::from_secs(RETRY_DELAY_SECS),
    )
}

/// Spawn the scheduler with explicit timings. Used by tests.
pub fn spawn_with(
    service: Arc<RefreshService>,
    period: Duration,
    retry_delay: Duration,
) -> SchedulerHandle {
    let (tx, mut rx) = mpsc::channel::<Trigger>(8);
    let retry_tx = tx.clone();

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            let trigger = tokio::select! {
                _ = ticker.tick() => Trigger::Interval,
                received = rx.recv() => match received {
                    Some(trigger) => trigger,
                    None => break,
                },
            };

            debug!("Refresh trigger: {:?}", trigger);
            let outcome = service.refresh(trigger.forces()).await;

            if outcome == RefreshOutcome::RetryRequested {
                let tx = retry_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(retry_delay).await;
                    let _ = tx.send(Trigger::Retry).await;
                });
            }
        }
    });

    SchedulerHandle { tx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{BadgeStyle, ToolbarSurface};
    use crate::store::{MemoryTickerStore, TickerState, TickerStore};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct NullSurface;

    impl ToolbarSurface for NullSurface {
        fn set_badge(&self, _text: &str, _background: &str) {}
        fn set_icon(&self, _svg: &str) {}
    }

    struct CountingProvider {
        calls: AtomicUsize,
        fail_first: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first: AtomicUsize::new(0),
            }
        }

        fn failing_first(count: usize) -> Self {
            let provider = Self::new();
            provider.fail_first.store(count, Ordering::SeqCst);
            provider
        }
    }

    #[async_trait]
    impl crate::provider::PriceProvider for CountingProvider {
        fn id(&self) -> &'static str {
            "COUNTING"
        }

        fn requires_key(&self) -> bool {
            false
        }

        async fn fetch_latest(
            &self,
            _api_key: Option<&str>,
        ) -> crate::errors::Result<crate::provider::SpotPrice> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self
                .fail_first
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                let err = reqwest::Client::new()
                    .get("http://127.0.0.1:0/")
                    .send()
                    .await
                    .expect_err("connecting to port 0 must fail");
                return Err(crate::errors::TickerError::Network(err));
            }
            Ok(crate::provider::SpotPrice { price: dec!(1875) })
        }
    }

    fn build_service(provider: Arc<CountingProvider>) -> Arc<RefreshService> {
        Arc::new(RefreshService::new(
            Arc::new(MemoryTickerStore::new()),
            provider,
            Arc::new(NullSurface),
            BadgeStyle::Text,
        ))
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_first_tick_refreshes_immediately() {
        let provider = Arc::new(CountingProvider::new());
        let _handle = spawn_with(
            build_service(provider.clone()),
            Duration::from_secs(3600),
            Duration::from_secs(3600),
        );

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_click_triggers_forced_refresh() {
        let provider = Arc::new(CountingProvider::new());
        let store = Arc::new(MemoryTickerStore::with_state(TickerState {
            price: Some(dec!(1850)),
            last_update: Some(chrono::Utc::now()),
            ..Default::default()
        }));
        let service = Arc::new(RefreshService::new(
            store.clone(),
            provider.clone(),
            Arc::new(NullSurface),
            BadgeStyle::Text,
        ));
        let handle = spawn_with(service, Duration::from_secs(3600), Duration::from_secs(3600));
        tokio::time::sleep(Duration::from_millis(100)).await;

        // The immediate startup tick reused the fresh cache without a call.
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

        handle.trigger(Trigger::Click).await;
        tokio::time::sleep(Duration::from_millis(200)).await;

        // The click forced a fetch despite the fresh cache.
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.get_state().unwrap().price, Some(dec!(1875)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_network_failure_schedules_exactly_one_retry() {
        let provider = Arc::new(CountingProvider::failing_first(1));
        let _handle = spawn_with(
            build_service(provider.clone()),
            Duration::from_secs(3600),
            Duration::from_millis(50),
        );

        tokio::time::sleep(Duration::from_millis(400)).await;

        // Startup tick failed once, the single deferred retry succeeded.
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }
}
