//! Goldbadge Core - the price refresh and badge rendering pipeline.
//!
//! This crate contains the whole pipeline as a reusable library:
//! deciding when to fetch versus reuse the cached price, fetching from a
//! provider, persisting the result, and rendering it as badge text or a
//! composited icon. It is surface- and storage-agnostic: the `apps/server`
//! binary supplies a [`render::ToolbarSurface`] and wires the scheduler.
//!
//! # Architecture
//!
//! ```text
//! Scheduler (interval / click / retry)
//!        |
//!        v
//! RefreshService ----> TickerStore    (cached price + settings)
//!        |
//!        +-----------> PriceProvider  (goldapi.io or public endpoint)
//!        |
//!        v
//! BadgeRenderer -----> ToolbarSurface (badge text or 48x48 icon)
//! ```

pub mod constants;
pub mod display;
pub mod errors;
pub mod provider;
pub mod refresh;
pub mod render;
pub mod scheduler;
pub mod store;

// Re-export error types
pub use errors::{Result, RetryClass, TickerError};

// Re-export the pipeline types the app wires together
pub use display::{format_badge, DisplayState};
pub use provider::{GoldApiProvider, PriceProvider, ProviderKind, PublicGoldProvider, SpotPrice};
pub use refresh::{RefreshOutcome, RefreshService};
pub use render::{BadgeRenderer, BadgeStyle, ToolbarSurface};
pub use scheduler::{SchedulerHandle, Trigger};
pub use store::{MemoryTickerStore, SettingsUpdate, SqliteTickerStore, TickerState, TickerStore};
