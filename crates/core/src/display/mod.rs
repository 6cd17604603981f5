//! Display states and badge text formatting.

mod format;

pub use format::format_badge;

use rust_decimal::Decimal;

/// What the badge should show for one render cycle.
///
/// Created transiently by the refresh service and consumed by the renderer;
/// never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    /// A fetched or cached price.
    Price(Decimal),
    /// No API key configured for a key-requiring provider.
    NoKey,
    /// Nothing fetched yet and nothing cached.
    NoData,
    /// Fetch or render failed.
    Error,
}
