/// Cached price age beyond which a refresh is due (30 minutes).
pub const REFRESH_INTERVAL_SECS: u64 = 30 * 60;

/// Delay before the single scheduled retry after a network failure.
pub const RETRY_DELAY_SECS: u64 = 30;

/// Maximum badge text length.
pub const BADGE_MAX_CHARS: usize = 4;

/// Toolbar icon edge length in pixels.
pub const ICON_SIZE: u32 = 48;

/// Starting font size for the icon overlay text.
pub const ICON_FONT_MAX_PX: u32 = 20;

/// Smallest font size the fit loop may shrink to.
pub const ICON_FONT_MIN_PX: u32 = 8;

/// Background for all badge text, sentinel states included.
pub const BADGE_BACKGROUND: &str = "#222222";

/// Background of the fallback icon shown when composition fails.
pub const BADGE_ALERT_BACKGROUND: &str = "#FF0000";
