//! Text badge variant.

use super::ToolbarSurface;
use crate::constants::BADGE_BACKGROUND;

/// Apply the formatted string as plain badge text.
///
/// Every state renders on the fixed dark background, sentinels included;
/// the alert color belongs to the failed-composition fallback icon.
pub(super) fn apply_text_badge(surface: &dyn ToolbarSurface, text: &str) {
    surface.set_badge(text, BADGE_BACKGROUND);
}
