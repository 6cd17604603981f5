//! Icon compositor variant.
//!
//! Composites the formatted badge string onto a fixed base icon as SVG
//! markup. The overlay text starts at 20px bold and shrinks in 1px steps
//! until it fits the 48px canvas (floor 8px), then sits in a padded
//! rounded rectangle anchored at the canvas bottom.

use log::warn;

use crate::constants::{BADGE_ALERT_BACKGROUND, ICON_FONT_MAX_PX, ICON_FONT_MIN_PX, ICON_SIZE};
use crate::errors::{Result, TickerError};

/// Monospace glyph advance as a fraction of the font size.
const GLYPH_ADVANCE: f32 = 0.6;

/// Padding around the text box inside the background rectangle.
const BOX_PADDING: f32 = 2.0;

/// Corner radius of the background rectangle.
const BOX_RADIUS: f32 = 3.0;

const COIN_FILL: &str = "#f1c232";
const COIN_RIM: &str = "#b8860b";

fn text_width(text: &str, font_size: u32) -> f32 {
    text.chars().count() as f32 * GLYPH_ADVANCE * font_size as f32
}

/// Select the font size for the overlay text.
///
/// Starts at [`ICON_FONT_MAX_PX`] and shrinks in 1px steps while the modeled
/// text width exceeds the canvas width, down to [`ICON_FONT_MIN_PX`].
pub fn fit_font_size(text: &str) -> u32 {
    let mut size = ICON_FONT_MAX_PX;
    while size > ICON_FONT_MIN_PX && text_width(text, size) > ICON_SIZE as f32 {
        size -= 1;
    }
    size
}

/// Composite the badge string onto the base icon.
///
/// Returns the SVG document, or a [`TickerError::Render`] if the text cannot
/// be drawn. Callers that must not fail should go through [`render_icon`].
pub fn compose_icon(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(TickerError::Render("empty badge text".to_string()));
    }
    if !text.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
        return Err(TickerError::Render(format!(
            "badge text {:?} is not drawable",
            text
        )));
    }

    let size = ICON_SIZE as f32;
    let font_size = fit_font_size(text);

    let box_width = (text_width(text, font_size) + 2.0 * BOX_PADDING).min(size);
    let box_height = font_size as f32 + 2.0 * BOX_PADDING;
    let box_x = (size - box_width) / 2.0;
    let box_y = size - box_height;

    let text_x = size / 2.0;
    let text_y = box_y + box_height / 2.0;

    Ok(format!(
        r##"<svg width="{icon}" height="{icon}" viewBox="0 0 {icon} {icon}" xmlns="http://www.w3.org/2000/svg">
    <circle cx="24" cy="19" r="15" fill="{rim}"/>
    <circle cx="24" cy="19" r="12" fill="{fill}"/>
    <rect x="{box_x:.1}" y="{box_y:.1}" width="{box_width:.1}" height="{box_height:.1}" rx="{radius}" fill="black"/>
    <text x="{text_x:.1}" y="{text_y:.1}" text-anchor="middle" dominant-baseline="central" fill="white" font-family="monospace" font-weight="bold" font-size="{font_size}">{text}</text>
</svg>"##,
        icon = ICON_SIZE,
        rim = COIN_RIM,
        fill = COIN_FILL,
        radius = BOX_RADIUS,
    ))
}

/// The fixed error indicator: a red square with small centered "Err".
pub fn fallback_icon() -> String {
    format!(
        r##"<svg width="{icon}" height="{icon}" viewBox="0 0 {icon} {icon}" xmlns="http://www.w3.org/2000/svg">
    <rect x="0" y="0" width="{icon}" height="{icon}" fill="{alert}"/>
    <text x="24" y="24" text-anchor="middle" dominant-baseline="central" fill="white" font-family="monospace" font-size="10">Err</text>
</svg>"##,
        icon = ICON_SIZE,
        alert = BADGE_ALERT_BACKGROUND,
    )
}

/// Composite the badge string, falling back to the error indicator on any
/// failure. Never fails.
pub fn render_icon(text: &str) -> String {
    compose_icon(text).unwrap_or_else(|e| {
        warn!("Icon composition failed: {}", e);
        fallback_icon()
    })
}
