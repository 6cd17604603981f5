//! Badge rendering.
//!
//! Two renderer variants exist: a plain text badge (text plus background
//! color) and a composited 48x48 icon. Both are driven through the
//! [`ToolbarSurface`] trait so the pipeline stays independent of whatever
//! actually owns the toolbar button.
//!
//! Rendering never propagates an error past this module: icon composition
//! failures resolve to the fixed red "Err" fallback.

mod icon;
mod text;

pub use icon::{compose_icon, fallback_icon, fit_font_size, render_icon};

use log::debug;

use crate::display::{format_badge, DisplayState};

/// Which renderer variant the deployment uses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BadgeStyle {
    /// Badge text with a fixed background color.
    Text,
    /// Composited icon image.
    Icon,
}

impl BadgeStyle {
    /// Parse a style name from configuration. Unknown names fall back to `Icon`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "text" => BadgeStyle::Text,
            _ => BadgeStyle::Icon,
        }
    }
}

/// Outbound seam to the toolbar button.
///
/// Implementations must not fail: surface problems are theirs to log.
pub trait ToolbarSurface: Send + Sync {
    /// Set the badge text and its background color.
    fn set_badge(&self, text: &str, background: &str);

    /// Replace the toolbar icon with composited SVG markup.
    fn set_icon(&self, svg: &str);
}

/// Renders display states onto a [`ToolbarSurface`].
pub struct BadgeRenderer {
    style: BadgeStyle,
}

impl BadgeRenderer {
    pub fn new(style: BadgeStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> BadgeStyle {
        self.style
    }

    /// Render a display state. Guaranteed not to fail: any composition
    /// error resolves to the fallback error indicator.
    pub fn render(&self, surface: &dyn ToolbarSurface, state: &DisplayState, abbreviation: bool) {
        let badge_text = format_badge(state, abbreviation);
        debug!("Rendering badge text {:?} for {:?}", badge_text, state);

        match self.style {
            BadgeStyle::Text => text::apply_text_badge(surface, &badge_text),
            BadgeStyle::Icon => surface.set_icon(&render_icon(&badge_text)),
        }
    }
}
