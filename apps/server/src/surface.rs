//! The HTTP-served stand-in for a toolbar button.
//!
//! Real toolbar surfaces push pixels at the OS; this one keeps the latest
//! render in memory so status-bar integrations can poll it over HTTP.

use std::sync::RwLock;

use goldbadge_core::ToolbarSurface;
use serde::Serialize;

/// The latest rendered badge, whichever variant produced it.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSnapshot {
    /// Badge text, for the text renderer variant.
    pub text: Option<String>,
    /// Badge background color, for the text renderer variant.
    pub background: Option<String>,
    /// Composited icon markup, for the icon renderer variant.
    pub icon_svg: Option<String>,
}

#[derive(Default)]
pub struct SharedSurface {
    snapshot: RwLock<BadgeSnapshot>,
}

impl SharedSurface {
    pub fn snapshot(&self) -> BadgeSnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ToolbarSurface for SharedSurface {
    fn set_badge(&self, text: &str, background: &str) {
        let mut snapshot = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        snapshot.text = Some(text.to_string());
        snapshot.background = Some(background.to_string());
    }

    fn set_icon(&self, svg: &str) {
        let mut snapshot = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        snapshot.icon_svg = Some(svg.to_string());
    }
}
