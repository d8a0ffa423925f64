//! Persisted Shell State
//!
//! Selective-field persistence with an explicit deserialize -> validate ->
//! default pipeline. The on-disk TOML carries no schema version; unknown
//! fields are ignored, missing fields fall back to defaults, and every loaded
//! value passes through the same clamps and lenient parsers the live store
//! uses, so a hand-edited or stale file can never put the shell in an
//! out-of-bounds state. Ephemeral fields (resizing, hover, drag) are
//! deliberately absent.

use gpui::{App, AppContext, SharedString};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::state::layout_state::{Density, LayoutAction, LayoutState, SidebarMode};

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("atrium.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// On-disk shape of the persisted preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedShell {
    dark_mode: Option<bool>,
    sidebar_mode: Option<String>,
    sidebar_width: Option<f32>,
    side_pane_width: Option<f32>,
    split_pane_width: Option<f32>,
    auto_expand: Option<bool>,
    reduced_motion: Option<bool>,
    density: Option<String>,
    accent_color: Option<String>,
}

impl PersistedShell {
    /// Load state from the config file; an empty or missing file yields
    /// defaults silently.
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading persisted shell state");
        let value = std::fs::read_to_string(&path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse persisted state");
            e
        })?;
        Ok(state)
    }

    /// Snapshot the persisted subset of the layout store
    pub fn capture(layout: &LayoutState) -> Self {
        Self {
            dark_mode: Some(layout.prefs().dark_mode),
            sidebar_mode: Some(layout.sidebar_mode().as_persisted_str().to_string()),
            sidebar_width: Some(layout.sidebar_width()),
            side_pane_width: Some(layout.side_pane_width()),
            split_pane_width: Some(layout.split_pane_width()),
            auto_expand: Some(layout.prefs().auto_expand),
            reduced_motion: Some(layout.prefs().reduced_motion),
            density: Some(layout.prefs().density.as_str().to_string()),
            accent_color: Some(layout.prefs().accent.to_string()),
        }
    }

    /// Replay the persisted values into a layout store through the reducer,
    /// so every loaded value goes through the same clamps as a live mutation.
    pub fn apply_to(&self, layout: &mut LayoutState) {
        if let Some(mode) = self.sidebar_mode.as_deref().and_then(SidebarMode::parse) {
            layout.apply(LayoutAction::SetSidebarMode(mode));
        }
        if let Some(width) = self.sidebar_width {
            layout.apply(LayoutAction::SetSidebarWidth(width));
        }
        if let Some(width) = self.side_pane_width {
            layout.apply(LayoutAction::SetSidePaneWidth(width));
            layout.apply(LayoutAction::CaptureDefaultSidePaneWidth);
        }
        if let Some(width) = self.split_pane_width {
            layout.apply(LayoutAction::SetSplitPaneWidth(width));
        }
        if let Some(on) = self.dark_mode {
            layout.apply(LayoutAction::SetDarkMode(on));
        }
        if let Some(on) = self.auto_expand {
            layout.apply(LayoutAction::SetAutoExpand(on));
        }
        if let Some(on) = self.reduced_motion {
            layout.apply(LayoutAction::SetReducedMotion(on));
        }
        if let Some(density) = self.density.as_deref().and_then(Density::parse) {
            layout.apply(LayoutAction::SetDensity(density));
        }
        if let Some(accent) = self.accent() {
            layout.apply(LayoutAction::SetAccent(accent));
        }
    }

    /// Accent color validated to a `#rrggbb` hex string
    fn accent(&self) -> Option<SharedString> {
        let accent = self.accent_color.as_deref()?;
        let hex = accent.strip_prefix('#')?;
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(SharedString::from(accent.to_string()))
        } else {
            None
        }
    }

    /// Save to disk
    pub fn save(&self) -> Result<()> {
        let path = get_config_path()?;
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

/// Dispatch a layout action and, when it touches persisted fields, write the
/// new snapshot to disk on the background executor.
pub fn dispatch_layout_and_save(cx: &App, action_name: &'static str, action: LayoutAction) {
    let entities = cx.global::<AppEntities>().clone();
    let persist = action.persists();

    cx.spawn(async move |cx| {
        let snapshot = entities.layout.update(cx, |layout, cx| {
            layout.dispatch(action, cx);
            persist.then(|| PersistedShell::capture(layout))
        });

        if let Ok(Some(snapshot)) = snapshot {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = snapshot.save() {
                        error!(error = %e, action = action_name, "Failed to save shell state");
                    } else {
                        info!(action = action_name, "Shell state saved");
                    }
                })
                .await;
        }
    })
    .detach();
}
