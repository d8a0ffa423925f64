//! Layout State
//!
//! The shell's shared mutable container: sidebar mode, pane geometry, user
//! preferences, fullscreen bookkeeping and drag/hover/resize ephemera. All
//! mutation goes through [`LayoutAction`] applied by a single reducer, so the
//! resize and drag paths use the same explicit command pattern as everything
//! else. Body state is only ever written here by the URL-derivation sync and
//! the fullscreen toggle; the router stays the single authority for pane
//! composition.

use gpui::{Context, SharedString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::navigation::ActivePage;
use crate::constants::{
    SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH, SIDE_PANE_DEFAULT_WIDTH,
    SIDE_PANE_MAX_WIDTH, SIDE_PANE_MIN_WIDTH, SPLIT_PANE_DEFAULT_WIDTH, SPLIT_PANE_MIN_WIDTH,
};
use crate::state::view_state::BodyState;

/// Visibility/size state of the navigation rail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SidebarMode {
    /// Rail not rendered at all
    Hidden,
    /// Icon-only rail
    Collapsed,
    /// Full-width rail
    #[default]
    Expanded,
    /// Temporarily expanded over a collapsed rail while hovered
    Peek,
}

impl SidebarMode {
    /// Persisted wire value; peek is transient and folds to collapsed
    pub fn as_persisted_str(&self) -> &'static str {
        match self {
            SidebarMode::Hidden => "hidden",
            SidebarMode::Collapsed | SidebarMode::Peek => "collapsed",
            SidebarMode::Expanded => "expanded",
        }
    }

    /// Lenient parse for the persistence pipeline
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hidden" => Some(SidebarMode::Hidden),
            "collapsed" => Some(SidebarMode::Collapsed),
            "expanded" => Some(SidebarMode::Expanded),
            _ => None,
        }
    }
}

/// Which pane is maximized while the body is fullscreen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenTarget {
    Main,
    Right,
}

/// Pane identity for hover/drop tracking in split view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSide {
    Main,
    Right,
}

/// Which handle a resize gesture is driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeRegion {
    Sidebar,
    RightPane,
}

/// Content density preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Density {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Compact => "compact",
            Density::Comfortable => "comfortable",
            Density::Spacious => "spacious",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "compact" => Some(Density::Compact),
            "comfortable" => Some(Density::Comfortable),
            "spacious" => Some(Density::Spacious),
            _ => None,
        }
    }
}

pub const DEFAULT_ACCENT_COLOR: &str = "#2cb3b8";

/// User preferences held alongside the geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    /// Auto-expand the rail when the window grows
    pub auto_expand: bool,
    pub reduced_motion: bool,
    pub density: Density,
    /// Accent color as a hex string
    pub accent: SharedString,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            auto_expand: true,
            reduced_motion: false,
            density: Density::default(),
            accent: SharedString::new_static(DEFAULT_ACCENT_COLOR),
        }
    }
}

/// Every mutation the layout store accepts
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutAction {
    /// Cycle hidden -> collapsed -> expanded -> collapsed; never lands on peek
    ToggleSidebar,
    HideSidebar,
    ShowSidebar,
    /// Hover-peek over a collapsed rail
    PeekSidebar,
    /// Hover left; a peeked rail drops back to collapsed
    EndPeek,
    CollapseSidebar,
    SetSidebarMode(SidebarMode),
    SetSidebarWidth(f32),
    SetSidePaneWidth(f32),
    SetSplitPaneWidth(f32),
    /// Snapshot the current side-pane width as the reset baseline
    CaptureDefaultSidePaneWidth,
    ToggleFullscreen(Option<FullscreenTarget>),
    /// Mirror the URL-derived body state into the store
    SyncBodyState(BodyState),
    ResetToDefaults,
    SetDarkMode(bool),
    SetAutoExpand(bool),
    SetReducedMotion(bool),
    SetDensity(Density),
    SetAccent(SharedString),
    BeginResize(ResizeRegion),
    EndResize,
    /// Hovered pane in split view; ignored while a nav item is mid-drag
    HoverPane(Option<PaneSide>),
    BeginDrag(ActivePage),
    DragOver(Option<PaneSide>),
    EndDrag,
}

impl LayoutAction {
    /// Whether this action should trigger a config save. Width writes during
    /// a resize drag are committed once, at EndResize, rather than per move.
    pub fn persists(&self) -> bool {
        matches!(
            self,
            LayoutAction::EndResize
                | LayoutAction::ToggleSidebar
                | LayoutAction::HideSidebar
                | LayoutAction::ShowSidebar
                | LayoutAction::CollapseSidebar
                | LayoutAction::SetSidebarMode(_)
                | LayoutAction::SetSidebarWidth(_)
                | LayoutAction::SetSidePaneWidth(_)
                | LayoutAction::SetSplitPaneWidth(_)
                | LayoutAction::CaptureDefaultSidePaneWidth
                | LayoutAction::ResetToDefaults
                | LayoutAction::SetDarkMode(_)
                | LayoutAction::SetAutoExpand(_)
                | LayoutAction::SetReducedMotion(_)
                | LayoutAction::SetDensity(_)
                | LayoutAction::SetAccent(_)
        )
    }
}

/// The layout store
pub struct LayoutState {
    // Identity injected at startup; survives reset_to_defaults
    app_name: SharedString,
    logo_glyph: SharedString,

    sidebar_mode: SidebarMode,
    sidebar_width: f32,
    side_pane_width: f32,
    split_pane_width: f32,
    default_side_pane_width: f32,

    body: BodyState,
    fullscreen_target: Option<FullscreenTarget>,
    previous_body: BodyState,

    prefs: Preferences,

    // Ephemera: never persisted, never URL-synced
    resizing: Option<ResizeRegion>,
    hovered_pane: Option<PaneSide>,
    dragged_page: Option<ActivePage>,
    drag_target: Option<PaneSide>,
}

impl LayoutState {
    pub fn new(app_name: impl Into<SharedString>, logo_glyph: impl Into<SharedString>) -> Self {
        Self {
            app_name: app_name.into(),
            logo_glyph: logo_glyph.into(),
            sidebar_mode: SidebarMode::default(),
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            side_pane_width: SIDE_PANE_DEFAULT_WIDTH,
            split_pane_width: SPLIT_PANE_DEFAULT_WIDTH,
            default_side_pane_width: SIDE_PANE_DEFAULT_WIDTH,
            body: BodyState::default(),
            fullscreen_target: None,
            previous_body: BodyState::default(),
            prefs: Preferences::default(),
            resizing: None,
            hovered_pane: None,
            dragged_page: None,
            drag_target: None,
        }
    }

    // ==================== Getters ====================

    pub fn app_name(&self) -> &SharedString {
        &self.app_name
    }

    pub fn logo_glyph(&self) -> &SharedString {
        &self.logo_glyph
    }

    pub fn sidebar_mode(&self) -> SidebarMode {
        self.sidebar_mode
    }

    pub fn sidebar_width(&self) -> f32 {
        self.sidebar_width
    }

    pub fn side_pane_width(&self) -> f32 {
        self.side_pane_width
    }

    pub fn split_pane_width(&self) -> f32 {
        self.split_pane_width
    }

    pub fn default_side_pane_width(&self) -> f32 {
        self.default_side_pane_width
    }

    pub fn body(&self) -> BodyState {
        self.body
    }

    pub fn is_fullscreen(&self) -> bool {
        self.body == BodyState::Fullscreen
    }

    pub fn fullscreen_target(&self) -> Option<FullscreenTarget> {
        self.fullscreen_target
    }

    pub fn previous_body(&self) -> BodyState {
        self.previous_body
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn resizing(&self) -> Option<ResizeRegion> {
        self.resizing
    }

    pub fn hovered_pane(&self) -> Option<PaneSide> {
        self.hovered_pane
    }

    pub fn dragged_page(&self) -> Option<ActivePage> {
        self.dragged_page
    }

    pub fn drag_target(&self) -> Option<PaneSide> {
        self.drag_target
    }

    // ==================== Reducer ====================

    /// Apply an action. Infallible: invalid inputs clamp or no-op.
    pub fn apply(&mut self, action: LayoutAction) {
        match action {
            LayoutAction::ToggleSidebar => {
                self.sidebar_mode = match self.sidebar_mode {
                    SidebarMode::Hidden => SidebarMode::Collapsed,
                    SidebarMode::Collapsed => SidebarMode::Expanded,
                    SidebarMode::Expanded => SidebarMode::Collapsed,
                    // Toggling a peeked rail pins it open
                    SidebarMode::Peek => SidebarMode::Expanded,
                };
            }
            LayoutAction::HideSidebar => self.sidebar_mode = SidebarMode::Hidden,
            LayoutAction::ShowSidebar => self.sidebar_mode = SidebarMode::Expanded,
            LayoutAction::CollapseSidebar => self.sidebar_mode = SidebarMode::Collapsed,
            LayoutAction::PeekSidebar => {
                if self.sidebar_mode == SidebarMode::Collapsed {
                    self.sidebar_mode = SidebarMode::Peek;
                }
            }
            LayoutAction::EndPeek => {
                if self.sidebar_mode == SidebarMode::Peek {
                    self.sidebar_mode = SidebarMode::Collapsed;
                }
            }
            LayoutAction::SetSidebarMode(mode) => self.sidebar_mode = mode,
            LayoutAction::SetSidebarWidth(width) => {
                self.sidebar_width = width.clamp(SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH);
            }
            LayoutAction::SetSidePaneWidth(width) => {
                self.side_pane_width = width.clamp(SIDE_PANE_MIN_WIDTH, SIDE_PANE_MAX_WIDTH);
            }
            LayoutAction::SetSplitPaneWidth(width) => {
                // Viewport-relative ceiling is enforced by the resize
                // controller before dispatch
                self.split_pane_width = width.max(SPLIT_PANE_MIN_WIDTH);
            }
            LayoutAction::CaptureDefaultSidePaneWidth => {
                self.default_side_pane_width = self.side_pane_width;
            }
            LayoutAction::ToggleFullscreen(target) => self.toggle_fullscreen(target),
            LayoutAction::SyncBodyState(body) => {
                if body != self.body {
                    self.set_body(body);
                }
            }
            LayoutAction::ResetToDefaults => self.reset_to_defaults(),
            LayoutAction::SetDarkMode(on) => self.prefs.dark_mode = on,
            LayoutAction::SetAutoExpand(on) => self.prefs.auto_expand = on,
            LayoutAction::SetReducedMotion(on) => self.prefs.reduced_motion = on,
            LayoutAction::SetDensity(density) => self.prefs.density = density,
            LayoutAction::SetAccent(accent) => self.prefs.accent = accent,
            LayoutAction::BeginResize(region) => self.resizing = Some(region),
            LayoutAction::EndResize => self.resizing = None,
            LayoutAction::HoverPane(pane) => {
                // While dragging, hover targets mean drop targets instead
                if self.dragged_page.is_none() {
                    self.hovered_pane = pane;
                }
            }
            LayoutAction::BeginDrag(page) => {
                self.dragged_page = Some(page);
                self.hovered_pane = None;
            }
            LayoutAction::DragOver(target) => {
                if self.dragged_page.is_some() {
                    self.drag_target = target;
                }
            }
            LayoutAction::EndDrag => {
                self.dragged_page = None;
                self.drag_target = None;
            }
        }
    }

    /// The single body-state setter. Leaving fullscreen through any path
    /// clears the restore pair, so no caller can leave a stale target behind.
    fn set_body(&mut self, body: BodyState) {
        if self.body == BodyState::Fullscreen && body != BodyState::Fullscreen {
            self.fullscreen_target = None;
            self.previous_body = BodyState::Normal;
        }
        debug!(from = ?self.body, to = ?body, "body state");
        self.body = body;
    }

    fn toggle_fullscreen(&mut self, target: Option<FullscreenTarget>) {
        if self.body == BodyState::Fullscreen {
            // Read the snapshot before set_body resets it
            let restore = self.previous_body;
            self.set_body(restore);
        } else {
            self.previous_body = self.body;
            self.fullscreen_target = target;
            self.body = BodyState::Fullscreen;
        }
    }

    fn reset_to_defaults(&mut self) {
        // Identity and the captured baseline survive; the current side-pane
        // width reverts to that baseline.
        self.sidebar_mode = SidebarMode::default();
        self.sidebar_width = SIDEBAR_DEFAULT_WIDTH;
        self.side_pane_width = self.default_side_pane_width;
        self.split_pane_width = SPLIT_PANE_DEFAULT_WIDTH;
        self.prefs = Preferences::default();
    }

    // ==================== Entity wrapper ====================

    /// Apply and notify observers
    pub fn dispatch(&mut self, action: LayoutAction, cx: &mut Context<Self>) {
        self.apply(action);
        cx.notify();
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new("Atrium", "A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_and_never_lands_on_peek() {
        let mut state = LayoutState::default();
        state.apply(LayoutAction::HideSidebar);
        assert_eq!(state.sidebar_mode(), SidebarMode::Hidden);

        state.apply(LayoutAction::ToggleSidebar);
        assert_eq!(state.sidebar_mode(), SidebarMode::Collapsed);
        state.apply(LayoutAction::ToggleSidebar);
        assert_eq!(state.sidebar_mode(), SidebarMode::Expanded);
        state.apply(LayoutAction::ToggleSidebar);
        assert_eq!(state.sidebar_mode(), SidebarMode::Collapsed);

        for _ in 0..8 {
            state.apply(LayoutAction::ToggleSidebar);
            assert_ne!(state.sidebar_mode(), SidebarMode::Peek);
        }
    }

    #[test]
    fn peek_only_from_collapsed_and_toggle_pins() {
        let mut state = LayoutState::default();
        assert_eq!(state.sidebar_mode(), SidebarMode::Expanded);
        state.apply(LayoutAction::PeekSidebar);
        assert_eq!(state.sidebar_mode(), SidebarMode::Expanded);

        state.apply(LayoutAction::CollapseSidebar);
        state.apply(LayoutAction::PeekSidebar);
        assert_eq!(state.sidebar_mode(), SidebarMode::Peek);
        state.apply(LayoutAction::EndPeek);
        assert_eq!(state.sidebar_mode(), SidebarMode::Collapsed);

        state.apply(LayoutAction::PeekSidebar);
        state.apply(LayoutAction::ToggleSidebar);
        assert_eq!(state.sidebar_mode(), SidebarMode::Expanded);
    }

    #[test]
    fn mode_stays_within_the_four_values() {
        let mut state = LayoutState::default();
        let ops = [
            LayoutAction::HideSidebar,
            LayoutAction::PeekSidebar,
            LayoutAction::ToggleSidebar,
            LayoutAction::ShowSidebar,
            LayoutAction::ToggleSidebar,
            LayoutAction::EndPeek,
            LayoutAction::CollapseSidebar,
            LayoutAction::PeekSidebar,
            LayoutAction::ToggleSidebar,
            LayoutAction::HideSidebar,
            LayoutAction::ToggleSidebar,
        ];
        for op in ops {
            state.apply(op);
            assert!(matches!(
                state.sidebar_mode(),
                SidebarMode::Hidden
                    | SidebarMode::Collapsed
                    | SidebarMode::Expanded
                    | SidebarMode::Peek
            ));
        }
    }

    #[test]
    fn sidebar_width_clamps_to_bounds() {
        let mut state = LayoutState::default();
        state.apply(LayoutAction::SetSidebarWidth(-40.0));
        assert_eq!(state.sidebar_width(), SIDEBAR_MIN_WIDTH);
        state.apply(LayoutAction::SetSidebarWidth(10_000.0));
        assert_eq!(state.sidebar_width(), SIDEBAR_MAX_WIDTH);
        state.apply(LayoutAction::SetSidebarWidth(321.0));
        assert_eq!(state.sidebar_width(), 321.0);
    }

    #[test]
    fn fullscreen_restores_each_origin_state() {
        for origin in [BodyState::Normal, BodyState::SidePane, BodyState::SplitView] {
            let mut state = LayoutState::default();
            state.apply(LayoutAction::SyncBodyState(origin));
            state.apply(LayoutAction::ToggleFullscreen(Some(FullscreenTarget::Main)));
            assert_eq!(state.body(), BodyState::Fullscreen);
            assert_eq!(state.fullscreen_target(), Some(FullscreenTarget::Main));
            assert_eq!(state.previous_body(), origin);

            state.apply(LayoutAction::ToggleFullscreen(None));
            assert_eq!(state.body(), origin);
            assert_eq!(state.fullscreen_target(), None);
            assert_eq!(state.previous_body(), BodyState::Normal);
        }
    }

    #[test]
    fn leaving_fullscreen_by_sync_clears_restore_pair() {
        let mut state = LayoutState::default();
        state.apply(LayoutAction::SyncBodyState(BodyState::SidePane));
        state.apply(LayoutAction::ToggleFullscreen(Some(FullscreenTarget::Right)));
        assert_eq!(state.body(), BodyState::Fullscreen);

        // URL change while fullscreen: the sync path must clear the pair too
        state.apply(LayoutAction::SyncBodyState(BodyState::SplitView));
        assert_eq!(state.body(), BodyState::SplitView);
        assert_eq!(state.fullscreen_target(), None);
        assert_eq!(state.previous_body(), BodyState::Normal);
    }

    #[test]
    fn reset_preserves_identity_and_captured_baseline() {
        let mut state = LayoutState::new("Custom", "C");
        state.apply(LayoutAction::SetSidePaneWidth(520.0));
        state.apply(LayoutAction::CaptureDefaultSidePaneWidth);
        state.apply(LayoutAction::SetSidePaneWidth(680.0));
        state.apply(LayoutAction::SetSidebarWidth(450.0));
        state.apply(LayoutAction::SetDarkMode(true));
        state.apply(LayoutAction::SetDensity(Density::Compact));

        state.apply(LayoutAction::ResetToDefaults);
        assert_eq!(state.app_name().as_ref(), "Custom");
        assert_eq!(state.logo_glyph().as_ref(), "C");
        // Current width reverts to the user-set baseline, not the factory one
        assert_eq!(state.side_pane_width(), 520.0);
        assert_eq!(state.default_side_pane_width(), 520.0);
        assert_eq!(state.sidebar_width(), SIDEBAR_DEFAULT_WIDTH);
        assert_eq!(state.prefs().dark_mode, false);
        assert_eq!(state.prefs().density, Density::Comfortable);
    }

    #[test]
    fn hover_tracking_suppressed_while_dragging() {
        let mut state = LayoutState::default();
        state.apply(LayoutAction::HoverPane(Some(PaneSide::Right)));
        assert_eq!(state.hovered_pane(), Some(PaneSide::Right));

        state.apply(LayoutAction::BeginDrag(ActivePage::Messaging));
        assert_eq!(state.hovered_pane(), None);
        state.apply(LayoutAction::HoverPane(Some(PaneSide::Main)));
        assert_eq!(state.hovered_pane(), None);

        state.apply(LayoutAction::DragOver(Some(PaneSide::Main)));
        assert_eq!(state.drag_target(), Some(PaneSide::Main));

        state.apply(LayoutAction::EndDrag);
        assert_eq!(state.dragged_page(), None);
        assert_eq!(state.drag_target(), None);
        state.apply(LayoutAction::HoverPane(Some(PaneSide::Main)));
        assert_eq!(state.hovered_pane(), Some(PaneSide::Main));
    }

    #[test]
    fn drag_over_without_drag_is_noop() {
        let mut state = LayoutState::default();
        state.apply(LayoutAction::DragOver(Some(PaneSide::Right)));
        assert_eq!(state.drag_target(), None);
    }

    #[test]
    fn persisted_sidebar_mode_folds_peek() {
        assert_eq!(SidebarMode::Peek.as_persisted_str(), "collapsed");
        assert_eq!(SidebarMode::parse("expanded"), Some(SidebarMode::Expanded));
        assert_eq!(SidebarMode::parse("peek"), None);
    }
}
