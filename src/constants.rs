//! UI Constants
//!
//! Centralized layout constants so every clamp in the shell agrees on bounds.

/// Navigation rail width constraints (expanded mode)
pub const SIDEBAR_MIN_WIDTH: f32 = 200.0;
pub const SIDEBAR_MAX_WIDTH: f32 = 500.0;
pub const SIDEBAR_DEFAULT_WIDTH: f32 = 260.0;

/// Rail width when collapsed to icons only
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;

/// Side pane (overlay) width constraints
pub const SIDE_PANE_MIN_WIDTH: f32 = 320.0;
pub const SIDE_PANE_MAX_WIDTH: f32 = 720.0;
pub const SIDE_PANE_DEFAULT_WIDTH: f32 = 440.0;

/// Split view right pane width constraints
pub const SPLIT_PANE_MIN_WIDTH: f32 = 320.0;
pub const SPLIT_PANE_DEFAULT_WIDTH: f32 = 560.0;
/// The split's right pane may take at most this fraction of the viewport
pub const SPLIT_PANE_MAX_FRACTION: f32 = 0.7;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Hit target width for the resize handles
pub const RESIZE_HANDLE_WIDTH: f32 = 6.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
