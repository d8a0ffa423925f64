//! Motion Targets
//!
//! The transition table the animation layer honors: for each layout
//! transition, the geometry the affected surfaces must end up at. The shell
//! only decides targets; easing and timing belong to the renderer.

use crate::constants::SIDEBAR_COLLAPSED_WIDTH;
use crate::state::layout_state::SidebarMode;
use crate::state::view_state::BodyState;

/// Target geometry for the navigation rail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailTarget {
    pub width: f32,
    /// Horizontal offset; negative slides the rail offscreen
    pub offset_x: f32,
    pub opacity: f32,
}

/// Rail geometry for a sidebar mode under the given body state.
/// Entering fullscreen slides the rail offscreen; leaving reverses it.
pub fn rail_target(mode: SidebarMode, expanded_width: f32, body: BodyState) -> RailTarget {
    let width = match mode {
        SidebarMode::Hidden => 0.0,
        SidebarMode::Collapsed => SIDEBAR_COLLAPSED_WIDTH,
        SidebarMode::Expanded | SidebarMode::Peek => expanded_width,
    };

    if body == BodyState::Fullscreen {
        return RailTarget {
            width,
            offset_x: -width,
            opacity: 0.0,
        };
    }

    RailTarget {
        width,
        offset_x: 0.0,
        opacity: if mode == SidebarMode::Hidden { 0.0 } else { 1.0 },
    }
}

/// The resize handle tracks the rail's right edge
pub fn handle_offset(rail: &RailTarget) -> f32 {
    rail.offset_x + rail.width
}

/// Width of the right pane for a body state: the split width in split view,
/// the side-pane width for an overlay, zero otherwise (fullscreen included).
pub fn right_pane_target(body: BodyState, side_pane_width: f32, split_pane_width: f32) -> f32 {
    match body {
        BodyState::SidePane => side_pane_width,
        BodyState::SplitView => split_pane_width,
        BodyState::Normal | BodyState::Fullscreen => 0.0,
    }
}

/// Transition duration honoring the reduced-motion preference
pub fn transition_duration_ms(reduced_motion: bool) -> u64 {
    if reduced_motion { 0 } else { 180 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SIDEBAR_DEFAULT_WIDTH;

    #[test]
    fn rail_targets_per_mode() {
        let t = rail_target(SidebarMode::Hidden, SIDEBAR_DEFAULT_WIDTH, BodyState::Normal);
        assert_eq!((t.width, t.opacity), (0.0, 0.0));

        let t = rail_target(SidebarMode::Collapsed, SIDEBAR_DEFAULT_WIDTH, BodyState::Normal);
        assert_eq!(t.width, SIDEBAR_COLLAPSED_WIDTH);
        assert_eq!(t.offset_x, 0.0);

        // Peek renders at the expanded width
        let t = rail_target(SidebarMode::Peek, 300.0, BodyState::Normal);
        assert_eq!(t.width, 300.0);
        assert_eq!(t.opacity, 1.0);
    }

    #[test]
    fn fullscreen_slides_rail_offscreen_and_back() {
        let t = rail_target(SidebarMode::Expanded, 260.0, BodyState::Fullscreen);
        assert_eq!(t.offset_x, -260.0);
        assert_eq!(t.opacity, 0.0);
        assert_eq!(handle_offset(&t), 0.0);

        // Reverse on exit
        let t = rail_target(SidebarMode::Expanded, 260.0, BodyState::SidePane);
        assert_eq!(t.offset_x, 0.0);
        assert_eq!(handle_offset(&t), 260.0);
    }

    #[test]
    fn right_pane_width_per_body_state() {
        assert_eq!(right_pane_target(BodyState::Normal, 440.0, 560.0), 0.0);
        assert_eq!(right_pane_target(BodyState::SidePane, 440.0, 560.0), 440.0);
        assert_eq!(right_pane_target(BodyState::SplitView, 440.0, 560.0), 560.0);
        assert_eq!(right_pane_target(BodyState::Fullscreen, 440.0, 560.0), 0.0);
    }

    #[test]
    fn reduced_motion_zeroes_duration() {
        assert_eq!(transition_duration_ms(true), 0);
        assert!(transition_duration_ms(false) > 0);
    }
}
