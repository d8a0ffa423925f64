//! Resize Handles
//!
//! Two independent pointer-drag state machines: one for the navigation rail
//! width, one for the right pane. A press on a handle enters the dragging
//! state; the move/release listeners live on the workspace root rather than
//! the handle, so the gesture survives the pointer leaving the strip. Every
//! move writes a clamped width synchronously through the layout reducer.

use gpui::{
    div, prelude::*, px, App, InteractiveElement, IntoElement, MouseButton, MouseDownEvent,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::{
    RESIZE_HANDLE_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH, SIDE_PANE_MAX_WIDTH,
    SIDE_PANE_MIN_WIDTH, SPLIT_PANE_MAX_FRACTION, SPLIT_PANE_MIN_WIDTH,
};
use crate::state::layout_state::{LayoutAction, ResizeRegion};
use crate::state::view_state::BodyState;
use crate::theme::ShellColors;

/// Rail width from the pointer's horizontal offset
pub fn sidebar_width_for_pointer(pointer_x: f32) -> f32 {
    pointer_x.clamp(SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH)
}

/// Right-pane width from the pointer position: viewport width minus offset,
/// clamped to the bounds of whichever pane kind is showing.
pub fn right_pane_width_for_pointer(body: BodyState, viewport_width: f32, pointer_x: f32) -> f32 {
    let raw = viewport_width - pointer_x;
    match body {
        BodyState::SidePane => raw.clamp(SIDE_PANE_MIN_WIDTH, SIDE_PANE_MAX_WIDTH),
        BodyState::SplitView => {
            let max = (viewport_width * SPLIT_PANE_MAX_FRACTION).max(SPLIT_PANE_MIN_WIDTH);
            raw.clamp(SPLIT_PANE_MIN_WIDTH, max)
        }
        BodyState::Normal | BodyState::Fullscreen => raw.max(0.0),
    }
}

/// The width-write for a pointer move during a drag
pub fn action_for_move(
    region: ResizeRegion,
    body: BodyState,
    viewport_width: f32,
    pointer_x: f32,
) -> LayoutAction {
    match region {
        ResizeRegion::Sidebar => {
            LayoutAction::SetSidebarWidth(sidebar_width_for_pointer(pointer_x))
        }
        ResizeRegion::RightPane => {
            let width = right_pane_width_for_pointer(body, viewport_width, pointer_x);
            if body == BodyState::SplitView {
                LayoutAction::SetSplitPaneWidth(width)
            } else {
                LayoutAction::SetSidePaneWidth(width)
            }
        }
    }
}

/// A thin vertical grab strip
#[derive(IntoElement)]
pub struct ResizeHandle {
    id: SharedString,
    region: ResizeRegion,
}

impl ResizeHandle {
    pub fn new(id: impl Into<SharedString>, region: ResizeRegion) -> Self {
        Self {
            id: id.into(),
            region,
        }
    }
}

impl RenderOnce for ResizeHandle {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let entities = cx.global::<AppEntities>().clone();
        let dark = entities.layout.read(cx).prefs().dark_mode;
        let region = self.region;

        div()
            .id(self.id)
            .w(px(RESIZE_HANDLE_WIDTH))
            .h_full()
            .flex_none()
            .cursor_col_resize()
            .hover(|s| s.bg(ShellColors::handle_hover(dark)))
            .on_mouse_down(MouseButton::Left, move |_event: &MouseDownEvent, _window, cx| {
                entities.layout.update(cx, |layout, cx| {
                    layout.dispatch(LayoutAction::BeginResize(region), cx);
                });
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_width_is_direct_offset_clamped() {
        assert_eq!(sidebar_width_for_pointer(-10.0), SIDEBAR_MIN_WIDTH);
        assert_eq!(sidebar_width_for_pointer(260.0), 260.0);
        assert_eq!(sidebar_width_for_pointer(4_000.0), SIDEBAR_MAX_WIDTH);
    }

    #[test]
    fn right_pane_width_is_viewport_minus_offset() {
        // Pointer at 1000 on a 1400 viewport leaves 400 for the pane
        let w = right_pane_width_for_pointer(BodyState::SidePane, 1400.0, 1000.0);
        assert_eq!(w, 400.0);

        // Pointer past the right edge clamps to the minimum
        let w = right_pane_width_for_pointer(BodyState::SidePane, 1400.0, 1390.0);
        assert_eq!(w, SIDE_PANE_MIN_WIDTH);

        // Split pane respects the viewport fraction ceiling
        let w = right_pane_width_for_pointer(BodyState::SplitView, 1000.0, 0.0);
        assert_eq!(w, 1000.0 * SPLIT_PANE_MAX_FRACTION);
    }

    #[test]
    fn move_action_targets_the_pane_kind_showing() {
        let action = action_for_move(ResizeRegion::Sidebar, BodyState::Normal, 1400.0, 250.0);
        assert_eq!(action, LayoutAction::SetSidebarWidth(250.0));

        let action = action_for_move(ResizeRegion::RightPane, BodyState::SidePane, 1400.0, 1000.0);
        assert_eq!(action, LayoutAction::SetSidePaneWidth(400.0));

        let action = action_for_move(ResizeRegion::RightPane, BodyState::SplitView, 1400.0, 900.0);
        assert_eq!(action, LayoutAction::SetSplitPaneWidth(500.0));
    }
}
