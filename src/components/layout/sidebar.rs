//! Sidebar Component
//!
//! The navigation rail. Width, opacity and offset follow the motion target
//! for the current sidebar mode and body state; hovering a collapsed rail
//! peeks it open, and nav items are draggable onto the panes.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, MouseButton,
    MouseDownEvent, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::motion::rail_target;
use crate::state::layout_state::{LayoutAction, SidebarMode};
use crate::theme::ShellColors;

/// Navigation rail
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.layout, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.router, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(
        &self,
        page: ActivePage,
        active_page: ActivePage,
        collapsed: bool,
        dark: bool,
        accent: gpui::Rgba,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let entities = self.entities.clone();
        let drag_entities = self.entities.clone();

        let text_color = if is_active {
            accent
        } else {
            ShellColors::text_secondary(dark)
        };
        let border_color = if is_active {
            accent
        } else {
            gpui::rgba(0x00000000)
        };

        let mut item = div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .px_4()
            .py_2()
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .flex()
            .items_center()
            .gap_2()
            .hover(|s| s.bg(gpui::rgba(0x88888811)))
            .on_mouse_down(MouseButton::Left, move |_event: &MouseDownEvent, _window, cx| {
                drag_entities.layout.update(cx, |layout, cx| {
                    layout.dispatch(LayoutAction::BeginDrag(page), cx);
                });
            })
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.router.update(cx, |router, cx| {
                    router.navigate(page);
                    cx.notify();
                });
            })
            .child(page.icon());

        if !collapsed {
            item = item.child(page.title());
        }
        item
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = self.entities.layout.read(cx);
        let mode = layout.sidebar_mode();
        let dark = layout.prefs().dark_mode;
        let accent = ShellColors::accent(layout.prefs().accent.as_ref());
        let target = rail_target(mode, layout.sidebar_width(), layout.body());
        let active_page = self.entities.router.read(cx).view().page;
        let collapsed = mode == SidebarMode::Collapsed;

        let entities = self.entities.clone();

        div()
            .id("sidebar")
            .w(px(target.width))
            .ml(px(target.offset_x))
            .h_full()
            .flex_none()
            .opacity(target.opacity)
            .bg(ShellColors::sidebar_bg(dark))
            .border_r_1()
            .border_color(ShellColors::border(dark))
            .flex()
            .flex_col()
            .pt_4()
            .overflow_hidden()
            .on_hover(move |hovered: &bool, _window, cx| {
                // Auto-peek over a collapsed rail; leaving drops it back
                let action = if *hovered {
                    LayoutAction::PeekSidebar
                } else {
                    LayoutAction::EndPeek
                };
                entities.layout.update(cx, |layout, cx| {
                    layout.dispatch(action, cx);
                });
            })
            .children(
                ActivePage::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, active_page, collapsed, dark, accent)),
            )
    }
}
