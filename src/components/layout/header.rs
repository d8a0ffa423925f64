//! Header Component
//!
//! The top bar: app identity, the address-bar readout with back/forward, and
//! the view-mode switcher. Every control is a thin trigger over a router or
//! layout mutator; the header holds no state of its own.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::PaneContent;
use crate::constants::HEADER_HEIGHT;
use crate::state::layout_state::{FullscreenTarget, LayoutAction};
use crate::state::persisted::dispatch_layout_and_save;
use crate::state::view_state::BodyState;
use crate::theme::ShellColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.layout, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.router, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn command_button(
        &self,
        id: &'static str,
        label: SharedString,
        enabled: bool,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> impl IntoElement {
        let mut button = div()
            .id(id)
            .px_3()
            .py_1()
            .rounded_md()
            .bg(gpui::rgba(0xffffff22))
            .text_color(ShellColors::text_header())
            .text_size(px(13.0))
            .child(label);

        if enabled {
            button = button
                .cursor_pointer()
                .hover(|s| s.bg(gpui::rgba(0xffffff44)))
                .on_click(on_click);
        } else {
            button = button.opacity(0.4);
        }
        button
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = self.entities.layout.read(cx);
        let dark = layout.prefs().dark_mode;
        let dark_label = if dark { "Light" } else { "Dark" };
        let app_name = layout.app_name().clone();
        let logo_glyph = layout.logo_glyph().clone();
        let is_fullscreen = layout.is_fullscreen();

        let router = self.entities.router.read(cx);
        let address = SharedString::from(router.location().to_string());
        let can_back = router.can_go_back();
        let can_forward = router.can_go_forward();
        let view = router.view().clone();

        let nav = self.entities.clone();
        let nav_fwd = self.entities.clone();
        let pane = self.entities.clone();
        let split = self.entities.clone();
        let swap = self.entities.clone();
        let full = self.entities.clone();

        let split_label = match view.body {
            BodyState::SidePane => "To split",
            BodyState::SplitView => "To pane",
            _ => "Split",
        };

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(ShellColors::header_bg(dark))
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left: identity, rail toggle, address bar
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(ShellColors::header_bg(dark))
                            .font_weight(gpui::FontWeight::BOLD)
                            .child(logo_glyph),
                    )
                    .child(
                        div()
                            .text_color(ShellColors::text_header())
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(app_name),
                    )
                    .child(self.command_button(
                        "toggle-sidebar",
                        SharedString::new_static("☰"),
                        true,
                        |_event, _window, cx| {
                            dispatch_layout_and_save(cx, "toggle-sidebar", LayoutAction::ToggleSidebar);
                        },
                    ))
                    .child(self.command_button(
                        "nav-back",
                        SharedString::new_static("‹"),
                        can_back,
                        move |_event, _window, cx| {
                            nav.router.update(cx, |router, cx| {
                                router.back();
                                cx.notify();
                            });
                        },
                    ))
                    .child(self.command_button(
                        "nav-forward",
                        SharedString::new_static("›"),
                        can_forward,
                        move |_event, _window, cx| {
                            nav_fwd.router.update(cx, |router, cx| {
                                router.forward();
                                cx.notify();
                            });
                        },
                    ))
                    .child(
                        div()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(gpui::rgba(0x00000022))
                            .text_color(ShellColors::text_header())
                            .text_size(px(12.0))
                            .child(address),
                    ),
            )
            // Right: view-mode switcher
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(self.command_button(
                        "open-settings-pane",
                        SharedString::new_static("Settings"),
                        true,
                        move |_event, _window, cx| {
                            pane.router.update(cx, |router, cx| {
                                router.open_side_pane(PaneContent::Settings);
                                cx.notify();
                            });
                        },
                    ))
                    .child(self.command_button(
                        "toggle-split",
                        SharedString::from(split_label),
                        true,
                        move |_event, _window, cx| {
                            split.router.update(cx, |router, cx| {
                                router.toggle_split_view(None);
                                cx.notify();
                            });
                        },
                    ))
                    .child(self.command_button(
                        "swap-panes",
                        SharedString::new_static("Swap"),
                        view.body == BodyState::SplitView,
                        move |_event, _window, cx| {
                            swap.router.update(cx, |router, cx| {
                                router.switch_split_panes();
                                cx.notify();
                            });
                        },
                    ))
                    .child(self.command_button(
                        "toggle-fullscreen",
                        SharedString::new_static(if is_fullscreen { "Exit full" } else { "Full" }),
                        true,
                        move |_event, _window, cx| {
                            full.layout.update(cx, |layout, cx| {
                                layout.dispatch(
                                    LayoutAction::ToggleFullscreen(Some(FullscreenTarget::Main)),
                                    cx,
                                );
                            });
                        },
                    ))
                    .child(self.command_button(
                        "toggle-dark-mode",
                        SharedString::from(dark_label),
                        true,
                        move |_event, _window, cx| {
                            let dark = cx
                                .global::<AppEntities>()
                                .layout
                                .read(cx)
                                .prefs()
                                .dark_mode;
                            dispatch_layout_and_save(
                                cx,
                                "toggle-dark-mode",
                                LayoutAction::SetDarkMode(!dark),
                            );
                        },
                    )),
            )
    }
}
