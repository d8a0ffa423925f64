//! Workspace - Shell Composition Root
//!
//! Assembles the header, navigation rail, main pane and right pane, and wires
//! the cross-cutting behavior: mirroring the URL-derived body state into the
//! layout store, the outside-click overlay behind an open side pane, per-pane
//! hover tracking in split view, window-level resize/drag listeners, and the
//! one-shot sidebar auto-collapse on entering messaging.

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, Entity, InteractiveElement,
    IntoElement, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::motion::right_pane_target;
use crate::components::layout::resize_handle::{action_for_move, ResizeHandle};
use crate::components::layout::shell::Shell;
use crate::components::layout::sidebar::Sidebar;
use crate::features::pages;
use crate::state::layout_state::{FullscreenTarget, LayoutAction, PaneSide, ResizeRegion, SidebarMode};
use crate::state::persisted::dispatch_layout_and_save;
use crate::state::router_state::ParamValue;
use crate::state::view_state::BodyState;
use crate::theme::ShellColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    /// Last URL-derived body state, gating the store sync so a fullscreen
    /// overlay is only torn down when the derivation actually changes
    last_derived_body: BodyState,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        let initial_body = entities.router.read(cx).view().body;
        entities.layout.update(cx, |layout, cx| {
            layout.dispatch(LayoutAction::SyncBodyState(initial_body), cx);
        });

        cx.observe(&entities.router, |this: &mut Workspace, _, cx| {
            this.sync_from_router(cx);
            cx.notify();
        })
        .detach();
        cx.observe(&entities.layout, |_this, _, cx| cx.notify())
            .detach();

        let mut this = Self {
            entities,
            header,
            sidebar,
            last_derived_body: initial_body,
        };
        // A deep link may land straight on messaging
        this.apply_messaging_entry(cx);
        this
    }

    /// Re-evaluate the derived view after a location change. The router is
    /// the single authority for pane composition; the store only mirrors it.
    fn sync_from_router(&mut self, cx: &mut Context<Self>) {
        let derived_body = self.entities.router.read(cx).view().body;
        if derived_body != self.last_derived_body {
            self.last_derived_body = derived_body;
            self.entities.layout.update(cx, |layout, cx| {
                layout.dispatch(LayoutAction::SyncBodyState(derived_body), cx);
            });
        }
        self.apply_messaging_entry(cx);
    }

    /// Auto-collapse an expanded rail on entering messaging, once per
    /// transition into the page.
    fn apply_messaging_entry(&mut self, cx: &mut Context<Self>) {
        let entered = self
            .entities
            .router
            .update(cx, |router, _| router.take_messaging_entry());
        if !entered {
            return;
        }
        let expanded = self.entities.layout.read(cx).sidebar_mode() == SidebarMode::Expanded;
        if expanded {
            self.entities.layout.update(cx, |layout, cx| {
                layout.dispatch(LayoutAction::CollapseSidebar, cx);
            });
        }
    }

    fn pane_control_button(
        id: SharedString,
        glyph: &'static str,
        dark: bool,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> impl IntoElement {
        div()
            .id(id)
            .size(px(24.0))
            .rounded_md()
            .flex()
            .items_center()
            .justify_center()
            .bg(ShellColors::handle_hover(dark))
            .text_size(px(12.0))
            .text_color(ShellColors::text_primary(dark))
            .cursor_pointer()
            .hover(|s| s.opacity(0.8))
            .on_click(on_click)
            .child(glyph)
    }

    /// Floating control surface shown over the hovered pane in split view
    fn render_pane_controls(&self, side: PaneSide, dark: bool) -> AnyElement {
        let swap = self.entities.clone();
        let demote = self.entities.clone();
        let full = self.entities.clone();
        let target = match side {
            PaneSide::Main => FullscreenTarget::Main,
            PaneSide::Right => FullscreenTarget::Right,
        };
        let suffix = match side {
            PaneSide::Main => "main",
            PaneSide::Right => "right",
        };

        div()
            .absolute()
            .top_2()
            .right_2()
            .flex()
            .gap_1()
            .child(Self::pane_control_button(
                SharedString::from(format!("pane-swap-{suffix}")),
                "⇄",
                dark,
                move |_event, _window, cx| {
                    swap.router.update(cx, |router, cx| {
                        router.switch_split_panes();
                        cx.notify();
                    });
                },
            ))
            .child(Self::pane_control_button(
                SharedString::from(format!("pane-demote-{suffix}")),
                "❏",
                dark,
                move |_event, _window, cx| {
                    demote.router.update(cx, |router, cx| {
                        router.toggle_split_view(None);
                        cx.notify();
                    });
                },
            ))
            .child(Self::pane_control_button(
                SharedString::from(format!("pane-full-{suffix}")),
                "⛶",
                dark,
                move |_event, _window, cx| {
                    full.layout.update(cx, |layout, cx| {
                        layout.dispatch(LayoutAction::ToggleFullscreen(Some(target)), cx);
                    });
                },
            ))
            .into_any_element()
    }

    /// Pointer entered a pane: hover target normally, drop target mid-drag
    fn pane_pointer_action(dragging: bool, side: PaneSide) -> LayoutAction {
        if dragging {
            LayoutAction::DragOver(Some(side))
        } else {
            LayoutAction::HoverPane(Some(side))
        }
    }

    /// Resolve a completed nav-item drop onto a pane
    fn resolve_drop(entities: &AppEntities, cx: &mut gpui::App) {
        let layout = entities.layout.read(cx);
        let (Some(page), Some(side)) = (layout.dragged_page(), layout.drag_target()) else {
            return;
        };
        match side {
            PaneSide::Main => {
                entities.router.update(cx, |router, cx| {
                    router.navigate(page);
                    cx.notify();
                });
            }
            PaneSide::Right => {
                let Some(content) = page.pane_content() else {
                    return;
                };
                entities.router.update(cx, |router, cx| {
                    match router.view().body {
                        BodyState::SplitView => {
                            router.patch_params(vec![(
                                crate::app::navigation::params::RIGHT,
                                ParamValue::Str(content.as_str().to_string()),
                            )]);
                        }
                        _ => router.open_side_pane(content),
                    }
                    cx.notify();
                });
            }
        }
    }

    fn render_side_pane(&self, width: f32, dark: bool, cx: &Context<Self>) -> AnyElement {
        let view = self.entities.router.read(cx).view().clone();
        let close = self.entities.clone();
        let promote = self.entities.clone();

        div()
            .absolute()
            .top_0()
            .right_0()
            .bottom_0()
            .w(px(width))
            .bg(ShellColors::pane_bg(dark))
            .border_l_1()
            .border_color(ShellColors::border(dark))
            .flex()
            .flex_col()
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_1()
                    .p_2()
                    .child(Self::pane_control_button(
                        SharedString::new_static("side-pane-promote"),
                        "◫",
                        dark,
                        move |_event, _window, cx| {
                            promote.router.update(cx, |router, cx| {
                                router.toggle_split_view(None);
                                cx.notify();
                            });
                        },
                    ))
                    .child(Self::pane_control_button(
                        SharedString::new_static("side-pane-close"),
                        "✕",
                        dark,
                        move |_event, _window, cx| {
                            close.router.update(cx, |router, cx| {
                                router.close_side_pane();
                                cx.notify();
                            });
                        },
                    )),
            )
            .child(pages::pane_body(view.pane, view.item.as_deref(), cx))
            .into_any_element()
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = self.entities.layout.read(cx);
        let dark = layout.prefs().dark_mode;
        let body = layout.body();
        let right_width =
            right_pane_target(body, layout.side_pane_width(), layout.split_pane_width());
        let hovered_pane = layout.hovered_pane();
        let dragging = layout.dragged_page().is_some();
        let drag_target = layout.drag_target();
        let fullscreen_target = layout.fullscreen_target();
        let show_sidebar_handle = matches!(
            layout.sidebar_mode(),
            SidebarMode::Expanded | SidebarMode::Peek
        ) && body != BodyState::Fullscreen;

        let view = self.entities.router.read(cx).view().clone();
        let is_fullscreen = body == BodyState::Fullscreen;
        let is_side_pane_open = body == BodyState::SidePane;
        let is_split_view = body == BodyState::SplitView;

        let move_entities = self.entities.clone();
        let up_entities = self.entities.clone();

        let mut main_row = div().flex_1().flex().flex_row().overflow_hidden();

        if is_fullscreen {
            // One pane takes over; the rail target is already offscreen
            let content: AnyElement = match fullscreen_target {
                Some(FullscreenTarget::Right) => {
                    pages::pane_body(view.pane, view.item.as_deref(), cx)
                }
                _ => pages::page_body(view.page, cx),
            };
            main_row = main_row.child(
                div()
                    .flex_1()
                    .bg(ShellColors::content_bg(dark))
                    .overflow_hidden()
                    .child(content),
            );
        } else {
            let main_hover = self.entities.clone();
            let main_leave = self.entities.clone();
            let overlay_close = self.entities.clone();

            let mut main_pane = div()
                .id("main-pane")
                .flex_1()
                .relative()
                .overflow_hidden()
                .bg(ShellColors::content_bg(dark))
                .child(pages::page_body(view.page, cx));

            if is_split_view {
                main_pane = main_pane.on_mouse_move(move |_event: &MouseMoveEvent, _window, cx| {
                    let dragging = main_hover.layout.read(cx).dragged_page().is_some();
                    main_hover.layout.update(cx, |layout, cx| {
                        layout.dispatch(Self::pane_pointer_action(dragging, PaneSide::Main), cx);
                    });
                });
                if hovered_pane == Some(PaneSide::Main) && !dragging {
                    main_pane = main_pane.child(self.render_pane_controls(PaneSide::Main, dark));
                }
                if dragging && drag_target == Some(PaneSide::Main) {
                    main_pane = main_pane.border_2().border_color(ShellColors::drop_target());
                }
            } else {
                main_pane = main_pane.on_mouse_move(move |_event: &MouseMoveEvent, _window, cx| {
                    main_leave.layout.update(cx, |layout, cx| {
                        if layout.dragged_page().is_some() {
                            layout.dispatch(LayoutAction::DragOver(Some(PaneSide::Main)), cx);
                        }
                    });
                });
            }

            if is_side_pane_open {
                // Outside click closes; the pane stacks above the overlay
                main_pane = main_pane
                    .child(div().id("pane-overlay").absolute().inset_0().on_mouse_down(
                        MouseButton::Left,
                        move |_event: &MouseDownEvent, _window, cx| {
                            overlay_close.router.update(cx, |router, cx| {
                                router.close_side_pane();
                                cx.notify();
                            });
                        },
                    ))
                    .child(self.render_side_pane(right_width, dark, cx));
            }

            main_row = main_row.child(self.sidebar.clone());
            if show_sidebar_handle {
                main_row =
                    main_row.child(ResizeHandle::new("sidebar-handle", ResizeRegion::Sidebar));
            }
            main_row = main_row.child(main_pane);

            if is_split_view {
                let right_hover = self.entities.clone();
                let mut right_pane = div()
                    .id("right-pane")
                    .w(px(right_width))
                    .flex_none()
                    .relative()
                    .overflow_hidden()
                    .bg(ShellColors::pane_bg(dark))
                    .border_l_1()
                    .border_color(ShellColors::border(dark))
                    .on_mouse_move(move |_event: &MouseMoveEvent, _window, cx| {
                        let dragging = right_hover.layout.read(cx).dragged_page().is_some();
                        right_hover.layout.update(cx, |layout, cx| {
                            layout.dispatch(
                                Self::pane_pointer_action(dragging, PaneSide::Right),
                                cx,
                            );
                        });
                    })
                    .child(pages::pane_body(view.pane, view.item.as_deref(), cx));

                if hovered_pane == Some(PaneSide::Right) && !dragging {
                    right_pane = right_pane.child(self.render_pane_controls(PaneSide::Right, dark));
                }
                if dragging && drag_target == Some(PaneSide::Right) {
                    right_pane = right_pane.border_2().border_color(ShellColors::drop_target());
                }

                main_row = main_row
                    .child(ResizeHandle::new("right-pane-handle", ResizeRegion::RightPane))
                    .child(right_pane);
            }
        }

        Shell::new().child(
            div()
                .id("workspace-root")
                .size_full()
                .flex()
                .flex_col()
                // Gesture listeners live at the root so a drag survives the
                // pointer leaving the handle it started on
                .on_mouse_move(move |event: &MouseMoveEvent, window, cx| {
                    let Some(region) = move_entities.layout.read(cx).resizing() else {
                        return;
                    };
                    let body = move_entities.layout.read(cx).body();
                    let viewport_width = f32::from(window.viewport_size().width);
                    let action =
                        action_for_move(region, body, viewport_width, f32::from(event.position.x));
                    move_entities.layout.update(cx, |layout, cx| {
                        layout.dispatch(action, cx);
                    });
                })
                .on_mouse_up(MouseButton::Left, move |_event: &MouseUpEvent, _window, cx| {
                    Self::resolve_drop(&up_entities, cx);
                    if up_entities.layout.read(cx).resizing().is_some() {
                        // Gesture end commits the resized widths to disk
                        dispatch_layout_and_save(cx, "end-resize", LayoutAction::EndResize);
                    }
                    up_entities.layout.update(cx, |layout, cx| {
                        if layout.dragged_page().is_some() {
                            layout.dispatch(LayoutAction::EndDrag, cx);
                        }
                    });
                })
                .child(self.header.clone())
                .child(main_row),
        )
    }
}
