//! Page Views
//!
//! Placeholder bodies for the collaborating pages. The widgets themselves are
//! out of scope for the shell; what matters is that every page is addressable
//! in the main pane and, through the page/pane table, inside a side pane or
//! split. The interactive bits below go through the sanctioned router and
//! layout mutators only.

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{params, ActivePage, PaneContent};
use crate::state::layout_state::{Density, LayoutAction};
use crate::state::persisted::dispatch_layout_and_save;
use crate::state::router_state::ParamValue;
use crate::theme::ShellColors;

/// Render the body for a page in the primary pane
pub fn page_body(page: ActivePage, cx: &App) -> AnyElement {
    match page {
        ActivePage::Dashboard => placeholder("Dashboard", "Your widgets live here.", cx),
        ActivePage::Messaging => messaging_body(cx),
        ActivePage::Notifications => placeholder("Notifications", "Nothing new.", cx),
        ActivePage::DataDemo => data_body(cx),
        ActivePage::Toaster => placeholder("Toaster", "Toast playground.", cx),
        ActivePage::Settings => settings_body(cx),
    }
}

/// Render the body for content projected into a non-primary pane
pub fn pane_body(content: PaneContent, item: Option<&str>, cx: &App) -> AnyElement {
    match content {
        PaneContent::Details => placeholder("Details", "Select something to inspect.", cx),
        PaneContent::DataItem => {
            let title = SharedString::from(format!("Record {}", item.unwrap_or("?")));
            let dark = dark(cx);
            div()
                .p_4()
                .flex()
                .flex_col()
                .gap_2()
                .child(heading(title, dark))
                .child(body_text("Field-by-field record detail.", dark))
                .into_any_element()
        }
        other => match other.host_page() {
            Some(page) => page_body(page, cx),
            None => placeholder("Empty", "Nothing to show.", cx),
        },
    }
}

fn dark(cx: &App) -> bool {
    cx.global::<AppEntities>().layout.read(cx).prefs().dark_mode
}

fn heading(text: impl Into<SharedString>, dark: bool) -> impl IntoElement {
    div()
        .text_size(px(18.0))
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .text_color(ShellColors::text_primary(dark))
        .child(text.into())
}

fn body_text(text: impl Into<SharedString>, dark: bool) -> impl IntoElement {
    div()
        .text_size(px(13.0))
        .text_color(ShellColors::text_secondary(dark))
        .child(text.into())
}

fn placeholder(title: &'static str, blurb: &'static str, cx: &App) -> AnyElement {
    let dark = dark(cx);
    div()
        .p_4()
        .flex()
        .flex_col()
        .gap_2()
        .child(heading(title, dark))
        .child(body_text(blurb, dark))
        .into_any_element()
}

fn messaging_body(cx: &App) -> AnyElement {
    let entities = cx.global::<AppEntities>().clone();
    let dark = dark(cx);
    let view = entities
        .router
        .read(cx)
        .location()
        .param(params::MESSAGING_VIEW)
        .unwrap_or("inbox")
        .to_string();

    div()
        .p_4()
        .flex()
        .flex_col()
        .gap_2()
        .child(heading("Messaging", dark))
        .child(body_text(
            SharedString::from(format!("View: {view}")),
            dark,
        ))
        .child(
            div()
                .id("messaging-view-toggle")
                .px_3()
                .py_1()
                .rounded_md()
                .border_1()
                .border_color(ShellColors::border(dark))
                .text_size(px(13.0))
                .text_color(ShellColors::text_primary(dark))
                .cursor_pointer()
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    let entities = cx.global::<AppEntities>().clone();
                    entities.router.update(cx, |router, cx| {
                        let next = if router.location().param(params::MESSAGING_VIEW)
                            == Some("archive")
                        {
                            "inbox"
                        } else {
                            "archive"
                        };
                        router.patch_params(vec![(
                            params::MESSAGING_VIEW,
                            ParamValue::Str(next.to_string()),
                        )]);
                        cx.notify();
                    });
                })
                .child("Switch inbox/archive"),
        )
        .into_any_element()
}

fn data_body(cx: &App) -> AnyElement {
    let dark = dark(cx);
    let records = ["rec-1", "rec-2", "rec-3", "rec-4"];

    div()
        .p_4()
        .flex()
        .flex_col()
        .gap_2()
        .child(heading("Data", dark))
        .child(body_text("Click a record to open its detail overlay.", dark))
        .children(records.into_iter().map(|record| {
            div()
                .id(SharedString::from(format!("data-{record}")))
                .px_3()
                .py_2()
                .rounded_md()
                .border_1()
                .border_color(ShellColors::border(dark))
                .text_size(px(13.0))
                .text_color(ShellColors::text_primary(dark))
                .cursor_pointer()
                .hover(|s| s.bg(ShellColors::handle_hover(dark)))
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    let entities = cx.global::<AppEntities>().clone();
                    entities.router.update(cx, |router, cx| {
                        router.select_item(Some(record));
                        cx.notify();
                    });
                })
                .child(record)
        }))
        .into_any_element()
}

fn settings_body(cx: &App) -> AnyElement {
    let entities = cx.global::<AppEntities>().clone();
    let dark = dark(cx);
    let prefs = entities.layout.read(cx).prefs().clone();

    let toggle = |id: &'static str, label: SharedString, action_name: &'static str, action: LayoutAction| {
        div()
            .id(id)
            .px_3()
            .py_1()
            .rounded_md()
            .border_1()
            .border_color(ShellColors::border(dark))
            .text_size(px(13.0))
            .text_color(ShellColors::text_primary(dark))
            .cursor_pointer()
            .on_click(move |_event: &ClickEvent, _window, cx| {
                dispatch_layout_and_save(cx, action_name, action.clone());
            })
            .child(label)
    };

    let next_density = match prefs.density {
        Density::Compact => Density::Comfortable,
        Density::Comfortable => Density::Spacious,
        Density::Spacious => Density::Compact,
    };

    div()
        .p_4()
        .flex()
        .flex_col()
        .gap_2()
        .child(heading("Settings", dark))
        .child(toggle(
            "settings-dark-mode",
            SharedString::from(format!(
                "Dark mode: {}",
                if prefs.dark_mode { "on" } else { "off" }
            )),
            "toggle-dark-mode",
            LayoutAction::SetDarkMode(!prefs.dark_mode),
        ))
        .child(toggle(
            "settings-density",
            SharedString::from(format!("Density: {}", prefs.density.as_str())),
            "cycle-density",
            LayoutAction::SetDensity(next_density),
        ))
        .child(toggle(
            "settings-reduced-motion",
            SharedString::from(format!(
                "Reduced motion: {}",
                if prefs.reduced_motion { "on" } else { "off" }
            )),
            "toggle-reduced-motion",
            LayoutAction::SetReducedMotion(!prefs.reduced_motion),
        ))
        .child(toggle(
            "settings-capture-width",
            SharedString::new_static("Use current pane width as default"),
            "capture-default-pane-width",
            LayoutAction::CaptureDefaultSidePaneWidth,
        ))
        .child(toggle(
            "settings-reset",
            SharedString::new_static("Reset layout to defaults"),
            "reset-to-defaults",
            LayoutAction::ResetToDefaults,
        ))
        .into_any_element()
}
