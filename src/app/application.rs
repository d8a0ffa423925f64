//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application: load the persisted shell
//! state, resolve the initial location (deep link or default route), build
//! the global entities and open the main window.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::{Theme, ThemeMode};
use tracing::warn;

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::state::persisted::PersistedShell;
use crate::state::router_state::Location;

actions!(atrium, [Quit]);

/// Run the Atrium shell
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        gpui_component::init(cx);

        let persisted = PersistedShell::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default shell state");
            PersistedShell::default()
        });

        let entities = AppEntities::init(cx, initial_location(), &persisted);
        cx.set_global(entities.clone());

        // Keep the component theme in sync with the dark-mode preference
        cx.observe(&entities.layout, |layout, cx| {
            let mode = if layout.read(cx).prefs().dark_mode {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            Theme::change(mode, None, cx);
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::new_static("Atrium")),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        })
        .expect("failed to open the main window");

        cx.activate(true);
    });
}

/// First CLI argument may be an `atrium://` deep link; malformed links are
/// ignored rather than fatal.
fn initial_location() -> Location {
    std::env::args()
        .nth(1)
        .and_then(|arg| match Location::from_deep_link(&arg) {
            Ok(location) => Some(location),
            Err(e) => {
                warn!(error = %e, link = %arg, "Ignoring malformed deep link");
                None
            }
        })
        .unwrap_or_else(|| Location::new(ActivePage::Dashboard.path()))
}
