//! AppEntities - Global Entity Handles
//!
//! The explicit application-context object: every consuming component holds a
//! clone of these handles and subscribes through `cx.observe` instead of
//! implicit reactive re-rendering.

use gpui::{App, AppContext, Entity, Global};

use crate::state::layout_state::LayoutState;
use crate::state::persisted::PersistedShell;
use crate::state::router_state::{Location, RouterState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Sidebar mode, pane geometry, preferences and ephemera
    pub layout: Entity<LayoutState>,
    /// Location history and the derived view state
    pub router: Entity<RouterState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize the entities from the persisted snapshot and the initial
    /// location (a deep link, or the default route).
    pub fn init(cx: &mut App, initial: Location, persisted: &PersistedShell) -> Self {
        let layout = cx.new(|_| {
            let mut layout = LayoutState::default();
            persisted.apply_to(&mut layout);
            layout
        });
        let router = cx.new(|_| RouterState::new(initial));
        Self { layout, router }
    }
}
