//! Shell State
//!
//! Navigation flows one way: location -> derived view -> rendered
//! composition. Geometry and ephemera flow one way too: pointer events ->
//! layout store -> rendered composition. The two paths never write to each
//! other; the workspace mirrors the derived body state into the layout store
//! but nothing in the store can override the derivation.

pub mod layout_state;
pub mod persisted;
pub mod router_state;
pub mod view_state;

pub use layout_state::{
    Density, FullscreenTarget, LayoutAction, LayoutState, PaneSide, Preferences, ResizeRegion,
    SidebarMode,
};
pub use persisted::{dispatch_layout_and_save, PersistedShell};
pub use router_state::{patch_query, Location, ParamValue, RouterState};
pub use view_state::{derive_view, BodyState, ViewState};
