//! Atrium Shell
//!
//! A native desktop workspace shell: a resizable, collapsible navigation
//! rail plus a main content area that can present a second page as an
//! overlay pane, a side-by-side split, or fullscreen. Pane composition is
//! derived from the location; geometry and ephemera live in the layout
//! store; the two paths never write to each other.

pub mod app;
pub mod components;
pub mod constants;
pub mod error;
pub mod features;
pub mod helpers;
pub mod state;
pub mod theme;
