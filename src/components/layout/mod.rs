//! Layout Components

pub mod header;
pub mod motion;
pub mod resize_handle;
pub mod shell;
pub mod sidebar;
