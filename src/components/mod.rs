//! UI Components

pub mod layout;
