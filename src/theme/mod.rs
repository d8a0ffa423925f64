//! Theme

pub mod colors;

pub use colors::ShellColors;
