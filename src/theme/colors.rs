//! Colors - Shell Theme Palette
//!
//! Light/dark variants keyed off the layout store's dark-mode flag, plus the
//! user-picked accent color.

use gpui::{rgb, Rgba};

/// Shell color palette - all colors are accessed via associated functions
pub struct ShellColors;

impl ShellColors {
    /// Parse a `#rrggbb` accent string; falls back to the default teal
    pub fn accent(accent: &str) -> Rgba {
        parse_hex(accent).unwrap_or(rgb(0x2cb3b8))
    }

    /// Main window background
    pub fn background(dark: bool) -> Rgba {
        if dark { rgb(0x0f1115) } else { rgb(0xf5f5f5) }
    }

    /// Content pane background
    pub fn content_bg(dark: bool) -> Rgba {
        if dark { rgb(0x171a21) } else { rgb(0xffffff) }
    }

    /// Navigation rail background
    pub fn sidebar_bg(dark: bool) -> Rgba {
        if dark { rgb(0x13161c) } else { rgb(0xffffff) }
    }

    /// Header bar background
    pub fn header_bg(dark: bool) -> Rgba {
        if dark { rgb(0x1a1e26) } else { rgb(0x2cb3b8) }
    }

    /// Side pane / split right-pane background
    pub fn pane_bg(dark: bool) -> Rgba {
        if dark { rgb(0x1b1f27) } else { rgb(0xfafafa) }
    }

    pub fn text_primary(dark: bool) -> Rgba {
        if dark { rgb(0xe5e7eb) } else { rgb(0x1f2937) }
    }

    pub fn text_secondary(dark: bool) -> Rgba {
        if dark { rgb(0x9ca3af) } else { rgb(0x6b7280) }
    }

    /// Text on the header bar
    pub fn text_header() -> Rgba {
        rgb(0xffffff)
    }

    pub fn border(dark: bool) -> Rgba {
        if dark { rgb(0x2a2f3a) } else { rgb(0xe5e7eb) }
    }

    /// Resize handle hover highlight
    pub fn handle_hover(dark: bool) -> Rgba {
        if dark { rgb(0x3b4252) } else { rgb(0xd1d5db) }
    }

    /// Drop-target highlight while a nav item is mid-drag
    pub fn drop_target() -> gpui::Rgba {
        gpui::rgba(0x2cb3b833)
    }
}

fn parse_hex(accent: &str) -> Option<Rgba> {
    let hex = accent.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_parses_hex_or_falls_back() {
        assert_eq!(ShellColors::accent("#ff0000"), rgb(0xff0000));
        assert_eq!(ShellColors::accent("garbage"), rgb(0x2cb3b8));
        assert_eq!(ShellColors::accent("#ff00"), rgb(0x2cb3b8));
    }
}
