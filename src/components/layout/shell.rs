//! Shell Component
//!
//! The outermost wrapper applying the themed window background.

use gpui::{div, prelude::*, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::app::entities::AppEntities;
use crate::theme::ShellColors;

/// Application shell wrapper
#[derive(IntoElement)]
pub struct Shell {
    children: Vec<gpui::AnyElement>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let dark = cx.global::<AppEntities>().layout.read(cx).prefs().dark_mode;

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(ShellColors::background(dark))
            .children(self.children)
    }
}
