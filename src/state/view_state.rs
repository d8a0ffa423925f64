//! View State Derivation
//!
//! The authoritative {body, pane content, active page, selected item} tuple is
//! a pure function of the current location. Nothing else may decide pane
//! composition; the layout store only mirrors the result. Keeping the
//! derivation pure makes it independently testable and lets the router memoize
//! it on a hash of its inputs.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::app::navigation::{params, ActivePage, PaneContent};

/// Layout mode of the main content region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BodyState {
    /// Single primary pane
    #[default]
    Normal,
    /// Secondary page presented as a dismissible overlay
    SidePane,
    /// Two co-equal panes side by side
    SplitView,
    /// One pane takes over the window; never URL-derived
    Fullscreen,
}

/// Snapshot of what the shell should be presenting
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Page addressed by the location path
    pub page: ActivePage,
    /// Body state derived from the query parameters
    pub body: BodyState,
    /// Content of the non-primary pane; meaningless outside
    /// side_pane/split_view
    pub pane: PaneContent,
    /// Selected data record, when the detail overlay is open
    pub item: Option<String>,
}

impl ViewState {
    pub fn is_side_pane_open(&self) -> bool {
        self.body == BodyState::SidePane
    }

    pub fn is_split_view(&self) -> bool {
        self.body == BodyState::SplitView
    }
}

/// Derive the view state from a location.
///
/// Precedence is strict and order-sensitive: an explicit pane-open request
/// always outranks a stale item/right combination, so two conflicting overlay
/// requests can never both win.
pub fn derive_view(path: &str, query: &BTreeMap<String, String>) -> ViewState {
    let page = ActivePage::from_path(path);
    let split_requested = query
        .get(params::VIEW)
        .is_some_and(|v| v == params::VIEW_SPLIT);

    // 1. Explicit pane-open parameter
    if let Some(content) = query.get(params::SIDE_PANE).and_then(|v| PaneContent::parse(v)) {
        return ViewState {
            page,
            body: BodyState::SidePane,
            pane: content,
            item: None,
        };
    }

    // 2. Selected item opens the generic detail overlay
    if let Some(item) = query.get(params::ITEM_ID).filter(|v| !v.is_empty()) {
        let body = if split_requested {
            BodyState::SplitView
        } else {
            BodyState::SidePane
        };
        return ViewState {
            page,
            body,
            pane: PaneContent::DataItem,
            item: Some(item.clone()),
        };
    }

    // 3. Split request with a valid right-pane content
    if split_requested {
        if let Some(content) = query.get(params::RIGHT).and_then(|v| PaneContent::parse(v)) {
            return ViewState {
                page,
                body: BodyState::SplitView,
                pane: content,
                item: None,
            };
        }
    }

    // 4. Anything else, malformed values included, degrades to normal
    ViewState {
        page,
        body: BodyState::Normal,
        pane: PaneContent::Details,
        item: None,
    }
}

/// Memoization key over the derivation inputs
pub fn view_input_hash(path: &str, query: &BTreeMap<String, String>) -> u64 {
    let mut hasher = ahash::AHasher::default();
    path.hash(&mut hasher);
    for (key, value) in query {
        key.hash(&mut hasher);
        value.hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn default_location_is_normal_details() {
        let view = derive_view("/", &BTreeMap::new());
        assert_eq!(view.page, ActivePage::Dashboard);
        assert_eq!(view.body, BodyState::Normal);
        assert_eq!(view.pane, PaneContent::Details);
        assert_eq!(view.item, None);
    }

    #[test]
    fn side_pane_param_forces_side_pane() {
        // Scenario A
        let view = derive_view("/", &query(&[("sidePane", "settings")]));
        assert_eq!(view.body, BodyState::SidePane);
        assert_eq!(view.pane, PaneContent::Settings);
    }

    #[test]
    fn side_pane_outranks_item_and_right() {
        let view = derive_view(
            "/",
            &query(&[
                ("sidePane", "toaster"),
                ("itemId", "42"),
                ("view", "split"),
                ("right", "settings"),
            ]),
        );
        assert_eq!(view.body, BodyState::SidePane);
        assert_eq!(view.pane, PaneContent::Toaster);
        assert_eq!(view.item, None);
    }

    #[test]
    fn item_opens_detail_overlay() {
        let view = derive_view("/data", &query(&[("itemId", "rec-7")]));
        assert_eq!(view.page, ActivePage::DataDemo);
        assert_eq!(view.body, BodyState::SidePane);
        assert_eq!(view.pane, PaneContent::DataItem);
        assert_eq!(view.item.as_deref(), Some("rec-7"));
    }

    #[test]
    fn item_with_split_flag_is_split_detail() {
        let view = derive_view("/data", &query(&[("itemId", "rec-7"), ("view", "split")]));
        assert_eq!(view.body, BodyState::SplitView);
        assert_eq!(view.pane, PaneContent::DataItem);
        assert_eq!(view.item.as_deref(), Some("rec-7"));
    }

    #[test]
    fn split_with_right_content() {
        // Scenario C, derivation half
        let view = derive_view("/", &query(&[("view", "split"), ("right", "toaster")]));
        assert_eq!(view.page, ActivePage::Dashboard);
        assert_eq!(view.body, BodyState::SplitView);
        assert_eq!(view.pane, PaneContent::Toaster);
    }

    #[test]
    fn invalid_pane_content_degrades_to_normal() {
        let view = derive_view("/", &query(&[("sidePane", "bogus")]));
        assert_eq!(view.body, BodyState::Normal);
        assert_eq!(view.pane, PaneContent::Details);

        let view = derive_view("/", &query(&[("view", "split"), ("right", "nope")]));
        assert_eq!(view.body, BodyState::Normal);
    }

    #[test]
    fn split_flag_without_right_is_normal() {
        let view = derive_view("/", &query(&[("view", "split")]));
        assert_eq!(view.body, BodyState::Normal);
    }

    #[test]
    fn input_hash_tracks_changes() {
        let q1 = query(&[("view", "split"), ("right", "toaster")]);
        let q2 = query(&[("view", "split"), ("right", "settings")]);
        assert_eq!(view_input_hash("/", &q1), view_input_hash("/", &q1));
        assert_ne!(view_input_hash("/", &q1), view_input_hash("/", &q2));
        assert_ne!(view_input_hash("/", &q1), view_input_hash("/data", &q1));
    }
}
