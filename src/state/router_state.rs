//! Router State
//!
//! Native analogue of the browser address bar: a current [`Location`] plus a
//! history stack with push/replace/back/forward. The router owns the only
//! sanctioned mutators for pane composition; every mutator rewrites the
//! location and the view state is re-derived (memoized) from it. Geometry and
//! ephemera never flow through here.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;
use url::Url;

use crate::app::navigation::{params, ActivePage, PaneContent};
use crate::error::Result;
use crate::state::view_state::{derive_view, view_input_hash, BodyState, ViewState};

/// A path plus query parameters, the unit of navigation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    path: String,
    query: BTreeMap<String, String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    /// Parse an `atrium://` deep link, e.g. `atrium://messaging?view=split`.
    pub fn from_deep_link(link: &str) -> Result<Self> {
        let url = Url::parse(link)?;
        let mut path = String::new();
        if let Some(host) = url.host_str() {
            path.push('/');
            path.push_str(host);
        }
        let url_path = url.path().trim_end_matches('/');
        if !url_path.is_empty() && url_path != "/" {
            path.push_str(url_path);
        }
        if path.is_empty() {
            path.push('/');
        }
        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Ok(Self { path, query })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    fn set_param(&mut self, key: &str, value: impl Into<String>) {
        self.query.insert(key.to_string(), value.into());
    }

    fn remove_param(&mut self, key: &str) {
        self.query.remove(key);
    }

    fn query_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.query
    }
}

impl fmt::Display for Location {
    /// Address-bar rendition; the BTreeMap keeps parameter order stable so
    /// equal locations always render identically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if !self.query.is_empty() {
            let encoded: String = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            write!(f, "?{encoded}")?;
        }
        Ok(())
    }
}

/// A value in a parameter patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Plain value; empty strings delete the parameter
    Str(String),
    /// List value, serialized comma-joined; empty lists delete the parameter
    List(Vec<String>),
    /// Explicit deletion
    Absent,
}

impl ParamValue {
    fn materialize(self) -> Option<String> {
        match self {
            ParamValue::Str(s) if s.is_empty() => None,
            ParamValue::Str(s) => Some(s),
            ParamValue::List(items) if items.is_empty() => None,
            ParamValue::List(items) => Some(items.join(",")),
            ParamValue::Absent => None,
        }
    }
}

/// Apply a parameter patch to a query map.
///
/// Empty values delete their key. Changing any filter/sort parameter clears
/// the pagination cursor, and changing the grouping schema clears the tab
/// selection, since both are invalidated by the change they depend on.
pub fn patch_query(query: &mut BTreeMap<String, String>, patch: Vec<(&str, ParamValue)>) {
    let mut filters_changed = false;
    let mut group_by_changed = false;

    for (key, value) in patch {
        let next = value.materialize();
        let changed = query.get(key).map(String::as_str) != next.as_deref();
        if changed {
            if params::FILTER_KEYS.contains(&key) {
                filters_changed = true;
            }
            if key == params::GROUP_BY {
                group_by_changed = true;
            }
        }
        match next {
            Some(v) => {
                query.insert(key.to_string(), v);
            }
            None => {
                query.remove(key);
            }
        }
    }

    if filters_changed {
        query.remove(params::PAGE);
    }
    if group_by_changed {
        query.remove(params::TAB);
    }
}

/// Router: history stack, memoized view derivation, and the sanctioned
/// navigation mutators.
pub struct RouterState {
    entries: Vec<Location>,
    index: usize,
    view: ViewState,
    view_hash: u64,
    entered_messaging: bool,
}

impl RouterState {
    pub fn new(initial: Location) -> Self {
        let view_hash = view_input_hash(initial.path(), initial.query());
        let view = derive_view(initial.path(), initial.query());
        // A deep link straight into messaging counts as a transition too
        let entered_messaging = view.page == ActivePage::Messaging;
        Self {
            entries: vec![initial],
            index: 0,
            view,
            view_hash,
            entered_messaging,
        }
    }

    pub fn location(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Current derived view state; recomputed only when the location changed
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Consume the one-shot "just entered messaging" flag. Fires once per
    /// transition into the page and never again while the user stays there.
    pub fn take_messaging_entry(&mut self) -> bool {
        std::mem::take(&mut self.entered_messaging)
    }

    fn sync_view(&mut self) {
        let location = &self.entries[self.index];
        let hash = view_input_hash(location.path(), location.query());
        if hash == self.view_hash {
            return;
        }
        self.view_hash = hash;
        let next = derive_view(location.path(), location.query());
        // self.view still holds the previous active page here; comparing it
        // against the next page keeps the entry flag one-shot per transition.
        if self.view.page != ActivePage::Messaging && next.page == ActivePage::Messaging {
            self.entered_messaging = true;
        }
        debug!(location = %location, page = ?next.page, body = ?next.body, "view derived");
        self.view = next;
    }

    /// Replace the current history entry
    pub fn replace(&mut self, location: Location) {
        self.entries[self.index] = location;
        self.sync_view();
    }

    /// Push a new history entry, truncating any forward entries
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
        self.sync_view();
    }

    pub fn back(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.sync_view();
        }
    }

    pub fn forward(&mut self) {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            self.sync_view();
        }
    }

    /// Navigate to a page, keeping the query. A page cannot host itself
    /// inside its own overlay, so landing on the open pane's host page
    /// re-roots the location on the default host instead.
    pub fn navigate(&mut self, page: ActivePage) {
        let mut location = self.location().clone();
        location.set_path(page.path());
        Self::guard_self_hosting(&mut location);
        self.push(location);
    }

    /// Open a side pane with the given content. If the current page is the
    /// pane's own host, redirect to the default host page carrying the pane
    /// parameter.
    pub fn open_side_pane(&mut self, content: PaneContent) {
        let mut location = self.location().clone();
        location.set_param(params::SIDE_PANE, content.as_str());
        Self::guard_self_hosting(&mut location);
        self.replace(location);
    }

    fn guard_self_hosting(location: &mut Location) {
        let hosted = location
            .param(params::SIDE_PANE)
            .and_then(PaneContent::parse)
            .and_then(|c| c.host_page());
        if hosted == Some(ActivePage::from_path(location.path())) {
            location.set_path(ActivePage::Dashboard.path());
        }
    }

    /// Close any open pane: pane, split, right and item parameters clear
    /// together as one rewrite. Safe to call in any state.
    pub fn close_side_pane(&mut self) {
        let mut location = self.location().clone();
        location.remove_param(params::SIDE_PANE);
        location.remove_param(params::VIEW);
        location.remove_param(params::RIGHT);
        location.remove_param(params::ITEM_ID);
        self.replace(location);
    }

    /// Three-way rotation between the pane modes.
    ///
    /// side_pane promotes its content into the split's right slot; split_view
    /// demotes the right slot back into a side pane; normal opens a new split
    /// with the given or page-mapped content. Deliberately not an involution:
    /// toggling twice from normal lands on side_pane.
    pub fn toggle_split_view(&mut self, content: Option<PaneContent>) {
        let mut location = self.location().clone();
        match self.view.body {
            BodyState::SidePane => {
                location.remove_param(params::SIDE_PANE);
                location.set_param(params::VIEW, params::VIEW_SPLIT);
                if self.view.item.is_none() {
                    location.set_param(params::RIGHT, self.view.pane.as_str());
                }
            }
            BodyState::SplitView => {
                location.remove_param(params::VIEW);
                location.remove_param(params::RIGHT);
                if self.view.item.is_none() {
                    location.set_param(params::SIDE_PANE, self.view.pane.as_str());
                }
            }
            BodyState::Normal | BodyState::Fullscreen => {
                let Some(content) = content.or_else(|| self.view.page.pane_content()) else {
                    // no table entry for this page, nothing to split with
                    return;
                };
                location.set_param(params::VIEW, params::VIEW_SPLIT);
                location.set_param(params::RIGHT, content.as_str());
            }
        }
        self.replace(location);
    }

    /// Swap which logical page is primary vs secondary. Requires split view
    /// and table entries on both sides; otherwise an explicit no-op.
    pub fn switch_split_panes(&mut self) {
        if self.view.body != BodyState::SplitView {
            return;
        }
        let Some(new_page) = self.view.pane.host_page() else {
            return;
        };
        let Some(new_right) = self.view.page.pane_content() else {
            return;
        };
        let mut location = self.location().clone();
        location.set_path(new_page.path());
        location.set_param(params::VIEW, params::VIEW_SPLIT);
        location.set_param(params::RIGHT, new_right.as_str());
        self.replace(location);
    }

    /// Select (or clear) the data record shown in the detail overlay
    pub fn select_item(&mut self, item_id: Option<&str>) {
        let value = match item_id {
            Some(id) => ParamValue::Str(id.to_string()),
            None => ParamValue::Absent,
        };
        self.patch_params(vec![(params::ITEM_ID, value)]);
    }

    /// Shared parameter-patch entry point for collaborating page views
    pub fn patch_params(&mut self, patch: Vec<(&str, ParamValue)>) {
        let mut location = self.location().clone();
        patch_query(location.query_mut(), patch);
        self.replace(location);
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new(Location::new(ActivePage::Dashboard.path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router_at(path: &str, pairs: &[(&str, &str)]) -> RouterState {
        let mut location = Location::new(path);
        for (k, v) in pairs {
            location.set_param(k, *v);
        }
        RouterState::new(location)
    }

    #[test]
    fn close_side_pane_is_idempotent() {
        let mut router = router_at(
            "/",
            &[
                ("sidePane", "settings"),
                ("view", "split"),
                ("right", "toaster"),
                ("itemId", "9"),
            ],
        );
        router.close_side_pane();
        let once = router.location().to_string();
        router.close_side_pane();
        assert_eq!(router.location().to_string(), once);
        assert_eq!(router.location().param("sidePane"), None);
        assert_eq!(router.location().param("view"), None);
        assert_eq!(router.location().param("right"), None);
        assert_eq!(router.location().param("itemId"), None);
        assert_eq!(router.view().body, BodyState::Normal);
    }

    #[test]
    fn split_toggle_twice_from_normal_lands_on_side_pane() {
        let mut router = router_at("/", &[]);
        router.toggle_split_view(None);
        assert_eq!(router.view().body, BodyState::SplitView);
        assert_eq!(router.view().pane, PaneContent::Main);

        router.toggle_split_view(None);
        // Not an inverse: the second toggle demotes the right slot
        assert_eq!(router.view().body, BodyState::SidePane);
        assert_eq!(router.view().pane, PaneContent::Main);
    }

    #[test]
    fn side_pane_promotes_into_split() {
        let mut router = router_at("/", &[("sidePane", "settings")]);
        router.toggle_split_view(None);
        assert_eq!(router.view().body, BodyState::SplitView);
        assert_eq!(router.view().pane, PaneContent::Settings);
        assert_eq!(router.location().param("sidePane"), None);
        assert_eq!(router.location().param("right"), Some("settings"));
    }

    #[test]
    fn detail_overlay_promotes_and_demotes_with_item() {
        let mut router = router_at("/data", &[("itemId", "rec-1")]);
        assert_eq!(router.view().body, BodyState::SidePane);
        router.toggle_split_view(None);
        assert_eq!(router.view().body, BodyState::SplitView);
        assert_eq!(router.view().pane, PaneContent::DataItem);
        router.toggle_split_view(None);
        assert_eq!(router.view().body, BodyState::SidePane);
        assert_eq!(router.view().item.as_deref(), Some("rec-1"));
    }

    #[test]
    fn open_pane_on_own_host_redirects_to_default_host() {
        // Scenario B
        let mut router = router_at("/settings", &[]);
        router.open_side_pane(PaneContent::Settings);
        assert_eq!(router.location().path(), "/");
        assert_eq!(router.location().param("sidePane"), Some("settings"));
        assert_eq!(router.view().body, BodyState::SidePane);
        assert_eq!(router.view().pane, PaneContent::Settings);
    }

    #[test]
    fn navigating_to_open_pane_host_re_roots() {
        let mut router = router_at("/", &[("sidePane", "settings")]);
        router.navigate(ActivePage::Settings);
        assert_eq!(router.location().path(), "/");
        assert_eq!(router.location().param("sidePane"), Some("settings"));
    }

    #[test]
    fn switch_split_panes_swaps_primary_and_secondary() {
        // Scenario C
        let mut router = router_at("/", &[("view", "split"), ("right", "toaster")]);
        assert_eq!(router.view().page, ActivePage::Dashboard);
        assert_eq!(router.view().pane, PaneContent::Toaster);

        router.switch_split_panes();
        assert_eq!(router.location().path(), "/toaster");
        assert_eq!(router.location().param("view"), Some("split"));
        assert_eq!(router.location().param("right"), Some("main"));
        assert_eq!(router.view().page, ActivePage::Toaster);
        assert_eq!(router.view().pane, PaneContent::Main);
    }

    #[test]
    fn switch_split_panes_outside_split_is_noop() {
        let mut router = router_at("/", &[("sidePane", "settings")]);
        let before = router.location().to_string();
        router.switch_split_panes();
        assert_eq!(router.location().to_string(), before);
    }

    #[test]
    fn switch_split_panes_without_table_entry_is_noop() {
        // data-item has no hosting page
        let mut router = router_at("/data", &[("itemId", "x"), ("view", "split")]);
        let before = router.location().to_string();
        router.switch_split_panes();
        assert_eq!(router.location().to_string(), before);
    }

    #[test]
    fn group_by_change_clears_tab() {
        // Scenario D
        let mut router = router_at("/data", &[("groupBy", "status"), ("tab", "open")]);
        router.patch_params(vec![("groupBy", ParamValue::Str("owner".into()))]);
        assert_eq!(router.location().param("groupBy"), Some("owner"));
        assert_eq!(router.location().param("tab"), None);
    }

    #[test]
    fn filter_change_clears_pagination() {
        let mut router = router_at("/data", &[("page", "3"), ("sort", "asc")]);
        router.patch_params(vec![("search", ParamValue::Str("abc".into()))]);
        assert_eq!(router.location().param("page"), None);
        assert_eq!(router.location().param("search"), Some("abc"));

        // An unchanged filter value leaves pagination alone
        let mut router = router_at("/data", &[("page", "3"), ("sort", "asc")]);
        router.patch_params(vec![("sort", ParamValue::Str("asc".into()))]);
        assert_eq!(router.location().param("page"), Some("3"));
    }

    #[test]
    fn list_values_are_comma_joined_and_empty_deletes() {
        let mut router = router_at("/data", &[]);
        router.patch_params(vec![(
            "filters",
            ParamValue::List(vec!["a".into(), "b".into()]),
        )]);
        assert_eq!(router.location().param("filters"), Some("a,b"));

        router.patch_params(vec![("filters", ParamValue::List(Vec::new()))]);
        assert_eq!(router.location().param("filters"), None);

        router.patch_params(vec![("search", ParamValue::Str(String::new()))]);
        assert_eq!(router.location().param("search"), None);
    }

    #[test]
    fn back_and_forward_rederive_the_view() {
        let mut router = router_at("/", &[]);
        router.navigate(ActivePage::DataDemo);
        router.open_side_pane(PaneContent::Settings);
        assert_eq!(router.view().body, BodyState::SidePane);

        router.back();
        assert_eq!(router.view().page, ActivePage::Dashboard);
        assert_eq!(router.view().body, BodyState::Normal);

        router.forward();
        assert_eq!(router.view().page, ActivePage::DataDemo);
        assert_eq!(router.view().body, BodyState::SidePane);
    }

    #[test]
    fn messaging_entry_fires_once_per_transition() {
        let mut router = router_at("/", &[]);
        router.navigate(ActivePage::Messaging);
        assert!(router.take_messaging_entry());
        assert!(!router.take_messaging_entry());

        // Mutations while staying on messaging do not re-fire
        router.open_side_pane(PaneContent::Settings);
        assert!(!router.take_messaging_entry());

        // Leaving and coming back fires again
        router.navigate(ActivePage::Dashboard);
        router.navigate(ActivePage::Messaging);
        assert!(router.take_messaging_entry());
    }

    #[test]
    fn deep_link_parses_host_and_query() {
        let location = Location::from_deep_link("atrium://messaging?view=split&right=main")
            .expect("deep link should parse");
        assert_eq!(location.path(), "/messaging");
        assert_eq!(location.param("view"), Some("split"));
        assert_eq!(location.param("right"), Some("main"));

        assert!(Location::from_deep_link("not a url").is_err());
    }

    #[test]
    fn display_renders_query_deterministically() {
        let mut location = Location::new("/data");
        location.set_param("view", "split");
        location.set_param("right", "toaster");
        assert_eq!(location.to_string(), "/data?right=toaster&view=split");
        assert_eq!(Location::new("/").to_string(), "/");
    }
}
