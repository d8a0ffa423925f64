//! Navigation - Pages, Pane Contents and the Page/Pane Mapping
//!
//! Defines the pages reachable from the navigation rail, the identifiers for
//! content projected into a non-primary pane, and the single bidirectional
//! page <-> pane-content table every split/swap/close operation consults.

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Dashboard - the default host page
    #[default]
    Dashboard,
    /// Messaging inbox
    Messaging,
    /// Notifications feed
    Notifications,
    /// Data grid demo
    DataDemo,
    /// Toaster demo page
    Toaster,
    /// Application settings
    Settings,
}

impl ActivePage {
    /// Route path for the page
    pub fn path(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "/",
            ActivePage::Messaging => "/messaging",
            ActivePage::Notifications => "/notifications",
            ActivePage::DataDemo => "/data",
            ActivePage::Toaster => "/toaster",
            ActivePage::Settings => "/settings",
        }
    }

    /// Resolve a route path back to a page; unknown paths fall back to the
    /// dashboard so stale deep links still land somewhere sensible.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/messaging" | "messaging" => ActivePage::Messaging,
            "/notifications" | "notifications" => ActivePage::Notifications,
            "/data" | "data" => ActivePage::DataDemo,
            "/toaster" | "toaster" => ActivePage::Toaster,
            "/settings" | "settings" => ActivePage::Settings,
            _ => ActivePage::Dashboard,
        }
    }

    /// Get the icon glyph for the rail item
    pub fn icon(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "◧",
            ActivePage::Messaging => "✉",
            ActivePage::Notifications => "🔔",
            ActivePage::DataDemo => "▤",
            ActivePage::Toaster => "▣",
            ActivePage::Settings => "⚙",
        }
    }

    /// Human readable rail label
    pub fn title(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "Dashboard",
            ActivePage::Messaging => "Messaging",
            ActivePage::Notifications => "Notifications",
            ActivePage::DataDemo => "Data",
            ActivePage::Toaster => "Toaster",
            ActivePage::Settings => "Settings",
        }
    }

    /// All pages, in rail order
    pub fn all() -> &'static [ActivePage] {
        &[
            ActivePage::Dashboard,
            ActivePage::Messaging,
            ActivePage::Notifications,
            ActivePage::DataDemo,
            ActivePage::Toaster,
            ActivePage::Settings,
        ]
    }

    /// The pane content this page projects to when demoted into a pane,
    /// if it has a table entry at all.
    pub fn pane_content(&self) -> Option<PaneContent> {
        match self {
            ActivePage::Dashboard => Some(PaneContent::Main),
            ActivePage::Messaging => Some(PaneContent::Messaging),
            ActivePage::Notifications => Some(PaneContent::Notifications),
            ActivePage::DataDemo => Some(PaneContent::DataDemo),
            ActivePage::Toaster => Some(PaneContent::Toaster),
            ActivePage::Settings => Some(PaneContent::Settings),
        }
    }
}

/// Stable identifiers for content projected into a non-primary pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaneContent {
    /// Default detail content shown in the normal body state
    #[default]
    Details,
    /// The dashboard projected as a secondary pane
    Main,
    /// Settings panel
    Settings,
    /// Toaster demo panel
    Toaster,
    /// Notifications feed panel
    Notifications,
    /// Data grid demo panel
    DataDemo,
    /// Generic detail overlay for a selected data record
    DataItem,
    /// Messaging inbox panel
    Messaging,
}

impl PaneContent {
    /// Wire value used in query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            PaneContent::Details => "details",
            PaneContent::Main => "main",
            PaneContent::Settings => "settings",
            PaneContent::Toaster => "toaster",
            PaneContent::Notifications => "notifications",
            PaneContent::DataDemo => "data-demo",
            PaneContent::DataItem => "data-item",
            PaneContent::Messaging => "messaging",
        }
    }

    /// Parse a query-parameter value; unknown values yield None so the
    /// derivation can fall through instead of erroring.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "details" => Some(PaneContent::Details),
            "main" => Some(PaneContent::Main),
            "settings" => Some(PaneContent::Settings),
            "toaster" => Some(PaneContent::Toaster),
            "notifications" => Some(PaneContent::Notifications),
            "data-demo" => Some(PaneContent::DataDemo),
            "data-item" => Some(PaneContent::DataItem),
            "messaging" => Some(PaneContent::Messaging),
            _ => None,
        }
    }

    /// Reverse lookup into the page table. Contents without a hosting page
    /// (details, data-item) return None and make swap a no-op.
    pub fn host_page(&self) -> Option<ActivePage> {
        match self {
            PaneContent::Main => Some(ActivePage::Dashboard),
            PaneContent::Settings => Some(ActivePage::Settings),
            PaneContent::Toaster => Some(ActivePage::Toaster),
            PaneContent::Notifications => Some(ActivePage::Notifications),
            PaneContent::DataDemo => Some(ActivePage::DataDemo),
            PaneContent::Messaging => Some(ActivePage::Messaging),
            PaneContent::Details | PaneContent::DataItem => None,
        }
    }
}

/// Query parameter names shared across the shell
pub mod params {
    /// Forces the side_pane body state with the named content
    pub const SIDE_PANE: &str = "sidePane";
    /// View selector; `split` requests the split_view body state
    pub const VIEW: &str = "view";
    /// Value of [`VIEW`] requesting a split
    pub const VIEW_SPLIT: &str = "split";
    /// Content for the split's secondary pane
    pub const RIGHT: &str = "right";
    /// Selected data record, opens the generic detail overlay
    pub const ITEM_ID: &str = "itemId";
    /// Pagination cursor, owned by page views
    pub const PAGE: &str = "page";
    /// Grouping schema, owned by page views
    pub const GROUP_BY: &str = "groupBy";
    /// Tab selection within a grouping, owned by page views
    pub const TAB: &str = "tab";
    /// Free-text search, owned by page views
    pub const SEARCH: &str = "search";
    /// Active filters, owned by page views
    pub const FILTERS: &str = "filters";
    /// Sort order, owned by page views
    pub const SORT: &str = "sort";
    /// Secondary view selector owned by the messaging page
    pub const MESSAGING_VIEW: &str = "messagingView";

    /// Parameters whose change invalidates the pagination cursor
    pub const FILTER_KEYS: &[&str] = &[SEARCH, FILTERS, SORT, GROUP_BY];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_pane_table_is_bidirectional() {
        for page in ActivePage::all() {
            if let Some(content) = page.pane_content() {
                assert_eq!(content.host_page(), Some(*page));
            }
        }
    }

    #[test]
    fn contents_without_host_page() {
        assert_eq!(PaneContent::Details.host_page(), None);
        assert_eq!(PaneContent::DataItem.host_page(), None);
    }

    #[test]
    fn unknown_path_falls_back_to_dashboard() {
        assert_eq!(ActivePage::from_path("/nope"), ActivePage::Dashboard);
        assert_eq!(ActivePage::from_path(""), ActivePage::Dashboard);
        assert_eq!(ActivePage::from_path("/messaging/"), ActivePage::Messaging);
    }

    #[test]
    fn pane_content_round_trips_wire_values() {
        for content in [
            PaneContent::Details,
            PaneContent::Main,
            PaneContent::Settings,
            PaneContent::Toaster,
            PaneContent::Notifications,
            PaneContent::DataDemo,
            PaneContent::DataItem,
            PaneContent::Messaging,
        ] {
            assert_eq!(PaneContent::parse(content.as_str()), Some(content));
        }
        assert_eq!(PaneContent::parse("bogus"), None);
    }
}
