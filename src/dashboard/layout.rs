//! Sidebar toggle layout
//!
//! The menu button flips the sidebar between shown and hidden on every
//! click; the content pane widens to fill the freed space.

use serde::Serialize;

/// Inline style of the sidebar pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarStyle {
    pub flex: &'static str,
    pub padding: &'static str,
    pub margin_top: &'static str,
    pub transition: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<&'static str>,
}

/// Inline style of the content pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStyle {
    pub flex: &'static str,
    pub padding: &'static str,
    pub margin_top: &'static str,
}

/// Styles of both panes for a given toggle count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLayout {
    pub sidebar_visible: bool,
    pub sidebar: SidebarStyle,
    pub content: ContentStyle,
}

impl SidebarLayout {
    /// Even click counts show the sidebar, odd counts hide it
    pub fn for_clicks(n_clicks: u64) -> Self {
        let visible = n_clicks % 2 == 0;

        let sidebar = SidebarStyle {
            flex: if visible { "30%" } else { "0%" },
            padding: "20px",
            margin_top: "60px",
            transition: "margin-left 0.5s",
            display: if visible { None } else { Some("none") },
        };

        let content = ContentStyle {
            flex: if visible { "70%" } else { "100%" },
            padding: "20px",
            margin_top: "60px",
        };

        Self {
            sidebar_visible: visible,
            sidebar,
            content,
        }
    }
}
