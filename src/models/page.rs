//! Page selection for the sidebar navigation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level page of the site.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Projects,
    Resume,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 3] = [Page::Home, Page::Projects, Page::Resume];

    /// Slug used in URLs (`?page=<slug>`).
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Resume => "resume",
        }
    }

    /// Label shown in the sidebar navigation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home / About Me",
            Self::Projects => "Projects",
            Self::Resume => "Resume",
        }
    }

    /// Link to the page.
    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            other => format!("/?page={}", other.slug()),
        }
    }

    /// Parse a `page` query value. Missing or unknown values select Home.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(value) || p.label().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unknown page: {}", s))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
