use crate::errors::ServerError;
use serde::Serialize;
use std::str::FromStr;

/// The three mutually exclusive dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Search,
    Trends,
    Insights,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Search, ViewMode::Trends, ViewMode::Insights];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Search => "search",
            ViewMode::Trends => "trends",
            ViewMode::Insights => "insights",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Search => "Search",
            ViewMode::Trends => "Trends",
            ViewMode::Insights => "Insights",
        }
    }
}

impl FromStr for ViewMode {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or(ServerError::NotFound)
    }
}
