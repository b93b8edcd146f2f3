//! Daily memory journal: day view, activity feed and issue scan.

use serde::{Deserialize, Serialize};

/// One journal day plus the dates available to browse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDay {
    /// `YYYY-MM-DD` of the day shown, `None` when the journal is empty
    pub date: Option<String>,
    pub content: String,
    /// Every journal date, newest first
    pub all_dates: Vec<String>,
}

/// Keyword class of a journal line. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Complete,
    Error,
    Warning,
    Create,
    Update,
    Delete,
    Setup,
    Run,
    Section,
    Note,
}

impl ActivityKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Complete => "✓",
            Self::Error => "!",
            Self::Warning => "⚠",
            Self::Create => "+",
            Self::Update => "⟳",
            Self::Delete => "−",
            Self::Setup => "⚙",
            Self::Run => "▶",
            Self::Section => "◆",
            Self::Note => "•",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub date: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

/// Recent journal lines, newest day first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFeed {
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueLevel {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub message: String,
    pub level: IssueLevel,
}

/// Problems mentioned in the latest journal day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReport {
    pub issues: Vec<Issue>,
    /// True when nothing was flagged
    pub nominal: bool,
}

impl IssueReport {
    pub fn new(issues: Vec<Issue>) -> Self {
        let nominal = issues.is_empty();
        Self { issues, nominal }
    }
}

impl Default for IssueReport {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
