//! Project and board level summaries.

use serde::{Deserialize, Serialize};

use super::{percent, ParsedFile, TaskItem};

/// One task file shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Display name of the project
    pub name: String,
    /// Absolute path of the task file
    pub path: String,
    pub total: usize,
    pub done: usize,
    pub percent: u8,
    pub items: Vec<TaskItem>,
}

impl ProjectSummary {
    /// Builds a summary from a parsed file.
    pub fn from_parsed(name: impl Into<String>, path: impl Into<String>, parsed: ParsedFile) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            total: parsed.total,
            done: parsed.done_count,
            percent: parsed.percent,
            items: parsed.items,
        }
    }
}

/// The whole board: every non-empty project plus grand totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub projects: Vec<ProjectSummary>,
    pub total: usize,
    pub done: usize,
    pub percent: u8,
}

impl BoardSummary {
    /// Sums the projects. The grand percent is recomputed from the sums.
    pub fn from_projects(projects: Vec<ProjectSummary>) -> Self {
        let total = projects.iter().map(|p| p.total).sum();
        let done = projects.iter().map(|p| p.done).sum();
        Self {
            projects,
            total,
            done,
            percent: percent(done, total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
