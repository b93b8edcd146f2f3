//! Display implementations for domain models.
//!
//! Boards list each project with its checkboxes; line numbers are shown so an
//! item can be toggled from the output.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    ActionCatalog, ActionRun, ActionStatus, Activity, ActivityFeed, BoardSummary, Issue,
    IssueLevel, IssueReport, MemoryDay, ProjectSummary, TaskItem,
};

impl fmt::Display for TaskItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- [{}] {} (line {})",
            if self.done { "x" } else { " " },
            self.text,
            self.line_no
        )
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({}/{}, {}%)",
            self.name, self.done, self.total, self.percent
        )?;
        writeln!(f)?;
        writeln!(f, "`{}`", self.path)?;
        writeln!(f)?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BoardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Task Board")?;
        writeln!(f)?;
        if self.is_empty() {
            return writeln!(f, "No task files found.");
        }
        writeln!(
            f,
            "**{}/{}** done ({}%) across {} projects",
            self.done,
            self.total,
            self.percent,
            self.projects.len()
        )?;
        for project in &self.projects {
            writeln!(f)?;
            write!(f, "{project}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** (`{}`): ", self.label, self.id)?;
        if self.cooldown_left_seconds > 0 {
            writeln!(f, "cooling down, {}s left", self.cooldown_left_seconds)
        } else {
            writeln!(f, "ready")
        }
    }
}

impl fmt::Display for ActionCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Actions")?;
        writeln!(f)?;
        if self.actions.is_empty() {
            return writeln!(f, "No actions registered.");
        }
        writeln!(f, "Cooldown: {}s", self.cooldown_seconds)?;
        writeln!(f)?;
        for action in &self.actions {
            write!(f, "{action}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ActionRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.label)?;
        writeln!(f)?;
        writeln!(f, "- Action: {}", self.action)?;
        writeln!(f, "- Exit code: {}", self.exit_code)?;
        writeln!(f, "- Ran at: {}", LocalDateTime(&self.ran_at))?;

        for (title, stream) in [("stdout", &self.stdout), ("stderr", &self.stderr)] {
            if stream.trim().is_empty() {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "## {title}")?;
            writeln!(f)?;
            writeln!(f, "```text")?;
            writeln!(f, "{}", stream.trim_end())?;
            writeln!(f, "```")?;
        }
        Ok(())
    }
}

impl fmt::Display for MemoryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(date) = &self.date else {
            writeln!(f, "# Memory")?;
            writeln!(f)?;
            return writeln!(f, "{}", self.content);
        };
        writeln!(f, "# Memory {date}")?;
        writeln!(f)?;
        writeln!(f, "{}", self.content.trim_end())?;
        if self.all_dates.len() > 1 {
            writeln!(f)?;
            writeln!(f, "Other days: {}", self.all_dates.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} {} ({})", self.kind.icon(), self.message, self.date)
    }
}

impl fmt::Display for ActivityFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Activity")?;
        writeln!(f)?;
        if self.activities.is_empty() {
            return writeln!(f, "No recent activity.");
        }
        for activity in &self.activities {
            write!(f, "{activity}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            IssueLevel::Error => "error",
            IssueLevel::Warning => "warning",
        };
        writeln!(f, "- **{level}**: {}", self.message)
    }
}

impl fmt::Display for IssueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Issues")?;
        writeln!(f)?;
        if self.nominal {
            return writeln!(f, "All systems nominal.");
        }
        for issue in &self.issues {
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}
