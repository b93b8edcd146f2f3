//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::TaskItem;

/// A checkbox that was just written, with the file it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResult {
    pub path: String,
    pub item: TaskItem,
}

impl ToggleResult {
    pub fn new(path: impl Into<String>, item: TaskItem) -> Self {
        Self {
            path: path.into(),
            item,
        }
    }
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Marked line {} of `{}` as {}",
            self.item.line_no,
            self.path,
            if self.item.done { "done" } else { "open" }
        )?;
        writeln!(f)?;
        write!(f, "{}", self.item)
    }
}
