//! Parsed task items and per-file tallies.

use serde::{Deserialize, Serialize};

/// One checkbox line recognized in a task file.
///
/// `line_no` is the zero-based index into the file's `\n`-split lines and is
/// only valid against the exact content it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub text: String,
    pub done: bool,
    pub line_no: usize,
}

/// All items of one task file plus derived counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFile {
    pub items: Vec<TaskItem>,
    pub total: usize,
    pub done_count: usize,
    pub percent: u8,
}

impl ParsedFile {
    /// Builds the tallies from a list of items.
    pub fn from_items(items: Vec<TaskItem>) -> Self {
        let total = items.len();
        let done_count = items.iter().filter(|item| item.done).count();
        Self {
            items,
            total,
            done_count,
            percent: percent(done_count, total),
        }
    }

    /// True when the file contributed no checkbox lines.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// `round(done / total * 100)` with halves rounded up; `0` for an empty set.
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total) as u128;
    let total = total as u128;
    let rounded = (done * 200 + total) / (total * 2);
    // done <= total, so rounded <= 100
    rounded as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_bounds() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(5, 0), 0);
        assert_eq!(percent(0, 7), 0);
        assert_eq!(percent(7, 7), 100);
        assert_eq!(percent(9, 7), 100);
        for total in 1..50 {
            for done in 0..=total {
                assert!(percent(done, total) <= 100);
            }
        }
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(5, 10), 50);
    }

    #[test]
    fn test_from_items_counts() {
        let parsed = ParsedFile::from_items(vec![
            TaskItem {
                text: "a".to_string(),
                done: true,
                line_no: 0,
            },
            TaskItem {
                text: "b".to_string(),
                done: false,
                line_no: 2,
            },
        ]);
        assert_eq!(parsed.total, 2);
        assert_eq!(parsed.done_count, 1);
        assert_eq!(parsed.percent, 50);
        assert!(!parsed.is_empty());
        assert!(ParsedFile::default().is_empty());
    }
}
