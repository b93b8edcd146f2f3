//! Daily memory journal kept as `<workspace>/memory/YYYY-MM-DD.md`.
//!
//! Read-only views over the journal: one day's content, a keyword-classified
//! activity feed over the most recent days, and an issue scan of the latest
//! day.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use log::debug;
use regex::Regex;

use crate::{
    error::{DashboardError, Result},
    models::{Activity, ActivityFeed, ActivityKind, Issue, IssueLevel, IssueReport, MemoryDay},
};

/// Journal directory name under the workspace root.
pub const MEMORY_DIR: &str = "memory";

/// Number of most recent days the activity feed reads.
pub const ACTIVITY_DAYS: usize = 7;

/// Content reported for an empty journal.
pub const NO_MEMORY: &str = "No memory files";

const ACTIVITY_MESSAGE_CHARS: usize = 100;
const ISSUE_MESSAGE_CHARS: usize = 120;
const MIN_ACTIVITY_CHARS: usize = 10;
const SKIPPED_PREFIXES: &[&str] = &["# MEMORY", "---", "Last updated"];

/// First matching class wins; lines matching none are sections or notes.
const ACTIVITY_KEYWORDS: &[(ActivityKind, &[&str])] = &[
    (ActivityKind::Complete, &["complete", "done", "finish", "success"]),
    (ActivityKind::Error, &["error", "fail", "crash", "broken"]),
    (ActivityKind::Warning, &["warning", "alert", "timeout", "429"]),
    (ActivityKind::Create, &["create", "add", "new", "build"]),
    (ActivityKind::Update, &["update", "change", "modify", "edit"]),
    (ActivityKind::Delete, &["delete", "remove", "clean", "prune"]),
    (ActivityKind::Setup, &["install", "setup", "configure"]),
    (ActivityKind::Run, &["run", "execute", "start", "launch"]),
];

const ISSUE_KEYWORDS: &[&str] = &[
    "error",
    "fail",
    "warning",
    "missing",
    "blocked",
    "rate limit",
    "timeout",
    "429",
];

const ERROR_KEYWORDS: &[&str] = &["error", "fail", "429", "blocked"];

fn day_file_regex() -> &'static Regex {
    static DAY_FILE: OnceLock<Regex> = OnceLock::new();
    DAY_FILE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\.md$").expect("day file regex"))
}

fn day_path(dir: &Path, date: &str) -> PathBuf {
    dir.join(format!("{date}.md"))
}

fn truncate_chars(line: &str, max: usize) -> String {
    line.chars().take(max).collect()
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

/// Journal dates, newest first. A missing directory is an empty journal.
///
/// # Errors
///
/// Returns `DashboardError::FileSystem` if the directory exists but cannot
/// be listed.
pub fn list_dates(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(DashboardError::file_system(dir, e)),
    };
    let mut dates: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| day_file_regex().is_match(name))
        .filter_map(|name| name.strip_suffix(".md").map(str::to_string))
        .collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    Ok(dates)
}

/// One day of the journal. Falls back to the newest day when `date` is
/// absent or unknown.
///
/// # Errors
///
/// Returns `DashboardError::FileSystem` if the journal cannot be listed or
/// the chosen day cannot be read.
pub fn read_day(dir: &Path, date: Option<&str>) -> Result<MemoryDay> {
    let all_dates = list_dates(dir)?;
    let chosen = date
        .filter(|d| all_dates.iter().any(|known| known == d))
        .or_else(|| all_dates.first().map(String::as_str))
        .map(str::to_string);

    let Some(date) = chosen else {
        return Ok(MemoryDay {
            date: None,
            content: NO_MEMORY.to_string(),
            all_dates,
        });
    };
    let path = day_path(dir, &date);
    let content = fs::read_to_string(&path).map_err(|e| DashboardError::file_system(&path, e))?;
    Ok(MemoryDay {
        date: Some(date),
        content,
        all_dates,
    })
}

/// Keyword class of one trimmed journal line.
pub fn classify(line: &str) -> ActivityKind {
    let lower = line.to_lowercase();
    ACTIVITY_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map_or_else(
            || {
                if line.starts_with('#') {
                    ActivityKind::Section
                } else {
                    ActivityKind::Note
                }
            },
            |(kind, _)| *kind,
        )
}

fn is_activity_line(line: &str) -> bool {
    line.chars().count() >= MIN_ACTIVITY_CHARS
        && !SKIPPED_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Up to `limit` classified lines from the last [`ACTIVITY_DAYS`] days,
/// newest day first and in file order within a day. Unreadable days are
/// skipped.
///
/// # Errors
///
/// Returns `DashboardError::FileSystem` if the journal cannot be listed.
pub fn activities(dir: &Path, limit: usize) -> Result<ActivityFeed> {
    let mut activities = Vec::new();
    for date in list_dates(dir)?.into_iter().take(ACTIVITY_DAYS) {
        if activities.len() >= limit {
            break;
        }
        let path = day_path(dir, &date);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Skipping unreadable journal {}: {e}", path.display());
                continue;
            }
        };
        activities.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| is_activity_line(line))
                .take(limit - activities.len())
                .map(|line| Activity {
                    date: date.clone(),
                    message: truncate_chars(line, ACTIVITY_MESSAGE_CHARS),
                    kind: classify(line),
                }),
        );
    }
    Ok(ActivityFeed { activities })
}

/// Level of a line that mentions a problem, `None` for a clean line.
pub fn issue_level(line: &str) -> Option<IssueLevel> {
    let lower = line.to_lowercase();
    if !contains_any(&lower, ISSUE_KEYWORDS) {
        return None;
    }
    if contains_any(&lower, ERROR_KEYWORDS) {
        Some(IssueLevel::Error)
    } else {
        Some(IssueLevel::Warning)
    }
}

/// Lines of the newest journal day that mention errors or warnings.
///
/// # Errors
///
/// Returns `DashboardError::FileSystem` if the journal cannot be listed or
/// the newest day cannot be read.
pub fn scan_issues(dir: &Path) -> Result<IssueReport> {
    let Some(latest) = list_dates(dir)?.into_iter().next() else {
        return Ok(IssueReport::new(Vec::new()));
    };
    let path = day_path(dir, &latest);
    let content = fs::read_to_string(&path).map_err(|e| DashboardError::file_system(&path, e))?;
    let issues = content
        .lines()
        .filter_map(|line| {
            issue_level(line).map(|level| Issue {
                message: truncate_chars(line.trim(), ISSUE_MESSAGE_CHARS),
                level,
            })
        })
        .collect();
    Ok(IssueReport::new(issues))
}
