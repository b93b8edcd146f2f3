//! Checkbox line recognition for the two task-file dialects.
//!
//! ```text
//! - [ ] bracket dialect, open        - ⬜ glyph dialect, open
//! * [x] bracket dialect, done        * ✅ glyph dialect, done
//! ```
//!
//! Dialects are tried in [`Dialect::ALL`] order; the first one that matches
//! wins. Both require a list marker (`-` or `*`), whitespace around the box,
//! and non-empty text after it.

use std::{fs, io, path::Path, sync::OnceLock};

use regex::{Captures, Regex};

use crate::models::{ParsedFile, TaskItem};

/// Glyphs that mark an item as done. Emoji-presentation forms (trailing
/// U+FE0F) come before their base glyph.
pub const AFFIRMATIVE_GLYPHS: &[&str] = &[
    "✅\u{fe0f}",
    "✅",
    "✔\u{fe0f}",
    "✔",
    "☑\u{fe0f}",
    "☑",
    "🟢",
    "🟩",
];

/// Glyphs that mark an item as open.
pub const NEGATIVE_GLYPHS: &[&str] = &[
    "⬜\u{fe0f}",
    "⬜",
    "☐",
    "❌\u{fe0f}",
    "❌",
    "✗",
    "✘",
    "⭕\u{fe0f}",
    "⭕",
    "○",
    "◯",
    "🔲",
    "🔳",
    "🔴",
    "🟥",
];

/// Glyph written when a glyph-dialect item is toggled done.
pub const DONE_GLYPH: &str = "✅";

/// Glyph written when a glyph-dialect item is toggled open.
pub const OPEN_GLYPH: &str = "⬜";

/// A checkbox convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `- [ ] text` / `- [x] text`
    Bracket,
    /// `- ⬜ text` / `- ✅ text`
    Glyph,
}

/// Result of matching one line against a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'a> {
    NoMatch,
    Match {
        dialect: Dialect,
        done: bool,
        text: &'a str,
    },
}

impl Dialect {
    /// Matching order.
    pub const ALL: [Dialect; 2] = [Dialect::Bracket, Dialect::Glyph];

    // Groups: 1 = prefix up to the marker, 2 = marker, 3 = remainder.
    fn regex(self) -> &'static Regex {
        static BRACKET: OnceLock<Regex> = OnceLock::new();
        static GLYPH: OnceLock<Regex> = OnceLock::new();
        match self {
            Dialect::Bracket => BRACKET.get_or_init(|| {
                Regex::new(r"^(\s*[-*]\s+\[)([ xX])(\]\s+\S.*)$").expect("bracket regex")
            }),
            Dialect::Glyph => GLYPH.get_or_init(|| {
                let glyphs = AFFIRMATIVE_GLYPHS
                    .iter()
                    .chain(NEGATIVE_GLYPHS)
                    .map(|g| regex::escape(g))
                    .collect::<Vec<_>>()
                    .join("|");
                Regex::new(&format!(r"^(\s*[-*]\s+)({glyphs})(\s+\S.*)$")).expect("glyph regex")
            }),
        }
    }

    fn is_done(self, marker: &str) -> bool {
        match self {
            Dialect::Bracket => marker.eq_ignore_ascii_case("x"),
            Dialect::Glyph => AFFIRMATIVE_GLYPHS.contains(&marker),
        }
    }

    fn marker(self, done: bool) -> &'static str {
        match (self, done) {
            (Dialect::Bracket, true) => "x",
            (Dialect::Bracket, false) => " ",
            (Dialect::Glyph, true) => DONE_GLYPH,
            (Dialect::Glyph, false) => OPEN_GLYPH,
        }
    }

    /// Matches a single line (without its `\n`).
    pub fn match_line(self, line: &str) -> LineMatch<'_> {
        let Some(caps) = self.regex().captures(line) else {
            return LineMatch::NoMatch;
        };
        let (Some(marker), Some(rest)) = (caps.get(2), caps.get(3)) else {
            return LineMatch::NoMatch;
        };
        let text = match self {
            // skip the closing bracket
            Dialect::Bracket => &rest.as_str()[1..],
            Dialect::Glyph => rest.as_str(),
        };
        LineMatch::Match {
            dialect: self,
            done: self.is_done(marker.as_str()),
            text: text.trim(),
        }
    }

    /// Rewrites the marker of a matching line, keeping everything else
    /// verbatim. Returns `None` if the line is not in this dialect.
    pub fn rewrite(self, line: &str, done: bool) -> Option<String> {
        let caps: Captures<'_> = self.regex().captures(line)?;
        Some(format!(
            "{}{}{}",
            caps.get(1)?.as_str(),
            self.marker(done),
            caps.get(3)?.as_str()
        ))
    }
}

/// Tries every dialect in order.
pub fn match_line(line: &str) -> LineMatch<'_> {
    Dialect::ALL
        .iter()
        .map(|dialect| dialect.match_line(line))
        .find(|m| matches!(m, LineMatch::Match { .. }))
        .unwrap_or(LineMatch::NoMatch)
}

/// Parses task file content. Never fails; unrecognized lines are skipped.
pub fn parse_content(content: &str) -> ParsedFile {
    let items = content
        .split('\n')
        .enumerate()
        .filter_map(|(line_no, line)| match match_line(line) {
            LineMatch::Match { done, text, .. } => Some(TaskItem {
                text: text.to_string(),
                done,
                line_no,
            }),
            LineMatch::NoMatch => None,
        })
        .collect();
    ParsedFile::from_items(items)
}

/// Reads and parses a task file.
///
/// # Errors
///
/// Returns the underlying I/O error, including `InvalidData` for content
/// that is not UTF-8. Callers building the board degrade this to an empty
/// [`ParsedFile`].
pub fn parse_file(path: &Path) -> io::Result<ParsedFile> {
    let content = fs::read_to_string(path)?;
    Ok(parse_content(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(line: &str) -> Option<(Dialect, bool, &str)> {
        match match_line(line) {
            LineMatch::Match {
                dialect,
                done,
                text,
            } => Some((dialect, done, text)),
            LineMatch::NoMatch => None,
        }
    }

    #[test]
    fn test_bracket_dialect() {
        assert_eq!(
            matched("- [ ] write spec"),
            Some((Dialect::Bracket, false, "write spec"))
        );
        assert_eq!(matched("* [x] ship"), Some((Dialect::Bracket, true, "ship")));
        assert_eq!(
            matched("    - [X] nested"),
            Some((Dialect::Bracket, true, "nested"))
        );
    }

    #[test]
    fn test_glyph_dialect() {
        assert_eq!(matched("- ⬜ ship it"), Some((Dialect::Glyph, false, "ship it")));
        assert_eq!(matched("- ✅ shipped"), Some((Dialect::Glyph, true, "shipped")));
        assert_eq!(matched("* ✔️ variant"), Some((Dialect::Glyph, true, "variant")));
        assert_eq!(matched("- ❌ dropped"), Some((Dialect::Glyph, false, "dropped")));
        assert_eq!(matched("- 🟩 green"), Some((Dialect::Glyph, true, "green")));
    }

    #[test]
    fn test_emoji_presentation_forms() {
        assert_eq!(matched("- ⬜\u{fe0f} open"), Some((Dialect::Glyph, false, "open")));
        assert_eq!(matched("- ❌\u{fe0f} dropped"), Some((Dialect::Glyph, false, "dropped")));
        assert_eq!(matched("- ⭕\u{fe0f} pending"), Some((Dialect::Glyph, false, "pending")));
        assert_eq!(matched("- ✅\u{fe0f} shipped"), Some((Dialect::Glyph, true, "shipped")));
        assert_eq!(
            Dialect::Glyph.rewrite("- ⬜\u{fe0f} open", true).as_deref(),
            Some("- ✅ open")
        );
    }

    #[test]
    fn test_non_task_lines() {
        for line in [
            "",
            "   ",
            "# Heading",
            "plain text",
            "- plain bullet",
            "-[ ] no space after marker",
            "- [ ]no space after box",
            "- [ ]   ",
            "- [y] unknown box",
            "1. [ ] numbered",
            "- ⬜",
            "- 🚀 rocket is not a box",
        ] {
            assert_eq!(match_line(line), LineMatch::NoMatch, "{line:?}");
        }
    }

    #[test]
    fn test_trailing_carriage_return_is_trimmed() {
        assert_eq!(
            matched("- [ ] windows line\r"),
            Some((Dialect::Bracket, false, "windows line"))
        );
    }

    #[test]
    fn test_parse_content_line_numbers() {
        let content = "# Tasks\n\n- [ ] one\nnote\n- [x] two\n- ✅ three\n";
        let parsed = parse_content(content);
        let lines: Vec<usize> = parsed.items.iter().map(|i| i.line_no).collect();
        assert_eq!(lines, vec![2, 4, 5]);
        assert_eq!(parsed.total, 3);
        assert_eq!(parsed.done_count, 2);
        assert_eq!(parsed.percent, 67);
    }

    #[test]
    fn test_parse_empty_content() {
        let parsed = parse_content("");
        assert_eq!(parsed.total, 0);
        assert_eq!(parsed.percent, 0);
    }

    #[test]
    fn test_rewrite_bracket_preserves_text() {
        assert_eq!(
            Dialect::Bracket.rewrite("  - [ ] keep  spacing  ", true).as_deref(),
            Some("  - [x] keep  spacing  ")
        );
        assert_eq!(
            Dialect::Bracket.rewrite("- [X] upper", false).as_deref(),
            Some("- [ ] upper")
        );
    }

    #[test]
    fn test_rewrite_glyph_canonicalizes() {
        assert_eq!(
            Dialect::Glyph.rewrite("- ⬜ ship it", true).as_deref(),
            Some("- ✅ ship it")
        );
        assert_eq!(
            Dialect::Glyph.rewrite("- ✔️ ship it", false).as_deref(),
            Some("- ⬜ ship it")
        );
        assert_eq!(
            Dialect::Glyph.rewrite("- ❌ dropped", true).as_deref(),
            Some("- ✅ dropped")
        );
        assert_eq!(Dialect::Glyph.rewrite("- [ ] wrong dialect", true), None);
    }
}
