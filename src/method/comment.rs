/// Documentation comment extraction.
///
/// Looks at the lines directly above a method definition and returns the
/// text of the comment attached to it.  Three styles are recognised:
///
/// ```php
/// /**
///  * Block comments (also `/* ... */` and single-line `/** ... */`).
///  */
///
/// // Runs of line comments.
/// // Each line becomes one line of text.
///
/// # Shell-style comments, same as `//`.
/// ```
///
/// Blank lines between the comment and the definition are skipped.  Any
/// other code in between means the method has no comment.
use std::sync::OnceLock;

use regex::Regex;

/// The kind of comment that ends directly above a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommentStyle {
    Block,
    DoubleSlash,
    Hash,
}

impl CommentStyle {
    /// Classify a trimmed line.  A line that closes a block comment wins
    /// over one that merely starts with `//` or `#`.
    pub(crate) fn of_closing_line(trimmed: &str) -> Option<Self> {
        if trimmed.ends_with("*/") {
            Some(Self::Block)
        } else if trimmed.starts_with("//") {
            Some(Self::DoubleSlash)
        } else if trimmed.starts_with('#') {
            Some(Self::Hash)
        } else {
            None
        }
    }

    fn line_prefix(self) -> &'static str {
        match self {
            Self::Block => "/*",
            Self::DoubleSlash => "//",
            Self::Hash => "#",
        }
    }
}

/// Return the comment attached to the definition on `definition_line`, or
/// an empty string.
pub fn extract_comment(lines: &[&str], definition_line: usize) -> String {
    let above = &lines[..definition_line.min(lines.len())];

    let Some(last) = above.iter().rposition(|line| !line.trim().is_empty()) else {
        return String::new();
    };

    match CommentStyle::of_closing_line(above[last].trim()) {
        Some(CommentStyle::Block) => block_comment(&above[..=last]).join("\n"),
        Some(style) => line_comments(&above[..=last], style).join("\n"),
        None => String::new(),
    }
}

/// Collect a block comment ending on the last line of `lines`, walking up
/// to the line that opens it.  An unterminated block runs to the top of
/// the file.
fn block_comment(lines: &[&str]) -> Vec<String> {
    let start = lines
        .iter()
        .rposition(|line| line.trim().starts_with(CommentStyle::Block.line_prefix()))
        .unwrap_or(0);

    lines[start..]
        .iter()
        .map(|line| strip_block_decoration(line.trim()))
        .filter(|text| !text.is_empty())
        .collect()
}

fn strip_block_decoration(line: &str) -> String {
    static OPEN: OnceLock<Regex> = OnceLock::new();
    static CLOSE: OnceLock<Regex> = OnceLock::new();
    static STAR: OnceLock<Regex> = OnceLock::new();
    let open = OPEN.get_or_init(|| Regex::new(r"^/\*\*?").expect("valid pattern"));
    let close = CLOSE.get_or_init(|| Regex::new(r"\*/$").expect("valid pattern"));
    let star = STAR.get_or_init(|| Regex::new(r"^\s*\*").expect("valid pattern"));

    let text = open.replace(line, "");
    let text = close.replace(&text, "");
    let text = star.replace(&text, "");
    text.trim().to_string()
}

/// Collect the contiguous run of `//` or `#` comments ending on the last
/// line of `lines`, in source order.
fn line_comments(lines: &[&str], style: CommentStyle) -> Vec<String> {
    let prefix = style.line_prefix();
    let run_start = lines
        .iter()
        .rposition(|line| !line.trim().starts_with(prefix))
        .map_or(0, |i| i + 1);

    lines[run_start..]
        .iter()
        .map(|line| line.trim()[prefix.len()..].trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docblock_decoration_is_stripped() {
        assert_eq!(strip_block_decoration("/**"), "");
        assert_eq!(strip_block_decoration("* Fetch user"), "Fetch user");
        assert_eq!(strip_block_decoration("*/"), "");
        assert_eq!(strip_block_decoration("/** inline */"), "inline");
        assert_eq!(strip_block_decoration("/* plain */"), "plain");
    }

    #[test]
    fn closing_block_wins_over_line_prefix() {
        assert_eq!(
            CommentStyle::of_closing_line("// old */"),
            Some(CommentStyle::Block)
        );
        assert_eq!(
            CommentStyle::of_closing_line("// note"),
            Some(CommentStyle::DoubleSlash)
        );
        assert_eq!(CommentStyle::of_closing_line("# note"), Some(CommentStyle::Hash));
        assert_eq!(CommentStyle::of_closing_line("$x = 1;"), None);
    }
}
