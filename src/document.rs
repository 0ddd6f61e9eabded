/// Read-only access to the document a request was made in.
///
/// Resolution only needs three things from the editor's buffer: the whole
/// text, the text of one line, and whether the cursor sits on a word.  The
/// [`TextDocument`] trait captures exactly that so the resolution code can
/// be driven from a plain string in tests.
use tower_lsp::lsp_types::{Position, Range};

pub trait TextDocument {
    /// The full text of the document.
    fn text(&self) -> &str;

    /// The text of line `line` without its line terminator.
    fn line_text(&self, line: u32) -> Option<&str>;

    /// The range of the word touching `position`, if any.
    ///
    /// A cursor directly after the last character of a word counts as being
    /// on that word.
    fn word_range_at(&self, position: Position) -> Option<Range>;
}

/// A [`TextDocument`] over borrowed source text.
#[derive(Debug, Clone, Copy)]
pub struct SourceText<'a> {
    text: &'a str,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl TextDocument for SourceText<'_> {
    fn text(&self) -> &str {
        self.text
    }

    fn line_text(&self, line: u32) -> Option<&str> {
        self.text.lines().nth(line as usize)
    }

    fn word_range_at(&self, position: Position) -> Option<Range> {
        let line = self.line_text(position.line)?;
        let (start, end) = word_bounds(line, position.character)?;
        Some(Range {
            start: Position {
                line: position.line,
                character: start,
            },
            end: Position {
                line: position.line,
                character: end,
            },
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start and end (exclusive) of the word around UTF-16 column `col`, both
/// in UTF-16 code units.
fn word_bounds(line: &str, col: u32) -> Option<(u32, u32)> {
    // (utf16 offset, char) pairs so the walk can be done per char.
    let mut chars: Vec<(u32, char)> = Vec::new();
    let mut offset = 0u32;
    for c in line.chars() {
        chars.push((offset, c));
        offset += c.len_utf16() as u32;
    }
    let line_len = offset;

    let cursor = chars
        .iter()
        .position(|&(off, _)| off >= col)
        .unwrap_or(chars.len());

    // Prefer the char under the cursor, else the one to its left.
    let mut start = if cursor < chars.len() && is_word_char(chars[cursor].1) {
        cursor
    } else if cursor > 0 && is_word_char(chars[cursor - 1].1) {
        cursor - 1
    } else {
        return None;
    };

    while start > 0 && is_word_char(chars[start - 1].1) {
        start -= 1;
    }

    let mut end = start;
    while end < chars.len() && is_word_char(chars[end].1) {
        end += 1;
    }

    let end_offset = chars.get(end).map_or(line_len, |&(off, _)| off);
    Some((chars[start].0, end_offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_at(text: &str, line: u32, character: u32) -> Option<String> {
        let doc = SourceText::new(text);
        let range = doc.word_range_at(Position { line, character })?;
        let line_text = doc.line_text(line)?;
        let units: Vec<u16> = line_text.encode_utf16().collect();
        Some(String::from_utf16_lossy(
            &units[range.start.character as usize..range.end.character as usize],
        ))
    }

    #[test]
    fn word_under_cursor() {
        let text = "<?php\n$foo_model->bar_baz(1);\n";
        assert_eq!(word_at(text, 1, 14).as_deref(), Some("bar_baz"));
        assert_eq!(word_at(text, 1, 1).as_deref(), Some("foo_model"));
    }

    #[test]
    fn cursor_right_after_word_counts() {
        let text = "$foo_model->bar_baz(1);";
        assert_eq!(word_at(text, 0, 19).as_deref(), Some("bar_baz"));
    }

    #[test]
    fn no_word_on_operators_or_whitespace() {
        assert_eq!(word_at("$a -> b", 0, 3), None);
        assert_eq!(word_at("   ", 0, 1), None);
        assert_eq!(word_at("", 0, 0), None);
        assert_eq!(word_at("x", 5, 0), None);
    }

    #[test]
    fn columns_are_utf16() {
        // "😀" is two UTF-16 units.
        let text = "😀 name";
        assert_eq!(word_at(text, 0, 3).as_deref(), Some("name"));
    }
}
