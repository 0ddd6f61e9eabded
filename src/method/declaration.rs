//! Declaration header extraction.
//!
//! Method signatures are often wrapped across lines:
//!
//! ```php
//! public function search(
//!     array $filters,
//!     int $limit = 20
//! )
//! {
//! ```
//!
//! The header is reassembled onto a single line (`public function
//! search( array $filters, int $limit = 20 ) {`), ending on the first line
//! that closes a parenthesis and either opens the body on the same line or
//! is followed by a line starting with `{`.

/// Lines scanned past the definition line before giving up.
pub const MAX_DECLARATION_LINES: usize = 10;

/// Join the trimmed lines of the declaration starting at `start_line`,
/// separated by single spaces.
///
/// When the body opens on the line after the closing parenthesis, that
/// line is included so the header always ends with its `{`.  At most
/// `MAX_DECLARATION_LINES + 1` lines are consumed otherwise; a header with
/// no recognisable end is returned as far as it was read.
pub fn extract_declaration(lines: &[&str], start_line: usize) -> String {
    let Some(window) = lines.get(start_line..) else {
        return String::new();
    };

    let mut parts: Vec<&str> = Vec::new();
    for (offset, line) in window.iter().take(MAX_DECLARATION_LINES + 1).enumerate() {
        let trimmed = line.trim();
        parts.push(trimmed);

        if !trimmed.contains(')') {
            continue;
        }
        if trimmed.contains('{') {
            break;
        }
        if let Some(next) = window.get(offset + 1).map(|next| next.trim())
            && next.starts_with('{')
        {
            parts.push(next);
            break;
        }
    }
    parts.join(" ")
}
