//! Locating a method definition inside a model file.
//!
//! The file is scanned line by line with a regular expression rather than
//! parsed, so methods are found even in files that do not parse cleanly.
//! The first line containing `function <name>(` (case-insensitive) wins.
//!
//! - [`comment`]: documentation comment directly above the definition.
//! - [`declaration`]: the (possibly wrapped) declaration header.
pub mod comment;
pub mod declaration;

use std::path::Path;

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::types::MethodInfo;

pub use comment::extract_comment;
pub use declaration::{MAX_DECLARATION_LINES, extract_declaration};

/// Find `method_name` in the file at `file_path`.
///
/// Returns `None` when the file has no matching definition.  Bytes that are
/// not valid UTF-8 are replaced rather than rejected.  When the file cannot
/// be read the fault is logged and an all-empty [`MethodInfo`] is returned;
/// see [`MethodInfo::is_degenerate`].
pub fn find_method_in_file(file_path: &Path, method_name: &str) -> Option<MethodInfo> {
    match std::fs::read(file_path) {
        Ok(bytes) => find_method_in_source(&String::from_utf8_lossy(&bytes), method_name),
        Err(e) => {
            warn!("error reading model file {}: {}", file_path.display(), e);
            Some(MethodInfo::default())
        }
    }
}

/// Find `method_name` in already loaded source text.
pub fn find_method_in_source(content: &str, method_name: &str) -> Option<MethodInfo> {
    let pattern = definition_regex(method_name)?;
    let lines: Vec<&str> = content.lines().collect();

    let line_index = lines.iter().position(|line| pattern.is_match(line))?;
    let line = lines[line_index];

    Some(MethodInfo {
        line_index: line_index as u32,
        column_index: utf16_column(line, method_name),
        comment_text: extract_comment(&lines, line_index),
        declaration_text: extract_declaration(&lines, line_index),
    })
}

fn definition_regex(method_name: &str) -> Option<Regex> {
    let source = format!(r"function\s+{}\s*\(", regex::escape(method_name));
    match RegexBuilder::new(&source).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("cannot build definition pattern for {}: {}", method_name, e);
            None
        }
    }
}

/// Column of the first verbatim occurrence of `needle` in `line`, in UTF-16
/// code units.  Falls back to 0 when the match differs only in case.
fn utf16_column(line: &str, needle: &str) -> u32 {
    line.find(needle)
        .map_or(0, |byte_idx| line[..byte_idx].encode_utf16().count() as u32)
}
