//! Conversion of resolution results into LSP responses.
//!
//! A hover looks like this:
//!
//! ````markdown
//! **Smart CI**
//!
//! ```php
//! <?php
//! public function get_user($id)
//! ```
//!
//! Fetch user by id
//! @param int $id
//! ````
use tower_lsp::lsp_types::{
    Hover, HoverContents, Location, MarkupContent, MarkupKind, Position, Range, Url,
};

use crate::types::ResolutionResult;

/// Jump target for a resolved method: a zero-width range on the method name.
pub fn definition_location(result: &ResolutionResult) -> Option<Location> {
    let uri = Url::from_file_path(&result.model_file_path).ok()?;
    let position = Position {
        line: result.method_info.line_index,
        character: result.method_info.column_index,
    };
    Some(Location {
        uri,
        range: Range {
            start: position,
            end: position,
        },
    })
}

/// Markdown shown when hovering a resolved method call.
pub fn hover_markdown(result: &ResolutionResult, title: &str) -> String {
    let info = &result.method_info;
    let mut markdown = format!("**{}**\n\n", title);

    if !info.declaration_text.is_empty() {
        markdown.push_str("```php\n<?php\n");
        markdown.push_str(&info.declaration_text);
        markdown.push_str("\n```\n\n");
    }

    if !info.comment_text.is_empty() {
        let lines: Vec<&str> = info
            .comment_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        // Two trailing spaces force a Markdown line break.
        markdown.push_str(&lines.join("  \n"));
        markdown.push('\n');
    }

    markdown
}

pub fn build_hover(result: &ResolutionResult, title: &str) -> Hover {
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: hover_markdown(result, title),
        }),
        range: None,
    }
}
