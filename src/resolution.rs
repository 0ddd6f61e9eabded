/// Resolution of `$foo_model->bar()` references to model method definitions.
///
/// Given a document and a cursor position this module:
///   1. Checks that the cursor is on a word.
///   2. Extracts the first `<name>_model->method` / `<name>_vo->method`
///      pair on the cursor's line.
///   3. Finds the `load->model('.../<name>_model')` statement for that
///      variable anywhere in the document.
///   4. Locates the model file on disk under the first workspace folder.
///   5. Finds the method definition inside that file.
///
/// Every step can come up empty; the result is then `None` and nothing is
/// reported to the user.
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tower_lsp::lsp_types::Position;
use tracing::debug;

use crate::config::Layout;
use crate::document::TextDocument;
use crate::method::find_method_in_file;
use crate::model_file::find_model_file;
use crate::model_loads::{find_model_load, parse_model_loads};
use crate::types::ResolutionResult;

/// A `variable->method` pair found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMethodCall<'a> {
    /// Variable or property name, e.g. `foo_model` in `$this->foo_model->get()`.
    pub variable: &'a str,
    pub method: &'a str,
}

fn model_call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z0-9_]+_(?:model|vo))->([A-Za-z0-9_]+)")
            .expect("model call pattern is valid")
    })
}

/// The first model method call on `line`, if any.
///
/// Only names ending in `_model` or `_vo` are considered model variables.
pub fn extract_model_call(line: &str) -> Option<ModelMethodCall<'_>> {
    let caps = model_call_regex().captures(line)?;
    Some(ModelMethodCall {
        variable: caps.get(1)?.as_str(),
        method: caps.get(2)?.as_str(),
    })
}

/// Resolve the model method referenced on the cursor's line.
///
/// Only the first entry of `workspace_folders` is searched.  The whole
/// chain is re-run on every call; nothing is cached.
pub fn resolve(
    document: &impl TextDocument,
    position: Position,
    workspace_folders: &[impl AsRef<Path>],
    layout: &Layout,
) -> Option<ResolutionResult> {
    document.word_range_at(position)?;

    let line = document.line_text(position.line)?;
    let call = extract_model_call(line)?;
    let workspace_root = workspace_folders.first()?.as_ref();

    let loads = parse_model_loads(document.text());
    let load = find_model_load(&loads, call.variable)?;
    debug!(
        "{}->{} loaded from '{}'",
        call.variable, call.method, load.raw_logical_path
    );

    let model_file_path = find_model_file(workspace_root, &load.convention_cased_path, layout)?;
    let method_info = find_method_in_file(&model_file_path, call.method)?;
    if method_info.is_degenerate() {
        return None;
    }

    Some(ResolutionResult {
        model_file_path,
        method_info,
        method_name: call.method.to_string(),
    })
}
