//! Extraction of `$this->load->model('...')` statements.
//!
//! Only the string-literal form is recognised:
//!
//! ```php
//! $this->load->model('common/ebei_model');
//! $this->load->model( "foo_model" );
//! ```
//!
//! Aliased loads (`model('foo_model', 'foo')`) and non-literal arguments are
//! not matched.
use std::sync::OnceLock;

use regex::Regex;

use crate::naming::capitalize_first;
use crate::types::ModelLoadReference;

fn load_statement_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"load->model\s*\(\s*['"]([^'"]+)['"]\s*\)"#)
            .expect("load statement pattern is valid")
    })
}

/// Find every model load statement in `full_text`, in source order.
///
/// Duplicates are kept; lookups take the first one.
pub fn parse_model_loads(full_text: &str) -> Vec<ModelLoadReference> {
    load_statement_regex()
        .captures_iter(full_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| model_load_reference(m.as_str()))
        .collect()
}

/// Split a logical model path into its correlation key and the path the
/// file resolver should use.
pub fn model_load_reference(raw_logical_path: &str) -> ModelLoadReference {
    let (directory, identifier) = match raw_logical_path.rsplit_once('/') {
        Some((dir, name)) => (Some(dir), name),
        None => (None, raw_logical_path),
    };

    let capitalized = capitalize_first(identifier);
    let convention_cased_path = match directory {
        Some(dir) => format!("{}/{}", dir, capitalized),
        None => capitalized,
    };

    ModelLoadReference {
        raw_logical_path: raw_logical_path.to_string(),
        convention_cased_path,
        model_identifier: identifier.to_string(),
    }
}

/// Return the first load statement whose identifier is exactly `identifier`.
pub fn find_model_load<'a>(
    loads: &'a [ModelLoadReference],
    identifier: &str,
) -> Option<&'a ModelLoadReference> {
    loads.iter().find(|load| load.model_identifier == identifier)
}
