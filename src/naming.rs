//! CodeIgniter 3 file naming conventions.
//!
//! CodeIgniter 3 expects model class files to start with an upper-case
//! letter.  The projects this server targets apply that rule to every
//! underscore-delimited segment, so a model loaded as `layer_banner_model`
//! is also looked for as `Layer_Banner_Model.php`.  The plain
//! first-letter form (`Layer_banner_model.php`) is covered separately by
//! the verbatim candidate in [`crate::model_file`].

/// Extension of every PHP source file probed on disk.
pub const PHP_EXTENSION: &str = ".php";

/// Upper-case the first character of `segment`, leaving the rest untouched.
///
/// An empty segment stays empty.
pub fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the convention-cased file name for a model identifier.
///
/// Every underscore-delimited segment gets its first character
/// capitalised, segments are re-joined with `_` and [`PHP_EXTENSION`] is
/// appended.
///
/// ```
/// use smartci_lsp::naming::convention_file_name;
///
/// assert_eq!(convention_file_name("layer_banner_model"), "Layer_Banner_Model.php");
/// assert_eq!(convention_file_name("Ebei_model"), "Ebei_Model.php");
/// assert_eq!(convention_file_name(""), ".php");
/// ```
pub fn convention_file_name(identifier: &str) -> String {
    let stem: Vec<String> = identifier.split('_').map(capitalize_first).collect();
    format!("{}{}", stem.join("_"), PHP_EXTENSION)
}
