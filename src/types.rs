//! Data types used throughout the SmartCI server.
//!
//! Every value here is produced fresh for a single resolution request and
//! owns its data; nothing is cached between requests.

use std::path::PathBuf;

/// One `load->model('...')` statement found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelLoadReference {
    /// The string literal exactly as written (e.g. `"common/ebei_model"`).
    pub raw_logical_path: String,
    /// The literal with the first character of its last segment upper-cased
    /// (e.g. `"common/Ebei_model"`).  This is the path handed to the file
    /// resolver.
    pub convention_cased_path: String,
    /// The last path segment of the literal (e.g. `"ebei_model"`).  Variables
    /// such as `$this->ebei_model` are correlated against this.
    pub model_identifier: String,
}

/// Location and documentation of a method definition inside a model file.
///
/// `line_index` and `column_index` are zero-based; the column is counted in
/// UTF-16 code units so it can be handed to the editor unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodInfo {
    pub line_index: u32,
    pub column_index: u32,
    /// Documentation comment directly above the definition, delimiters
    /// stripped, one comment line per text line.  Empty when there is none.
    pub comment_text: String,
    /// The declaration header up to its opening brace, joined onto one line.
    pub declaration_text: String,
}

impl MethodInfo {
    /// Whether this is the all-empty value produced when the model file
    /// could not be read.  A real match always has a declaration.
    pub fn is_degenerate(&self) -> bool {
        *self == MethodInfo::default()
    }
}

/// A fully resolved `$foo_model->bar()` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub model_file_path: PathBuf,
    pub method_info: MethodInfo,
    pub method_name: String,
}
