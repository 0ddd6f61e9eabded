//! SmartCI — go-to-definition and hover for CodeIgniter 3 model methods.
//!
//! In a CodeIgniter 3 controller, models are loaded by logical path and
//! then called through a property named after the model:
//!
//! ```php
//! $this->load->model('common/ebei_model');
//! $rows = $this->ebei_model->get_list($id);
//! ```
//!
//! With the cursor on `get_list`, the server finds
//! `app_common/models/common/Ebei_model.php` (or one of its casing and
//! location variants) and the line that defines `get_list`, and shows the
//! method's signature and doc comment on hover.
//!
//! The crate is organised leaf-first:
//!
//! - [`naming`]: CodeIgniter file-name casing.
//! - [`model_loads`]: `load->model('...')` statement extraction.
//! - [`roots`]: project root and application directory discovery.
//! - [`model_file`]: logical model path to file on disk.
//! - [`method`]: method definition, doc comment and declaration lookup.
//! - [`resolution`]: the end-to-end lookup for a cursor position.
//! - [`presentation`]: LSP `Location` and `Hover` construction.
//! - `server`: the `LanguageServer` implementation for [`Backend`].
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tower_lsp::Client;

pub mod config;
pub mod document;
pub mod method;
pub mod model_file;
pub mod model_loads;
pub mod naming;
pub mod presentation;
pub mod resolution;
pub mod roots;
mod server;
pub mod types;
mod util;

pub use config::{Layout, Settings};
pub use types::{MethodInfo, ModelLoadReference, ResolutionResult};

pub struct Backend {
    name: String,
    version: String,
    /// Text of every open PHP document, keyed by URI.
    open_files: Arc<Mutex<HashMap<String, String>>>,
    /// Workspace folders in the order the client reported them.  Only the
    /// first one is searched for models.
    workspace_folders: Arc<Mutex<Vec<PathBuf>>>,
    settings: Arc<Mutex<Settings>>,
    client: Option<Client>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self::with_parts(Some(client), Vec::new(), Settings::default())
    }

    pub fn new_test() -> Self {
        Self::with_parts(None, Vec::new(), Settings::default())
    }

    /// A client-less backend with a fixed workspace root, for tests.
    pub fn new_test_with_workspace(workspace_root: PathBuf, settings: Settings) -> Self {
        Self::with_parts(None, vec![workspace_root], settings)
    }

    fn with_parts(
        client: Option<Client>,
        workspace_folders: Vec<PathBuf>,
        settings: Settings,
    ) -> Self {
        Self {
            name: "SmartCI".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            open_files: Arc::new(Mutex::new(HashMap::new())),
            workspace_folders: Arc::new(Mutex::new(workspace_folders)),
            settings: Arc::new(Mutex::new(settings)),
            client,
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
