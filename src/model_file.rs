//! Mapping a logical model path to a model file on disk.
//!
//! For `common/Ebei_model` and application roots `[app_common, app]` the
//! candidates are, in order:
//!
//! ```text
//! {project}/app_common/models/common/Ebei_model.php   verbatim
//! {project}/app_common/models/common/Ebei_Model.php   convention, with directory
//! {project}/app_common/models/Ebei_Model.php          convention, bare
//! {project}/app/models/common/Ebei_model.php
//! {project}/app/models/common/Ebei_Model.php
//! {project}/app/models/Ebei_Model.php
//! ```
//!
//! The first one that exists wins.  The bare variant ignores the directory
//! on purpose so models that were moved to the top of `models/` are still
//! found.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Layout;
use crate::naming::{PHP_EXTENSION, convention_file_name};
use crate::roots::{ApplicationRoots, find_application_roots};

/// Resolve `logical_path` (e.g. `"common/Ebei_model"`) to an existing model
/// file under the first workspace root.
pub fn find_model_file(
    workspace_root: &Path,
    logical_path: &str,
    layout: &Layout,
) -> Option<PathBuf> {
    let roots = find_application_roots(workspace_root, layout);
    let found = candidate_paths(&roots, logical_path, &layout.models_dir)
        .into_iter()
        .find(|candidate| candidate.exists());

    match &found {
        Some(path) => debug!("resolved model {} to {}", logical_path, path.display()),
        None => debug!("no model file for {}", logical_path),
    }
    found
}

/// Every path probed for `logical_path`, in priority order.
///
/// All variants of one application root come before any variant of the
/// next root.
pub fn candidate_paths(
    roots: &ApplicationRoots,
    logical_path: &str,
    models_dir: &str,
) -> Vec<PathBuf> {
    // A leading slash would make `join` discard the models directory.
    let logical_path = logical_path.trim_start_matches('/');
    let (directory, base_name) = match logical_path.rsplit_once('/') {
        Some((dir, name)) if !dir.is_empty() => (Some(dir), name),
        Some((_, name)) => (None, name),
        None => (None, logical_path),
    };
    let convention_name = convention_file_name(base_name);

    let mut candidates = Vec::with_capacity(roots.app_dirs.len() * 3);
    for app_dir in &roots.app_dirs {
        let models = roots.project_root.join(app_dir).join(models_dir);

        candidates.push(models.join(format!("{}{}", logical_path, PHP_EXTENSION)));

        if let Some(dir) = directory {
            candidates.push(models.join(dir).join(&convention_name));
        }

        candidates.push(models.join(&convention_name));
    }
    candidates
}
