//! Server configuration.
//!
//! The defaults describe the classic CodeIgniter 3 monorepo layout:
//!
//! ```text
//! {workspace}/CI3/app_common/models/common/Ebei_model.php
//! {workspace}/CI3/app/models/Foo_model.php
//! ```
//!
//! Settings are taken from the first source that provides them:
//!   1. LSP `initializationOptions`
//!   2. `{workspace}/.smartci.toml`
//!   3. `{config dir}/smartci/config.toml`
//!   4. [`Settings::default`]
//!
//! Sources are not merged field by field, but every field is optional
//! inside a source, so a file containing only `hover_title = "CI"` is
//! valid and keeps the default layout.
use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use serde::Deserialize;
use tracing::{debug, warn};

/// File name looked up at the root of the first workspace folder.
pub const WORKSPACE_CONFIG_FILE: &str = ".smartci.toml";

/// Directory name used under the user's configuration directory.
pub const USER_CONFIG_DIR: &str = "smartci";

/// Directory layout of the CodeIgniter project being edited.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Sub-project directory that becomes the project root when present
    /// directly under the workspace root.
    pub subproject_dir: String,
    /// Prefix that marks a top-level directory as an application root.
    pub app_prefix: String,
    /// Application root that is always probed first.
    pub common_root: String,
    /// Application roots assumed when none can be discovered on disk.
    pub fallback_roots: Vec<String>,
    /// Directory inside each application root that holds the models.
    pub models_dir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            subproject_dir: "CI3".to_string(),
            app_prefix: "app".to_string(),
            common_root: "app_common".to_string(),
            fallback_roots: vec!["app_common".to_string(), "app".to_string()],
            models_dir: "models".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: Layout,
    /// Bold label rendered at the top of every hover.
    pub hover_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            hover_title: "Smart CI".to_string(),
        }
    }
}

impl Settings {
    /// Build the effective settings for a session.
    ///
    /// `init_options` is the raw `initializationOptions` value sent by the
    /// client.  `null` and invalid values fall through to the next source.
    pub fn load(init_options: Option<&serde_json::Value>, workspace_root: Option<&Path>) -> Self {
        if let Some(settings) = init_options.and_then(Self::from_init_options) {
            debug!("using settings from initializationOptions");
            return settings;
        }

        if let Some(root) = workspace_root
            && let Some(settings) = Self::from_toml_file(&root.join(WORKSPACE_CONFIG_FILE))
        {
            return settings;
        }

        if let Some(path) = user_config_path()
            && let Some(settings) = Self::from_toml_file(&path)
        {
            return settings;
        }

        Self::default()
    }

    /// Parse settings from the client's `initializationOptions`.
    pub fn from_init_options(value: &serde_json::Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }
        match serde_json::from_value(value.clone()) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!("ignoring invalid initializationOptions: {}", e);
                None
            }
        }
    }

    /// Parse settings from a TOML file.
    ///
    /// A missing file is silently `None`; unreadable or malformed files are
    /// logged and also yield `None`.
    pub fn from_toml_file(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("cannot read {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => {
                debug!("using settings from {}", path.display());
                Some(settings)
            }
            Err(e) => {
                warn!("ignoring malformed {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// `{config dir}/smartci/config.toml`, e.g. `~/.config/smartci/config.toml`
/// on Linux.
pub fn user_config_path() -> Option<PathBuf> {
    let strategy = etcetera::choose_base_strategy().ok()?;
    Some(strategy.config_dir().join(USER_CONFIG_DIR).join("config.toml"))
}
