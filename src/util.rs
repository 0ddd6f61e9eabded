/// Helper methods for the SmartCI server.
///
/// This module contains accessors for the backend's shared state, logging
/// to the client, and the glue that runs a resolution against an open
/// document.
use std::path::PathBuf;

use tower_lsp::lsp_types::*;

use crate::Backend;
use crate::config::Settings;
use crate::document::SourceText;
use crate::resolution;
use crate::types::ResolutionResult;

impl Backend {
    pub(crate) async fn log(&self, typ: MessageType, message: String) {
        if let Some(client) = &self.client {
            client.log_message(typ, message).await;
        }
    }

    /// Current text of an open document.
    pub fn get_document_text(&self, uri: &str) -> Option<String> {
        self.open_files.lock().get(uri).cloned()
    }

    pub fn get_workspace_folders(&self) -> Vec<PathBuf> {
        self.workspace_folders.lock().clone()
    }

    pub fn get_settings(&self) -> Settings {
        self.settings.lock().clone()
    }

    /// Run a full resolution for `position` in the open document `uri`.
    ///
    /// State is snapshotted up front so no lock is held during file I/O.
    pub(crate) fn resolve_at(&self, uri: &str, position: Position) -> Option<ResolutionResult> {
        let content = self.get_document_text(uri)?;
        let folders = self.get_workspace_folders();
        let settings = self.get_settings();

        resolution::resolve(
            &SourceText::new(&content),
            position,
            folders.as_slice(),
            &settings.layout,
        )
    }
}

/// Workspace folder paths from `initialize`, falling back to the deprecated
/// `root_uri` when the client sends no folders.
#[allow(deprecated)]
pub(crate) fn initial_workspace_folders(params: &InitializeParams) -> Vec<PathBuf> {
    if let Some(folders) = &params.workspace_folders
        && !folders.is_empty()
    {
        return folders
            .iter()
            .filter_map(|folder| folder.uri.to_file_path().ok())
            .collect();
    }

    params
        .root_uri
        .as_ref()
        .and_then(|uri| uri.to_file_path().ok())
        .into_iter()
        .collect()
}
