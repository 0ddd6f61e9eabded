/// LSP server trait implementation.
///
/// This module contains the `impl LanguageServer for Backend` block,
/// which handles all LSP protocol messages (initialize, didOpen, didChange,
/// didClose, definition, hover, etc.).
use tower_lsp::LanguageServer;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tracing::{debug, info};

use crate::Backend;
use crate::config::Settings;
use crate::presentation::{build_hover, definition_location};
use crate::roots::find_application_roots;
use crate::util::initial_workspace_folders;

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let folders = initial_workspace_folders(&params);
        let settings = Settings::load(
            params.initialization_options.as_ref(),
            folders.first().map(|p| p.as_path()),
        );

        *self.workspace_folders.lock() = folders;
        *self.settings.lock() = settings;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                definition_provider: Some(OneOf::Left(true)),
                workspace: Some(WorkspaceServerCapabilities {
                    workspace_folders: Some(WorkspaceFoldersServerCapabilities {
                        supported: Some(true),
                        change_notifications: Some(OneOf::Left(true)),
                    }),
                    file_operations: None,
                }),
                ..ServerCapabilities::default()
            },
            server_info: Some(ServerInfo {
                name: self.name.clone(),
                version: Some(self.version.clone()),
            }),
            offset_encoding: None,
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        let workspace_root = self.get_workspace_folders().into_iter().next();

        let message = match workspace_root {
            Some(root) => {
                let layout = self.get_settings().layout;
                let roots = find_application_roots(&root, &layout);
                format!(
                    "SmartCI initialized! Project root {}, application folders: {}",
                    roots.project_root.display(),
                    roots.app_dirs.join(", ")
                )
            }
            None => "SmartCI initialized without a workspace folder".to_string(),
        };

        info!("{}", message);
        self.log(MessageType::INFO, message).await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        if doc.language_id != "php" {
            debug!("ignoring {} document {}", doc.language_id, doc.uri);
            return;
        }
        let uri = doc.uri.to_string();

        self.open_files.lock().insert(uri.clone(), doc.text);

        self.log(MessageType::INFO, format!("Opened file: {}", uri))
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri.to_string();

        if let Some(change) = params.content_changes.into_iter().next() {
            let mut files = self.open_files.lock();
            // Only documents accepted by did_open are tracked.
            if let Some(text) = files.get_mut(&uri) {
                *text = change.text;
            }
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri.to_string();

        self.open_files.lock().remove(&uri);

        self.log(MessageType::INFO, format!("Closed file: {}", uri))
            .await;
    }

    async fn did_change_workspace_folders(&self, params: DidChangeWorkspaceFoldersParams) {
        let mut folders = self.workspace_folders.lock();

        for removed in &params.event.removed {
            if let Ok(path) = removed.uri.to_file_path() {
                folders.retain(|f| *f != path);
            }
        }
        for added in &params.event.added {
            if let Ok(path) = added.uri.to_file_path()
                && !folders.contains(&path)
            {
                folders.push(path);
            }
        }
        debug!("workspace folders now {:?}", *folders);
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params
            .text_document_position_params
            .text_document
            .uri
            .to_string();
        let position = params.text_document_position_params.position;

        if let Some(result) = self.resolve_at(&uri, position)
            && let Some(location) = definition_location(&result)
        {
            return Ok(Some(GotoDefinitionResponse::Scalar(location)));
        }

        Ok(None)
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params
            .text_document_position_params
            .text_document
            .uri
            .to_string();
        let position = params.text_document_position_params.position;

        let Some(result) = self.resolve_at(&uri, position) else {
            return Ok(None);
        };

        let title = self.get_settings().hover_title;
        Ok(Some(build_hover(&result, &title)))
    }
}
