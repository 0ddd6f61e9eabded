#![allow(dead_code)]

use smartci_lsp::{Backend, Settings};
use std::fs;
use std::path::{Path, PathBuf};
use tower_lsp::LanguageServer;
use tower_lsp::lsp_types::*;

pub fn create_test_backend() -> Backend {
    Backend::new_test()
}

/// A temporary CodeIgniter workspace on disk.
pub struct TestWorkspace {
    dir: tempfile::TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        TestWorkspace { dir }
    }

    /// Create a workspace and populate it with `(relative path, content)`
    /// files.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let ws = Self::new();
        for (rel_path, content) in files {
            ws.create_php_file(rel_path, content);
        }
        ws
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn create_php_file(&self, relative_path: &str, content: &str) {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("failed to create dirs");
        }
        fs::write(&full_path, content).expect("failed to write PHP file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path)).expect("failed to create dir");
    }

    /// A client-less backend rooted at this workspace.
    pub fn backend(&self) -> Backend {
        Backend::new_test_with_workspace(self.root().to_path_buf(), Settings::default())
    }
}

pub async fn open_php(backend: &Backend, uri: &Url, text: &str) {
    backend
        .did_open(DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri.clone(),
                language_id: "php".to_string(),
                version: 1,
                text: text.to_string(),
            },
        })
        .await;
}

pub fn position_params(uri: &Url, line: u32, character: u32) -> TextDocumentPositionParams {
    TextDocumentPositionParams {
        text_document: TextDocumentIdentifier { uri: uri.clone() },
        position: Position { line, character },
    }
}

pub fn definition_params(uri: &Url, line: u32, character: u32) -> GotoDefinitionParams {
    GotoDefinitionParams {
        text_document_position_params: position_params(uri, line, character),
        work_done_progress_params: WorkDoneProgressParams::default(),
        partial_result_params: PartialResultParams::default(),
    }
}

pub fn hover_params(uri: &Url, line: u32, character: u32) -> HoverParams {
    HoverParams {
        text_document_position_params: position_params(uri, line, character),
        work_done_progress_params: WorkDoneProgressParams::default(),
    }
}

/// A minimal CodeIgniter model with one documented method.
pub const USER_MODEL: &str = "<?php
class User_model extends CI_Model
{
    /**
     * Fetch user by id
     *
     * @param int $id
     */
    public function get_user($id)
    {
        return $this->db->get_where('users', ['id' => $id])->row();
    }
}
";
