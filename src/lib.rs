//! Org context-cycling language server.
//!
//! The server watches open documents and exposes two workspace commands,
//! `orgcycle.increment` and `orgcycle.decrement`, that cycle the token under
//! the cursor: date stamps move one day, TODO keywords step through the
//! configured list, and checkbox markers advance their state.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService};

mod context;
mod document;
mod lsp;
pub(crate) mod settings;

pub use context::{
    detect, mutate, DetectedContext, Direction, KeywordSet, Span, TokenKind, CHECKBOX_STATES,
    DEFAULT_KEYWORDS,
};
pub use document::{DocumentState, DocumentStore, LineIndex};
pub use lsp::{cycle_at_position, DECREMENT_COMMAND, INCREMENT_COMMAND};
pub use settings::{discover_settings, load_settings, Settings};

pub struct Backend {
    client: Client,
    documents: DocumentStore,
    keywords: OnceLock<KeywordSet>,
}

impl Backend {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            keywords: OnceLock::new(),
        }
    }

    fn keywords(&self) -> &KeywordSet {
        self.keywords.get_or_init(KeywordSet::default)
    }

    /// Track the latest text of a changed document.
    fn on_document_change(&self, uri: Url, text: String, version: i32) {
        self.documents.open(uri, text, version);
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        // Extract workspace root from params
        let workspace_root = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .and_then(|f| f.uri.to_file_path().ok())
            .or_else(|| {
                #[allow(deprecated)]
                params.root_uri.as_ref()?.to_file_path().ok()
            });

        if let Some(root) = workspace_root {
            // Discover settings by walking up the directory tree
            let (settings, _settings_dir) = settings::discover_settings(&root);
            let _ = self.keywords.set(settings.keyword_set());
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: lsp::all_commands(),
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                }),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "orgcycle language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.on_document_change(
            params.text_document.uri,
            params.text_document.text,
            params.text_document.version,
        );
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // We use FULL sync, so there's exactly one change with the full text
        if let Some(change) = params.content_changes.into_iter().next() {
            self.on_document_change(
                params.text_document.uri,
                change.text,
                params.text_document.version,
            );
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.close(&params.text_document.uri);
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        let Some(direction) = lsp::direction_for_command(&params.command) else {
            return Err(Error::invalid_params(format!(
                "unknown command: {}",
                params.command
            )));
        };
        let Some((uri, position)) = lsp::decode_arguments(&params.arguments) else {
            return Err(Error::invalid_params(
                "expected arguments: [uri, position]",
            ));
        };

        let Some(doc) = self.documents.get(&uri) else {
            self.client
                .show_message(MessageType::WARNING, format!("document not open: {uri}"))
                .await;
            return Ok(None);
        };

        let Some(edit) = lsp::cycle_at_position(&doc, position, direction, self.keywords()) else {
            self.client
                .show_message(MessageType::INFO, "No context to modify")
                .await;
            return Ok(None);
        };

        let mut changes = HashMap::new();
        changes.insert(uri, vec![edit]);
        let response = self
            .client
            .apply_edit(WorkspaceEdit {
                changes: Some(changes),
                ..Default::default()
            })
            .await?;

        if !response.applied {
            self.client
                .log_message(MessageType::WARNING, "client rejected the edit")
                .await;
        }

        Ok(None)
    }
}

pub fn create_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}
