//! Async editor service wrapping [`Editor`] behind a command channel.
//!
//! The service processes one request at a time: commands queue on a
//! bounded channel and each is applied to completion before the next is
//! received, so concurrent callers never interleave partial state
//! changes. [`EditorHandle`] is the cloneable submission side.

use std::path::Path;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::document::Artifact;
use crate::editor::{Command, Editor, EditorSnapshot, Effect};
use crate::error::{EditorError, EditorResult};
use crate::graph::Workflow;

/// Tracing target for service operations.
const TRACING_TARGET: &str = "flowdeck_editor::service";

/// Configuration for the editor service with sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct EditorConfig {
    /// Maximum size of an imported document in bytes (optional).
    #[cfg_attr(
        feature = "config",
        arg(long = "editor-max-import-size", env = "EDITOR_MAX_IMPORT_SIZE")
    )]
    pub editor_max_import_size: Option<u64>,

    /// Depth of the command queue between handles and the service
    /// (optional).
    #[cfg_attr(
        feature = "config",
        arg(long = "editor-command-buffer", env = "EDITOR_COMMAND_BUFFER")
    )]
    pub editor_command_buffer: Option<usize>,
}

// Default values
const DEFAULT_MAX_IMPORT_SIZE: u64 = 10 * 1024 * 1024; // 10 MB
const DEFAULT_COMMAND_BUFFER: usize = 32;

impl EditorConfig {
    /// Creates a new editor configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            editor_max_import_size: None,
            editor_command_buffer: None,
        }
    }

    /// Returns the maximum import size, using the default if not set.
    #[inline]
    #[must_use]
    pub fn max_import_size(&self) -> u64 {
        self.editor_max_import_size.unwrap_or(DEFAULT_MAX_IMPORT_SIZE)
    }

    /// Returns the command queue depth, using the default if not set.
    #[inline]
    #[must_use]
    pub fn command_buffer(&self) -> usize {
        self.editor_command_buffer.unwrap_or(DEFAULT_COMMAND_BUFFER)
    }

    /// Set the maximum import size in bytes.
    #[must_use]
    pub fn with_max_import_size(mut self, size: u64) -> Self {
        self.editor_max_import_size = Some(size);
        self
    }

    /// Set the command queue depth.
    #[must_use]
    pub fn with_command_buffer(mut self, depth: usize) -> Self {
        self.editor_command_buffer = Some(depth);
        self
    }

    /// Validate the configuration and return any issues.
    pub fn validate(&self) -> Result<(), String> {
        if self.editor_max_import_size == Some(0) {
            return Err("Maximum import size cannot be zero".to_string());
        }
        if self.editor_command_buffer == Some(0) {
            return Err("Command queue depth cannot be zero".to_string());
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

enum Request {
    Apply(Command, oneshot::Sender<EditorResult<Option<Effect>>>),
    Snapshot(oneshot::Sender<EditorSnapshot>),
}

/// Owns an [`Editor`] and drives it from a request channel.
pub struct EditorService {
    editor: Editor,
    requests: mpsc::Receiver<Request>,
}

impl EditorService {
    /// Creates a service over the given editor, returning it together
    /// with a handle for submitting requests.
    #[must_use]
    pub fn new(editor: Editor, config: &EditorConfig) -> (Self, EditorHandle) {
        // mpsc::channel panics on a zero capacity.
        let buffer = config.command_buffer().max(1);
        let (requests_tx, requests_rx) = mpsc::channel(buffer);
        let service = Self {
            editor,
            requests: requests_rx,
        };
        let handle = EditorHandle {
            requests: requests_tx,
            max_import_size: config.max_import_size(),
        };
        (service, handle)
    }

    /// Spawns the service onto the current tokio runtime.
    ///
    /// The task finishes once every handle has been dropped and resolves
    /// to the final editor state.
    #[must_use]
    pub fn spawn(editor: Editor, config: &EditorConfig) -> (EditorHandle, JoinHandle<Editor>) {
        let (service, handle) = Self::new(editor, config);
        (handle, tokio::spawn(service.run()))
    }

    /// Runs the request loop until every handle has been dropped, then
    /// returns the final editor state.
    pub async fn run(mut self) -> Editor {
        tracing::info!(target: TRACING_TARGET, "editor service started");
        while let Some(request) = self.requests.recv().await {
            match request {
                Request::Apply(command, reply) => {
                    tracing::trace!(
                        target: TRACING_TARGET,
                        command = command.as_ref(),
                        "processing command"
                    );
                    let _ = reply.send(self.editor.apply(command));
                }
                Request::Snapshot(reply) => {
                    let _ = reply.send(self.editor.snapshot());
                }
            }
        }
        tracing::info!(target: TRACING_TARGET, "editor service stopped");
        self.editor
    }
}

/// Cloneable handle for submitting requests to a running
/// [`EditorService`].
#[derive(Debug, Clone)]
pub struct EditorHandle {
    requests: mpsc::Sender<Request>,
    max_import_size: u64,
}

impl EditorHandle {
    /// Applies one command and waits for its effect.
    pub async fn apply(&self, command: Command) -> EditorResult<Option<Effect>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.requests
            .send(Request::Apply(command, reply_tx))
            .await
            .map_err(|_| EditorError::ServiceClosed)?;
        reply_rx.await.map_err(|_| EditorError::ServiceClosed)?
    }

    /// Returns a point-in-time copy of the editor state.
    pub async fn snapshot(&self) -> EditorResult<EditorSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.requests
            .send(Request::Snapshot(reply_tx))
            .await
            .map_err(|_| EditorError::ServiceClosed)?;
        reply_rx.await.map_err(|_| EditorError::ServiceClosed)
    }

    /// Returns the current workflow contents.
    pub async fn workflow(&self) -> EditorResult<Workflow> {
        Ok(self.snapshot().await?.workflow)
    }

    /// Parses the given text and replaces the workflow with it.
    pub async fn import(&self, document: impl Into<String>) -> EditorResult<()> {
        self.apply(Command::Import(document.into())).await?;
        Ok(())
    }

    /// Serializes the workflow into a downloadable artifact, or `None`
    /// when there are no nodes to export.
    pub async fn export(&self) -> EditorResult<Option<Artifact>> {
        match self.apply(Command::Export).await? {
            Some(Effect::Download(artifact)) => Ok(Some(artifact)),
            None => Ok(None),
        }
    }

    /// Reads a workflow document from disk and imports it.
    ///
    /// The file is read fully before the import command is enqueued, so
    /// the store stays untouched while the read is in flight and a read
    /// that fails imports nothing. File extensions are not checked here;
    /// pickers usually restrict selection to `.json` themselves.
    pub async fn import_file(&self, path: impl AsRef<Path>) -> EditorResult<()> {
        let path = path.as_ref();
        let size = tokio::fs::metadata(path).await?.len();
        if size > self.max_import_size {
            tracing::warn!(
                target: TRACING_TARGET,
                path = %path.display(),
                size,
                "document exceeds import size limit"
            );
            return Err(EditorError::DocumentTooLarge {
                size,
                limit: self.max_import_size,
            });
        }

        let text = tokio::fs::read_to_string(path).await?;
        tracing::debug!(
            target: TRACING_TARGET,
            path = %path.display(),
            bytes = text.len(),
            "document read for import"
        );
        self.import(text).await
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::graph::{NodeKind, Position};

    #[test]
    fn test_config_defaults() {
        let config = EditorConfig::new();
        assert_eq!(config.max_import_size(), DEFAULT_MAX_IMPORT_SIZE);
        assert_eq!(config.command_buffer(), DEFAULT_COMMAND_BUFFER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_overrides() {
        let config = EditorConfig::new()
            .with_max_import_size(1024)
            .with_command_buffer(4);
        assert_eq!(config.max_import_size(), 1024);
        assert_eq!(config.command_buffer(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_values() {
        assert!(EditorConfig::new().with_max_import_size(0).validate().is_err());
        assert!(EditorConfig::new().with_command_buffer(0).validate().is_err());
    }

    #[tokio::test]
    async fn test_zero_command_buffer_still_spawns() {
        let config = EditorConfig::new().with_command_buffer(0);
        let (handle, task) = EditorService::spawn(Editor::seeded(), &config);

        let workflow = handle.workflow().await.unwrap();
        assert_eq!(workflow.nodes.len(), 3);

        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_service_applies_commands_in_order() {
        let (handle, task) = EditorService::spawn(Editor::seeded(), &EditorConfig::new());

        handle
            .apply(Command::Connect {
                source: "3".into(),
                target: "1".into(),
            })
            .await
            .unwrap();
        handle
            .apply(Command::AddNode {
                kind: NodeKind::Process,
                at: Some(Position::new(50.0, 60.0)),
            })
            .await
            .unwrap();

        let workflow = handle.workflow().await.unwrap();
        assert_eq!(workflow.nodes.len(), 4);
        assert_eq!(workflow.edges.len(), 3);

        drop(handle);
        let editor = task.await.unwrap();
        assert_eq!(editor.workflow().nodes.len(), 4);
    }

    #[tokio::test]
    async fn test_service_export_round_trip() {
        let (handle, task) = EditorService::spawn(Editor::seeded(), &EditorConfig::new());

        let artifact = handle.export().await.unwrap().unwrap();
        assert_eq!(artifact.file_name, "workflow.json");

        handle.import(artifact.contents).await.unwrap();
        let workflow = handle.workflow().await.unwrap();
        assert_eq!(workflow.nodes.len(), 3);

        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_import_file() {
        let (handle, task) = EditorService::spawn(Editor::seeded(), &EditorConfig::new());
        let artifact = handle.export().await.unwrap().unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(artifact.contents.as_bytes()).unwrap();

        handle
            .apply(Command::Import(r#"{"nodes": [], "edges": []}"#.to_owned()))
            .await
            .unwrap();
        handle.import_file(file.path()).await.unwrap();

        let workflow = handle.workflow().await.unwrap();
        assert_eq!(workflow.nodes.len(), 3);
        assert_eq!(workflow.edges.len(), 2);

        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_import_file_respects_size_limit() {
        let config = EditorConfig::new().with_max_import_size(16);
        let (handle, task) = EditorService::spawn(Editor::new(), &config);

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"nodes": [], "edges": []}"#).unwrap();

        let result = handle.import_file(file.path()).await;
        assert!(matches!(
            result,
            Err(EditorError::DocumentTooLarge { limit: 16, .. })
        ));

        let workflow = handle.workflow().await.unwrap();
        assert!(workflow.is_empty());

        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_import_file_missing_path() {
        let (handle, task) = EditorService::spawn(Editor::new(), &EditorConfig::new());
        let result = handle.import_file("/nonexistent/workflow.json").await;
        assert!(matches!(result, Err(EditorError::Io(_))));

        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_handle_reports_closed_service() {
        let (service, handle) = EditorService::new(Editor::new(), &EditorConfig::new());
        drop(service);

        let result = handle.apply(Command::Export).await;
        assert!(matches!(result, Err(EditorError::ServiceClosed)));
        let result = handle.snapshot().await;
        assert!(matches!(result, Err(EditorError::ServiceClosed)));
    }
}
