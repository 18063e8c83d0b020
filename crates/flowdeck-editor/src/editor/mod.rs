//! Stateful editor core: store, selection, and interaction dispatch.
//!
//! [`Editor`] owns a workflow store together with the edge selection and
//! the renderer-reported viewport. All mutation flows through
//! [`Editor::apply`], one [`Command`] at a time; the rendering
//! collaborator reads state back through the accessors or an
//! [`EditorSnapshot`] and feeds interactions in as further commands.

mod command;
mod selection;
mod viewport;

pub use command::{Command, Effect};
pub use selection::Selection;
pub use viewport::Viewport;

use crate::TRACING_TARGET;
use crate::document::{self, Artifact};
use crate::error::EditorResult;
use crate::graph::{Edge, EdgeId, NodeId, NodeKind, Position, Workflow, seed_workflow};

/// The workflow editor state.
///
/// Holds the graph store, the edge selection, and the last viewport the
/// renderer reported. After every store mutation the selection is
/// reconciled against the edge set, so it never points at a removed
/// edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Editor {
    workflow: Workflow,
    selection: Selection,
    viewport: Viewport,
}

/// A point-in-time copy of the editor state, detached from the editor
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    /// The workflow contents.
    pub workflow: Workflow,
    /// The selected edge, if any.
    pub selected_edge: Option<EdgeId>,
}

impl Editor {
    /// Creates an editor over an empty workflow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor holding the seed workflow a first launch shows.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_workflow(seed_workflow())
    }

    /// Creates an editor over an existing workflow.
    #[must_use]
    pub fn with_workflow(workflow: Workflow) -> Self {
        Self {
            workflow,
            selection: Selection::new(),
            viewport: Viewport::default(),
        }
    }

    /// Returns the current workflow.
    #[must_use]
    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    /// Returns the selected edge identifier, if any.
    #[must_use]
    pub fn selected_edge(&self) -> Option<&EdgeId> {
        self.selection.selected()
    }

    /// Returns the last viewport the renderer reported.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns each edge paired with its render-time selected flag.
    pub fn edges_with_selection(&self) -> impl Iterator<Item = (&Edge, bool)> {
        self.workflow
            .edges
            .iter()
            .map(|edge| (edge, self.selection.is_selected(&edge.id)))
    }

    /// Returns a point-in-time copy of the editor state.
    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            workflow: self.workflow.clone(),
            selected_edge: self.selection.selected().cloned(),
        }
    }

    fn add_node(&mut self, kind: NodeKind, at: Option<Position>) -> NodeId {
        let screen = at.unwrap_or_else(|| self.viewport.center());
        let position = self.viewport.project(screen);
        let id = self.workflow.add_node(kind, position);
        self.reconcile();
        id
    }

    fn connect(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        let id = self.workflow.connect(source, target);
        self.reconcile();
        id
    }

    fn select_edge(&mut self, edge: EdgeId) {
        tracing::trace!(target: TRACING_TARGET, edge_id = %edge, "edge selected");
        self.selection.select(edge);
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn delete_selected(&mut self) {
        if let Some(edge) = self.selection.take() {
            self.workflow.remove_edge(&edge);
            self.reconcile();
        }
    }

    fn move_node(&mut self, node: &NodeId, to: Position) {
        self.workflow.move_node(node, to);
        self.reconcile();
    }

    fn import(&mut self, text: &str) -> EditorResult<()> {
        let workflow = match document::deserialize(text) {
            Ok(workflow) => workflow,
            Err(error) => {
                tracing::warn!(target: TRACING_TARGET, error = %error, "workflow import rejected");
                return Err(error);
            }
        };
        tracing::info!(
            target: TRACING_TARGET,
            nodes = workflow.nodes.len(),
            edges = workflow.edges.len(),
            "workflow imported"
        );
        self.replace_all(workflow);
        Ok(())
    }

    fn replace_all(&mut self, workflow: Workflow) {
        self.workflow = workflow;
        self.reconcile();
    }

    fn export(&self) -> EditorResult<Option<Artifact>> {
        if self.workflow.nodes.is_empty() {
            tracing::debug!(target: TRACING_TARGET, "nothing to export");
            return Ok(None);
        }
        let contents = document::serialize(&self.workflow)?;
        tracing::debug!(target: TRACING_TARGET, bytes = contents.len(), "workflow exported");
        Ok(Some(Artifact::workflow(contents)))
    }

    fn sync_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn reconcile(&mut self) {
        self.selection.reconcile(&self.workflow.edges);
    }
}
