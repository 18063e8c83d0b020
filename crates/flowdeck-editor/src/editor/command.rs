//! Interaction commands and the editor dispatcher.
//!
//! Every pointer, keyboard, and file interaction on the canvas resolves
//! to exactly one [`Command`], and [`Editor::apply`] is the single entry
//! point that turns commands into state changes. Interactions are
//! mutually exclusive by construction: a click that lands on an edge
//! becomes [`Command::SelectEdge`] and nothing else, so it cannot also
//! trigger the background behavior of [`Command::ClearSelection`].

use std::str::FromStr;

use strum::AsRefStr;

use super::{Editor, Viewport};
use crate::TRACING_TARGET;
use crate::document::Artifact;
use crate::error::EditorResult;
use crate::graph::{EdgeId, NodeId, NodeKind, Position};

/// A single canvas interaction, translated for the dispatcher.
#[derive(Debug, Clone, PartialEq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// Adds a node of the given kind. `at` carries the screen-space drop
    /// point of a palette drag; without it the node lands at the canvas
    /// center, as the toolbar button does.
    AddNode {
        /// Kind of node to create.
        kind: NodeKind,
        /// Screen-space drop point, if the interaction had one.
        at: Option<Position>,
    },
    /// Completes an edge drag between two node handles.
    Connect {
        /// Node the drag started from.
        source: NodeId,
        /// Node the drag ended on.
        target: NodeId,
    },
    /// A click landed on an edge.
    SelectEdge(EdgeId),
    /// A click landed on the canvas background.
    ClearSelection,
    /// The Delete key was pressed while the canvas had focus.
    DeleteSelected,
    /// A node drag finished, reported in world coordinates.
    MoveNode {
        /// Node being dragged.
        node: NodeId,
        /// New position in canvas coordinates.
        to: Position,
    },
    /// Replaces the workflow with the parsed contents of a document.
    Import(String),
    /// Serializes the workflow into a downloadable artifact.
    Export,
    /// The renderer reported its current transform and bounds.
    SyncViewport(Viewport),
}

impl Command {
    /// Translates a palette drop payload into a command, or `None` when
    /// the payload names no known node kind.
    #[must_use]
    pub fn palette_drop(payload: &str, at: Position) -> Option<Self> {
        let kind = NodeKind::from_str(payload).ok()?;
        Some(Self::AddNode {
            kind,
            at: Some(at),
        })
    }

    /// Translates a keypress into a command. Only the Delete key is
    /// bound; every other key returns `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Delete" => Some(Self::DeleteSelected),
            _ => None,
        }
    }
}

/// Side output of a dispatched command, beyond the state change itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// A serialized document to offer the user as a file download.
    Download(Artifact),
}

impl Editor {
    /// Applies one command to completion and returns its effect, if any.
    ///
    /// Errors are recoverable: a rejected import leaves the store, the
    /// selection, and the viewport exactly as they were.
    pub fn apply(&mut self, command: Command) -> EditorResult<Option<Effect>> {
        tracing::trace!(target: TRACING_TARGET, command = command.as_ref(), "applying command");
        match command {
            Command::AddNode { kind, at } => {
                self.add_node(kind, at);
                Ok(None)
            }
            Command::Connect { source, target } => {
                self.connect(source, target);
                Ok(None)
            }
            Command::SelectEdge(edge) => {
                self.select_edge(edge);
                Ok(None)
            }
            Command::ClearSelection => {
                self.clear_selection();
                Ok(None)
            }
            Command::DeleteSelected => {
                self.delete_selected();
                Ok(None)
            }
            Command::MoveNode { node, to } => {
                self.move_node(&node, to);
                Ok(None)
            }
            Command::Import(text) => {
                self.import(&text)?;
                Ok(None)
            }
            Command::Export => Ok(self.export()?.map(Effect::Download)),
            Command::SyncViewport(viewport) => {
                self.sync_viewport(viewport);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::EXPORT_FILE_NAME;
    use crate::error::EditorError;
    use crate::graph::EdgeCurve;

    #[test]
    fn test_palette_drop() {
        let command = Command::palette_drop("process", Position::new(10.0, 20.0)).unwrap();
        assert_eq!(
            command,
            Command::AddNode {
                kind: NodeKind::Process,
                at: Some(Position::new(10.0, 20.0)),
            }
        );
        assert!(Command::palette_drop("decision", Position::ORIGIN).is_none());
        assert!(Command::palette_drop("", Position::ORIGIN).is_none());
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Command::from_key("Delete"), Some(Command::DeleteSelected));
        assert_eq!(Command::from_key("Backspace"), None);
        assert_eq!(Command::from_key("a"), None);
    }

    #[test]
    fn test_seed_session() {
        let mut editor = Editor::seeded();

        editor
            .apply(Command::Connect {
                source: "3".into(),
                target: "1".into(),
            })
            .unwrap();
        assert_eq!(editor.workflow().nodes.len(), 3);
        assert_eq!(editor.workflow().edges.len(), 3);

        editor.apply(Command::SelectEdge("e1-2".into())).unwrap();
        assert_eq!(editor.selected_edge(), Some(&"e1-2".into()));

        editor.apply(Command::from_key("Delete").unwrap()).unwrap();
        assert_eq!(editor.workflow().edges.len(), 2);
        assert!(!editor.workflow().contains_edge(&"e1-2".into()));
        assert!(editor.selected_edge().is_none());

        let remaining: Vec<_> = editor
            .workflow()
            .edges
            .iter()
            .map(|edge| edge.id.as_str().to_owned())
            .collect();
        assert_eq!(remaining[0], "e2-3");
        assert_eq!(remaining.len(), 2);
    }

    #[test]
    fn test_background_click_only_clears_selection() {
        let mut editor = Editor::seeded();
        editor.apply(Command::SelectEdge("e2-3".into())).unwrap();
        editor.apply(Command::ClearSelection).unwrap();

        assert!(editor.selected_edge().is_none());
        assert_eq!(editor.workflow().edges.len(), 2);
    }

    #[test]
    fn test_export_empty_workflow_is_a_no_op() {
        let mut editor = Editor::new();
        let effect = editor.apply(Command::Export).unwrap();
        assert!(effect.is_none());
    }

    #[test]
    fn test_export_with_only_dangling_edges_is_a_no_op() {
        let mut editor = Editor::new();
        editor
            .apply(Command::Connect {
                source: "ghost".into(),
                target: "missing".into(),
            })
            .unwrap();
        assert_eq!(editor.workflow().edges.len(), 1);

        let effect = editor.apply(Command::Export).unwrap();
        assert!(effect.is_none());
    }

    #[test]
    fn test_export_artifact() {
        let mut editor = Editor::seeded();
        let effect = editor.apply(Command::Export).unwrap();
        let Some(Effect::Download(artifact)) = effect else {
            panic!("expected a download effect");
        };

        assert_eq!(artifact.file_name, EXPORT_FILE_NAME);
        // Pretty-printed, top-level nodes and edges arrays.
        assert!(artifact.contents.starts_with("{\n"));
        let value: serde_json::Value = serde_json::from_str(&artifact.contents).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(value["edges"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut editor = Editor::seeded();
        editor
            .apply(Command::Connect {
                source: "2".into(),
                target: "2".into(),
            })
            .unwrap();
        let before = editor.workflow().clone();

        let Some(Effect::Download(artifact)) = editor.apply(Command::Export).unwrap() else {
            panic!("expected a download effect");
        };

        let mut other = Editor::new();
        other.apply(Command::Import(artifact.contents)).unwrap();
        assert_eq!(*other.workflow(), before);

        let restored = other.workflow().edge(&before.edges[2].id).unwrap();
        assert_eq!(restored.curve, Some(EdgeCurve::Smoothstep));
        assert!(restored.animated);
    }

    #[test]
    fn test_import_rejects_malformed_document() {
        let mut editor = Editor::seeded();
        editor.apply(Command::SelectEdge("e1-2".into())).unwrap();
        let before = editor.snapshot();

        let result = editor.apply(Command::Import("not json".to_owned()));
        assert!(matches!(result, Err(EditorError::MalformedDocument(_))));
        assert_eq!(editor.snapshot(), before);
    }

    #[test]
    fn test_import_rejects_missing_edges_field() {
        let mut editor = Editor::seeded();
        let before = editor.snapshot();

        let result = editor.apply(Command::Import(r#"{"nodes": []}"#.to_owned()));
        assert!(matches!(result, Err(EditorError::MalformedDocument(_))));
        assert_eq!(editor.snapshot(), before);
    }

    #[test]
    fn test_import_replaces_store_atomically() {
        let mut editor = Editor::seeded();
        editor.apply(Command::SelectEdge("e1-2".into())).unwrap();

        editor
            .apply(Command::Import(
                r#"{"nodes": [], "edges": []}"#.to_owned(),
            ))
            .unwrap();
        assert!(editor.workflow().is_empty());
        assert!(editor.selected_edge().is_none());
    }

    #[test]
    fn test_move_node_command() {
        let mut editor = Editor::seeded();
        editor
            .apply(Command::MoveNode {
                node: "2".into(),
                to: Position::new(-30.0, 75.0),
            })
            .unwrap();
        assert_eq!(
            editor.workflow().node(&"2".into()).unwrap().position,
            Position::new(-30.0, 75.0)
        );
    }

    #[test]
    fn test_sync_viewport_shifts_center_placement() {
        let mut editor = Editor::new();
        editor
            .apply(Command::SyncViewport(Viewport::new(1000.0, 500.0)))
            .unwrap();
        assert_eq!(*editor.viewport(), Viewport::new(1000.0, 500.0));

        editor
            .apply(Command::AddNode {
                kind: NodeKind::Start,
                at: None,
            })
            .unwrap();

        let node = &editor.workflow().nodes[0];
        assert_eq!(node.position, Position::new(500.0, 250.0));
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::Export.as_ref(), "export");
        assert_eq!(Command::DeleteSelected.as_ref(), "delete_selected");
    }
}
