//! Workflow graph data model and state store.
//!
//! This module contains the serializable editor-facing types for workflow
//! graphs:
//!
//! - [`Workflow`]: the node and edge collections, the single source of
//!   truth for what is on the canvas
//! - [`Node`], [`NodeKind`], [`NodeData`]: the three node roles and their
//!   shared attribute schema
//! - [`Edge`], [`EdgeCurve`]: directed connections with rendering hints
//! - [`NodeId`], [`EdgeId`]: opaque identifiers
//! - [`Position`]: placement in canvas coordinates
//!
//! The wire format handled by [`crate::document`] is the serde view of
//! these same types; what the store holds is exactly what a
//! `workflow.json` document contains.

mod edge;
mod id;
mod node;
mod position;
mod seed;

pub use edge::{Edge, EdgeBuilder, EdgeCurve};
pub use id::{EdgeId, NodeId};
pub use node::{DEFAULT_AI_MODEL, Node, NodeData, NodeKind};
pub use position::Position;
pub use seed::seed_workflow;

use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET;

/// A workflow graph: the complete collection of nodes and edges.
///
/// Collections preserve insertion order, which is also document order on
/// export. Structural rules are deliberately loose: edges may reference
/// absent nodes, pair any two handles, or duplicate one another. The
/// store records what the user built and leaves semantic validation to
/// whatever executes the workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    /// Nodes in insertion order.
    pub nodes: Vec<Node>,
    /// Edges in insertion order.
    pub edges: Vec<Edge>,
}

impl Workflow {
    /// Creates an empty workflow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the workflow has no nodes and no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Returns the node with the given identifier, if present.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == *id)
    }

    /// Returns the edge with the given identifier, if present.
    #[must_use]
    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id == *id)
    }

    /// Returns whether an edge with the given identifier exists.
    #[must_use]
    pub fn contains_edge(&self, id: &EdgeId) -> bool {
        self.edge(id).is_some()
    }

    /// Appends a new node of the given kind at the given position and
    /// returns its identifier.
    ///
    /// The node gets a fresh identifier and the kind's default
    /// attributes.
    pub fn add_node(&mut self, kind: NodeKind, position: Position) -> NodeId {
        let node = Node::new(kind, position);
        let id = node.id.clone();
        tracing::debug!(target: TRACING_TARGET, node_id = %id, kind = %kind, "node added");
        self.nodes.push(node);
        id
    }

    /// Appends an animated smoothstep edge between the given endpoints
    /// and returns its identifier.
    ///
    /// Every pairing is accepted, including self-loops, duplicates of an
    /// existing edge, and endpoints with no matching node.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        let edge = Edge {
            id: EdgeId::generate(),
            source,
            target,
            curve: Some(EdgeCurve::Smoothstep),
            animated: true,
        };
        let id = edge.id.clone();
        tracing::debug!(
            target: TRACING_TARGET,
            edge_id = %id,
            source = %edge.source,
            target = %edge.target,
            "edge connected"
        );
        self.edges.push(edge);
        id
    }

    /// Removes the edge with the given identifier.
    ///
    /// Returns whether an edge was removed; removing an absent edge
    /// leaves the store untouched.
    pub fn remove_edge(&mut self, id: &EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.id != *id);
        let removed = self.edges.len() != before;
        if removed {
            tracing::debug!(target: TRACING_TARGET, edge_id = %id, "edge removed");
        }
        removed
    }

    /// Moves the node with the given identifier to a new position.
    ///
    /// Returns whether the node was found. Only the position changes;
    /// identity and attributes are untouched.
    pub fn move_node(&mut self, id: &NodeId, to: Position) -> bool {
        match self.nodes.iter_mut().find(|node| node.id == *id) {
            Some(node) => {
                tracing::trace!(
                    target: TRACING_TARGET,
                    node_id = %id,
                    x = to.x,
                    y = to.y,
                    "node moved"
                );
                node.position = to;
                true
            }
            None => false,
        }
    }
}
