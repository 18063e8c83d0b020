//! Edge types for workflow graphs.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use super::{EdgeId, NodeId};

/// Curve style a renderer draws an edge with.
///
/// Purely presentational; the store carries the style through untouched.
/// Edges created by an interactive connect get [`EdgeCurve::Smoothstep`],
/// edges without a style fall back to whatever the renderer defaults to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EdgeCurve {
    /// Cubic bezier curve.
    Bezier,
    /// Straight line.
    Straight,
    /// Right-angled steps.
    Step,
    /// Right-angled steps with rounded corners.
    Smoothstep,
}

/// A directed connection between two nodes.
///
/// Endpoints are not validated against the node set: the store accepts
/// self-loops, duplicate pairings, and identifiers with no matching node,
/// both from interactions and from imported documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(
    name = "EdgeBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate")
)]
pub struct Edge {
    /// Unique edge identifier.
    #[builder(default = "EdgeId::generate()")]
    pub id: EdgeId,
    /// Source node identifier.
    pub source: NodeId,
    /// Target node identifier.
    pub target: NodeId,
    /// Curve style hint for the renderer.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub curve: Option<EdgeCurve>,
    /// Whether the renderer animates the edge.
    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub animated: bool,
}

fn is_false(animated: &bool) -> bool {
    !animated
}

impl EdgeBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.source.is_none() {
            return Err("source is required".into());
        }
        if self.target.is_none() {
            return Err("target is required".into());
        }
        Ok(())
    }
}

impl Edge {
    /// Creates a plain edge between two nodes with a fresh identifier
    /// and no rendering hints.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            id: EdgeId::generate(),
            source,
            target,
            curve: None,
            animated: false,
        }
    }

    /// Returns a builder for creating an edge.
    pub fn builder() -> EdgeBuilder {
        EdgeBuilder::default()
    }

    /// Returns whether both endpoints are the same node.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
