//! Node types for workflow graphs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::{NodeId, Position};

/// Model identifier newly created nodes start out with.
pub const DEFAULT_AI_MODEL: &str = "gpt-4";

/// The role a node plays in a workflow.
///
/// The kind determines rendering defaults and which connection handles a
/// node offers: start nodes only emit, stop nodes only receive, process
/// nodes do both. The store itself does not enforce the handle rules; a
/// renderer decides which handles exist, and imported documents may
/// contain edges that ignore them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Entry point of a workflow.
    Start,
    /// Intermediate processing step.
    #[default]
    Process,
    /// Terminal point of a workflow.
    Stop,
}

impl NodeKind {
    /// Returns the display name a freshly created node of this kind gets.
    #[must_use]
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Start => "Start Node",
            Self::Process => "Process Node",
            Self::Stop => "Stop Node",
        }
    }

    /// Returns the accent color a renderer uses for this kind.
    #[must_use]
    pub fn accent_color(&self) -> &'static str {
        match self {
            Self::Start => "#10B981",
            Self::Process => "#3B82F6",
            Self::Stop => "#EF4444",
        }
    }

    /// Returns whether nodes of this kind offer an incoming handle.
    #[inline]
    pub fn has_input_handle(&self) -> bool {
        !matches!(self, Self::Start)
    }

    /// Returns whether nodes of this kind offer an outgoing handle.
    #[inline]
    pub fn has_output_handle(&self) -> bool {
        !matches!(self, Self::Stop)
    }
}

/// Attribute payload carried by every node.
///
/// The schema is shared across all kinds; fields irrelevant to a kind
/// simply hold their defaults. The node kind is duplicated here so the
/// payload remains self-describing for renderers that only receive the
/// `data` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Node kind, mirroring the kind stored on the node itself.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Human-readable display name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Prompt text for process steps.
    #[serde(default)]
    pub prompt: String,
    /// Tool configurations keyed by tool name.
    #[serde(default)]
    pub tools: Map<String, Value>,
    /// Model identifier used by this step.
    #[serde(default)]
    pub ai_model: String,
    /// Reserved upstream node ids; the editor never populates these,
    /// imported values pass through untouched.
    #[serde(default)]
    pub input_nodes: Vec<NodeId>,
    /// Reserved downstream node ids; the editor never populates these,
    /// imported values pass through untouched.
    #[serde(default)]
    pub output_nodes: Vec<NodeId>,
}

impl NodeData {
    /// Creates the attribute payload a freshly created node of the given
    /// kind starts out with.
    #[must_use]
    pub fn for_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            name: kind.default_name().to_owned(),
            description: String::new(),
            prompt: String::new(),
            tools: Map::new(),
            ai_model: DEFAULT_AI_MODEL.to_owned(),
            input_nodes: Vec::new(),
            output_nodes: Vec::new(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the prompt text.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn with_ai_model(mut self, ai_model: impl Into<String>) -> Self {
        self.ai_model = ai_model.into();
        self
    }

    /// Adds a tool configuration.
    #[must_use]
    pub fn with_tool(mut self, name: impl Into<String>, config: Value) -> Self {
        self.tools.insert(name.into(), config);
        self
    }
}

/// A single node of a workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node identifier.
    pub id: NodeId,
    /// Node kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Placement in canvas coordinates.
    #[serde(default)]
    pub position: Position,
    /// Attribute payload.
    pub data: NodeData,
}

impl Node {
    /// Creates a node of the given kind at the given position, with a
    /// fresh identifier and the kind's default attributes.
    #[must_use]
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self {
            id: NodeId::generate(),
            kind,
            position,
            data: NodeData::for_kind(kind),
        }
    }

    /// Returns whether this is a start node.
    #[inline]
    pub fn is_start(&self) -> bool {
        matches!(self.kind, NodeKind::Start)
    }

    /// Returns whether this is a process node.
    #[inline]
    pub fn is_process(&self) -> bool {
        matches!(self.kind, NodeKind::Process)
    }

    /// Returns whether this is a stop node.
    #[inline]
    pub fn is_stop(&self) -> bool {
        matches!(self.kind, NodeKind::Stop)
    }
}
