//! Identifier newtypes for nodes and edges.
//!
//! Both identifiers wrap opaque strings. Interactive creation mints fresh
//! UUIDv7 values; imported documents keep whatever identifiers they carry
//! (such as the short numeric ids of the seed workflow), so the wrappers
//! stay agnostic about the format.

use derive_more::{Debug, Display, From, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a node within a workflow.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Debug, Display, From, Into)]
#[debug("{_0}")]
#[display("{_0}")]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Generates a fresh node identifier.
    #[inline]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Unique identifier of an edge within a workflow.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Debug, Display, From, Into)]
#[debug("{_0}")]
#[display("{_0}")]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Generates a fresh edge identifier.
    #[inline]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Derives the conventional `e{source}-{target}` identifier for an
    /// edge between two nodes, as used by the seed workflow.
    pub fn pairing(source: &NodeId, target: &NodeId) -> Self {
        Self(format!("e{source}-{target}"))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
