//! Workflow document serialization.
//!
//! A workflow document is the pretty-printed serde view of a
//! [`Workflow`]: a JSON object with top-level `nodes` and `edges`
//! arrays. Both arrays must be present for a document to parse; beyond
//! that the format is lenient. Unknown fields (renderer bookkeeping such
//! as measured dimensions or transient selection flags) are ignored, and
//! structural oddities like dangling edge endpoints pass through
//! untouched.

use crate::error::{EditorError, EditorResult};
use crate::graph::Workflow;

/// File name offered for exported workflow documents.
pub const EXPORT_FILE_NAME: &str = "workflow.json";

/// Serializes a workflow into a pretty-printed document.
pub fn serialize(workflow: &Workflow) -> EditorResult<String> {
    serde_json::to_string_pretty(workflow).map_err(EditorError::Serialize)
}

/// Parses a workflow document.
///
/// Fails if the text is not JSON or lacks the top-level `nodes` or
/// `edges` arrays. Parsing has no side effects; importing is all or
/// nothing.
pub fn deserialize(text: &str) -> EditorResult<Workflow> {
    Ok(serde_json::from_str(text)?)
}

/// A serialized document offered to the user as a file download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Suggested file name.
    pub file_name: String,
    /// Document contents.
    pub contents: String,
}

impl Artifact {
    /// Creates a workflow download artifact with the standard file name.
    #[must_use]
    pub fn workflow(contents: impl Into<String>) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_owned(),
            contents: contents.into(),
        }
    }
}
