//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use flowdeck_editor::prelude::*;
//! ```

pub use crate::document::{Artifact, EXPORT_FILE_NAME};
pub use crate::editor::{Command, Editor, EditorSnapshot, Effect, Selection, Viewport};
pub use crate::error::{EditorError, EditorResult};
pub use crate::graph::{
    DEFAULT_AI_MODEL, Edge, EdgeBuilder, EdgeCurve, EdgeId, Node, NodeData, NodeId, NodeKind,
    Position, Workflow, seed_workflow,
};
pub use crate::service::{EditorConfig, EditorHandle, EditorService};
