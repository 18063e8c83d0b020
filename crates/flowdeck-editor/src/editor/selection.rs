//! Edge selection tracking.

use crate::graph::{Edge, EdgeId};

/// Tracks which edge, if any, is currently selected on the canvas.
///
/// At most one edge is selected at a time; selecting another edge
/// replaces the previous selection. Nodes are never tracked here, only
/// edges participate in selection. After every store mutation the
/// tracker is reconciled so it never references an edge that no longer
/// exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    edge: Option<EdgeId>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks the given edge, replacing any previous selection.
    pub fn select(&mut self, edge: EdgeId) {
        self.edge = Some(edge);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.edge = None;
    }

    /// Clears the selection and returns what was selected.
    pub fn take(&mut self) -> Option<EdgeId> {
        self.edge.take()
    }

    /// Returns the selected edge identifier, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&EdgeId> {
        self.edge.as_ref()
    }

    /// Returns whether the given edge is the current selection.
    #[must_use]
    pub fn is_selected(&self, edge: &EdgeId) -> bool {
        self.edge.as_ref() == Some(edge)
    }

    /// Drops the selection if the tracked edge is no longer in the given
    /// edge set.
    pub fn reconcile(&mut self, edges: &[Edge]) {
        if let Some(selected) = &self.edge
            && !edges.iter().any(|edge| edge.id == *selected)
        {
            self.edge = None;
        }
    }
}
