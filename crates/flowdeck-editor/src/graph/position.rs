//! Position type for node placement on the canvas.

use serde::{Deserialize, Serialize};

/// Position of a node in canvas (world) coordinates.
///
/// Drag interactions mutate this; screen-space points from the renderer
/// pass through [`crate::editor::Viewport::project`] before they become
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Position {
    /// The canvas origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new position.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
