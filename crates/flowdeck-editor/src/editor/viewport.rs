//! Canvas viewport state and coordinate projection.

use crate::graph::Position;

/// The renderer's pan/zoom transform and canvas bounds.
///
/// The rendering collaborator owns panning and zooming; it reports its
/// current transform here so the editor can translate screen-space
/// points (palette drops, the toolbar's canvas-center placement) into
/// the world coordinates nodes are stored in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Pan offset in screen pixels.
    pub offset: Position,
    /// Zoom factor, positive in renderer reports.
    pub zoom: f32,
    /// Visible canvas width in screen pixels.
    pub width: f32,
    /// Visible canvas height in screen pixels.
    pub height: f32,
}

impl Viewport {
    /// Creates an unpanned, unzoomed viewport with the given bounds.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            offset: Position::ORIGIN,
            zoom: 1.0,
            width,
            height,
        }
    }

    /// Sets the pan offset and zoom factor.
    #[must_use]
    pub fn with_transform(mut self, offset: Position, zoom: f32) -> Self {
        self.offset = offset;
        self.zoom = zoom;
        self
    }

    /// Projects a screen-space point into world coordinates under the
    /// current transform.
    #[must_use]
    pub fn project(&self, screen: Position) -> Position {
        Position::new(
            (screen.x - self.offset.x) / self.zoom,
            (screen.y - self.offset.y) / self.zoom,
        )
    }

    /// Returns the screen-space center of the canvas bounds.
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
