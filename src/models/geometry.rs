//! 2D geometry primitives for canvas positions and sizes.

use serde::{Deserialize, Serialize};

/// 2D vector in canvas coordinates.
///
/// Used for button positions and sizes, canvas dimensions, and view
/// offsets. Serializes as `{"x": ..., "y": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new `Vec2` with the given components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
