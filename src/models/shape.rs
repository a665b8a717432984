//! Button outline shapes.

use serde::{Deserialize, Serialize};

/// Outline shape drawn for a button on the canvas.
///
/// Shape-specific parameters (corner radius, polygon side count, custom
/// point list) live as common fields on [`super::Button`], matching the
/// persisted file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Plain rectangle
    #[default]
    Rectangle,
    /// Rectangle with rounded corners (uses `corner_radius`)
    RoundRectangle,
    Circle,
    Triangle,
    Diamond,
    Hexagon,
    /// Regular or custom polygon (uses `sides` or `points`)
    Polygon,
}

impl Shape {
    /// Wire tag for this shape, as written to picker files.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::RoundRectangle => "round_rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
            Self::Hexagon => "hexagon",
            Self::Polygon => "polygon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_tags_match_serde() {
        for shape in [
            Shape::Rectangle,
            Shape::RoundRectangle,
            Shape::Circle,
            Shape::Triangle,
            Shape::Diamond,
            Shape::Hexagon,
            Shape::Polygon,
        ] {
            let json = serde_json::to_value(shape).unwrap();
            assert_eq!(json, serde_json::json!(shape.tag()));
        }
    }

    #[test]
    fn test_shape_default() {
        assert_eq!(Shape::default(), Shape::Rectangle);
    }
}
