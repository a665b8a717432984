//! Button entities: the eight typed button variants and their common fields.
//!
//! Buttons are a closed sum type: [`ButtonKind`] carries the
//! variant-specific payload with an explicit `"type"` discriminant on the
//! wire, and [`Button`] carries the fields every variant shares. New
//! buttons are built from a validated [`ButtonSpec`] through the single
//! creation entry point on the controller, which assigns the id and fills
//! remaining defaults.

use crate::models::{Color, Shape, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language a script button payload is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLanguage {
    #[default]
    Python,
    Mel,
}

/// How an attribute button applies its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeOp {
    /// Write `value` to the attribute
    #[default]
    Set,
    /// Flip the attribute between zero and one
    Toggle,
    /// Add `nudge_amount` to the current value
    Nudge,
}

/// Axis a selection mirrors across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MirrorAxis {
    #[default]
    X,
    Y,
    /// Both axes
    Xy,
}

/// Slider drag direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Label alignment for text buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Pose payload: node name to attribute name to value.
pub type PoseData = BTreeMap<String, BTreeMap<String, f64>>;

/// Variant-specific payload of a button, tagged by `"type"` on the wire.
///
/// Every payload field is tolerant on read: a field missing from an older
/// picker file falls back to the same default the creation path uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ButtonKind {
    /// Selects the target nodes in the host scene.
    Select {
        #[serde(default)]
        target_nodes: Vec<String>,
        #[serde(default)]
        hierarchical: bool,
        #[serde(default)]
        mirror: bool,
        #[serde(default)]
        mirror_axis: MirrorAxis,
    },
    /// Executes a user-authored script in the host.
    Script {
        #[serde(default)]
        script: String,
        #[serde(default)]
        language: ScriptLanguage,
    },
    /// Applies a stored pose to the target nodes.
    Pose {
        #[serde(default)]
        target_nodes: Vec<String>,
        #[serde(default)]
        pose_data: PoseData,
    },
    /// Sets, toggles, or nudges a single attribute.
    Attribute {
        #[serde(default)]
        target_node: String,
        #[serde(default)]
        attribute: String,
        #[serde(default)]
        operation: AttributeOp,
        #[serde(default)]
        value: f64,
        #[serde(default = "default_nudge_amount")]
        nudge_amount: f64,
    },
    /// Drives an attribute over a numeric range, optionally on two axes.
    Slider {
        #[serde(default)]
        target_node: String,
        #[serde(default)]
        attribute: String,
        #[serde(default)]
        range_min: f64,
        #[serde(default = "default_range_max")]
        range_max: f64,
        #[serde(default)]
        current_value: f64,
        #[serde(default)]
        is_2d: bool,
        #[serde(default)]
        second_attribute: String,
        #[serde(default)]
        second_range_min: f64,
        #[serde(default = "default_range_max")]
        second_range_max: f64,
        #[serde(default)]
        second_current_value: f64,
        #[serde(default)]
        orientation: SliderOrientation,
    },
    /// Toggles an attribute between two values.
    Checkbox {
        #[serde(default)]
        target_node: String,
        #[serde(default)]
        attribute: String,
        #[serde(default = "default_checked_value")]
        checked_value: f64,
        #[serde(default)]
        unchecked_value: f64,
        #[serde(default)]
        is_checked: bool,
    },
    /// Radial control writing its current value to an attribute.
    Radius {
        #[serde(default)]
        target_node: String,
        #[serde(default)]
        attribute: String,
        #[serde(default)]
        min_value: f64,
        #[serde(default = "default_radius_max")]
        max_value: f64,
        #[serde(default = "default_radius_current")]
        current_value: f64,
    },
    /// Static label, never executed.
    Text {
        #[serde(default = "default_font_size")]
        font_size: u32,
        #[serde(default)]
        is_bold: bool,
        #[serde(default)]
        is_italic: bool,
        #[serde(default)]
        text_alignment: TextAlignment,
    },
}

fn default_nudge_amount() -> f64 {
    1.0
}

fn default_range_max() -> f64 {
    100.0
}

fn default_checked_value() -> f64 {
    1.0
}

fn default_radius_max() -> f64 {
    10.0
}

fn default_radius_current() -> f64 {
    1.0
}

fn default_font_size() -> u32 {
    12
}

impl ButtonKind {
    /// An empty select button, the kind new buttons default to.
    #[must_use]
    pub const fn select() -> Self {
        Self::Select {
            target_nodes: Vec::new(),
            hierarchical: false,
            mirror: false,
            mirror_axis: MirrorAxis::X,
        }
    }

    /// Wire tag for this variant, as written to picker files.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Select { .. } => "select",
            Self::Script { .. } => "script",
            Self::Pose { .. } => "pose",
            Self::Attribute { .. } => "attribute",
            Self::Slider { .. } => "slider",
            Self::Checkbox { .. } => "checkbox",
            Self::Radius { .. } => "radius",
            Self::Text { .. } => "text",
        }
    }
}

impl Default for ButtonKind {
    fn default() -> Self {
        Self::select()
    }
}

/// A single button on a picker canvas.
///
/// Common fields shared by every variant; the payload lives in `kind`
/// and is flattened on the wire so a button object reads as one flat
/// JSON map with a `"type"` tag.
///
/// # Invariants
///
/// - `id` is unique within the owning [`super::Picker`]
/// - `id` never changes after creation; only properties mutate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Unique identifier within the picker (e.g., "button_3")
    pub id: String,
    /// Top-left position on the canvas
    #[serde(default)]
    pub position: Vec2,
    /// Width and height
    #[serde(default = "default_button_size")]
    pub size: Vec2,
    /// Fill color
    #[serde(default)]
    pub color: Color,
    /// Display label
    #[serde(default)]
    pub label: String,
    /// Hover tooltip
    #[serde(default)]
    pub tooltip: String,
    /// Drawn on the canvas when true
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Ignores canvas edits when true
    #[serde(default)]
    pub locked: bool,
    /// Outline shape
    #[serde(default)]
    pub shape: Shape,
    /// Corner radius for round rectangles
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,
    /// Side count for regular polygons
    #[serde(default = "default_sides")]
    pub sides: u32,
    /// Custom point list for irregular polygons
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Vec2>,
    /// Variant payload, tagged by `"type"`
    #[serde(flatten)]
    pub kind: ButtonKind,
}

fn default_button_size() -> Vec2 {
    Vec2::new(50.0, 50.0)
}

const fn default_true() -> bool {
    true
}

fn default_corner_radius() -> f32 {
    10.0
}

fn default_sides() -> u32 {
    6
}

impl Button {
    /// Builds a button from a spec, assigning the given id and defaulting
    /// the label to `Button <id>` when the spec leaves it unset.
    #[must_use]
    pub fn from_spec(id: impl Into<String>, spec: ButtonSpec) -> Self {
        let id = id.into();
        let label = spec.label.unwrap_or_else(|| format!("Button {id}"));
        Self {
            id,
            position: spec.position,
            size: spec.size,
            color: spec.color,
            label,
            tooltip: spec.tooltip,
            visible: true,
            locked: false,
            shape: spec.shape,
            corner_radius: spec.corner_radius,
            sides: spec.sides,
            points: spec.points,
            kind: spec.kind,
        }
    }
}

/// Validated construction parameters for a new button.
///
/// Everything a caller can choose up front; the id, visibility and lock
/// flags are assigned by the creation entry point. Unset fields take the
/// same defaults the original authoring tool used.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    /// Variant payload
    pub kind: ButtonKind,
    /// Top-left position on the canvas
    pub position: Vec2,
    /// Width and height (default 50x50)
    pub size: Vec2,
    /// Fill color (default mid-gray)
    pub color: Color,
    /// Display label; `None` defaults to `Button <id>`
    pub label: Option<String>,
    /// Hover tooltip
    pub tooltip: String,
    /// Outline shape (default rectangle)
    pub shape: Shape,
    /// Corner radius for round rectangles
    pub corner_radius: f32,
    /// Side count for regular polygons
    pub sides: u32,
    /// Custom point list for irregular polygons
    pub points: Vec<Vec2>,
}

impl ButtonSpec {
    /// Creates a spec for the given variant with default common fields.
    #[must_use]
    pub fn new(kind: ButtonKind) -> Self {
        Self {
            kind,
            position: Vec2::default(),
            size: default_button_size(),
            color: Color::default(),
            label: None,
            tooltip: String::new(),
            shape: Shape::default(),
            corner_radius: default_corner_radius(),
            sides: default_sides(),
            points: Vec::new(),
        }
    }

    /// Sets the canvas position.
    #[must_use]
    pub const fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Sets the button size.
    #[must_use]
    pub const fn sized(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Sets the fill color.
    #[must_use]
    pub const fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the display label.
    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the hover tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Sets the outline shape.
    #[must_use]
    pub const fn shaped(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Rebuilds a spec from an existing button, dropping its identity.
    ///
    /// Useful for duplicating or mirroring: the result goes back through
    /// the creation entry point, which assigns a fresh id.
    #[must_use]
    pub fn from_button(button: &Button) -> Self {
        Self {
            kind: button.kind.clone(),
            position: button.position,
            size: button.size,
            color: button.color,
            label: Some(button.label.clone()),
            tooltip: button.tooltip.clone(),
            shape: button.shape,
            corner_radius: button.corner_radius,
            sides: button.sides,
            points: button.points.clone(),
        }
    }
}

impl Default for ButtonSpec {
    fn default() -> Self {
        Self::new(ButtonKind::default())
    }
}
