//! Data models for pickers, buttons, and organizational units.
//!
//! This module contains the core data structures used throughout the
//! crate. Models are independent of the host application and of any UI.

pub mod button;
pub mod color;
pub mod geometry;
pub mod organization;
pub mod picker;
pub mod shape;
pub mod store;

// Re-export all model types
pub use button::{
    AttributeOp, Button, ButtonKind, ButtonSpec, MirrorAxis, PoseData, ScriptLanguage,
    SliderOrientation, TextAlignment,
};
pub use color::Color;
pub use geometry::Vec2;
pub use organization::{OrganizationalUnit, Organizer, UnitLevel};
pub use picker::Picker;
pub use shape::Shape;
pub use store::PickerStore;
