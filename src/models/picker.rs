//! Picker documents: named button collections on a 2D canvas.

use crate::models::{Button, Vec2};
use serde::{Deserialize, Serialize};

/// A named, persisted collection of buttons laid out on a canvas.
///
/// # Invariants
///
/// - Button identifiers are unique within the picker
/// - Button order is the draw/selection order and is preserved across
///   save/load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picker {
    /// Display name, also the key in the model root mapping
    pub name: String,
    /// Ordered buttons
    #[serde(default)]
    pub buttons: Vec<Button>,
    /// Optional background image path, host-resolved
    #[serde(default)]
    pub background_image: Option<String>,
    /// Canvas dimensions (default 800x600)
    #[serde(default = "default_canvas_size")]
    pub canvas_size: Vec2,
    /// View pan offset
    #[serde(default)]
    pub view_center: Vec2,
    /// View zoom factor (default 1.0)
    #[serde(default = "default_view_zoom")]
    pub view_zoom: f32,
}

fn default_canvas_size() -> Vec2 {
    Vec2::new(800.0, 600.0)
}

fn default_view_zoom() -> f32 {
    1.0
}

impl Picker {
    /// Creates an empty picker with the default canvas and view.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buttons: Vec::new(),
            background_image: None,
            canvas_size: default_canvas_size(),
            view_center: Vec2::default(),
            view_zoom: 1.0,
        }
    }

    /// Allocates the next free button id.
    ///
    /// Ids follow the `button_<n>` sequence; `n` is one past the highest
    /// suffix currently in use, so ids stay unique even after deletions.
    #[must_use]
    pub fn allocate_button_id(&self) -> String {
        let highest = self
            .buttons
            .iter()
            .filter_map(|b| b.id.strip_prefix("button_"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("button_{}", highest + 1)
    }

    /// Gets a reference to the button with the given id.
    #[must_use]
    pub fn button(&self, id: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Gets a mutable reference to the button with the given id.
    pub fn button_mut(&mut self, id: &str) -> Option<&mut Button> {
        self.buttons.iter_mut().find(|b| b.id == id)
    }

    /// Gets the positional index of the button with the given id.
    #[must_use]
    pub fn button_index(&self, id: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.id == id)
    }

    /// Removes the button with the given id, returning its index and the
    /// button itself so the removal can be undone in place.
    pub fn remove_button(&mut self, id: &str) -> Option<(usize, Button)> {
        let index = self.button_index(id)?;
        Some((index, self.buttons.remove(index)))
    }
}
