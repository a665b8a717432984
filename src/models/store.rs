//! Model root: the named picker collection and the current-picker pointer.

use crate::models::Picker;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of the in-memory model: every open picker by name, plus the one
/// the user is editing.
///
/// The mapping preserves insertion order; after a file load the first
/// entry becomes current. Serializes as `{"pickers": {<name>: ...}}`,
/// which is the top level of the picker file format. The current-picker
/// pointer is session state and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PickerStore {
    /// Pickers by name, in creation/load order
    #[serde(default)]
    pub pickers: IndexMap<String, Picker>,
    /// Name of the picker edits apply to; `None` until one is chosen
    #[serde(skip)]
    pub current: Option<String>,
}

impl PickerStore {
    /// Creates an empty store with no current picker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a picker with the default canvas and inserts it.
    ///
    /// Does not make the new picker current; callers opt in via
    /// [`Self::set_current`]. Inserting over an existing name replaces
    /// that picker.
    pub fn add_picker(&mut self, name: impl Into<String>) -> &mut Picker {
        let name = name.into();
        let picker = Picker::new(name.clone());
        match self.pickers.entry(name) {
            indexmap::map::Entry::Occupied(mut entry) => {
                entry.insert(picker);
                entry.into_mut()
            }
            indexmap::map::Entry::Vacant(entry) => entry.insert(picker),
        }
    }

    /// Deletes a picker by name; a no-op when the name is unknown.
    ///
    /// Removing the current picker drops the pointer back to the
    /// empty-selection state.
    pub fn remove_picker(&mut self, name: &str) {
        if self.pickers.shift_remove(name).is_some() && self.current.as_deref() == Some(name) {
            self.current = None;
        }
    }

    /// Makes the named picker current. Returns false for unknown names.
    pub fn set_current(&mut self, name: &str) -> bool {
        if self.pickers.contains_key(name) {
            self.current = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// The current picker, if one is set.
    #[must_use]
    pub fn current(&self) -> Option<&Picker> {
        self.current.as_deref().and_then(|name| self.pickers.get(name))
    }

    /// Mutable access to the current picker, if one is set.
    pub fn current_mut(&mut self) -> Option<&mut Picker> {
        let name = self.current.clone()?;
        self.pickers.get_mut(&name)
    }

    /// Finds a button by id in the current picker.
    #[must_use]
    pub fn current_button(&self, id: &str) -> Option<&crate::models::Button> {
        self.current().and_then(|p| p.button(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_picker_does_not_set_current() {
        let mut store = PickerStore::new();
        store.add_picker("Body");
        assert!(store.current().is_none());
        assert_eq!(store.pickers.len(), 1);
    }

    #[test]
    fn test_set_current_requires_known_name() {
        let mut store = PickerStore::new();
        store.add_picker("Body");
        assert!(!store.set_current("Face"));
        assert!(store.set_current("Body"));
        assert_eq!(store.current().unwrap().name, "Body");
    }

    #[test]
    fn test_remove_unknown_picker_is_noop() {
        let mut store = PickerStore::new();
        store.add_picker("Body");
        store.remove_picker("Face");
        assert_eq!(store.pickers.len(), 1);
    }

    #[test]
    fn test_removing_current_picker_clears_pointer() {
        let mut store = PickerStore::new();
        store.add_picker("Body");
        store.add_picker("Face");
        store.set_current("Body");

        store.remove_picker("Body");
        assert!(store.current().is_none());
        assert_eq!(store.pickers.len(), 1);
    }

    #[test]
    fn test_removing_other_picker_keeps_pointer() {
        let mut store = PickerStore::new();
        store.add_picker("Body");
        store.add_picker("Face");
        store.set_current("Body");

        store.remove_picker("Face");
        assert_eq!(store.current().unwrap().name, "Body");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = PickerStore::new();
        for name in ["Zed", "Alpha", "Mid"] {
            store.add_picker(name);
        }
        let names: Vec<&str> = store.pickers.keys().map(String::as_str).collect();
        assert_eq!(names, ["Zed", "Alpha", "Mid"]);
    }
}
