//! Orchestration layer wiring UI actions to model mutations.
//!
//! The controller owns the picker store, the organizer, the undo
//! history, and the hotkey map, plus a handle to the embedding host.
//! Every mutation it performs is committed as one named history group,
//! so a UI can call straight through and get menu-ready undo/redo for
//! free. Nothing here escalates: failed operations degrade to a logged
//! message and a safe no-op.

pub mod edits;
mod execute;

pub use edits::EditOp;

use crate::config::Config;
use crate::history::History;
use crate::hotkeys::HotkeyMap;
use crate::models::{Button, ButtonSpec, Organizer, Picker, PickerStore, Vec2};
use crate::scene::SceneHost;
use crate::services::PickerFileService;
use std::path::Path;
use tracing::{debug, error, warn};

/// Central coordinator between a UI surface, the model, and the host.
pub struct PickerController<H: SceneHost> {
    model: PickerStore,
    organizer: Organizer,
    history: History<EditOp>,
    hotkeys: HotkeyMap,
    host: H,
}

impl<H: SceneHost> PickerController<H> {
    /// Creates a controller with default settings.
    pub fn new(host: H) -> Self {
        Self {
            model: PickerStore::new(),
            organizer: Organizer::new(),
            history: History::new(),
            hotkeys: HotkeyMap::new(),
            host,
        }
    }

    /// Creates a controller honoring the given configuration.
    pub fn with_config(host: H, config: &Config) -> Self {
        Self {
            model: PickerStore::new(),
            organizer: Organizer::new(),
            history: History::with_capacity(config.history.capacity),
            hotkeys: HotkeyMap::new(),
            host,
        }
    }

    /// The picker store.
    #[must_use]
    pub fn model(&self) -> &PickerStore {
        &self.model
    }

    /// The organizational unit forest.
    #[must_use]
    pub fn organizer(&self) -> &Organizer {
        &self.organizer
    }

    /// Mutable access to the organizational unit forest.
    ///
    /// Unit edits are not part of the undo history; they mirror the
    /// original tool, where organization is a layout-time concern.
    pub fn organizer_mut(&mut self) -> &mut Organizer {
        &mut self.organizer
    }

    /// The hotkey bindings.
    #[must_use]
    pub fn hotkeys(&self) -> &HotkeyMap {
        &self.hotkeys
    }

    /// The embedding host handle.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    // === PICKER LIFECYCLE ===

    /// Creates a picker and returns it. Does not make it current.
    pub fn create_picker(&mut self, name: impl Into<String>) -> &mut Picker {
        self.model.add_picker(name)
    }

    /// Deletes a picker by name; removing the current picker leaves no
    /// picker selected.
    pub fn remove_picker(&mut self, name: &str) {
        self.model.remove_picker(name);
    }

    /// Makes the named picker current. Returns false for unknown names.
    pub fn set_current_picker(&mut self, name: &str) -> bool {
        self.model.set_current(name)
    }

    // === BUTTON EDITS ===

    /// Creates a button on the current picker from a spec.
    ///
    /// The single creation entry point: assigns the next `button_<n>`
    /// id, fills the remaining defaults, and commits an "Add Button"
    /// history group. Returns the new id, or `None` (with a warning)
    /// when no picker is current.
    pub fn add_button(&mut self, spec: ButtonSpec) -> Option<String> {
        let Some(picker_name) = self.model.current.clone() else {
            warn!("no current picker selected, button not added");
            return None;
        };
        let picker = self.model.current_mut()?;

        let id = picker.allocate_button_id();
        let button = Button::from_spec(id.clone(), spec);
        let index = picker.buttons.len();
        picker.buttons.push(button.clone());

        self.history.begin_action("Add Button");
        self.history.record(EditOp::InsertButton {
            picker: picker_name,
            index,
            button: Box::new(button),
        });
        self.history.end_action();

        debug!(id = %id, "button added");
        Some(id)
    }

    /// Deletes a button from the current picker by id.
    ///
    /// Returns false (with a warning) when the button or picker is
    /// missing. Commits a "Delete Button" history group.
    pub fn remove_button(&mut self, id: &str) -> bool {
        let Some(picker_name) = self.model.current.clone() else {
            warn!("no current picker selected, nothing to delete");
            return false;
        };
        let Some(picker) = self.model.current_mut() else {
            return false;
        };
        let Some((index, button)) = picker.remove_button(id) else {
            warn!(id, "button not found, nothing to delete");
            return false;
        };

        self.history.begin_action("Delete Button");
        self.history.record(EditOp::RemoveButton {
            picker: picker_name,
            index,
            button: Box::new(button),
        });
        self.history.end_action();
        true
    }

    /// Moves a button to a new canvas position as one "Move Button"
    /// history group.
    pub fn move_button(&mut self, id: &str, position: Vec2) -> bool {
        self.update_button(id, "Move Button", |button| {
            button.position = position;
        })
    }

    /// Applies an arbitrary property edit to a button on the current
    /// picker, committed as one named history group.
    ///
    /// This is the properties-panel path: the closure mutates the
    /// button in place and the before/after pair becomes the command
    /// object. An edit that changes nothing commits nothing. Returns
    /// false when the button or picker is missing.
    pub fn update_button(
        &mut self,
        id: &str,
        action_name: &str,
        edit: impl FnOnce(&mut Button),
    ) -> bool {
        let Some(picker_name) = self.model.current.clone() else {
            warn!("no current picker selected, nothing to edit");
            return false;
        };
        let Some(picker) = self.model.current_mut() else {
            return false;
        };
        let Some(index) = picker.button_index(id) else {
            warn!(id, "button not found, nothing to edit");
            return false;
        };

        let before = picker.buttons[index].clone();
        edit(&mut picker.buttons[index]);
        let after = picker.buttons[index].clone();
        if after == before {
            return true;
        }
        // Identity never changes after creation.
        if after.id != before.id {
            warn!(id, "button id edits are ignored");
            picker.buttons[index].id = before.id.clone();
        }

        self.history.begin_action(action_name);
        self.history.record(EditOp::ReplaceButton {
            picker: picker_name,
            index,
            before: Box::new(before),
            after: Box::new(picker.buttons[index].clone()),
        });
        self.history.end_action();
        true
    }

    // === UNDO / REDO ===

    /// Undoes the most recent action inside the host's undo chunk.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.model, &self.host)
    }

    /// Redoes the most recently undone action inside the host's undo
    /// chunk.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.model, &self.host)
    }

    /// Menu label for the next undo.
    #[must_use]
    pub fn undo_label(&self) -> String {
        self.history.undo_label()
    }

    /// Menu label for the next redo.
    #[must_use]
    pub fn redo_label(&self) -> String {
        self.history.redo_label()
    }

    // === PERSISTENCE ===

    /// Saves every picker to a file. Failures are logged and reported
    /// as `false`; no error escapes the persistence boundary.
    pub fn save_pickers(&self, path: &Path) -> bool {
        match PickerFileService::save(&self.model, path) {
            Ok(()) => {
                debug!(path = %path.display(), "pickers saved");
                true
            }
            Err(err) => {
                error!("error saving pickers: {err:#}");
                false
            }
        }
    }

    /// Loads a picker file, replacing the whole model.
    ///
    /// On success the first picker in the file becomes current, the
    /// undo history is cleared (its commands reference the replaced
    /// model), and hotkey bindings pointing at vanished buttons are
    /// pruned. Failures are logged and reported as `false`.
    pub fn load_pickers(&mut self, path: &Path) -> bool {
        match PickerFileService::load(path) {
            Ok(store) => {
                self.model = store;
                self.history.clear();
                self.prune_hotkeys();
                debug!(path = %path.display(), "pickers loaded");
                true
            }
            Err(err) => {
                error!("error loading pickers: {err:#}");
                false
            }
        }
    }

    // === HOTKEYS ===

    /// Binds a chord to a button on the current picker.
    ///
    /// Returns false (with a warning) for unknown buttons or chords
    /// already taken.
    pub fn bind_hotkey(&mut self, chord: &str, button_id: &str) -> bool {
        if self.model.current_button(button_id).is_none() {
            warn!(button_id, "cannot bind hotkey to unknown button");
            return false;
        }
        let registered = self.hotkeys.register(chord, button_id);
        if !registered {
            warn!(chord, "hotkey already bound");
        }
        registered
    }

    /// Removes a chord binding. Returns false when the chord was free.
    pub fn unbind_hotkey(&mut self, chord: &str) -> bool {
        self.hotkeys.unregister(chord)
    }

    /// Resolves a chord and executes the bound button. Returns whether
    /// the chord was handled.
    pub fn handle_key(&mut self, chord: &str) -> bool {
        let Some(button_id) = self.hotkeys.resolve(chord).map(String::from) else {
            return false;
        };
        self.execute_button(&button_id);
        true
    }

    /// Saves hotkey bindings to their own config file. Logged-boolean
    /// contract, like picker persistence.
    pub fn save_hotkeys(&self, path: &Path) -> bool {
        match self.hotkeys.save(path) {
            Ok(()) => true,
            Err(err) => {
                error!("error saving hotkeys: {err:#}");
                false
            }
        }
    }

    /// Loads hotkey bindings, pruning chords whose button no longer
    /// exists. Logged-boolean contract.
    pub fn load_hotkeys(&mut self, path: &Path) -> bool {
        match HotkeyMap::load(path) {
            Ok(map) => {
                self.hotkeys = map;
                self.prune_hotkeys();
                true
            }
            Err(err) => {
                error!("error loading hotkeys: {err:#}");
                false
            }
        }
    }

    fn prune_hotkeys(&mut self) {
        let model = &self.model;
        let dropped = self
            .hotkeys
            .retain_buttons(|button_id| model.current_button(button_id).is_some());
        for (chord, button_id) in dropped {
            warn!(%chord, %button_id, "dropped hotkey for missing button");
        }
    }
}
