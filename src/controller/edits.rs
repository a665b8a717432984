//! Reversible edit commands over the picker store.
//!
//! Each command captures the exact value it inserts, removes, or
//! replaces, so replay never needs to snapshot a whole button list.
//! Commands address the picker by name and the button by index; a
//! command replayed against a store that no longer matches (picker
//! removed, list reshaped) fails cleanly and the history manager logs
//! and moves on.

use crate::history::Edit;
use crate::models::{Button, Picker, PickerStore};
use anyhow::Result;

/// A single reversible mutation of the picker store.
#[derive(Debug, Clone)]
pub enum EditOp {
    /// A button was added at `index`.
    InsertButton {
        picker: String,
        index: usize,
        button: Box<Button>,
    },
    /// A button was deleted from `index`.
    RemoveButton {
        picker: String,
        index: usize,
        button: Box<Button>,
    },
    /// The button at `index` changed from `before` to `after`.
    ReplaceButton {
        picker: String,
        index: usize,
        before: Box<Button>,
        after: Box<Button>,
    },
}

fn picker_mut<'a>(store: &'a mut PickerStore, name: &str) -> Result<&'a mut Picker> {
    store
        .pickers
        .get_mut(name)
        .ok_or_else(|| anyhow::anyhow!("Picker '{name}' no longer exists"))
}

fn insert_at(picker: &mut Picker, index: usize, button: &Button) -> Result<()> {
    if index > picker.buttons.len() {
        anyhow::bail!(
            "Insert index {index} out of range for picker '{}' ({} buttons)",
            picker.name,
            picker.buttons.len()
        );
    }
    picker.buttons.insert(index, button.clone());
    Ok(())
}

fn remove_at(picker: &mut Picker, index: usize, expected_id: &str) -> Result<Button> {
    if index >= picker.buttons.len() {
        anyhow::bail!(
            "Remove index {index} out of range for picker '{}' ({} buttons)",
            picker.name,
            picker.buttons.len()
        );
    }
    if picker.buttons[index].id != expected_id {
        anyhow::bail!(
            "Button at index {index} in picker '{}' is '{}', expected '{expected_id}'",
            picker.name,
            picker.buttons[index].id
        );
    }
    Ok(picker.buttons.remove(index))
}

fn replace_at(picker: &mut Picker, index: usize, value: &Button) -> Result<()> {
    if index >= picker.buttons.len() {
        anyhow::bail!(
            "Replace index {index} out of range for picker '{}' ({} buttons)",
            picker.name,
            picker.buttons.len()
        );
    }
    picker.buttons[index] = value.clone();
    Ok(())
}

impl Edit for EditOp {
    type Target = PickerStore;

    fn apply(&self, store: &mut PickerStore) -> Result<()> {
        match self {
            Self::InsertButton { picker, index, button } => {
                insert_at(picker_mut(store, picker)?, *index, button)
            }
            Self::RemoveButton { picker, index, button } => {
                remove_at(picker_mut(store, picker)?, *index, &button.id).map(|_| ())
            }
            Self::ReplaceButton { picker, index, after, .. } => {
                replace_at(picker_mut(store, picker)?, *index, after)
            }
        }
    }

    fn revert(&self, store: &mut PickerStore) -> Result<()> {
        match self {
            Self::InsertButton { picker, index, button } => {
                remove_at(picker_mut(store, picker)?, *index, &button.id).map(|_| ())
            }
            Self::RemoveButton { picker, index, button } => {
                insert_at(picker_mut(store, picker)?, *index, button)
            }
            Self::ReplaceButton { picker, index, before, .. } => {
                replace_at(picker_mut(store, picker)?, *index, before)
            }
        }
    }
}
