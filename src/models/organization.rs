//! Hierarchical organization of buttons into panels, tabs, sections and
//! groups.
//!
//! Units form a forest: every unit has at most one parent, roots are
//! tracked separately, and reparenting that would introduce a cycle is
//! rejected. Button membership is a loose association stored on the unit
//! only — a button can be referenced by zero or several units and carries
//! no back-reference.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nesting level of an organizational unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitLevel {
    Panel,
    Tab,
    Section,
    Group,
}

impl UnitLevel {
    /// Level tag, also the id prefix for units of this level.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Panel => "panel",
            Self::Tab => "tab",
            Self::Section => "section",
            Self::Group => "group",
        }
    }
}

/// A single grouping node referencing child units and owned buttons by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationalUnit {
    /// Unique id, `<level>_<n>`
    pub id: String,
    /// Display name
    pub name: String,
    /// Nesting level
    pub level: UnitLevel,
    /// Parent unit id; `None` for roots
    pub parent_id: Option<String>,
    /// Ordered child unit ids
    #[serde(default)]
    pub children: Vec<String>,
    /// Ids of buttons owned by this unit
    #[serde(default)]
    pub button_ids: Vec<String>,
    /// Free-form custom properties
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl OrganizationalUnit {
    fn new(id: String, name: String, level: UnitLevel, parent_id: Option<String>) -> Self {
        Self {
            id,
            name,
            level,
            parent_id,
            children: Vec::new(),
            button_ids: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Appends a child unit id, ignoring duplicates.
    pub fn add_child(&mut self, child_id: impl Into<String>) {
        let child_id = child_id.into();
        if !self.children.contains(&child_id) {
            self.children.push(child_id);
        }
    }

    /// Appends a button id, ignoring duplicates.
    pub fn add_button(&mut self, button_id: impl Into<String>) {
        let button_id = button_id.into();
        if !self.button_ids.contains(&button_id) {
            self.button_ids.push(button_id);
        }
    }

    /// Removes a button id if present.
    pub fn remove_button(&mut self, button_id: &str) {
        self.button_ids.retain(|id| id != button_id);
    }
}

/// Owner of the unit forest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    /// All units by id, in creation order
    units: IndexMap<String, OrganizationalUnit>,
    /// Ids of units with no parent
    root_units: Vec<String>,
    /// Total units ever created; drives id allocation so deleted ids are
    /// never reused
    #[serde(default)]
    created_count: u64,
}

impl Organizer {
    /// Creates an empty organizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new unit and returns its id.
    ///
    /// # Errors
    ///
    /// Fails when `parent_id` names a unit that does not exist.
    pub fn create_unit(
        &mut self,
        name: impl Into<String>,
        level: UnitLevel,
        parent_id: Option<&str>,
    ) -> Result<String> {
        if let Some(parent) = parent_id {
            if !self.units.contains_key(parent) {
                anyhow::bail!("Parent unit '{parent}' does not exist");
            }
        }

        self.created_count += 1;
        let unit_id = format!("{}_{}", level.tag(), self.created_count);
        let unit = OrganizationalUnit::new(
            unit_id.clone(),
            name.into(),
            level,
            parent_id.map(String::from),
        );
        self.units.insert(unit_id.clone(), unit);

        if let Some(parent) = parent_id {
            if let Some(parent_unit) = self.units.get_mut(parent) {
                parent_unit.add_child(unit_id.clone());
            }
        } else {
            self.root_units.push(unit_id.clone());
        }

        Ok(unit_id)
    }

    /// Deletes a unit and all of its descendants; a no-op for unknown ids.
    ///
    /// The unit is detached from its parent's child list (or the root
    /// list) before removal.
    pub fn delete_unit(&mut self, unit_id: &str) {
        let Some(unit) = self.units.get(unit_id) else {
            return;
        };

        let children = unit.children.clone();
        let parent_id = unit.parent_id.clone();

        for child_id in children {
            self.delete_unit(&child_id);
        }

        match parent_id {
            Some(parent) => {
                if let Some(parent_unit) = self.units.get_mut(&parent) {
                    parent_unit.children.retain(|id| id != unit_id);
                }
            }
            None => self.root_units.retain(|id| id != unit_id),
        }

        self.units.shift_remove(unit_id);
    }

    /// Reparents a unit, or makes it a root when `new_parent_id` is `None`.
    ///
    /// # Errors
    ///
    /// Fails for unknown ids and for moves that would break the forest
    /// invariant (a unit under itself or one of its descendants).
    pub fn move_unit(&mut self, unit_id: &str, new_parent_id: Option<&str>) -> Result<()> {
        if !self.units.contains_key(unit_id) {
            anyhow::bail!("Unit '{unit_id}' does not exist");
        }
        if let Some(parent) = new_parent_id {
            if !self.units.contains_key(parent) {
                anyhow::bail!("Parent unit '{parent}' does not exist");
            }
            if parent == unit_id || self.is_descendant(parent, unit_id) {
                anyhow::bail!("Moving unit '{unit_id}' under '{parent}' would create a cycle");
            }
        }

        let old_parent_id = self
            .units
            .get(unit_id)
            .and_then(|u| u.parent_id.clone());

        match old_parent_id {
            Some(old_parent) => {
                if let Some(parent_unit) = self.units.get_mut(&old_parent) {
                    parent_unit.children.retain(|id| id != unit_id);
                }
            }
            None => self.root_units.retain(|id| id != unit_id),
        }

        if let Some(unit) = self.units.get_mut(unit_id) {
            unit.parent_id = new_parent_id.map(String::from);
        }
        match new_parent_id {
            Some(parent) => {
                if let Some(parent_unit) = self.units.get_mut(parent) {
                    parent_unit.add_child(unit_id);
                }
            }
            None => self.root_units.push(unit_id.to_string()),
        }

        Ok(())
    }

    /// Whether `candidate` sits somewhere below `ancestor`.
    fn is_descendant(&self, candidate: &str, ancestor: &str) -> bool {
        let Some(unit) = self.units.get(ancestor) else {
            return false;
        };
        unit.children
            .iter()
            .any(|child| child == candidate || self.is_descendant(candidate, child))
    }

    /// Root-first id path from the top of the tree down to `unit_id`.
    ///
    /// An unknown id yields an empty path; a unit whose parent chain
    /// breaks mid-walk yields the ids found so far.
    #[must_use]
    pub fn get_unit_path(&self, unit_id: &str) -> Vec<String> {
        let mut path = Vec::new();
        let mut cursor = Some(unit_id.to_string());

        while let Some(id) = cursor {
            let Some(unit) = self.units.get(&id) else {
                break;
            };
            path.insert(0, id);
            cursor = unit.parent_id.clone();
        }

        path
    }

    /// Button ids owned by a unit, including descendants when `recursive`.
    #[must_use]
    pub fn get_buttons_in_unit(&self, unit_id: &str, recursive: bool) -> Vec<String> {
        let Some(unit) = self.units.get(unit_id) else {
            return Vec::new();
        };

        let mut buttons = unit.button_ids.clone();
        if recursive {
            for child_id in &unit.children {
                buttons.extend(self.get_buttons_in_unit(child_id, true));
            }
        }
        buttons
    }

    /// Adds a button id to a unit's owned list.
    ///
    /// # Errors
    ///
    /// Fails when the unit does not exist.
    pub fn assign_button(&mut self, unit_id: &str, button_id: impl Into<String>) -> Result<()> {
        self.units
            .get_mut(unit_id)
            .with_context(|| format!("Unit '{unit_id}' does not exist"))?
            .add_button(button_id);
        Ok(())
    }

    /// Removes a button id from a unit's owned list; no-op when absent.
    pub fn unassign_button(&mut self, unit_id: &str, button_id: &str) {
        if let Some(unit) = self.units.get_mut(unit_id) {
            unit.remove_button(button_id);
        }
    }

    /// Gets a unit by id.
    #[must_use]
    pub fn unit(&self, unit_id: &str) -> Option<&OrganizationalUnit> {
        self.units.get(unit_id)
    }

    /// Gets a mutable unit by id.
    pub fn unit_mut(&mut self, unit_id: &str) -> Option<&mut OrganizationalUnit> {
        self.units.get_mut(unit_id)
    }

    /// Ids of units with no parent, in creation order.
    #[must_use]
    pub fn root_units(&self) -> &[String] {
        &self.root_units
    }

    /// Number of live units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the organizer holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
