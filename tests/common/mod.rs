//! Shared test double for the scene host.

use anyhow::Result;
use rigpicker::history::TransactionBoundary;
use rigpicker::models::ScriptLanguage;
use rigpicker::scene::SceneHost;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Fake host that records every call so tests can assert on the exact
/// traffic the controller produced.
#[derive(Default)]
pub struct RecordingHost {
    /// Known node names
    pub objects: RefCell<Vec<String>>,
    /// Known attribute paths and their values
    pub attributes: RefCell<BTreeMap<String, f64>>,
    /// Current selection, in selection order
    pub selection: RefCell<Vec<String>>,
    /// Scripts run, with their language
    pub scripts: RefCell<Vec<(String, ScriptLanguage)>>,
    /// Undo chunk open/close events, in order
    pub chunk_events: RefCell<Vec<&'static str>>,
    /// When true, every script invocation fails
    pub fail_scripts: bool,
}

#[allow(dead_code)]
impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node name as existing.
    pub fn with_object(self, name: &str) -> Self {
        self.objects.borrow_mut().push(name.to_string());
        self
    }

    /// Registers an attribute path (and its node) with a starting value.
    pub fn with_attribute(self, path: &str, value: f64) -> Self {
        if let Some((node, _)) = path.split_once('.') {
            self.objects.borrow_mut().push(node.to_string());
        }
        self.attributes.borrow_mut().insert(path.to_string(), value);
        self
    }

    pub fn attribute(&self, path: &str) -> Option<f64> {
        self.attributes.borrow().get(path).copied()
    }
}

impl TransactionBoundary for RecordingHost {
    fn acquire(&self) {
        self.chunk_events.borrow_mut().push("open");
    }

    fn release(&self) {
        self.chunk_events.borrow_mut().push("close");
    }
}

impl SceneHost for RecordingHost {
    fn object_exists(&self, path: &str) -> bool {
        self.objects.borrow().iter().any(|o| o == path)
            || self.attributes.borrow().contains_key(path)
    }

    fn clear_selection(&self) {
        self.selection.borrow_mut().clear();
    }

    fn select(&self, node: &str) -> Result<()> {
        self.selection.borrow_mut().push(node.to_string());
        Ok(())
    }

    fn get_attribute(&self, attr_path: &str) -> Result<f64> {
        self.attributes
            .borrow()
            .get(attr_path)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("unknown attribute '{attr_path}'"))
    }

    fn set_attribute(&self, attr_path: &str, value: f64) -> Result<()> {
        let mut attributes = self.attributes.borrow_mut();
        match attributes.get_mut(attr_path) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => anyhow::bail!("unknown attribute '{attr_path}'"),
        }
    }

    fn run_script(&self, source: &str, language: ScriptLanguage) -> Result<()> {
        if self.fail_scripts {
            anyhow::bail!("script raised an exception");
        }
        self.scripts
            .borrow_mut()
            .push((source.to_string(), language));
        Ok(())
    }
}
