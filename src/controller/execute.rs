//! Button execution: dispatch over the variant set against the host.
//!
//! Execution follows the crate's error model: user-input problems (no
//! targets, empty script, missing attribute paths) are warnings and the
//! operation is skipped; host-side failures are caught per invocation
//! and logged. Nothing propagates to the caller.

use super::PickerController;
use crate::models::{AttributeOp, ButtonKind, PoseData, ScriptLanguage};
use crate::scene::{attribute_path, SceneHost};
use anyhow::Result;
use tracing::{debug, warn};

impl<H: SceneHost> PickerController<H> {
    /// Executes a button on the current picker by id.
    ///
    /// Unknown ids and buttons on no current picker are warnings;
    /// text buttons are a deliberate no-op.
    pub fn execute_button(&mut self, button_id: &str) {
        let Some(picker) = self.model.current() else {
            warn!("no current picker selected, nothing to execute");
            return;
        };
        let Some(button) = picker.button(button_id) else {
            warn!(button_id, "button not found, nothing to execute");
            return;
        };
        let label = button.label.clone();
        let kind = button.kind.clone();

        let outcome = match kind {
            ButtonKind::Select { target_nodes, .. } => self.execute_select(&label, &target_nodes),
            ButtonKind::Script { script, language } => {
                self.execute_script(&label, &script, language)
            }
            ButtonKind::Pose {
                target_nodes,
                pose_data,
            } => self.execute_pose(&label, &target_nodes, &pose_data),
            ButtonKind::Attribute {
                target_node,
                attribute,
                operation,
                value,
                nudge_amount,
            } => self.execute_attribute(&label, &target_node, &attribute, operation, value, nudge_amount),
            ButtonKind::Slider {
                target_node,
                attribute,
                current_value,
                is_2d,
                second_attribute,
                second_current_value,
                ..
            } => self.execute_slider(
                &target_node,
                &attribute,
                current_value,
                is_2d,
                &second_attribute,
                second_current_value,
            ),
            ButtonKind::Checkbox {
                target_node,
                attribute,
                checked_value,
                unchecked_value,
                is_checked,
            } => {
                let new_value = if is_checked { unchecked_value } else { checked_value };
                match self.execute_checkbox(&label, &target_node, &attribute, new_value) {
                    Ok(true) => {
                        // The toggle state lives on the button itself.
                        if let Some(button) = self
                            .model
                            .current_mut()
                            .and_then(|p| p.button_mut(button_id))
                        {
                            if let ButtonKind::Checkbox { is_checked, .. } = &mut button.kind {
                                *is_checked = !*is_checked;
                            }
                        }
                        Ok(())
                    }
                    Ok(false) => Ok(()),
                    Err(err) => Err(err),
                }
            }
            ButtonKind::Radius {
                target_node,
                attribute,
                current_value,
                ..
            } => self.execute_radius(&label, &target_node, &attribute, current_value),
            ButtonKind::Text { .. } => {
                debug!(button_id, "text buttons do not execute");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            warn!(button_id, "button execution failed: {err:#}");
        }
    }

    fn execute_select(&self, label: &str, target_nodes: &[String]) -> Result<()> {
        if target_nodes.is_empty() {
            warn!("select button '{label}' has no target nodes");
            return Ok(());
        }

        self.host.clear_selection();

        let mut selected_any = false;
        for node in target_nodes {
            if self.host.object_exists(node) {
                self.host.select(node)?;
                selected_any = true;
            }
        }

        if !selected_any {
            warn!("no valid target nodes found for button '{label}'");
        }
        Ok(())
    }

    fn execute_script(&self, label: &str, script: &str, language: ScriptLanguage) -> Result<()> {
        if script.is_empty() {
            warn!("script button '{label}' has no script");
            return Ok(());
        }

        match self.host.run_script(script, language) {
            Ok(()) => debug!("executed script from button '{label}'"),
            Err(err) => warn!("script execution error in button '{label}': {err:#}"),
        }
        Ok(())
    }

    fn execute_pose(&self, label: &str, target_nodes: &[String], pose_data: &PoseData) -> Result<()> {
        if target_nodes.is_empty() {
            warn!("pose button '{label}' has no target nodes");
            return Ok(());
        }

        let mut applied_any = false;
        for node in target_nodes {
            if !self.host.object_exists(node) {
                continue;
            }
            let Some(attributes) = pose_data.get(node) else {
                continue;
            };
            for (attribute, value) in attributes {
                let path = attribute_path(node, attribute);
                if !self.host.object_exists(&path) {
                    continue;
                }
                match self.host.set_attribute(&path, *value) {
                    Ok(()) => applied_any = true,
                    Err(err) => warn!("could not set {path}: {err:#}"),
                }
            }
        }

        if applied_any {
            debug!("applied pose from button '{label}'");
        } else {
            warn!("could not apply pose from button '{label}'");
        }
        Ok(())
    }

    fn execute_attribute(
        &self,
        label: &str,
        target_node: &str,
        attribute: &str,
        operation: AttributeOp,
        value: f64,
        nudge_amount: f64,
    ) -> Result<()> {
        if target_node.is_empty() || attribute.is_empty() {
            warn!("attribute button '{label}' is missing target or attribute");
            return Ok(());
        }

        let path = attribute_path(target_node, attribute);
        if !self.host.object_exists(&path) {
            warn!("attribute button '{label}': {path} does not exist");
            return Ok(());
        }

        match operation {
            AttributeOp::Set => {
                self.host.set_attribute(&path, value)?;
                debug!("set {path} to {value}");
            }
            AttributeOp::Toggle => {
                let current = self.host.get_attribute(&path)?;
                let toggled = if current == 0.0 { 1.0 } else { 0.0 };
                self.host.set_attribute(&path, toggled)?;
                debug!("toggled {path} from {current} to {toggled}");
            }
            AttributeOp::Nudge => {
                let current = self.host.get_attribute(&path)?;
                let nudged = current + nudge_amount;
                self.host.set_attribute(&path, nudged)?;
                debug!("nudged {path} from {current} to {nudged}");
            }
        }
        Ok(())
    }

    fn execute_slider(
        &self,
        target_node: &str,
        attribute: &str,
        current_value: f64,
        is_2d: bool,
        second_attribute: &str,
        second_current_value: f64,
    ) -> Result<()> {
        if !target_node.is_empty() && !attribute.is_empty() {
            let path = attribute_path(target_node, attribute);
            if self.host.object_exists(&path) {
                self.host.set_attribute(&path, current_value)?;
            }
        }

        if is_2d && !target_node.is_empty() && !second_attribute.is_empty() {
            let path = attribute_path(target_node, second_attribute);
            if self.host.object_exists(&path) {
                self.host.set_attribute(&path, second_current_value)?;
            }
        }
        Ok(())
    }

    /// Returns whether the value was written; the toggle state only
    /// flips on a successful write.
    fn execute_checkbox(
        &self,
        label: &str,
        target_node: &str,
        attribute: &str,
        new_value: f64,
    ) -> Result<bool> {
        if target_node.is_empty() || attribute.is_empty() {
            warn!("checkbox button '{label}' is missing target or attribute");
            return Ok(false);
        }

        let path = attribute_path(target_node, attribute);
        if !self.host.object_exists(&path) {
            warn!("checkbox button '{label}': {path} does not exist");
            return Ok(false);
        }

        self.host.set_attribute(&path, new_value)?;
        debug!("checkbox {path} set to {new_value}");
        Ok(true)
    }

    fn execute_radius(
        &self,
        label: &str,
        target_node: &str,
        attribute: &str,
        current_value: f64,
    ) -> Result<()> {
        if target_node.is_empty() || attribute.is_empty() {
            warn!("radius button '{label}' is missing target or attribute");
            return Ok(());
        }

        let path = attribute_path(target_node, attribute);
        if !self.host.object_exists(&path) {
            warn!("radius button '{label}': {path} does not exist");
            return Ok(());
        }

        self.host.set_attribute(&path, current_value)?;
        debug!("radius {path} set to {current_value}");
        Ok(())
    }
}
