//! Scene-graph host contract.
//!
//! The crate never talks to a 3D application directly; it requests
//! operations through [`SceneHost`] and receives success or failure.
//! Node and attribute existence checks are the host's responsibility.
//! The host also provides the transactional boundary replay batches run
//! inside, so undoing a group reads as a single step in the host's own
//! history.

use crate::history::TransactionBoundary;
use crate::models::ScriptLanguage;
use anyhow::Result;

/// Operations the embedding 3D application performs on behalf of the
/// picker core.
///
/// Paths are plain node names; attributes address as
/// `"<node>.<attribute>"` (see [`attribute_path`]). All calls are
/// synchronous — a long-running user script blocks until the host
/// returns, which is an accepted property of embedding arbitrary code.
pub trait SceneHost: TransactionBoundary {
    /// Whether a node or attribute path exists in the scene.
    fn object_exists(&self, path: &str) -> bool;

    /// Empties the host's selection.
    fn clear_selection(&self);

    /// Adds a node to the host's selection.
    ///
    /// # Errors
    ///
    /// Fails when the host rejects the node (deleted mid-operation,
    /// locked layers, and similar host-side conditions).
    fn select(&self, node: &str) -> Result<()>;

    /// Reads a numeric attribute.
    ///
    /// # Errors
    ///
    /// Fails for unknown paths or non-numeric attributes.
    fn get_attribute(&self, attr_path: &str) -> Result<f64>;

    /// Writes a numeric attribute.
    ///
    /// # Errors
    ///
    /// Fails for unknown paths, locked or connection-driven attributes.
    fn set_attribute(&self, attr_path: &str, value: f64) -> Result<()>;

    /// Executes a user-authored script in the host's interpreter.
    ///
    /// # Errors
    ///
    /// Fails when the script itself raises; the caller logs and
    /// continues.
    fn run_script(&self, source: &str, language: ScriptLanguage) -> Result<()>;
}

/// Joins a node and attribute into the host path form `"node.attribute"`.
#[must_use]
pub fn attribute_path(node: &str, attribute: &str) -> String {
    format!("{node}.{attribute}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_path_form() {
        assert_eq!(attribute_path("arm_ctrl", "rotateX"), "arm_ctrl.rotateX");
    }
}
