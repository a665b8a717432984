//! Picker file I/O service.
//!
//! Pickers persist as one JSON document holding every open picker:
//! `{"pickers": {<name>: {...}}}`. Reads are tolerant — any field a
//! variant or picker can default is defaulted — so files written by
//! older versions stay loadable. There is no schema version field;
//! evolving the format means keeping the read path tolerant.

use crate::models::PickerStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Service for reading and writing picker files.
///
/// All operations go through this service to ensure consistent handling
/// of directories, atomic writes, and error messages.
pub struct PickerFileService;

impl PickerFileService {
    /// Saves every picker in the store to a JSON file.
    ///
    /// Missing parent directories are created. The write is atomic
    /// (temp file + rename) so the file is never left half-written.
    ///
    /// # Errors
    ///
    /// Returns errors for serialization failures, permission problems,
    /// or a failing atomic rename.
    pub fn save(store: &PickerStore, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string_pretty(store).context("Failed to serialize pickers")?;
        atomic_write(path, &json)
            .with_context(|| format!("Failed to save pickers to {}", path.display()))
    }

    /// Loads a picker file, replacing the entire store contents.
    ///
    /// The document is parsed in full before anything is returned, so a
    /// malformed file never yields a half-populated store. The first
    /// entry (file order) becomes the current picker when any exist.
    ///
    /// # Errors
    ///
    /// Returns errors for a missing file, unreadable contents, or
    /// malformed JSON.
    pub fn load(path: &Path) -> Result<PickerStore> {
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pickers from {}", path.display()))?;
        let mut store: PickerStore = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse pickers from {}", path.display()))?;

        store.current = store.pickers.keys().next().cloned();
        Ok(store)
    }
}

/// Writes content through a temp file and renames it into place.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to {}", path.display()))?;

    Ok(())
}
