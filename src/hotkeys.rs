//! Hotkey bindings: normalized key chords mapped to button ids.
//!
//! Bindings live in their own JSON config file, independent of picker
//! files, so a rig's layout and an artist's keys travel separately.
//! Chords are stored normalized; callers can pass `"Ctrl+Shift+a"` or
//! `"CTRL+SHIFT+A"` and hit the same binding.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Normalizes a key chord to the stored form: uppercase, no whitespace.
#[must_use]
pub fn normalize_chord(chord: &str) -> String {
    chord
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Mapping from normalized key chord to button id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotkeyMap {
    bindings: IndexMap<String, String>,
}

impl HotkeyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a chord for a button. Returns false when the chord is
    /// already taken (the existing binding wins).
    pub fn register(&mut self, chord: &str, button_id: impl Into<String>) -> bool {
        let key = normalize_chord(chord);
        if self.bindings.contains_key(&key) {
            return false;
        }
        self.bindings.insert(key, button_id.into());
        true
    }

    /// Removes a binding. Returns false when the chord was not bound.
    pub fn unregister(&mut self, chord: &str) -> bool {
        self.bindings.shift_remove(&normalize_chord(chord)).is_some()
    }

    /// Looks up the button bound to a chord.
    #[must_use]
    pub fn resolve(&self, chord: &str) -> Option<&str> {
        self.bindings.get(&normalize_chord(chord)).map(String::as_str)
    }

    /// Iterates over `(chord, button_id)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no chords are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Keeps only bindings whose button id passes the filter, returning
    /// the dropped `(chord, button_id)` pairs.
    ///
    /// Used at wire-up time to prune chords whose button no longer
    /// exists in the loaded pickers.
    pub fn retain_buttons(&mut self, mut keep: impl FnMut(&str) -> bool) -> Vec<(String, String)> {
        let mut dropped = Vec::new();
        self.bindings.retain(|chord, button_id| {
            if keep(button_id) {
                true
            } else {
                dropped.push((chord.clone(), button_id.clone()));
                false
            }
        });
        dropped
    }

    /// Saves the bindings as a flat JSON object, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns errors for serialization or file system failures.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
        }

        let json =
            serde_json::to_string_pretty(&self.bindings).context("Failed to serialize hotkeys")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write hotkeys to {}", path.display()))
    }

    /// Loads bindings from a JSON file, normalizing chords on the way in.
    ///
    /// A missing file yields an empty map — no bindings is a valid
    /// state, not an error.
    ///
    /// # Errors
    ///
    /// Returns errors for unreadable contents or malformed JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read hotkeys from {}", path.display()))?;
        let raw: IndexMap<String, String> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse hotkeys from {}", path.display()))?;

        let mut map = Self::new();
        for (chord, button_id) in raw {
            map.register(&chord, button_id);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_chord() {
        assert_eq!(normalize_chord("Ctrl+Shift+A"), "CTRL+SHIFT+A");
        assert_eq!(normalize_chord("ctrl + z"), "CTRL+Z");
        assert_eq!(normalize_chord("F5"), "F5");
    }

    #[test]
    fn test_register_and_resolve_ignore_case() {
        let mut map = HotkeyMap::new();
        assert!(map.register("Ctrl+A", "button_1"));
        assert_eq!(map.resolve("ctrl+a"), Some("button_1"));
        assert_eq!(map.resolve("CTRL + A"), Some("button_1"));
        assert_eq!(map.resolve("Ctrl+B"), None);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut map = HotkeyMap::new();
        assert!(map.register("Ctrl+A", "button_1"));
        assert!(!map.register("CTRL+a", "button_2"));
        assert_eq!(map.resolve("Ctrl+A"), Some("button_1"));
    }

    #[test]
    fn test_unregister() {
        let mut map = HotkeyMap::new();
        map.register("Ctrl+A", "button_1");
        assert!(map.unregister("ctrl+a"));
        assert!(!map.unregister("ctrl+a"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_retain_buttons_reports_dropped() {
        let mut map = HotkeyMap::new();
        map.register("Ctrl+A", "button_1");
        map.register("Ctrl+B", "button_2");

        let dropped = map.retain_buttons(|id| id == "button_1");
        assert_eq!(dropped, [("CTRL+B".to_string(), "button_2".to_string())]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_save_load_roundtrip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hotkeys.json");

        let mut map = HotkeyMap::new();
        map.register("Ctrl+A", "button_1");
        map.register("F5", "button_2");
        map.save(&path)?;

        let loaded = HotkeyMap::load(&path)?;
        assert_eq!(loaded, map);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let map = HotkeyMap::load(Path::new("/nonexistent/hotkeys.json")).unwrap();
        assert!(map.is_empty());
    }
}
