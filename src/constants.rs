//! Application-wide constants.

/// The display name of the tool (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Rig Picker";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "RigPicker";

/// File name of the TOML configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the hotkey binding file, kept separate from picker files.
pub const HOTKEYS_FILE_NAME: &str = "hotkeys.json";

/// Committed undo groups kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;
