//! Persisted configuration stores for vidra.
//!
//! Two on-disk resources live here, both RON documents under the user's
//! config directory:
//!
//! - the shortcut store (`shortcuts.ron`): a map from action id to a key
//!   chord spec string;
//! - the custom command store (`commands.ron`): user-authored commands with
//!   generated identities and the counter those identities are drawn from.
//!
//! Both stores treat a missing or unreadable file as empty; parse errors are
//! surfaced through [`Error`] only on the explicit `try_load` path used by
//! `vidra check`.

use std::{
    env,
    path::{Path, PathBuf},
};

mod commands;
mod error;
mod shortcuts;

#[cfg(test)]
mod test_stores;

pub use commands::{CommandGroup, CustomCommand, CustomCommandStore, KIND_SHORTCUT};
pub use error::Error;
pub use shortcuts::ShortcutStore;

/// Determine the user config directory for vidra.
///
/// Policy:
/// 1) `$VIDRA_CONFIG_DIR` when set and non-empty.
/// 2) `$XDG_CONFIG_HOME/vidra` when set and non-empty.
/// 3) `~/.config/vidra`.
pub fn default_config_dir() -> PathBuf {
    if let Ok(dir) = env::var("VIDRA_CONFIG_DIR")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return PathBuf::from(xdg).join("vidra");
    }
    let home = env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("vidra")
}

/// Resolved locations of the persisted stores.
///
/// Constructed once at startup and passed into the components that need
/// them; nothing in the workspace reaches for ambient global settings.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Path of the shortcut store file.
    pub shortcuts: PathBuf,
    /// Path of the custom command store file.
    pub commands: PathBuf,
}

impl ConfigPaths {
    /// Resolve store paths under `explicit` when given, else under
    /// [`default_config_dir`].
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let dir = explicit.map_or_else(default_config_dir, Path::to_path_buf);
        Self {
            shortcuts: dir.join("shortcuts.ron"),
            commands: dir.join("commands.ron"),
        }
    }
}
