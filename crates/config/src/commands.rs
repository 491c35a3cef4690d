//! The persisted custom command store.
//!
//! User-authored commands are stored as named groups with a `kind` tag plus
//! a top-level counter the generated identities are drawn from. Only groups
//! tagged [`KIND_SHORTCUT`] materialize into actions; other tags are
//! reserved for future command kinds and pass through untouched.

use std::{collections::BTreeMap, fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Error;

/// Tag value marking a group as a shortcut-bound command.
pub const KIND_SHORTCUT: &str = "shortcut";

/// One persisted command group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroup {
    /// The literal command text supplied by the user.
    pub command: String,
    /// Kind tag; only `"shortcut"` is recognized today.
    #[serde(default)]
    pub kind: String,
}

/// A materializable custom command: generated id plus its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCommand {
    /// Generated identity of the form `Command_<n>`; doubles as the action id.
    pub id: String,
    /// The command text, used as the action label.
    pub text: String,
}

/// On-disk document shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    /// Next-identity counter; always >= the highest `Command_<n>` suffix.
    #[serde(default)]
    counter: u32,
    /// Group name -> command entry.
    #[serde(default)]
    commands: BTreeMap<String, CommandGroup>,
}

/// Persisted list of user-authored commands.
#[derive(Debug, Clone)]
pub struct CustomCommandStore {
    /// Location of the backing file.
    path: PathBuf,
    /// Parsed document.
    file: StoreFile,
}

impl CustomCommandStore {
    /// Load the store from `path`, treating a missing or unreadable file as
    /// "no custom commands yet".
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_load(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                warn!("command store unreadable, starting empty: {}", e.pretty());
                Self {
                    path,
                    file: StoreFile::default(),
                }
            }
        }
    }

    /// Load the store from `path`, surfacing read and parse errors.
    pub fn try_load(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "no custom command store yet");
            return Ok(Self {
                path,
                file: StoreFile::default(),
            });
        }
        let text = fs::read_to_string(&path).map_err(|e| Error::Read {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let file: StoreFile = ron::from_str(&text).map_err(|e| Error::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { path, file })
    }

    /// The current identity counter (0 when the store is empty).
    pub fn counter(&self) -> u32 {
        self.file.counter
    }

    /// Number of persisted groups, regardless of kind.
    pub fn group_count(&self) -> usize {
        self.file.commands.len()
    }

    /// Enumerate every shortcut-bound command in stable (name) order.
    ///
    /// Groups with any other kind tag are ignored by this pass.
    pub fn load_all(&self) -> Vec<CustomCommand> {
        self.file
            .commands
            .iter()
            .filter(|(_, group)| group.kind == KIND_SHORTCUT)
            .map(|(name, group)| CustomCommand {
                id: name.clone(),
                text: group.command.clone(),
            })
            .collect()
    }

    /// Derive the next custom command from the current counter.
    ///
    /// The counter is read but not advanced or re-persisted here; the
    /// settings surface owns writes to this store.
    // TODO: advance and persist the counter atomically with group creation,
    // so two creations in one session cannot mint the same identity.
    pub fn create_one(&self, text: &str) -> CustomCommand {
        let id = format!("Command_{}", self.file.counter);
        CustomCommand {
            id,
            text: text.to_string(),
        }
    }
}
