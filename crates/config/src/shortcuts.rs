//! The persisted shortcut store: action id -> key chord spec.

use std::{collections::BTreeMap, fs, path::PathBuf};

use keychord::Chord;
use tracing::{debug, warn};

use crate::Error;

/// Persisted mapping from action id to a chord spec string.
///
/// At most one binding exists per action id; saving is last-written-wins.
/// The store is only ever touched from the interactive context, so it needs
/// no locking, but the on-disk file is shared with other processes of the
/// application family and is therefore replaced atomically on save.
#[derive(Debug, Clone)]
pub struct ShortcutStore {
    /// Location of the backing file.
    path: PathBuf,
    /// Raw id -> spec entries as persisted.
    entries: BTreeMap<String, String>,
}

impl ShortcutStore {
    /// Load the store from `path`, treating a missing or unreadable file as
    /// empty. Parse failures are logged and also yield an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_load(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                warn!("shortcut store unreadable, starting empty: {}", e.pretty());
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    /// Load the store from `path`, surfacing read and parse errors.
    ///
    /// A file that simply does not exist yet is not an error; it yields an
    /// empty store.
    pub fn try_load(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "no shortcut store yet");
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }
        let text = fs::read_to_string(&path).map_err(|e| Error::Read {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let entries: BTreeMap<String, String> =
            ron::from_str(&text).map_err(|e| Error::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { path, entries })
    }

    /// Look up the persisted chord for an action id.
    ///
    /// Entries that no longer parse as chord specs are skipped with a
    /// warning so one bad line cannot shadow the compiled-in default.
    pub fn get(&self, id: &str) -> Option<Chord> {
        let spec = self.entries.get(id)?;
        match Chord::parse(spec) {
            Some(chord) => Some(chord),
            None => {
                warn!(id, spec, "ignoring unparseable shortcut entry");
                None
            }
        }
    }

    /// Record a binding for an action id, replacing any previous one.
    pub fn set(&mut self, id: &str, chord: &Chord) {
        self.entries
            .insert(id.to_string(), chord.to_string_canonical());
    }

    /// Drop the binding for an action id. Returns true when one existed.
    pub fn remove(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Iterate the raw persisted entries as `(id, spec)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of persisted entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the store back to disk and flush before returning.
    ///
    /// The document is written to a sibling temp file and renamed over the
    /// target, so concurrent readers always observe a complete document.
    pub fn save(&self) -> Result<(), Error> {
        let write_err = |e: std::io::Error| Error::Write {
            path: self.path.clone(),
            message: e.to_string(),
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let text = ron::ser::to_string_pretty(&self.entries, ron::ser::PrettyConfig::default())
            .map_err(|e| Error::Write {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        let tmp = self.path.with_extension("ron.tmp");
        fs::write(&tmp, text).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        debug!(path = %self.path.display(), entries = self.entries.len(), "saved shortcuts");
        Ok(())
    }
}
