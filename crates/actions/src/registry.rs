//! The lazily-populated action registry.

use std::collections::HashMap;

use config::{CustomCommandStore, Error, ShortcutStore};
use tracing::{debug, trace};

use crate::{Action, ActionKind, catalog};

/// Owns the set of live actions and resolves ids to them.
///
/// Static actions are created on first lookup from the compiled-in catalog;
/// user-authored ones are bulk-loaded at startup or created on demand.
/// Every creation re-applies the shortcut store across the whole live set:
/// the merge is cheap and idempotent, and a newly created action must never
/// carry a stale override from an earlier pass.
///
/// The registry lives on the interactive context only and needs no locking.
#[derive(Debug)]
pub struct ActionRegistry {
    /// Live actions keyed by id.
    live: HashMap<String, Action>,
    /// The persisted shortcut overrides, owned by the registry.
    shortcuts: ShortcutStore,
}

impl ActionRegistry {
    /// Create an empty registry over the given shortcut store.
    pub fn new(shortcuts: ShortcutStore) -> Self {
        Self {
            live: HashMap::new(),
            shortcuts,
        }
    }

    /// Resolve an action id, creating the action from the catalog on first
    /// use. Returns `None` for ids that are neither live nor in the catalog;
    /// the caller decides whether that is a logic fault or a custom command
    /// that has not been loaded yet.
    pub fn resolve(&mut self, id: &str) -> Option<&Action> {
        if !self.live.contains_key(id) {
            let entry = catalog::lookup(id).or_else(|| {
                debug!(id, "unknown action id");
                None
            })?;
            self.live.insert(id.to_string(), Action::from_catalog(entry));
            self.apply_shortcuts();
            trace!(id, live = self.live.len(), "materialized static action");
        }
        self.live.get(id)
    }

    /// Look up a live action without creating anything.
    pub fn get(&self, id: &str) -> Option<&Action> {
        self.live.get(id)
    }

    /// Materialize every shortcut-bound command from the store into the live
    /// set, then re-apply persisted shortcuts. Returns the number of actions
    /// added; ids that already exist are left untouched.
    pub fn load_custom_commands(&mut self, store: &CustomCommandStore) -> usize {
        let mut added = 0;
        for cmd in store.load_all() {
            if self.live.contains_key(&cmd.id) {
                continue;
            }
            self.live.insert(
                cmd.id.clone(),
                Action::user(&cmd.id, &cmd.text, ActionKind::ShortcutOnly),
            );
            added += 1;
        }
        self.apply_shortcuts();
        debug!(added, "loaded custom commands");
        added
    }

    /// Create a user action from the store's current counter and insert it.
    ///
    /// The shortcut merge runs immediately so a binding persisted for the
    /// same generated id in an earlier run is honored.
    pub fn create_custom(&mut self, store: &CustomCommandStore, text: &str) -> &Action {
        let cmd = store.create_one(text);
        let id = cmd.id.clone();
        self.live
            .insert(id.clone(), Action::user(&cmd.id, &cmd.text, ActionKind::Custom));
        self.apply_shortcuts();
        &self.live[&id]
    }

    /// Re-apply persisted overrides to every live action's effective
    /// shortcut. Idempotent.
    pub fn apply_shortcuts(&mut self) {
        let Self { live, shortcuts } = self;
        for action in live.values_mut() {
            let stored = shortcuts.get(action.id());
            action.apply_override(stored);
        }
    }

    /// Write every live action's effective binding back to the shortcut
    /// store and flush it to disk before returning.
    pub fn persist_shortcuts(&mut self) -> Result<(), Error> {
        let Self { live, shortcuts } = self;
        for (id, action) in live.iter() {
            match action.shortcut() {
                Some(chord) => shortcuts.set(id, chord),
                None => {
                    let _ = shortcuts.remove(id);
                }
            }
        }
        shortcuts.save()
    }

    /// Number of live actions.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// True when no actions have been materialized yet.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Iterate the live actions in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.live.values()
    }

    /// The shortcut store backing this registry.
    pub fn shortcut_store(&self) -> &ShortcutStore {
        &self.shortcuts
    }

    /// Mutable access to the backing shortcut store, for the shortcut
    /// editing surface.
    pub fn shortcut_store_mut(&mut self) -> &mut ShortcutStore {
        &mut self.shortcuts
    }
}
