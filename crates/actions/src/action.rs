use keychord::Chord;

use crate::catalog::CatalogEntry;

/// How an action came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Compiled-in catalog entry, materialized on first lookup.
    Static,
    /// User-authored command created during this session.
    Custom,
    /// User-authored pass-through command bound only to a key, materialized
    /// from the persisted store at startup.
    ShortcutOnly,
}

/// A named, user-triggerable operation.
///
/// Actions are created once and live for the process lifetime; the registry
/// hands out shared references and there is no per-action delete.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Stable identity, used as the persistence key.
    id: String,
    /// Human-readable label.
    text: String,
    /// Symbolic icon name, if any.
    icon: Option<String>,
    /// Compiled-in shortcut, if any.
    default_shortcut: Option<Chord>,
    /// Effective shortcut after the last merge pass.
    shortcut: Option<Chord>,
    /// Provenance of this action.
    kind: ActionKind,
}

impl Action {
    /// Materialize a static action from its catalog entry.
    pub(crate) fn from_catalog(entry: &CatalogEntry) -> Self {
        let default_shortcut = entry.shortcut.and_then(Chord::parse);
        Self {
            id: entry.id.to_string(),
            text: entry.text.to_string(),
            icon: entry.icon.map(str::to_string),
            shortcut: default_shortcut.clone(),
            default_shortcut,
            kind: ActionKind::Static,
        }
    }

    /// Build a user-authored action with no icon and no default shortcut.
    pub(crate) fn user(id: &str, text: &str, kind: ActionKind) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            icon: None,
            default_shortcut: None,
            shortcut: None,
            kind,
        }
    }

    /// Stable action id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Symbolic icon name, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// The compiled-in shortcut, before any persisted override.
    pub fn default_shortcut(&self) -> Option<&Chord> {
        self.default_shortcut.as_ref()
    }

    /// The effective shortcut after the last merge pass.
    pub fn shortcut(&self) -> Option<&Chord> {
        self.shortcut.as_ref()
    }

    /// Provenance of this action.
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Set the effective shortcut from a persisted override, falling back to
    /// the compiled-in default when the override is absent.
    pub(crate) fn apply_override(&mut self, stored: Option<Chord>) {
        self.shortcut = stored.or_else(|| self.default_shortcut.clone());
    }
}
