use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{Key, Modifier};

/// A key chord: a set of modifiers plus a single key.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    /// Set of modifier keys held down for this chord.
    pub modifiers: HashSet<Modifier>,
    /// The non-modifier key for this chord.
    pub key: Key,
}

impl Chord {
    /// Parses a chord specification of the form `"ctrl+shift+s"`.
    ///
    /// - Case-insensitive for both modifiers and the key.
    /// - Components are separated by `+`; the last component is always the
    ///   key spec. A trailing empty component means a literal `+` key, so
    ///   `"alt++"` binds Alt and the plus key.
    /// - The key accepts the full `Key::from_spec` space.
    pub fn parse(s: &str) -> Option<Self> {
        let mut buf: Vec<&str> = s.split('+').collect();
        let mut key_raw = buf.pop()?;
        if key_raw.is_empty() {
            // A literal "+" key splits into two trailing empty components.
            if !buf.pop()?.is_empty() {
                return None;
            }
            key_raw = "+";
        }
        let key = if key_raw == " " {
            Key::from_spec(" ")
        } else {
            Key::from_spec(key_raw.trim())
        }?;
        let mut modifiers = HashSet::new();
        for m in buf {
            let mt = m.trim();
            if mt.is_empty() {
                return None;
            }
            modifiers.insert(Modifier::from_spec(mt)?);
        }
        Some(Self { modifiers, key })
    }

    /// Builds a chord from a bare key with no modifiers.
    pub fn bare(key: Key) -> Self {
        Self {
            modifiers: HashSet::new(),
            key,
        }
    }

    fn modifier_order(m: &Modifier) -> usize {
        // Canonical order: Ctrl, Alt, Shift, Meta
        match m {
            Modifier::Ctrl => 0,
            Modifier::Alt => 1,
            Modifier::Shift => 2,
            Modifier::Meta => 3,
        }
    }

    /// Returns the canonical string form of this chord: modifiers in
    /// canonical order, each component in its canonical lowercase spec.
    pub fn to_string_canonical(&self) -> String {
        let mut mods: Vec<Modifier> = self.modifiers.iter().copied().collect();
        mods.sort_by_key(Self::modifier_order);
        let mut out: Vec<String> = Vec::new();
        for m in mods {
            out.push(m.to_spec().to_string());
        }
        out.push(self.key.to_spec());
        out.join("+")
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_canonical())
    }
}
