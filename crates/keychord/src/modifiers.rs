use serde::{Deserialize, Serialize};

/// Modifier keys, in a platform-neutral vocabulary.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Modifier {
    Ctrl,
    Shift,
    Alt,
    Meta,
}

impl Modifier {
    /// Parses a modifier specification string, case-insensitively.
    ///
    /// Accepted aliases: `ctrl`/`control`, `shift`, `alt`/`opt`/`option`,
    /// `meta`/`super`/`cmd`/`win`.
    pub fn from_spec(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some(Self::Ctrl),
            "shift" => Some(Self::Shift),
            "alt" | "opt" | "option" => Some(Self::Alt),
            "meta" | "super" | "cmd" | "win" => Some(Self::Meta),
            _ => None,
        }
    }

    /// Returns the canonical spec string for this modifier, always lowercased.
    pub fn to_spec(self) -> &'static str {
        match self {
            Self::Ctrl => "ctrl",
            Self::Shift => "shift",
            Self::Alt => "alt",
            Self::Meta => "meta",
        }
    }
}
