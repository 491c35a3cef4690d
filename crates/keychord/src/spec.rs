use crate::Key;

// Central mapping between enum variants and spec strings for shorthand/non-name specs.
// Extend this list to cover more punctuation or shorthand.
macro_rules! key_spec_map {
    ($m:ident, $arg:tt) => {
        $m! { $arg,
            Digit0 => "0",
            Digit1 => "1",
            Digit2 => "2",
            Digit3 => "3",
            Digit4 => "4",
            Digit5 => "5",
            Digit6 => "6",
            Digit7 => "7",
            Digit8 => "8",
            Digit9 => "9",
            Space => " ",
            Minus => "-",
            Equal => "=",
            Plus => "+",
            LeftBracket => "[",
            RightBracket => "]",
            Backslash => "\\",
            Semicolon => ";",
            Quote => "'",
            Comma => ",",
            Period => ".",
            Slash => "/",
            Grave => "`",
        }
    };
}

macro_rules! to_spec_match {
    ( $key:expr, $( $k:ident => $s:expr, )* ) => {
        match $key {
            $( Key::$k => $s, )*
            _ => $key.name(),
        }
    }
}

macro_rules! from_spec_match {
    ( $s:expr, $( $k:ident => $v:literal, )* ) => {{
        match $s {
            $( $v => Some(Key::$k), )*
            _ => None,
        }
    }}
}

// Aliases that only apply to parsing specs (not emitted by to_spec).
macro_rules! key_spec_aliases {
    ($m:ident, $arg:expr) => {
        $m! { $arg,
            Return => "enter",
            Return => "ret",
            Backslash => "backslash",
            Comma => "comma",
            Period => "period",
            Slash => "slash",
            Minus => "minus",
            Equal => "equal",
            Plus => "plus",
            Semicolon => "semicolon",
            Quote => "quote",
            Grave => "grave",
            LeftBracket => "leftbracket",
            RightBracket => "rightbracket",
            ForwardDelete => "del",
            ForwardDelete => "delete",

            Escape => "esc",
            Space => "space",

            LeftArrow => "left",
            RightArrow => "right",
            UpArrow => "up",
            DownArrow => "down",
            PageUp => "pgup",
            PageDown => "pgdn",
        }
    };
}

/// Parses a key specification into a `Key`.
///
/// First tries a case-insensitive variant name (via `Key::from_name`), then
/// the symbol shorthands (digits and punctuation, exact match), then the
/// case-insensitive alias words.
pub(crate) fn from_spec(s: &str) -> Option<Key> {
    if let Some(k) = Key::from_name(s) {
        return Some(k);
    }
    if let some @ Some(_) = key_spec_map!(from_spec_match, s) {
        return some;
    }
    let lowered = s.to_ascii_lowercase();
    key_spec_aliases!(from_spec_match, lowered.as_str())
}

/// Returns the key specification string for a `Key`.
///
/// Uses the shorthand symbol where one exists (digits, punctuation, space),
/// otherwise the lowercased variant name.
pub(crate) fn to_spec(key: Key) -> String {
    let s = key_spec_map!(to_spec_match, key);
    s.to_ascii_lowercase()
}

impl Key {
    /// Parses a key specification string into a `Key`.
    ///
    /// Accepts variant names case-insensitively, symbol shorthands
    /// (`0`-`9`, `-`, `=`, `+`, `[`, `]`, `\`, `;`, `'`, `,`, `.`, `/`, `` ` ``,
    /// and a literal space), and alias words such as `esc`, `enter`, `left`,
    /// `pgup`, `del`. Returns `None` if nothing matches.
    pub fn from_spec(s: &str) -> Option<Self> {
        from_spec(s)
    }

    /// Returns the key specification string for this `Key`.
    pub fn to_spec(self) -> String {
        to_spec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_roundtrip(k: Key) {
        let spec = to_spec(k);
        assert_eq!(
            from_spec(&spec),
            Some(k),
            "roundtrip failed for {} -> {}",
            k.name(),
            spec
        );
    }

    #[test]
    fn digit_roundtrip_and_alias() {
        assert_roundtrip(Key::Digit1);
        assert_eq!(from_spec("1"), Some(Key::Digit1));
        assert_eq!(from_spec("digit1"), Some(Key::Digit1));
    }

    #[test]
    fn punctuation_roundtrip_and_alias() {
        assert_roundtrip(Key::Comma);
        assert_eq!(to_spec(Key::Comma), ",");
        assert_eq!(from_spec(","), Some(Key::Comma));
        assert_eq!(from_spec("comma"), Some(Key::Comma));

        assert_roundtrip(Key::Plus);
        assert_eq!(from_spec("+"), Some(Key::Plus));
        assert_eq!(from_spec("plus"), Some(Key::Plus));
    }

    #[test]
    fn letter_roundtrip() {
        assert_roundtrip(Key::A);
        assert_eq!(to_spec(Key::A), "a");
        assert_eq!(from_spec("a"), Some(Key::A));
        assert_eq!(from_spec("A"), Some(Key::A));
    }

    #[test]
    fn named_roundtrip_and_alias() {
        assert_roundtrip(Key::Tab);
        assert_eq!(to_spec(Key::Tab), "tab");

        assert_roundtrip(Key::Space);
        assert_eq!(to_spec(Key::Space), " ");
        assert_eq!(from_spec(" "), Some(Key::Space));
        assert_eq!(from_spec("space"), Some(Key::Space));

        assert_eq!(from_spec("enter"), Some(Key::Return));
        assert_eq!(from_spec("esc"), Some(Key::Escape));
        assert_eq!(from_spec("left"), Some(Key::LeftArrow));
        assert_eq!(from_spec("pgdn"), Some(Key::PageDown));
        assert_eq!(from_spec("del"), Some(Key::ForwardDelete));
        assert_eq!(from_spec("menu"), Some(Key::Menu));
    }
}
