use serde::{Deserialize, Serialize};

// Single source of truth for the key set: the macro emits the enum plus the
// name conversions so the two can never drift apart.
macro_rules! keys {
    ( $( $name:ident, )* ) => {
        /// Non-modifier keys the player can bind actions to.
        ///
        /// This is a portable, layout-independent set; it carries no hardware
        /// scancodes. Variant names double as the long-form spec names.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
        #[allow(missing_docs)]
        pub enum Key {
            $( $name, )*
        }

        impl Key {
            /// Canonical variant name (e.g. `"PageUp"`).
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$name => stringify!($name), )*
                }
            }

            /// Parses a case-insensitive variant name into a `Key`.
            pub fn from_name(s: &str) -> Option<Self> {
                $(
                    if s.eq_ignore_ascii_case(stringify!($name)) {
                        return Some(Self::$name);
                    }
                )*
                None
            }
        }
    };
}

keys! {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    Space, Minus, Equal, Plus, LeftBracket, RightBracket, Backslash,
    Semicolon, Quote, Comma, Period, Slash, Grave,
    Return, Tab, Escape, Backspace, ForwardDelete,
    LeftArrow, RightArrow, UpArrow, DownArrow,
    PageUp, PageDown, Home, End, Insert, Menu,
}
