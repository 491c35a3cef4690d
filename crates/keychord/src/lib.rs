//! keychord: portable key identifiers and chords for vidra.
//!
//! - `Key`: enum of the non-modifier keys the player binds actions to.
//! - `Modifier`: enum of modifier keys with spec conversions.
//! - `Chord`: a set of modifiers plus one key, parsed from and rendered to
//!   spec strings like `"ctrl+shift+s"`.
//!
//! Spec strings are the persistence format for shortcuts: case-insensitive,
//! `+`-separated, with the key spec always last.

mod key;
pub use key::Key;

mod spec;

mod modifiers;
pub use modifiers::Modifier;

mod chord;
pub use chord::Chord;
