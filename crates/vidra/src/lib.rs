//! vidra: the command/action management core of a configurable media player.
//!
//! This crate assembles the pieces the rest of the workspace provides:
//!
//! - [`app::Application`] wires the persisted stores, the action registry,
//!   the background worker dispatcher, and the remote-control surface
//!   together in the required startup order, then drains remote commands
//!   into a [`player::PlaybackTarget`].
//! - [`logging`] holds the CLI log flags and subscriber installation shared
//!   by the binary.
//!
//! The graphical shell, the decoding engine, and the playlist models are
//! external collaborators; they talk to this core through `Application`'s
//! surface and the `PlaybackTarget` trait.

pub mod app;
pub mod logging;
pub mod player;

pub use app::{Application, Error};
pub use player::{NullTarget, PlaybackTarget};
