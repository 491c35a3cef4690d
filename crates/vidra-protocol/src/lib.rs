//! Shared playback-control types used across the vidra workspace.
//!
//! These are the messages exchanged between the remote-control bridge, the
//! application event loop, and the playback engine: a command vocabulary
//! mirroring the standard media-player control surface, plus the playback
//! state and track metadata pushed back out to remote controllers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Direction for relative seeks requested by a remote controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeekDirection {
    /// Seek forward in the current track.
    Forward,
    /// Seek backward in the current track.
    Backward,
}

/// Playback operations addressed to the player.
///
/// This is the full vocabulary the external control surface can produce;
/// UI-originated actions funnel into the same commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerCommand {
    /// Begin or resume playback.
    Play,
    /// Pause playback, keeping the current position.
    Pause,
    /// Toggle between playing and paused.
    PlayPause,
    /// Stop playback and clear the position.
    Stop,
    /// Skip to the next playlist entry.
    Next,
    /// Skip to the previous playlist entry.
    Previous,
    /// Seek by a relative offset in the given direction.
    SeekBy(SeekDirection, Duration),
    /// Jump to an absolute position in the current track.
    SetPosition(Duration),
    /// Set the volume as a linear factor in `0.0..=1.0`.
    SetVolume(f64),
    /// Open and play the given URI.
    OpenUri(String),
    /// Bring the player window to the foreground.
    Raise,
    /// Quit the application.
    Quit,
}

/// Coarse playback state reported to remote controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Actively playing.
    Playing,
    /// Paused with a retained position.
    Paused,
    /// Stopped; no current position.
    Stopped,
}

/// Metadata for the currently loaded track, pushed to remote controllers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Track title, if known.
    pub title: Option<String>,
    /// Artist name, if known.
    pub artist: Option<String>,
    /// Album name, if known.
    pub album: Option<String>,
    /// Cover art URL, if any.
    pub cover_url: Option<String>,
    /// Total duration, if known.
    pub duration: Option<Duration>,
}

/// IPC-related helpers: channel aliases for command delivery.
pub mod ipc {
    use super::PlayerCommand;

    /// Tokio unbounded sender for player commands.
    pub type CommandTx = tokio::sync::mpsc::UnboundedSender<PlayerCommand>;
    /// Tokio unbounded receiver for player commands.
    pub type CommandRx = tokio::sync::mpsc::UnboundedReceiver<PlayerCommand>;

    /// Create a standard unbounded command channel (sender, receiver).
    pub fn command_channel() -> (CommandTx, CommandRx) {
        tokio::sync::mpsc::unbounded_channel::<PlayerCommand>()
    }
}
