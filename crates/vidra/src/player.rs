//! The playback engine interface the command core drives.
//!
//! Decoding and rendering live outside this crate; the core only needs a
//! place to send playback operations. [`NullTarget`] stands in until an
//! engine is wired up, logging every operation it receives.

use std::time::Duration;

use tracing::debug;
use vidra_protocol::SeekDirection;

/// Operations the media engine must accept from the command core.
pub trait PlaybackTarget {
    /// Begin or resume playback.
    fn play(&mut self);
    /// Pause playback, keeping the position.
    fn pause(&mut self);
    /// Toggle between playing and paused.
    fn play_pause(&mut self);
    /// Stop playback and clear the position.
    fn stop(&mut self);
    /// Skip to the next playlist entry.
    fn next(&mut self);
    /// Skip to the previous playlist entry.
    fn previous(&mut self);
    /// Seek by a relative offset.
    fn seek_by(&mut self, direction: SeekDirection, amount: Duration);
    /// Jump to an absolute position.
    fn set_position(&mut self, position: Duration);
    /// Set the volume as a linear factor in `0.0..=1.0`.
    fn set_volume(&mut self, volume: f64);
    /// Open and play a URI.
    fn open(&mut self, uri: &str);
    /// Bring the player window to the foreground.
    fn raise(&mut self);
}

/// Engine stand-in that logs every operation.
#[derive(Debug, Default)]
pub struct NullTarget;

impl PlaybackTarget for NullTarget {
    fn play(&mut self) {
        debug!("play");
    }
    fn pause(&mut self) {
        debug!("pause");
    }
    fn play_pause(&mut self) {
        debug!("play/pause");
    }
    fn stop(&mut self) {
        debug!("stop");
    }
    fn next(&mut self) {
        debug!("next");
    }
    fn previous(&mut self) {
        debug!("previous");
    }
    fn seek_by(&mut self, direction: SeekDirection, amount: Duration) {
        debug!(?direction, ?amount, "seek");
    }
    fn set_position(&mut self, position: Duration) {
        debug!(?position, "set position");
    }
    fn set_volume(&mut self, volume: f64) {
        debug!(volume, "set volume");
    }
    fn open(&mut self, uri: &str) {
        debug!(uri, "open");
    }
    fn raise(&mut self) {
        debug!("raise");
    }
}
