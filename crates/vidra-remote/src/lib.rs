//! The remote-control bridge.
//!
//! Registers the process as the well-known media endpoint of the platform
//! (the `org.mpris.MediaPlayer2.vidra` bus name on Linux, the system media
//! transport controls on Windows; `souvlaki` supplies the standard interface
//! surface) and translates every event a remote controller sends into a
//! [`PlayerCommand`] on the application's command channel.
//!
//! Registration happens exactly once during startup. Failure to reach the
//! platform service is recoverable: the application logs a warning and runs
//! on without remote control.

use std::time::Duration;

use souvlaki::{
    MediaControlEvent, MediaControls, MediaMetadata, MediaPlayback, MediaPosition, PlatformConfig,
    SeekDirection as PlatformSeekDirection,
};
use thiserror::Error;
use tracing::{debug, warn};
use vidra_protocol::{PlaybackStatus, PlayerCommand, SeekDirection, TrackMetadata, ipc::CommandTx};

/// Well-known service identity published on the platform bus.
const BUS_NAME: &str = "vidra";
/// Human-readable player name shown by remote controllers.
const DISPLAY_NAME: &str = "Vidra";

/// Step used when a controller asks for an undirected relative seek.
const SEEK_STEP: Duration = Duration::from_secs(5);

/// Errors from the remote-control bridge.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// `register` was called while a registration is already active. The
    /// existing registration is left untouched.
    #[error("remote control surface already registered")]
    AlreadyRegistered,
    /// The platform media service could not be reached or refused us.
    #[error("remote control surface unavailable: {0}")]
    Unavailable(String),
}

/// Bridge between the platform media-control service and the player.
///
/// Owns the single registration for the process; dropping the bridge
/// detaches the event handler and unpublishes the service.
pub struct RemoteControl {
    /// Live platform controls while registered.
    controls: Option<MediaControls>,
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteControl {
    /// Create an unregistered bridge.
    pub fn new() -> Self {
        Self { controls: None }
    }

    /// True while a registration is active.
    pub fn is_registered(&self) -> bool {
        self.controls.is_some()
    }

    /// Publish the service and start forwarding remote events onto `tx`.
    ///
    /// Exactly one registration may be active; a second call reports
    /// [`RemoteError::AlreadyRegistered`] without disturbing the first. A
    /// failed attempt leaves the bridge unregistered and retryable.
    pub fn register(&mut self, tx: CommandTx) -> Result<(), RemoteError> {
        if self.controls.is_some() {
            return Err(RemoteError::AlreadyRegistered);
        }

        let config = PlatformConfig {
            dbus_name: BUS_NAME,
            display_name: DISPLAY_NAME,
            hwnd: None,
        };
        let mut controls =
            MediaControls::new(config).map_err(|e| RemoteError::Unavailable(format!("{e:?}")))?;
        controls
            .attach(move |event| {
                let command = map_event(event);
                // The receiver only disappears during teardown; a dropped
                // command at that point is harmless.
                if tx.send(command).is_err() {
                    debug!("remote command dropped, receiver gone");
                }
            })
            .map_err(|e| RemoteError::Unavailable(format!("{e:?}")))?;

        self.controls = Some(controls);
        debug!(bus = BUS_NAME, "remote control surface registered");
        Ok(())
    }

    /// Push the current track metadata out to remote controllers.
    pub fn update_metadata(&mut self, meta: &TrackMetadata) {
        let Some(controls) = self.controls.as_mut() else {
            return;
        };
        let result = controls.set_metadata(MediaMetadata {
            title: meta.title.as_deref(),
            artist: meta.artist.as_deref(),
            album: meta.album.as_deref(),
            cover_url: meta.cover_url.as_deref(),
            duration: meta.duration,
        });
        if let Err(e) = result {
            warn!("failed to push metadata to remote controllers: {e:?}");
        }
    }

    /// Push the playback state (and position, when known) out to remote
    /// controllers.
    pub fn update_playback(&mut self, status: PlaybackStatus, position: Option<Duration>) {
        let Some(controls) = self.controls.as_mut() else {
            return;
        };
        let progress = position.map(MediaPosition);
        let playback = match status {
            PlaybackStatus::Playing => MediaPlayback::Playing { progress },
            PlaybackStatus::Paused => MediaPlayback::Paused { progress },
            PlaybackStatus::Stopped => MediaPlayback::Stopped,
        };
        if let Err(e) = controls.set_playback(playback) {
            warn!("failed to push playback state to remote controllers: {e:?}");
        }
    }
}

impl Drop for RemoteControl {
    fn drop(&mut self) {
        if let Some(mut controls) = self.controls.take()
            && let Err(e) = controls.detach()
        {
            debug!("remote control detach failed: {e:?}");
        }
    }
}

/// Translate a platform media event into the player's command vocabulary.
fn map_event(event: MediaControlEvent) -> PlayerCommand {
    match event {
        MediaControlEvent::Play => PlayerCommand::Play,
        MediaControlEvent::Pause => PlayerCommand::Pause,
        MediaControlEvent::Toggle => PlayerCommand::PlayPause,
        MediaControlEvent::Stop => PlayerCommand::Stop,
        MediaControlEvent::Next => PlayerCommand::Next,
        MediaControlEvent::Previous => PlayerCommand::Previous,
        MediaControlEvent::Seek(direction) => {
            PlayerCommand::SeekBy(map_direction(direction), SEEK_STEP)
        }
        MediaControlEvent::SeekBy(direction, amount) => {
            PlayerCommand::SeekBy(map_direction(direction), amount)
        }
        MediaControlEvent::SetPosition(MediaPosition(position)) => {
            PlayerCommand::SetPosition(position)
        }
        MediaControlEvent::SetVolume(volume) => PlayerCommand::SetVolume(volume),
        MediaControlEvent::OpenUri(uri) => PlayerCommand::OpenUri(uri),
        MediaControlEvent::Raise => PlayerCommand::Raise,
        MediaControlEvent::Quit => PlayerCommand::Quit,
    }
}

/// Translate the platform's seek direction into ours.
fn map_direction(direction: PlatformSeekDirection) -> SeekDirection {
    match direction {
        PlatformSeekDirection::Forward => SeekDirection::Forward,
        PlatformSeekDirection::Backward => SeekDirection::Backward,
    }
}
