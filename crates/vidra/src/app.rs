//! Application assembly and the command event loop.
//!
//! Startup order matters: the remote-control surface registers first (a
//! failure is a warning, not a fatal error), the worker dispatcher comes up
//! next and stays up until shutdown, and the registry then pre-loads the
//! persisted custom commands. After that every "give me action X" request
//! flows through [`Application::action`].

use std::time::Duration;

use actions::{Action, ActionRegistry};
use config::{ConfigPaths, CustomCommandStore, ShortcutStore};
use thiserror::Error;
use tracing::{debug, info, warn};
use vidra_protocol::{
    PlaybackStatus, PlayerCommand, TrackMetadata,
    ipc::{CommandRx, command_channel},
};
use vidra_remote::RemoteControl;
use worker::{Dispatcher, Job};

use crate::player::PlaybackTarget;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Persistence failure from the configuration stores.
    #[error("config error: {0}")]
    Config(#[from] config::Error),
    /// Worker dispatcher lifecycle failure.
    #[error("worker error: {0}")]
    Worker(#[from] worker::DispatchError),
    /// The command event loop could not be brought up.
    #[error("runtime error: {0}")]
    Runtime(String),
}

/// The assembled command core of the player.
pub struct Application {
    /// Live actions plus the shortcut store they reconcile against.
    registry: ActionRegistry,
    /// Persisted user-authored commands.
    commands: CustomCommandStore,
    /// The single background execution context.
    dispatcher: Dispatcher,
    /// The remote-control surface, registered or not.
    remote: RemoteControl,
    /// Commands arriving from remote controllers.
    rx: CommandRx,
}

impl Application {
    /// Bring up the core against the given store locations.
    pub fn new(paths: &ConfigPaths) -> Result<Self, Error> {
        let shortcuts = ShortcutStore::load(&paths.shortcuts);
        let commands = CustomCommandStore::load(&paths.commands);
        let mut registry = ActionRegistry::new(shortcuts);

        let (tx, rx) = command_channel();
        let mut remote = RemoteControl::new();
        if let Err(e) = remote.register(tx) {
            warn!("continuing without remote control: {e}");
        }

        let mut dispatcher = Dispatcher::new();
        dispatcher.start()?;

        let loaded = registry.load_custom_commands(&commands);
        info!(custom_actions = loaded, "command core up");

        Ok(Self {
            registry,
            commands,
            dispatcher,
            remote,
            rx,
        })
    }

    /// Resolve an action by name, materializing it on first use.
    ///
    /// `None` means the id is neither in the catalog nor among the loaded
    /// custom commands; for UI call sites that is a programming error.
    pub fn action(&mut self, name: &str) -> Option<&Action> {
        self.registry.resolve(name)
    }

    /// Create a user action from the persisted counter and return it.
    pub fn create_user_action(&mut self, text: &str) -> &Action {
        self.registry.create_custom(&self.commands, text)
    }

    /// Persistence hook for the shortcut editing surface: writes every live
    /// binding back and flushes before returning.
    pub fn configure_shortcuts_accepted(&mut self) -> Result<(), Error> {
        self.registry.persist_shortcuts()?;
        Ok(())
    }

    /// Hand blocking work to the background dispatcher.
    pub fn submit_background(&self, job: Job) -> Result<(), Error> {
        self.dispatcher.submit(job)?;
        Ok(())
    }

    /// Push now-playing state out to remote controllers.
    pub fn update_now_playing(
        &mut self,
        meta: &TrackMetadata,
        status: PlaybackStatus,
        position: Option<Duration>,
    ) {
        self.remote.update_metadata(meta);
        self.remote.update_playback(status, position);
    }

    /// The live action registry.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Drain remote commands into `target` until a quit arrives, then shut
    /// the core down in order: stop accepting background work, drain it,
    /// release the worker, release the execution context.
    pub fn run(mut self, target: &mut dyn PlaybackTarget) -> Result<(), Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Runtime(e.to_string()))?;

        runtime.block_on(async {
            while let Some(command) = self.rx.recv().await {
                let quit = matches!(command, PlayerCommand::Quit);
                dispatch(target, command);
                if quit {
                    break;
                }
            }
        });

        self.shutdown()
    }

    /// Structured teardown of the background context.
    pub fn shutdown(&mut self) -> Result<(), Error> {
        self.dispatcher.shutdown()?;
        debug!("command core down");
        Ok(())
    }
}

/// Forward one command to the playback engine.
fn dispatch(target: &mut dyn PlaybackTarget, command: PlayerCommand) {
    match command {
        PlayerCommand::Play => target.play(),
        PlayerCommand::Pause => target.pause(),
        PlayerCommand::PlayPause => target.play_pause(),
        PlayerCommand::Stop => target.stop(),
        PlayerCommand::Next => target.next(),
        PlayerCommand::Previous => target.previous(),
        PlayerCommand::SeekBy(direction, amount) => target.seek_by(direction, amount),
        PlayerCommand::SetPosition(position) => target.set_position(position),
        PlayerCommand::SetVolume(volume) => target.set_volume(volume),
        PlayerCommand::OpenUri(uri) => target.open(&uri),
        PlayerCommand::Raise => target.raise(),
        // Quit terminates the event loop in `run`; the engine just stops.
        PlayerCommand::Quit => target.stop(),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use keychord::Chord;
    use tempfile::TempDir;
    use vidra_protocol::SeekDirection;

    use super::*;

    /// Engine double that records the operations it receives.
    #[derive(Debug, Default)]
    struct RecordingTarget {
        ops: Vec<String>,
    }

    impl PlaybackTarget for RecordingTarget {
        fn play(&mut self) {
            self.ops.push("play".into());
        }
        fn pause(&mut self) {
            self.ops.push("pause".into());
        }
        fn play_pause(&mut self) {
            self.ops.push("play_pause".into());
        }
        fn stop(&mut self) {
            self.ops.push("stop".into());
        }
        fn next(&mut self) {
            self.ops.push("next".into());
        }
        fn previous(&mut self) {
            self.ops.push("previous".into());
        }
        fn seek_by(&mut self, direction: SeekDirection, amount: Duration) {
            self.ops.push(format!("seek {direction:?} {amount:?}"));
        }
        fn set_position(&mut self, position: Duration) {
            self.ops.push(format!("pos {position:?}"));
        }
        fn set_volume(&mut self, volume: f64) {
            self.ops.push(format!("vol {volume}"));
        }
        fn open(&mut self, uri: &str) {
            self.ops.push(format!("open {uri}"));
        }
        fn raise(&mut self) {
            self.ops.push("raise".into());
        }
    }

    fn app_in(dir: &TempDir) -> Application {
        let paths = ConfigPaths::resolve(Some(dir.path()));
        Application::new(&paths).expect("startup")
    }

    #[test]
    fn action_resolution_is_idempotent() {
        let dir = TempDir::new().expect("tempdir");
        let mut app = app_in(&dir);

        let first = app.action("toggleFullscreen").expect("catalog hit").clone();
        let second = app.action("toggleFullscreen").expect("live hit").clone();
        assert_eq!(first, second);
        assert_eq!(app.registry().len(), 1);
        assert!(app.action("bogus_action").is_none());
        app.shutdown().expect("shutdown");
    }

    #[test]
    fn custom_commands_preload_at_startup() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(
            dir.path().join("commands.ron"),
            r#"(
                counter: 2,
                commands: {
                    "Command_0": (command: "cycle sub", kind: "shortcut"),
                    "Command_1": (command: "ab-loop", kind: "shortcut"),
                },
            )"#,
        )
        .expect("write");

        let mut app = app_in(&dir);
        assert_eq!(app.registry().len(), 2);
        let action = app.action("Command_1").expect("preloaded");
        assert_eq!(action.text(), "ab-loop");

        let created = app.create_user_action("screenshot each frame");
        assert_eq!(created.id(), "Command_2");
        app.shutdown().expect("shutdown");
    }

    #[test]
    fn accepted_shortcut_edit_is_persisted() {
        let dir = TempDir::new().expect("tempdir");
        let mut app = app_in(&dir);
        let _ = app.action("mute");
        app.configure_shortcuts_accepted().expect("persist");
        app.shutdown().expect("shutdown");

        let reloaded = ShortcutStore::load(dir.path().join("shortcuts.ron"));
        assert_eq!(reloaded.get("mute"), Chord::parse("m"));
    }

    #[test]
    fn background_work_drains_on_shutdown() {
        let dir = TempDir::new().expect("tempdir");
        let mut app = app_in(&dir);

        let done = Arc::new(AtomicUsize::new(0));
        for _ in 0..4 {
            let done = Arc::clone(&done);
            app.submit_background(Box::new(move || {
                done.fetch_add(1, Ordering::SeqCst);
            }))
            .expect("submit");
        }
        app.shutdown().expect("shutdown");
        assert_eq!(done.load(Ordering::SeqCst), 4);

        // The context is gone; further submissions are rejected loudly.
        assert!(app.submit_background(Box::new(|| {})).is_err());
    }

    #[test]
    fn dispatch_covers_the_command_vocabulary() {
        let mut target = RecordingTarget::default();
        dispatch(&mut target, PlayerCommand::Play);
        dispatch(&mut target, PlayerCommand::PlayPause);
        dispatch(
            &mut target,
            PlayerCommand::SeekBy(SeekDirection::Forward, Duration::from_secs(5)),
        );
        dispatch(&mut target, PlayerCommand::SetVolume(0.4));
        dispatch(&mut target, PlayerCommand::OpenUri("file:///x.mkv".into()));
        dispatch(&mut target, PlayerCommand::Quit);
        assert_eq!(
            target.ops,
            vec![
                "play",
                "play_pause",
                "seek Forward 5s",
                "vol 0.4",
                "open file:///x.mkv",
                "stop",
            ]
        );
    }
}
