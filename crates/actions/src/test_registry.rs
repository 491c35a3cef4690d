//! Registry behavior tests: lazy creation, merge precedence, custom commands.

use std::fs;

use config::{CustomCommandStore, ShortcutStore};
use keychord::Chord;
use tempfile::TempDir;

use crate::{ActionKind, ActionRegistry};

fn empty_registry() -> ActionRegistry {
    ActionRegistry::new(ShortcutStore::load("/nonexistent/shortcuts.ron"))
}

#[test]
fn resolving_twice_is_idempotent() {
    let mut registry = empty_registry();
    let first = registry.resolve("mute").expect("catalog hit").clone();
    assert_eq!(registry.len(), 1);

    let second = registry.resolve("mute").expect("still live").clone();
    assert_eq!(registry.len(), 1);
    assert_eq!(first, second);
    assert_eq!(second.kind(), ActionKind::Static);
}

#[test]
fn unknown_id_yields_none() {
    let mut registry = empty_registry();
    assert!(registry.resolve("no_such_action").is_none());
    assert!(registry.is_empty());
}

#[test]
fn stored_override_beats_default() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("shortcuts.ron");
    fs::write(&path, r#"{ "mute": "ctrl+alt+m" }"#).expect("write");

    let mut registry = ActionRegistry::new(ShortcutStore::load(&path));
    let action = registry.resolve("mute").expect("catalog hit");
    assert_eq!(action.default_shortcut(), Chord::parse("m").as_ref());
    assert_eq!(action.shortcut(), Chord::parse("ctrl+alt+m").as_ref());
}

#[test]
fn absent_override_falls_back_to_default() {
    let mut registry = empty_registry();
    let action = registry.resolve("file_quit").expect("catalog hit");
    assert_eq!(action.shortcut(), Chord::parse("ctrl+q").as_ref());
    assert_eq!(action.shortcut(), action.default_shortcut());
}

#[test]
fn merge_reapplies_to_all_live_actions() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("shortcuts.ron");
    fs::write(&path, r#"{ "mute": "ctrl+alt+m", "screenshot": "f9" }"#).expect("write");

    let mut registry = ActionRegistry::new(ShortcutStore::load(&path));
    let _ = registry.resolve("mute");
    // Creating a second action re-merges the whole live set; the first one
    // must still carry its override afterwards.
    let _ = registry.resolve("screenshot");
    assert_eq!(
        registry.get("mute").expect("live").shortcut(),
        Chord::parse("ctrl+alt+m").as_ref()
    );
    assert_eq!(
        registry.get("screenshot").expect("live").shortcut(),
        Chord::parse("f9").as_ref()
    );
}

#[test]
fn custom_commands_materialize_by_tag() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("commands.ron");
    fs::write(
        &path,
        r#"(
            counter: 3,
            commands: {
                "Command_0": (command: "cycle sub", kind: "shortcut"),
                "Command_1": (command: "playlist-shuffle", kind: "shortcut"),
                "Command_2": (command: "osd-msg", kind: "startup"),
            },
        )"#,
    )
    .expect("write");
    let store = CustomCommandStore::load(&path);

    let mut registry = empty_registry();
    assert_eq!(registry.load_custom_commands(&store), 2);
    assert_eq!(registry.len(), 2);

    let cmd = registry.get("Command_0").expect("materialized");
    assert_eq!(cmd.text(), "cycle sub");
    assert_eq!(cmd.kind(), ActionKind::ShortcutOnly);
    assert!(cmd.icon().is_none());
    assert!(cmd.default_shortcut().is_none());
    assert!(registry.get("Command_2").is_none());
}

#[test]
fn create_custom_uses_persisted_counter() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("commands.ron");
    fs::write(&path, "(counter: 5, commands: {})").expect("write");
    let store = CustomCommandStore::load(&path);

    let mut registry = empty_registry();
    let action = registry.create_custom(&store, "add chapter");
    assert_eq!(action.id(), "Command_5");
    assert_eq!(action.text(), "add chapter");
    assert_eq!(action.kind(), ActionKind::Custom);
    // Creation reads the counter without advancing it.
    assert_eq!(store.counter(), 5);
}

#[test]
fn create_custom_honors_binding_from_earlier_run() {
    let dir = TempDir::new().expect("tempdir");
    let shortcuts_path = dir.path().join("shortcuts.ron");
    let commands_path = dir.path().join("commands.ron");
    // A previous session bound Command_5 and saved it before exiting.
    fs::write(&shortcuts_path, r#"{ "Command_5": "ctrl+shift+c" }"#).expect("write");
    fs::write(&commands_path, "(counter: 5, commands: {})").expect("write");

    let store = CustomCommandStore::load(&commands_path);
    let mut registry = ActionRegistry::new(ShortcutStore::load(&shortcuts_path));
    let action = registry.create_custom(&store, "cycle audio device");
    assert_eq!(action.shortcut(), Chord::parse("ctrl+shift+c").as_ref());
}

#[test]
fn persist_writes_effective_bindings() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("shortcuts.ron");

    let mut registry = ActionRegistry::new(ShortcutStore::load(&path));
    let _ = registry.resolve("mute");
    let _ = registry.resolve("file_quit");
    registry.persist_shortcuts().expect("persist");

    let reloaded = ShortcutStore::load(&path);
    assert_eq!(reloaded.get("mute"), Chord::parse("m"));
    assert_eq!(reloaded.get("file_quit"), Chord::parse("ctrl+q"));
}

#[test]
fn edited_binding_survives_persist_and_reload() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("shortcuts.ron");

    let mut registry = ActionRegistry::new(ShortcutStore::load(&path));
    let _ = registry.resolve("mute");
    registry
        .shortcut_store_mut()
        .set("mute", &Chord::parse("ctrl+alt+m").expect("parse"));
    registry.apply_shortcuts();
    registry.persist_shortcuts().expect("persist");

    let mut fresh = ActionRegistry::new(ShortcutStore::load(&path));
    let action = fresh.resolve("mute").expect("catalog hit");
    assert_eq!(action.shortcut(), Chord::parse("ctrl+alt+m").as_ref());
}
