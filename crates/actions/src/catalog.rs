//! The compiled-in action catalog.
//!
//! A fixed table of every static action the player knows: id, label,
//! optional icon, and optional default shortcut spec. Built as a lookup
//! table indexed once at first use; ids are unique by construction and a
//! test guards that invariant along with the parseability of every default
//! spec.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// One catalog row describing a static action.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Stable action id, used as the persistence key.
    pub id: &'static str,
    /// Human-readable label.
    pub text: &'static str,
    /// Freedesktop-style icon name, if the action has one.
    pub icon: Option<&'static str>,
    /// Default shortcut spec, if the action ships with a binding.
    pub shortcut: Option<&'static str>,
}

/// Shorthand for a full catalog row.
const fn entry(
    id: &'static str,
    text: &'static str,
    icon: Option<&'static str>,
    shortcut: Option<&'static str>,
) -> CatalogEntry {
    CatalogEntry {
        id,
        text,
        icon,
        shortcut,
    }
}

/// Every static action the player ships with.
pub static CATALOG: &[CatalogEntry] = &[
    entry("screenshot", "Screenshot", Some("image-x-generic"), Some("s")),
    entry("file_quit", "Quit", Some("application-exit"), Some("ctrl+q")),
    entry(
        "options_configure_keybinding",
        "Configure Keyboard Shortcuts",
        Some("configure-shortcuts"),
        Some("ctrl+shift+s"),
    ),
    entry("configure", "Configure", Some("configure"), Some("ctrl+shift+,")),
    entry("togglePlaylist", "Playlist", Some("view-media-playlist"), Some("p")),
    entry("openContextMenu", "Open Context Menu", Some("application-menu"), Some("menu")),
    entry("toggleFullscreen", "Toggle Fullscreen", Some("view-fullscreen"), Some("f")),
    entry("exitFullscreen", "Exit Fullscreen", None, Some("esc")),
    entry("openFile", "Open File", Some("folder-videos"), Some("ctrl+o")),
    entry("openUrl", "Open Url", Some("internet-services"), Some("ctrl+shift+o")),
    entry("aboutApp", "About Vidra", Some("help-about"), Some("f1")),
    // color controls
    entry("contrastUp", "Contrast Up", Some("contrast"), Some("1")),
    entry("contrastDown", "Contrast Down", Some("contrast"), Some("2")),
    entry("contrastReset", "Contrast Reset", Some("contrast"), Some("ctrl+1")),
    entry("brightnessUp", "Brightness Up", Some("contrast"), Some("3")),
    entry("brightnessDown", "Brightness Down", Some("contrast"), Some("4")),
    entry("brightnessReset", "Brightness Reset", Some("contrast"), Some("ctrl+3")),
    entry("gammaUp", "Gamma Up", Some("contrast"), Some("5")),
    entry("gammaDown", "Gamma Down", Some("contrast"), Some("6")),
    entry("gammaReset", "Gamma Reset", Some("contrast"), Some("ctrl+5")),
    entry("saturationUp", "Saturation Up", Some("contrast"), Some("7")),
    entry("saturationDown", "Saturation Down", Some("contrast"), Some("8")),
    entry("saturationReset", "Saturation Reset", Some("contrast"), Some("ctrl+7")),
    // playback
    entry("playPause", "Play/Pause", Some("media-playback-start"), Some("space")),
    entry("playNext", "Play Next", Some("media-skip-forward"), Some("shift+.")),
    entry("playPrevious", "Play Previous", Some("media-skip-backward"), Some("shift+,")),
    entry("volumeUp", "Volume Up", Some("audio-volume-high"), Some("9")),
    entry("volumeDown", "Volume Down", Some("audio-volume-low"), Some("0")),
    entry("mute", "Mute", Some("player-volume"), Some("m")),
    entry("seekForwardSmall", "Seek Small Step Forward", Some("media-seek-forward"), Some("right")),
    entry(
        "seekBackwardSmall",
        "Seek Small Step Backward",
        Some("media-seek-backward"),
        Some("left"),
    ),
    entry(
        "seekForwardMedium",
        "Seek Medium Step Forward",
        Some("media-seek-forward"),
        Some("shift+right"),
    ),
    entry(
        "seekBackwardMedium",
        "Seek Medium Step Backward",
        Some("media-seek-backward"),
        Some("shift+left"),
    ),
    entry("seekForwardBig", "Seek Big Step Forward", Some("media-seek-forward"), Some("up")),
    entry("seekBackwardBig", "Seek Big Step Backward", Some("media-seek-backward"), Some("down")),
    entry(
        "seekPreviousChapter",
        "Seek Previous Chapter",
        Some("media-seek-backward"),
        Some("pgdn"),
    ),
    entry("seekNextChapter", "Seek Next Chapter", Some("media-seek-forward"), Some("pgup")),
    entry(
        "seekNextSubtitle",
        "Seek To Next Subtitle",
        Some("media-seek-forward"),
        Some("ctrl+right"),
    ),
    entry(
        "seekPreviousSubtitle",
        "Seek To Previous Subtitle",
        Some("media-seek-backward"),
        Some("ctrl+left"),
    ),
    entry("frameStep", "Move one frame forward, then pause", None, Some(".")),
    entry("frameBackStep", "Move one frame backward, then pause", None, Some(",")),
    entry("increasePlayBackSpeed", "Playback speed increase", None, Some("]")),
    entry("decreasePlayBackSpeed", "Playback speed decrease", None, Some("[")),
    entry("resetPlayBackSpeed", "Playback speed reset", None, Some("backspace")),
    entry("setLoop", "Set Loop", None, Some("l")),
    // subtitles
    entry("subtitleQuicken", "Subtitle Quicken", None, Some("z")),
    entry("subtitleDelay", "Subtitle Delay", None, Some("shift+z")),
    entry("subtitleToggle", "Subtitle Toggle", None, Some("ctrl+s")),
    entry("subtitleCycleUp", "Cycle Subtitle Up", None, Some("j")),
    entry("subtitleCycleDown", "Cycle Subtitle Down", None, Some("shift+j")),
    entry("increaseSubtitleFontSize", "Increase Subtitle Font Size", None, Some("ctrl+z")),
    entry("decreaseSubtitleFontSize", "Decrease Subtitle Font Size", None, Some("ctrl+x")),
    entry("subtitlePositionUp", "Move Subtitle Up", None, Some("r")),
    entry("subtitlePositionDown", "Move Subtitle Down", None, Some("shift+r")),
    // audio
    entry("audioCycleUp", "Cycle Audio Up", None, Some("shift+3")),
    entry("audioCycleDown", "Cycle Audio Down", None, Some("shift+2")),
    // view
    entry("zoomIn", "Zoom In", Some("zoom-in"), Some("alt++")),
    entry("zoomOut", "Zoom Out", Some("zoom-out"), Some("alt+-")),
    entry("zoomReset", "Zoom Reset", Some("zoom-original"), Some("alt+backspace")),
    entry("videoPanXLeft", "Video pan x left", None, Some("alt+left")),
    entry("videoPanXRight", "Video pan x right", None, Some("alt+right")),
    entry("videoPanYUp", "Video pan y up", None, Some("alt+up")),
    entry("videoPanYDown", "Video pan y down", None, Some("alt+down")),
    entry("toggleMenuBar", "Toggle Menu Bar", None, Some("ctrl+m")),
    entry("toggleHeader", "Toggle Header", None, Some("ctrl+h")),
    entry("toggleDeinterlacing", "Toggle deinterlacing", None, Some("d")),
];

/// Id -> entry index, built once on first lookup.
static INDEX: Lazy<HashMap<&'static str, &'static CatalogEntry>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(CATALOG.len());
    for entry in CATALOG {
        map.insert(entry.id, entry);
    }
    map
});

/// Look up a catalog entry by action id.
pub fn lookup(id: &str) -> Option<&'static CatalogEntry> {
    INDEX.get(id).copied()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use keychord::Chord;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in CATALOG {
            assert!(seen.insert(entry.id), "duplicate catalog id {}", entry.id);
        }
        assert_eq!(INDEX.len(), CATALOG.len());
    }

    #[test]
    fn default_shortcuts_parse() {
        for entry in CATALOG {
            if let Some(spec) = entry.shortcut {
                assert!(
                    Chord::parse(spec).is_some(),
                    "catalog entry {} has unparseable default {spec}",
                    entry.id
                );
            }
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(lookup("file_quit").map(|e| e.text), Some("Quit"));
        assert!(lookup("definitely_not_an_action").is_none());
    }
}
