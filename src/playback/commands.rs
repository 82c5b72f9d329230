//! Commands the controller issues to the UI, and the view model they fold into.

use crate::api::{MediaKind, ResourceHandle};

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub name: String,
    pub kind: Option<MediaKind>,
    pub size_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// Render the element for a freshly loaded item, bound to its handle.
    Mount {
        kind: MediaKind,
        handle: ResourceHandle,
        name: String,
    },
    Unmount,
    Metadata {
        name: String,
        kind_label: String,
        size_label: String,
    },
    Progress {
        percent: f64,
    },
    TimeLabel(String),
    ShowError(String),
    HideError,
    Playlist {
        entries: Vec<PlaylistEntry>,
        active: Option<usize>,
    },
    ModeAffordance {
        loop_on: bool,
        shuffle_on: bool,
    },
    PlayState(bool),
    Volume {
        percent: u8,
        muted: bool,
    },
    SavedPlaylistNotice {
        count: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MountedMedia {
    pub kind: MediaKind,
    pub url: String,
    pub name: String,
}

/// Everything the UI renders, built only from `UiCommand`s.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub mounted: Option<MountedMedia>,
    pub title: String,
    pub kind_label: String,
    pub size_label: String,
    pub progress_percent: f64,
    pub time_label: String,
    pub error: Option<String>,
    pub playlist: Vec<PlaylistEntry>,
    pub active: Option<usize>,
    pub loop_on: bool,
    pub shuffle_on: bool,
    pub playing: bool,
    pub volume: u8,
    pub muted: bool,
    pub saved_notice: Option<usize>,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            mounted: None,
            title: "No file selected".to_string(),
            kind_label: String::new(),
            size_label: String::new(),
            progress_percent: 0.0,
            time_label: "00:00 / 00:00".to_string(),
            error: None,
            playlist: Vec::new(),
            active: None,
            loop_on: false,
            shuffle_on: false,
            playing: false,
            volume: 80,
            muted: false,
            saved_notice: None,
        }
    }
}

impl PlayerView {
    pub fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::Mount { kind, handle, name } => {
                self.mounted = Some(MountedMedia {
                    kind,
                    url: handle.0,
                    name,
                });
                self.progress_percent = 0.0;
                self.time_label = "00:00 / 00:00".to_string();
            }
            UiCommand::Unmount => self.mounted = None,
            UiCommand::Metadata {
                name,
                kind_label,
                size_label,
            } => {
                self.title = name;
                self.kind_label = kind_label;
                self.size_label = size_label;
            }
            UiCommand::Progress { percent } => self.progress_percent = percent,
            UiCommand::TimeLabel(label) => self.time_label = label,
            UiCommand::ShowError(message) => self.error = Some(message),
            UiCommand::HideError => self.error = None,
            UiCommand::Playlist { entries, active } => {
                self.playlist = entries;
                self.active = active;
                // A live playlist replaces the notice about the old one.
                if !self.playlist.is_empty() {
                    self.saved_notice = None;
                }
            }
            UiCommand::ModeAffordance {
                loop_on,
                shuffle_on,
            } => {
                self.loop_on = loop_on;
                self.shuffle_on = shuffle_on;
            }
            UiCommand::PlayState(playing) => self.playing = playing,
            UiCommand::Volume { percent, muted } => {
                self.volume = percent;
                self.muted = muted;
            }
            UiCommand::SavedPlaylistNotice { count } => self.saved_notice = Some(count),
        }
    }

    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = UiCommand>) {
        for command in commands {
            self.apply(command);
        }
    }
}
