//! Playback controller - owns the playlist, the active session and every
//! resource handle, and turns UI and platform events into UI commands.

mod commands;
mod handles;
mod host;
mod navigation;
mod session;
mod transport;

pub use commands::{MountedMedia, PlayerView, PlaylistEntry, UiCommand};
pub use handles::ResourceHandleSet;
pub use host::MediaHost;
pub use navigation::Direction;
pub use session::{PlaybackModeFlags, PlaybackSession, ScrubState};
pub use transport::ShortcutKey;

use crate::api::{FileCandidate, MediaItem, MediaKind, PlayerError};
use crate::db::{self, MetadataStore, PlayerSettings, SavedPlaylist, Theme};
use crate::utils::{format_progress, format_size};

pub struct PlaybackController<H: MediaHost, S: MetadataStore> {
    host: H,
    store: S,
    settings: PlayerSettings,
    playlist: Vec<MediaItem>,
    current_index: usize,
    session: Option<PlaybackSession>,
    flags: PlaybackModeFlags,
    scrub: ScrubState,
    volume: u8,
    handles: ResourceHandleSet,
    saved: Option<SavedPlaylist>,
    commands: Vec<UiCommand>,
}

impl<H: MediaHost, S: MetadataStore> PlaybackController<H, S> {
    pub fn new(host: H, store: S) -> Self {
        let settings = db::load_settings(&store);
        let saved = match db::load_playlist(&store) {
            Ok(saved) => saved.filter(|s| !s.items.is_empty()),
            Err(err) => {
                tracing::debug!("ignoring saved playlist: {err}");
                None
            }
        };

        let mut controller = Self {
            host,
            store,
            volume: settings.volume,
            settings,
            playlist: Vec::new(),
            current_index: 0,
            session: None,
            flags: PlaybackModeFlags::default(),
            scrub: ScrubState::default(),
            handles: ResourceHandleSet::new(),
            saved,
            commands: Vec::new(),
        };

        controller.emit_volume();
        controller.emit_modes();
        if let Some(count) = controller.saved.as_ref().map(|s| s.items.len()) {
            tracing::info!("found previously saved playlist with {count} items");
            controller.emit(UiCommand::SavedPlaylistNotice { count });
        }
        controller
    }

    /// Append the audio, video and image files of a batch; everything else is
    /// dropped. Starts loading the first item when nothing is loaded yet.
    pub fn add_items(
        &mut self,
        candidates: impl IntoIterator<Item = FileCandidate>,
    ) -> Result<usize, PlayerError> {
        let accepted: Vec<MediaItem> = candidates
            .into_iter()
            .filter(|c| {
                let supported = MediaKind::from_mime(&c.mime).is_some();
                if !supported {
                    tracing::debug!("dropping unsupported file {} ({})", c.name, c.mime);
                }
                supported
            })
            .map(MediaItem::from)
            .collect();

        if accepted.is_empty() {
            return Err(self.report(PlayerError::NoSupportedFiles));
        }

        let added = accepted.len();
        self.playlist.extend(accepted);
        tracing::info!("added {added} files, playlist now {}", self.playlist.len());
        self.emit(UiCommand::HideError);
        self.emit_playlist();
        self.persist();

        if self.session.is_none() {
            self.load(0)?;
        }
        Ok(added)
    }

    /// Make `playlist[index]` the active item. Switching always lands paused.
    pub fn load(&mut self, index: usize) -> Result<(), PlayerError> {
        debug_assert!(index < self.playlist.len(), "load index out of range");
        let Some(item) = self.playlist.get(index).cloned() else {
            tracing::warn!("load({index}) ignored, playlist has {} items", self.playlist.len());
            return Ok(());
        };

        let Some(kind) = item.kind() else {
            return Err(self.report(PlayerError::UnsupportedFileType {
                name: item.name,
                mime: item.mime,
            }));
        };

        // A failed open leaves the current session untouched.
        let handle = match self.host.create_handle(&item) {
            Ok(handle) => handle,
            Err(err) => return Err(self.report(err)),
        };
        self.handles.track(handle.clone());

        // The superseded handle stays in the set until release_all_handles.
        if let Some(previous) = self.session.take() {
            if previous.is_playable() {
                self.host.pause();
            }
            self.emit(UiCommand::Unmount);
        }
        tracing::debug!(
            "loaded {} as {} ({} handles live)",
            item.name,
            handle.url(),
            self.handles.len()
        );

        self.current_index = index;
        self.flags.playing = false;
        self.scrub = ScrubState::default();
        self.session = Some(PlaybackSession {
            index,
            kind,
            handle: handle.clone(),
        });
        if kind.is_playable() {
            self.host.set_volume(f64::from(self.volume) / 100.0);
            self.host.set_muted(self.flags.muted);
        }

        self.emit(UiCommand::HideError);
        self.emit(UiCommand::Mount {
            kind,
            handle,
            name: item.name.clone(),
        });
        self.emit(UiCommand::Metadata {
            name: item.name.clone(),
            kind_label: kind.label().to_string(),
            size_label: format_size(item.size),
        });
        self.emit(UiCommand::PlayState(false));
        self.emit(UiCommand::Progress { percent: 0.0 });
        self.emit(UiCommand::TimeLabel(format_progress(0.0, f64::NAN)));
        self.emit_playlist();
        self.persist();
        Ok(())
    }

    /// Free every handle created this session. Safe to call more than once.
    pub fn release_all_handles(&mut self) {
        let released = self.handles.release_all(&mut self.host);
        if released > 0 {
            tracing::info!("released {released} resource handles");
        }
    }

    pub fn toggle_loop(&mut self) {
        self.flags.loop_enabled = !self.flags.loop_enabled;
        self.emit_modes();
    }

    pub fn toggle_shuffle(&mut self) {
        self.flags.shuffle = !self.flags.shuffle;
        self.emit_modes();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.theme = self.settings.theme.toggled();
        self.save_settings();
        self.settings.theme
    }

    pub fn dismiss_error(&mut self) {
        self.emit(UiCommand::HideError);
    }

    pub fn drain_commands(&mut self) -> Vec<UiCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn playlist(&self) -> &[MediaItem] {
        &self.playlist
    }

    /// Index of the active item; `None` while the playlist is empty.
    pub fn current_index(&self) -> Option<usize> {
        (!self.playlist.is_empty()).then_some(self.current_index)
    }

    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    pub fn flags(&self) -> PlaybackModeFlags {
        self.flags
    }

    pub fn scrub(&self) -> ScrubState {
        self.scrub
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn handles(&self) -> &ResourceHandleSet {
        &self.handles
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn saved_playlist(&self) -> Option<&SavedPlaylist> {
        self.saved.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn emit(&mut self, command: UiCommand) {
        self.commands.push(command);
    }

    fn report(&mut self, err: PlayerError) -> PlayerError {
        tracing::warn!("{err}");
        self.emit(UiCommand::ShowError(err.to_string()));
        err
    }

    fn emit_playlist(&mut self) {
        let entries = self
            .playlist
            .iter()
            .map(|item| PlaylistEntry {
                name: item.name.clone(),
                kind: item.kind(),
                size_label: format_size(item.size),
            })
            .collect();
        let active = self.session.as_ref().map(|s| s.index);
        self.emit(UiCommand::Playlist { entries, active });
    }

    fn emit_modes(&mut self) {
        self.emit(UiCommand::ModeAffordance {
            loop_on: self.flags.loop_enabled,
            shuffle_on: self.flags.shuffle,
        });
    }

    fn emit_volume(&mut self) {
        self.emit(UiCommand::Volume {
            percent: self.volume,
            muted: self.flags.muted,
        });
    }

    fn persist(&mut self) {
        let items: Vec<_> = self.playlist.iter().map(MediaItem::saved).collect();
        if let Err(err) = db::save_playlist(&mut self.store, &items, self.current_index) {
            tracing::debug!("playlist metadata not saved: {err}");
        }
    }

    fn save_settings(&mut self) {
        if let Err(err) = db::save_settings(&mut self.store, &self.settings) {
            tracing::debug!("settings not saved: {err}");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::api::{ResourceHandle, SourceId};
    use crate::db::MemoryStore;

    /// Host that records every call instead of touching a media engine.
    #[derive(Debug, Default)]
    pub struct FakeHost {
        pub next_handle: u64,
        pub created: Vec<ResourceHandle>,
        pub released: Vec<ResourceHandle>,
        pub play_calls: usize,
        pub pause_calls: usize,
        pub reject_play: Option<String>,
        pub position: f64,
        pub duration: f64,
        pub volume: f64,
        pub muted: bool,
        pub error_code: Option<u16>,
        pub fail_create: Option<String>,
    }

    impl MediaHost for FakeHost {
        fn create_handle(&mut self, item: &MediaItem) -> Result<ResourceHandle, PlayerError> {
            if let Some(reason) = &self.fail_create {
                return Err(PlayerError::Handle(reason.clone()));
            }
            self.next_handle += 1;
            let handle = ResourceHandle(format!("blob:{}/{}", self.next_handle, item.name));
            self.created.push(handle.clone());
            Ok(handle)
        }

        fn release_handle(&mut self, handle: &ResourceHandle) {
            self.released.push(handle.clone());
        }

        fn play(&mut self) -> Result<(), PlayerError> {
            self.play_calls += 1;
            match &self.reject_play {
                Some(reason) => Err(PlayerError::PlaybackStart(reason.clone())),
                None => Ok(()),
            }
        }

        fn pause(&mut self) {
            self.pause_calls += 1;
        }

        fn current_time(&self) -> f64 {
            self.position
        }

        fn set_current_time(&mut self, seconds: f64) {
            self.position = seconds;
        }

        fn duration(&self) -> f64 {
            self.duration
        }

        fn set_volume(&mut self, volume: f64) {
            self.volume = volume;
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn last_error_code(&self) -> Option<u16> {
            self.error_code
        }
    }

    pub type TestController = PlaybackController<FakeHost, MemoryStore>;

    pub fn controller() -> TestController {
        let host = FakeHost {
            duration: 100.0,
            ..FakeHost::default()
        };
        PlaybackController::new(host, MemoryStore::new())
    }

    pub fn file(name: &str, mime: &str) -> FileCandidate {
        static NEXT: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let id = NEXT.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        FileCandidate::new(name, mime, 1024, SourceId(id))
    }

    pub fn loaded(names: &[(&str, &str)]) -> TestController {
        let mut c = controller();
        c.add_items(names.iter().map(|(n, m)| file(n, m))).unwrap();
        c.drain_commands();
        c
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::api::StoreError;
    use crate::db::{MemoryStore, CURRENT_INDEX_KEY, PLAYLIST_KEY};

    /// Store whose backend is gone: every access fails.
    struct FailingStore;

    impl MetadataStore for FailingStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn mixed_batch_drops_unsupported_and_loads_first() {
        let mut c = controller();
        let added = c
            .add_items(vec![
                file("song.mp3", "audio/mpeg"),
                file("notes.txt", "text/plain"),
                file("cover.png", "image/png"),
            ])
            .unwrap();

        assert_eq!(added, 2);
        let names: Vec<_> = c.playlist().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["song.mp3", "cover.png"]);
        assert_eq!(c.current_index(), Some(0));
        let session = c.session().unwrap();
        assert_eq!(session.kind, MediaKind::Audio);
        assert!(!c.flags().playing);
    }

    #[test]
    fn unsupported_batch_leaves_playlist_unchanged() {
        let mut c = controller();
        let err = c.add_items(vec![file("a.txt", "text/plain")]).unwrap_err();
        assert!(matches!(err, PlayerError::NoSupportedFiles));
        assert!(c.playlist().is_empty());
        assert!(c.session().is_none());
        assert!(c
            .drain_commands()
            .iter()
            .any(|cmd| matches!(cmd, UiCommand::ShowError(_))));

        let mut c = loaded(&[("a.mp3", "audio/mpeg")]);
        assert!(matches!(
            c.add_items(vec![file("b.pdf", "application/pdf")]),
            Err(PlayerError::NoSupportedFiles)
        ));
        assert_eq!(c.playlist().len(), 1);
    }

    #[test]
    fn appending_preserves_order_and_index() {
        let mut c = loaded(&[("a.mp3", "audio/mpeg"), ("b.mp4", "video/mp4")]);
        c.load(1).unwrap();
        let created_before = c.host().created.len();

        let added = c
            .add_items(vec![file("c.ogg", "audio/ogg"), file("a.mp3", "audio/mpeg")])
            .unwrap();

        assert_eq!(added, 2);
        let names: Vec<_> = c.playlist().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a.mp3", "b.mp4", "c.ogg", "a.mp3"]);
        assert_eq!(c.current_index(), Some(1));
        // Already playing something, so no new load.
        assert_eq!(c.host().created.len(), created_before);
    }

    #[test]
    fn load_switches_the_single_session_and_keeps_old_handles() {
        let mut c = loaded(&[("a.mp3", "audio/mpeg"), ("b.mp3", "audio/mpeg")]);
        c.toggle_play();
        assert!(c.flags().playing);

        c.load(1).unwrap();

        let session = c.session().unwrap();
        assert_eq!(session.index, 1);
        assert_eq!(c.current_index(), Some(1));
        assert!(!c.flags().playing);
        assert_eq!(c.host().pause_calls, 1);
        assert_eq!(c.handles().len(), 2);
        assert!(c.host().released.is_empty());
        assert!(c.handles().contains(&session.handle));
    }

    #[test]
    fn load_emits_mount_metadata_and_playlist() {
        let mut c = loaded(&[("a.mp3", "audio/mpeg"), ("b.png", "image/png")]);
        c.load(1).unwrap();
        let commands = c.drain_commands();

        assert_eq!(commands.first(), Some(&UiCommand::Unmount));
        assert!(commands.iter().any(|cmd| matches!(
            cmd,
            UiCommand::Mount { kind: MediaKind::Image, name, .. } if name == "b.png"
        )));
        assert!(commands.contains(&UiCommand::Metadata {
            name: "b.png".to_string(),
            kind_label: "Image".to_string(),
            size_label: "1.0 KB".to_string(),
        }));
        assert!(commands
            .iter()
            .any(|cmd| matches!(cmd, UiCommand::Playlist { active: Some(1), .. })));
    }

    #[test]
    fn release_all_handles_is_idempotent() {
        let mut c = loaded(&[("a.mp3", "audio/mpeg"), ("b.mp3", "audio/mpeg")]);
        c.load(1).unwrap();
        c.load(0).unwrap();

        c.release_all_handles();
        assert_eq!(c.host().released.len(), 3);
        assert!(c.handles().is_empty());

        c.release_all_handles();
        assert_eq!(c.host().released.len(), 3);
    }

    #[test]
    fn playlist_metadata_is_persisted_on_change() {
        let mut c = loaded(&[("a.mp3", "audio/mpeg"), ("b.mp3", "audio/mpeg")]);
        c.load(1).unwrap();
        let store = &c.store;
        assert_eq!(store.read(CURRENT_INDEX_KEY).unwrap().as_deref(), Some("1"));
        let json = store.read(PLAYLIST_KEY).unwrap().unwrap();
        assert!(json.contains(r#""name":"b.mp3""#));
        assert!(json.contains(r#""type":"audio/mpeg""#));
    }

    #[test]
    fn saved_playlist_only_produces_a_notice() {
        let mut store = MemoryStore::new();
        store
            .write(PLAYLIST_KEY, r#"[{"name":"old.mp3","type":"audio/mpeg","size":3}]"#)
            .unwrap();
        store.write(CURRENT_INDEX_KEY, "0").unwrap();

        let mut c = PlaybackController::new(FakeHost::default(), store);

        assert!(c.playlist().is_empty());
        assert!(c.session().is_none());
        assert_eq!(c.saved_playlist().map(|s| s.items.len()), Some(1));
        assert!(c
            .drain_commands()
            .contains(&UiCommand::SavedPlaylistNotice { count: 1 }));
    }

    #[test]
    fn toggles_flip_only_their_flag() {
        let mut c = loaded(&[("a.mp3", "audio/mpeg")]);
        c.toggle_loop();
        assert!(c.flags().loop_enabled);
        assert!(!c.flags().shuffle);
        c.toggle_shuffle();
        assert!(c.flags().shuffle);
        c.toggle_loop();
        assert!(!c.flags().loop_enabled);
        assert!(c.drain_commands().contains(&UiCommand::ModeAffordance {
            loop_on: false,
            shuffle_on: true,
        }));
    }

    #[test]
    fn theme_toggle_is_saved() {
        let mut c = controller();
        assert_eq!(c.toggle_theme(), Theme::Light);
        assert_eq!(db::load_settings(&c.store).theme, Theme::Light);
    }

    #[test]
    fn failed_open_keeps_the_current_session() {
        let mut c = loaded(&[("a.mp3", "audio/mpeg"), ("b.mp3", "audio/mpeg")]);
        c.toggle_play();
        c.drain_commands();
        c.host_mut().fail_create = Some("gone".to_string());

        let err = c.load(1).unwrap_err();

        assert!(matches!(err, PlayerError::Handle(_)));
        assert_eq!(c.session().map(|s| s.index), Some(0));
        assert_eq!(c.current_index(), Some(0));
        assert!(c.flags().playing);
        assert_eq!(c.host().pause_calls, 0);
        assert_eq!(c.handles().len(), 1);
        assert_eq!(c.drain_commands(), vec![UiCommand::ShowError(err.to_string())]);
    }

    #[test]
    fn store_failures_never_reach_the_user() {
        let host = FakeHost {
            duration: 100.0,
            ..FakeHost::default()
        };
        let mut c = PlaybackController::new(host, FailingStore);
        assert_eq!(c.volume(), 80);
        assert!(c.saved_playlist().is_none());

        c.add_items(vec![file("a.mp3", "audio/mpeg"), file("b.mp4", "video/mp4")])
            .unwrap();
        c.load(1).unwrap();
        c.set_volume(40.0);
        assert_eq!(c.volume(), 40);
        assert_eq!(c.toggle_theme(), Theme::Light);

        assert!(!c
            .drain_commands()
            .iter()
            .any(|cmd| matches!(cmd, UiCommand::ShowError(_))));
    }
}
