// Play/pause, volume, seeking, scrubbing, shortcuts and platform callbacks.
use super::{MediaHost, PlaybackController, PlaybackSession, ScrubState, UiCommand};
use crate::api::{MediaErrorKind, PlayerError};
use crate::db::MetadataStore;
use crate::utils::{clamp_fraction, format_progress};

/// Keyboard shortcuts the player reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl ShortcutKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" | "Space" => Some(Self::Space),
            "ArrowLeft" | "Left" => Some(Self::ArrowLeft),
            "ArrowRight" | "Right" => Some(Self::ArrowRight),
            "ArrowUp" | "Up" => Some(Self::ArrowUp),
            "ArrowDown" | "Down" => Some(Self::ArrowDown),
            _ => None,
        }
    }
}

impl<H: MediaHost, S: MetadataStore> PlaybackController<H, S> {
    fn playable_session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref().filter(|s| s.is_playable())
    }

    pub fn toggle_play(&mut self) {
        if self.playable_session().is_none() {
            return;
        }
        if self.flags.playing {
            self.host.pause();
            self.set_playing(false);
            return;
        }
        match self.host.play() {
            Ok(()) => self.set_playing(true),
            Err(err) => {
                self.set_playing(false);
                self.report(err);
            }
        }
    }

    /// Late refusal of a play request. Applies to whatever is loaded now.
    pub fn on_play_rejected(&mut self, reason: impl Into<String>) {
        self.set_playing(false);
        self.report(PlayerError::PlaybackStart(reason.into()));
    }

    /// The platform paused on its own (e.g. a system media key).
    pub fn on_platform_pause(&mut self) {
        if self.flags.playing {
            self.set_playing(false);
        }
    }

    pub fn set_volume(&mut self, percent: f64) {
        if self.playable_session().is_none() || percent.is_nan() {
            return;
        }
        self.volume = percent.round().clamp(0.0, 100.0) as u8;
        self.host.set_volume(f64::from(self.volume) / 100.0);
        self.settings.volume = self.volume;
        self.save_settings();
        self.emit_volume();
    }

    pub fn toggle_mute(&mut self) {
        if self.playable_session().is_none() {
            return;
        }
        self.flags.muted = !self.flags.muted;
        self.host.set_muted(self.flags.muted);
        self.emit_volume();
    }

    /// Jump to `fraction` of the duration. Out-of-range fractions are clamped.
    pub fn seek(&mut self, fraction: f64) {
        if self.playable_session().is_none() {
            return;
        }
        let duration = self.host.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }
        let target = clamp_fraction(fraction) * duration;
        self.host.set_current_time(target);
        self.emit_position(target, duration);
    }

    /// Move the position by `delta` seconds, staying inside `[0, duration]`.
    pub fn seek_by(&mut self, delta: f64) {
        if self.playable_session().is_none() {
            return;
        }
        let duration = self.host.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }
        let target = (self.host.current_time() + delta).clamp(0.0, duration);
        self.host.set_current_time(target);
        self.emit_position(target, duration);
    }

    pub fn begin_scrub(&mut self) {
        if self.playable_session().is_none() {
            return;
        }
        let duration = self.host.duration();
        let fraction = if duration.is_finite() && duration > 0.0 {
            self.host.current_time() / duration
        } else {
            0.0
        };
        self.scrub = ScrubState {
            dragging: true,
            pending_fraction: clamp_fraction(fraction),
        };
    }

    /// Preview only; the playback position is not touched while dragging.
    pub fn update_scrub(&mut self, fraction: f64) {
        if !self.scrub.dragging {
            return;
        }
        let fraction = clamp_fraction(fraction);
        self.scrub.pending_fraction = fraction;
        let duration = self.host.duration();
        self.emit(UiCommand::Progress {
            percent: fraction * 100.0,
        });
        if duration.is_finite() {
            self.emit(UiCommand::TimeLabel(format_progress(fraction * duration, duration)));
        }
    }

    pub fn end_scrub(&mut self, fraction: f64) {
        self.scrub = ScrubState::default();
        self.seek(fraction);
    }

    /// Returns whether the key was handled.
    pub fn handle_key(&mut self, key: ShortcutKey) -> bool {
        if self.playable_session().is_none() {
            return false;
        }
        let seek_step = self.settings.seek_step_secs;
        let volume_step = f64::from(self.settings.volume_step);
        match key {
            ShortcutKey::Space => self.toggle_play(),
            ShortcutKey::ArrowLeft => self.seek_by(-seek_step),
            ShortcutKey::ArrowRight => self.seek_by(seek_step),
            ShortcutKey::ArrowUp => self.set_volume(f64::from(self.volume) + volume_step),
            ShortcutKey::ArrowDown => self.set_volume(f64::from(self.volume) - volume_step),
        }
        true
    }

    pub fn on_metadata_ready(&mut self) {
        if self.playable_session().is_none() {
            return;
        }
        // The element exists now, so volume and mute can actually stick.
        self.host.set_volume(f64::from(self.volume) / 100.0);
        self.host.set_muted(self.flags.muted);
        let duration = self.host.duration();
        self.emit_position(self.host.current_time(), duration);
    }

    pub fn on_position_changed(&mut self) {
        if self.playable_session().is_none() || self.scrub.dragging {
            return;
        }
        let duration = self.host.duration();
        self.emit_position(self.host.current_time(), duration);
    }

    pub fn on_media_error(&mut self) {
        if self.session.is_none() {
            return;
        }
        let kind = MediaErrorKind::from_code(self.host.last_error_code().unwrap_or(0));
        self.set_playing(false);
        self.report(PlayerError::Media(kind));
    }

    pub(super) fn set_playing(&mut self, playing: bool) {
        self.flags.playing = playing;
        self.emit(UiCommand::PlayState(playing));
    }

    fn emit_position(&mut self, current: f64, duration: f64) {
        let percent = if duration.is_finite() && duration > 0.0 {
            (current / duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.emit(UiCommand::Progress { percent });
        self.emit(UiCommand::TimeLabel(format_progress(current, duration)));
    }
}
