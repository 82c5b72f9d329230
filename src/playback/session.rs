use crate::api::{MediaKind, ResourceHandle};

/// The active item and the handle backing it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    pub index: usize,
    pub kind: MediaKind,
    pub handle: ResourceHandle,
}

impl PlaybackSession {
    pub fn is_playable(&self) -> bool {
        self.kind.is_playable()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackModeFlags {
    pub loop_enabled: bool,
    pub shuffle: bool,
    pub playing: bool,
    pub muted: bool,
}

/// Progress-bar drag in flight. Position is only previewed until release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrubState {
    pub dragging: bool,
    pub pending_fraction: f64,
}
