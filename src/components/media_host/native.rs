// Headless host for non-browser builds: tracks transport state in memory and
// hands out synthetic handles. Nothing is decoded.
use crate::api::{MediaItem, PlayerError, ResourceHandle};
use crate::playback::MediaHost;
use dioxus::prelude::*;
use std::collections::HashSet;

pub type PlatformHost = HeadlessMediaHost;

#[derive(Debug, Default)]
pub struct HeadlessMediaHost {
    next_handle: u64,
    live: HashSet<ResourceHandle>,
    position: f64,
    volume: f64,
    muted: bool,
}

impl HeadlessMediaHost {
    /// Same shape as the browser host; playback never fails here, so the
    /// rejection channel stays unused.
    pub fn new(_play_rejection: Signal<Option<String>>) -> Self {
        Self::default()
    }

    pub fn live_handles(&self) -> usize {
        self.live.len()
    }
}

impl MediaHost for HeadlessMediaHost {
    fn create_handle(&mut self, item: &MediaItem) -> Result<ResourceHandle, PlayerError> {
        self.next_handle += 1;
        let handle = ResourceHandle(format!("memory://{}/{}", self.next_handle, item.name));
        self.live.insert(handle.clone());
        self.position = 0.0;
        Ok(handle)
    }

    fn release_handle(&mut self, handle: &ResourceHandle) {
        self.live.remove(handle);
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.position = seconds.max(0.0);
    }

    fn duration(&self) -> f64 {
        f64::NAN
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn last_error_code(&self) -> Option<u16> {
        None
    }
}
