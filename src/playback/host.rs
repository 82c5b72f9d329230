use crate::api::{MediaItem, PlayerError, ResourceHandle};

/// Platform media facilities the controller drives. Decoding and rendering
/// stay on the platform side; the controller only issues commands.
pub trait MediaHost {
    /// Create a revocable handle for the item's bytes.
    fn create_handle(&mut self, item: &MediaItem) -> Result<ResourceHandle, PlayerError>;
    fn release_handle(&mut self, handle: &ResourceHandle);

    /// Request playback. An immediate refusal is returned here; a refusal that
    /// arrives later is fed back through `PlaybackController::on_play_rejected`.
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self);

    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// Duration in seconds; NaN while unknown.
    fn duration(&self) -> f64;

    /// Volume in `0.0..=1.0`.
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);

    /// Error code of the active media element, if it failed.
    fn last_error_code(&self) -> Option<u16>;
}
