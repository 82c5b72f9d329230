//! Error types surfaced by the player and its metadata store.

use crate::api::models::MediaErrorKind;
use thiserror::Error;

/// User-visible, recoverable player errors.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// The item's MIME type is none of audio, video or image
    #[error("Unsupported file type: {name} ({mime})")]
    UnsupportedFileType { name: String, mime: String },

    /// A batch of files held no audio, video or image files
    #[error("No supported files. Choose audio, video or image files.")]
    NoSupportedFiles,

    /// The platform refused to start playback (usually an autoplay restriction)
    #[error("Playback could not start: {0}")]
    PlaybackStart(String),

    /// The platform media element reported an error
    #[error("{}", .0.message())]
    Media(MediaErrorKind),

    /// The host could not create a resource handle for a file
    #[error("Could not open file: {0}")]
    Handle(String),
}

/// Metadata store failures. Callers treat these as best-effort and swallow them.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
