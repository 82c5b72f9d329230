//! Platform media hosts backing the playback controller.

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(target_arch = "wasm32")]
pub use web::*;
#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

/// DOM id of the audio/video element the host drives.
pub const MEDIA_ELEMENT_ID: &str = "mediadeck-media";
