//! The components module contains the Dioxus UI around the playback controller.

mod app;
mod icons;
mod listener;
pub mod media_host;
mod player;
mod playlist;
#[cfg(target_arch = "wasm32")]
mod web_bindings;

pub use app::*;
pub use icons::*;
pub use listener::ListenerScope;
pub use player::*;
pub use playlist::*;
