use crate::api::MediaKind;
use crate::components::{Icon, PlayerHandle};
use dioxus::prelude::*;

fn kind_icon(kind: Option<MediaKind>) -> &'static str {
    match kind {
        Some(MediaKind::Audio) => "music",
        Some(MediaKind::Video) => "film",
        Some(MediaKind::Image) => "image",
        None => "unknown",
    }
}

/// Playlist listing; clicking an entry loads it.
#[component]
pub fn PlaylistPanel() -> Element {
    let player = use_context::<PlayerHandle>();
    let view = player.view();
    let entries = view.read().playlist.clone();
    let active = view.read().active;

    rsx! {
        section { class: "mediadeck-playlist",
            h3 { "Playlist ({entries.len()})" }
            if entries.is_empty() {
                p { class: "mediadeck-empty", "No files yet" }
            } else {
                ol {
                    for (index, entry) in entries.into_iter().enumerate() {
                        li {
                            key: "{index}",
                            class: if active == Some(index) { "entry active" } else { "entry" },
                            onclick: move |_| {
                                let _ = player.with(|c| c.load(index));
                            },
                            Icon { name: kind_icon(entry.kind).to_string(), class: "icon-sm".to_string() }
                            span { class: "entry-name", "{entry.name}" }
                            span { class: "entry-size", "{entry.size_label}" }
                        }
                    }
                }
            }
        }
    }
}
