use crate::components::{Icon, PlayerHandle};
use crate::playback::Direction;
use dioxus::prelude::*;

fn toggle_class(active: bool) -> &'static str {
    if active {
        "btn-icon active"
    } else {
        "btn-icon"
    }
}

/// Play/Pause button
#[component]
pub(super) fn PlayPauseButton(playing: bool, enabled: bool) -> Element {
    let player = use_context::<PlayerHandle>();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "btn-play",
            disabled: !enabled,
            title: if playing { "Pause" } else { "Play" },
            onclick: move |_| player.with(|c| c.toggle_play()),
            if playing {
                Icon { name: "pause".to_string(), class: "icon".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "icon".to_string() }
            }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let player = use_context::<PlayerHandle>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "btn-icon",
            title: "Previous",
            onclick: move |_| {
                let _ = player.with(|c| c.advance(Direction::Previous));
            },
            Icon { name: "prev".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let player = use_context::<PlayerHandle>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "btn-icon",
            title: "Next",
            onclick: move |_| {
                let _ = player.with(|c| c.advance(Direction::Next));
            },
            Icon { name: "next".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn LoopButton(active: bool) -> Element {
    let player = use_context::<PlayerHandle>();

    rsx! {
        button {
            id: "loop-btn",
            r#type: "button",
            class: toggle_class(active),
            title: "Loop",
            aria_pressed: "{active}",
            onclick: move |_| player.with(|c| c.toggle_loop()),
            Icon { name: "repeat".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn ShuffleButton(active: bool) -> Element {
    let player = use_context::<PlayerHandle>();

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            class: toggle_class(active),
            title: "Shuffle",
            aria_pressed: "{active}",
            onclick: move |_| player.with(|c| c.toggle_shuffle()),
            Icon { name: "shuffle".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn MuteButton(muted: bool, enabled: bool) -> Element {
    let player = use_context::<PlayerHandle>();

    rsx! {
        button {
            id: "mute-btn",
            r#type: "button",
            class: "btn-icon",
            disabled: !enabled,
            title: if muted { "Unmute" } else { "Mute" },
            onclick: move |_| player.with(|c| c.toggle_mute()),
            Icon {
                name: if muted { "volume-x".to_string() } else { "volume".to_string() },
                class: "icon".to_string(),
            }
        }
    }
}
