use crate::api::MediaKind;
use crate::components::media_host::MEDIA_ELEMENT_ID;
use crate::components::{Icon, PlayerHandle};
use crate::playback::MountedMedia;
use dioxus::prelude::*;

mod controls;

use controls::{LoopButton, MuteButton, NextButton, PlayPauseButton, PrevButton, ShuffleButton};

const SCRUB_STEPS: f64 = 1000.0;

fn slider_fraction(e: &Event<FormData>) -> Option<f64> {
    e.value().parse::<f64>().ok().map(|v| v / SCRUB_STEPS)
}

#[component]
fn MediaStage(mounted: Option<MountedMedia>) -> Element {
    let player = use_context::<PlayerHandle>();

    let Some(media) = mounted else {
        return rsx! {
            div { class: "mediadeck-stage empty",
                Icon { name: "music".to_string(), class: "icon-lg".to_string() }
                p { "Choose or drop files to start" }
            }
        };
    };
    let url = media.url.clone();

    match media.kind {
        MediaKind::Audio => rsx! {
            div { class: "mediadeck-stage audio",
                Icon { name: "music".to_string(), class: "icon-lg".to_string() }
                audio {
                    key: "{url}",
                    id: MEDIA_ELEMENT_ID,
                    src: "{url}",
                    preload: "metadata",
                    onloadedmetadata: move |_| player.with(|c| c.on_metadata_ready()),
                    ontimeupdate: move |_| player.with(|c| c.on_position_changed()),
                    onended: move |_| {
                        let _ = player.with(|c| c.on_natural_end());
                    },
                    onpause: move |_| player.with(|c| c.on_platform_pause()),
                }
            }
        },
        MediaKind::Video => rsx! {
            div { class: "mediadeck-stage video",
                video {
                    key: "{url}",
                    id: MEDIA_ELEMENT_ID,
                    src: "{url}",
                    preload: "metadata",
                    onloadedmetadata: move |_| player.with(|c| c.on_metadata_ready()),
                    ontimeupdate: move |_| player.with(|c| c.on_position_changed()),
                    onended: move |_| {
                        let _ = player.with(|c| c.on_natural_end());
                    },
                    onpause: move |_| player.with(|c| c.on_platform_pause()),
                }
            }
        },
        MediaKind::Image => rsx! {
            div { class: "mediadeck-stage image",
                img { key: "{url}", src: "{url}", alt: "{media.name}" }
            }
        },
    }
}

#[component]
pub fn Player() -> Element {
    let player = use_context::<PlayerHandle>();
    let view = player.view();

    let playable_url = use_memo(move || {
        view.read()
            .mounted
            .as_ref()
            .filter(|m| m.kind.is_playable())
            .map(|m| m.url.clone())
    });

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if playable_url().is_some() {
            crate::components::web_bindings::watch_media_errors(player);
        }
    });

    let snapshot = view.read().clone();
    let controls_enabled = playable_url.read().is_some();
    let progress_value = (snapshot.progress_percent * SCRUB_STEPS / 100.0).round();

    let on_volume_input = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            player.with(|c| c.set_volume(percent));
        }
    };

    rsx! {
        section { class: "mediadeck-player",
            MediaStage { mounted: snapshot.mounted.clone() }

            div { class: "mediadeck-meta",
                h2 { class: "mediadeck-title", "{snapshot.title}" }
                if !snapshot.kind_label.is_empty() {
                    p { class: "mediadeck-subtitle", "{snapshot.kind_label} • {snapshot.size_label}" }
                }
            }

            div { class: "mediadeck-progress",
                input {
                    r#type: "range",
                    min: "0",
                    max: "{SCRUB_STEPS}",
                    step: "1",
                    value: "{progress_value}",
                    disabled: !controls_enabled,
                    onpointerdown: move |_| player.with(|c| c.begin_scrub()),
                    oninput: move |e: Event<FormData>| {
                        if let Some(fraction) = slider_fraction(&e) {
                            player.with(|c| c.update_scrub(fraction));
                        }
                    },
                    onchange: move |e: Event<FormData>| {
                        if let Some(fraction) = slider_fraction(&e) {
                            player.with(|c| c.end_scrub(fraction));
                        }
                    },
                    onpointerup: move |_| {
                        player.with(|c| {
                            let scrub = c.scrub();
                            if scrub.dragging {
                                c.end_scrub(scrub.pending_fraction);
                            }
                        })
                    },
                }
                span { class: "mediadeck-time", "{snapshot.time_label}" }
            }

            div { class: "mediadeck-controls",
                ShuffleButton { active: snapshot.shuffle_on }
                PrevButton {}
                PlayPauseButton { playing: snapshot.playing, enabled: controls_enabled }
                NextButton {}
                LoopButton { active: snapshot.loop_on }
                div { class: "mediadeck-volume",
                    MuteButton { muted: snapshot.muted, enabled: controls_enabled }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{snapshot.volume}",
                        disabled: !controls_enabled,
                        oninput: on_volume_input,
                    }
                }
            }
        }
    }
}
