use crate::components::media_host::PlatformHost;
use crate::components::{Icon, Player, PlaylistPanel};
use crate::db::{open_platform_store, PlatformStore};
use crate::playback::{PlaybackController, PlayerView};
use dioxus::prelude::*;

pub type AppController = PlaybackController<PlatformHost, PlatformStore>;

/// DOM ids the browser bindings attach raw listeners to.
pub const DROP_ZONE_ID: &str = "mediadeck-dropzone";
pub const FILE_INPUT_ID: &str = "mediadeck-file-input";

/// Shared access to the controller. Every call folds the commands it issued
/// into the view model the components render.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerHandle {
    controller: Signal<AppController>,
    view: Signal<PlayerView>,
}

impl PlayerHandle {
    /// Wrap a freshly built controller, folding its startup commands into the view.
    pub fn new(mut controller: AppController) -> Self {
        let mut view = PlayerView::default();
        view.apply_all(controller.drain_commands());
        Self {
            controller: Signal::new(controller),
            view: Signal::new(view),
        }
    }

    pub fn with<R>(mut self, f: impl FnOnce(&mut AppController) -> R) -> R {
        let (result, commands) = {
            let mut controller = self.controller.write();
            let result = f(&mut *controller);
            (result, controller.drain_commands())
        };
        if !commands.is_empty() {
            self.view.write().apply_all(commands);
        }
        result
    }

    pub fn view(&self) -> Signal<PlayerView> {
        self.view
    }

    /// Read-only peek that does not subscribe the caller.
    pub fn peek<R>(&self, f: impl FnOnce(&AppController) -> R) -> R {
        f(&*self.controller.peek())
    }
}

#[component]
pub fn PlayerShell() -> Element {
    let mut play_rejection = use_signal(|| None::<String>);
    let drag_active = use_signal(|| false);

    let player = use_hook(move || {
        PlayerHandle::new(AppController::new(
            PlatformHost::new(play_rejection),
            open_platform_store(),
        ))
    });
    use_context_provider(|| player);

    let mut theme = use_signal(move || player.peek(|c| c.settings().theme));

    // Forward late play() refusals from the host.
    use_effect(move || {
        let Some(reason) = play_rejection() else {
            return;
        };
        play_rejection.set(None);
        player.with(|c| c.on_play_rejected(reason));
    });

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        crate::components::web_bindings::install_shortcuts(player);
        crate::components::web_bindings::install_file_intake(player, drag_active);
        crate::components::web_bindings::install_teardown(player);
    });

    let view = player.view();
    let error = view.read().error.clone();
    let saved_notice = view.read().saved_notice;
    let theme_class = theme().class_name();
    let dragging_over = drag_active();

    rsx! {
        div { class: "mediadeck {theme_class}",
            header { class: "mediadeck-header",
                h1 { "MediaDeck" }
                div { class: "mediadeck-header-actions",
                    label { class: "btn", r#for: FILE_INPUT_ID,
                        Icon { name: "folder".to_string(), class: "icon".to_string() }
                        "Choose files"
                    }
                    input {
                        id: FILE_INPUT_ID,
                        r#type: "file",
                        multiple: true,
                        accept: "audio/*,video/*,image/*",
                        class: "hidden",
                    }
                    button {
                        id: "theme-btn",
                        r#type: "button",
                        class: "btn",
                        title: "Toggle theme",
                        onclick: move |_| theme.set(player.with(|c| c.toggle_theme())),
                        Icon {
                            name: if theme_class == "theme-dark" { "sun".to_string() } else { "moon".to_string() },
                            class: "icon".to_string(),
                        }
                    }
                }
            }

            if let Some(message) = error {
                div { class: "mediadeck-error", role: "alert",
                    span { "{message}" }
                    button {
                        r#type: "button",
                        class: "btn-ghost",
                        onclick: move |_| player.with(|c| c.dismiss_error()),
                        "Dismiss"
                    }
                }
            }

            if let Some(count) = saved_notice {
                div { class: "mediadeck-notice",
                    "Previously saved playlist ({count} items). Choose the files again to play them."
                }
            }

            div {
                id: DROP_ZONE_ID,
                class: if dragging_over { "mediadeck-dropzone drag-over" } else { "mediadeck-dropzone" },
                Player {}
                p { class: "mediadeck-drop-hint", "Drop audio, video or image files here" }
            }

            PlaylistPanel {}
        }
    }
}
