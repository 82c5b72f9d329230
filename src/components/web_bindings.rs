// Raw DOM listeners for things Dioxus events don't expose well: document
// shortcuts, file lists from drops and the picker, media errors and unload.
use crate::components::media_host::MEDIA_ELEMENT_ID;
use crate::components::{ListenerScope, PlayerHandle, DROP_ZONE_ID, FILE_INPUT_ID};
use crate::playback::ShortcutKey;
use dioxus::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, DragEvent, FileList, HtmlInputElement, KeyboardEvent};

fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element.has_attribute("contenteditable")
            && element
                .get_attribute("contenteditable")
                .map(|v| v.to_ascii_lowercase() != "false")
                .unwrap_or(true)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

fn shortcut_from_event(event: &KeyboardEvent) -> Option<ShortcutKey> {
    if event.default_prevented()
        || event.is_composing()
        || event.meta_key()
        || event.ctrl_key()
        || event.alt_key()
        || is_editable_shortcut_target(event)
    {
        return None;
    }
    ShortcutKey::from_key(&event.key())
}

pub fn install_shortcuts(player: PlayerHandle) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let listener = ListenerScope::capture();
    let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let Some(key) = shortcut_from_event(&event) else {
            return;
        };
        if listener.run(|| player.with(|c| c.handle_key(key))) {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
    key_cb.forget();
}

fn intake(player: PlayerHandle, list: &FileList) {
    if list.length() == 0 {
        return;
    }
    let _ = player.with(|c| {
        let candidates = c.host_mut().register_files(list);
        c.add_items(candidates)
    });
}

pub fn install_file_intake(player: PlayerHandle, drag_active: Signal<bool>) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let listener = ListenerScope::capture();

    if let Some(zone) = doc.get_element_by_id(DROP_ZONE_ID) {
        let over_cb = {
            let listener = listener.clone();
            let mut drag_active = drag_active;
            Closure::wrap(Box::new(move |event: DragEvent| {
                event.prevent_default();
                listener.run(|| {
                    if !*drag_active.peek() {
                        drag_active.set(true);
                    }
                });
            }) as Box<dyn FnMut(DragEvent)>)
        };
        let leave_cb = {
            let listener = listener.clone();
            let mut drag_active = drag_active;
            Closure::wrap(Box::new(move |_event: DragEvent| {
                listener.run(|| drag_active.set(false));
            }) as Box<dyn FnMut(DragEvent)>)
        };
        let drop_cb = {
            let listener = listener.clone();
            let mut drag_active = drag_active;
            Closure::wrap(Box::new(move |event: DragEvent| {
                event.prevent_default();
                listener.run(|| {
                    drag_active.set(false);
                    if let Some(list) = event.data_transfer().and_then(|dt| dt.files()) {
                        intake(player, &list);
                    }
                });
            }) as Box<dyn FnMut(DragEvent)>)
        };

        let _ = zone.add_event_listener_with_callback("dragover", over_cb.as_ref().unchecked_ref());
        let _ =
            zone.add_event_listener_with_callback("dragleave", leave_cb.as_ref().unchecked_ref());
        let _ = zone.add_event_listener_with_callback("drop", drop_cb.as_ref().unchecked_ref());
        over_cb.forget();
        leave_cb.forget();
        drop_cb.forget();
    }

    if let Some(input) = doc
        .get_element_by_id(FILE_INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        let change_cb = {
            let input = input.clone();
            Closure::wrap(Box::new(move |_event: web_sys::Event| {
                if let Some(list) = input.files() {
                    listener.run(|| intake(player, &list));
                }
                // Allow picking the same files again.
                input.set_value("");
            }) as Box<dyn FnMut(_)>)
        };
        let _ = input.add_event_listener_with_callback("change", change_cb.as_ref().unchecked_ref());
        change_cb.forget();
    }
}

/// Release every handle when the page goes away.
pub fn install_teardown(player: PlayerHandle) {
    let Some(win) = window() else {
        return;
    };
    let listener = ListenerScope::capture();
    let unload_cb = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        listener.run(|| player.with(|c| c.release_all_handles()));
    }) as Box<dyn FnMut(_)>);
    let _ = win.add_event_listener_with_callback("pagehide", unload_cb.as_ref().unchecked_ref());
    let _ =
        win.add_event_listener_with_callback("beforeunload", unload_cb.as_ref().unchecked_ref());
    unload_cb.forget();
}

/// Media errors are not surfaced as Dioxus events; listen on the element itself.
pub fn watch_media_errors(player: PlayerHandle) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MEDIA_ELEMENT_ID))
    else {
        return;
    };
    let listener = ListenerScope::capture();
    let error_cb = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        listener.run(|| player.with(|c| c.on_media_error()));
    }) as Box<dyn FnMut(_)>);
    let _ = element.add_event_listener_with_callback("error", error_cb.as_ref().unchecked_ref());
    error_cb.forget();
}
