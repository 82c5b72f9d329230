use dioxus::core::{current_scope_id, Runtime, ScopeId};
use dioxus::prelude::*;
use std::rc::Rc;

/// Runtime and scope of the component that installed a raw DOM callback.
/// Callbacks run inside that scope so `spawn` and signal writes resolve.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Clone)]
pub struct ListenerScope {
    runtime: Rc<Runtime>,
    scope: ScopeId,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl ListenerScope {
    /// Must be called while a component scope is active (render or effect).
    pub fn capture() -> Self {
        Self {
            runtime: Runtime::current(),
            scope: current_scope_id(),
        }
    }

    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        self.runtime.in_scope(self.scope, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FileCandidate, SourceId};
    use crate::components::media_host::PlatformHost;
    use crate::components::{AppController, PlayerHandle};
    use crate::db::SqliteStore;
    use crate::playback::ShortcutKey;
    use dioxus::core::VirtualDom;

    fn root() -> Element {
        rsx! { div {} }
    }

    fn mounted_dom() -> VirtualDom {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dom
    }

    #[test]
    fn callbacks_can_spawn_tasks() {
        let dom = mounted_dom();
        let listener = dom.in_scope(ScopeId::ROOT, ListenerScope::capture);
        let spawned = listener.run(|| {
            spawn(async {});
            true
        });
        assert!(spawned);
    }

    #[test]
    fn space_shortcut_from_a_raw_callback_starts_playback() {
        let dom = mounted_dom();
        let listener = dom.in_scope(ScopeId::ROOT, ListenerScope::capture);
        let player = listener.run(|| {
            let store = SqliteStore::open_in_memory().unwrap();
            PlayerHandle::new(AppController::new(PlatformHost::new(Signal::new(None)), store))
        });

        listener.run(|| {
            player
                .with(|c| c.add_items([FileCandidate::new("a.mp3", "audio/mpeg", 1, SourceId(1))]))
                .unwrap();
        });
        let handled = listener.run(|| player.with(|c| c.handle_key(ShortcutKey::Space)));

        assert!(handled);
        assert!(player.peek(|c| c.flags().playing));
        assert!(listener.run(|| player.view().peek().playing));
    }
}
