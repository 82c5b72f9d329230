// Browser host: object URLs for files, HtmlMediaElement for transport.
use super::MEDIA_ELEMENT_ID;
use crate::api::{FileCandidate, MediaItem, PlayerError, ResourceHandle, SourceId};
use crate::playback::MediaHost;
use dioxus::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{window, File, FileList, HtmlMediaElement, Url};

pub type PlatformHost = WebMediaHost;

pub struct WebMediaHost {
    files: HashMap<SourceId, File>,
    next_source: u64,
    volume: f64,
    muted: bool,
    play_rejection: Signal<Option<String>>,
}

fn media_element() -> Option<HtmlMediaElement> {
    window()?
        .document()?
        .get_element_by_id(MEDIA_ELEMENT_ID)?
        .dyn_into::<HtmlMediaElement>()
        .ok()
}

fn describe_js_error(err: &wasm_bindgen::JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string()
        .unwrap_or_else(|| "the browser blocked playback".to_string())
}

impl WebMediaHost {
    /// Late `play()` refusals are written to `play_rejection` for the UI to forward.
    pub fn new(play_rejection: Signal<Option<String>>) -> Self {
        Self {
            files: HashMap::new(),
            next_source: 0,
            volume: 0.8,
            muted: false,
            play_rejection,
        }
    }

    /// Keep the picked/dropped files and describe them for the controller.
    pub fn register_files(&mut self, list: &FileList) -> Vec<FileCandidate> {
        let mut candidates = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            let Some(file) = list.get(i) else {
                continue;
            };
            self.next_source += 1;
            let source = SourceId(self.next_source);
            candidates.push(FileCandidate::new(
                file.name(),
                file.type_(),
                file.size().max(0.0) as u64,
                source,
            ));
            self.files.insert(source, file);
        }
        candidates
    }
}

impl MediaHost for WebMediaHost {
    fn create_handle(&mut self, item: &MediaItem) -> Result<ResourceHandle, PlayerError> {
        let file = self
            .files
            .get(&item.source)
            .ok_or_else(|| PlayerError::Handle(format!("{} is no longer available", item.name)))?;
        Url::create_object_url_with_blob(file)
            .map(ResourceHandle)
            .map_err(|err| PlayerError::Handle(describe_js_error(&err)))
    }

    fn release_handle(&mut self, handle: &ResourceHandle) {
        if let Err(err) = Url::revoke_object_url(handle.url()) {
            tracing::debug!("revoke failed for {}: {}", handle.url(), describe_js_error(&err));
        }
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        let element = media_element()
            .ok_or_else(|| PlayerError::PlaybackStart("media element is not ready".to_string()))?;
        let promise = element
            .play()
            .map_err(|err| PlayerError::PlaybackStart(describe_js_error(&err)))?;
        let mut rejection = self.play_rejection;
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                rejection.set(Some(describe_js_error(&err)));
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(element) = media_element() {
            let _ = element.pause();
        }
    }

    fn current_time(&self) -> f64 {
        media_element().map(|e| e.current_time()).unwrap_or(0.0)
    }

    fn set_current_time(&mut self, seconds: f64) {
        if let Some(element) = media_element() {
            element.set_current_time(seconds);
        }
    }

    fn duration(&self) -> f64 {
        media_element().map(|e| e.duration()).unwrap_or(f64::NAN)
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(element) = media_element() {
            element.set_volume(self.volume);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(element) = media_element() {
            element.set_muted(muted);
        }
    }

    fn last_error_code(&self) -> Option<u16> {
        media_element()?.error().map(|e| e.code())
    }
}
