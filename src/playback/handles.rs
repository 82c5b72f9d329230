use super::host::MediaHost;
use crate::api::ResourceHandle;

/// Every handle created during the session. Superseded handles are kept until
/// teardown; only `release_all` frees them.
#[derive(Debug, Default)]
pub struct ResourceHandleSet {
    handles: Vec<ResourceHandle>,
}

impl ResourceHandleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, handle: ResourceHandle) {
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, handle: &ResourceHandle) -> bool {
        self.handles.contains(handle)
    }

    /// Release every tracked handle through the host and forget them.
    /// Returns how many were released; a second call releases nothing.
    pub fn release_all<H: MediaHost>(&mut self, host: &mut H) -> usize {
        let released = self.handles.len();
        for handle in self.handles.drain(..) {
            host.release_handle(&handle);
        }
        released
    }
}
