use serde::{Deserialize, Serialize};

/// Kind of media the player knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Audio,
    Video,
    Image,
}

impl MediaKind {
    /// Classify a MIME type by its top-level prefix (`audio/`, `video/`, `image/`).
    pub fn from_mime(mime: &str) -> Option<Self> {
        let top = mime.trim().split('/').next()?.to_ascii_lowercase();
        match top.as_str() {
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    /// Whether the platform can play, pause, seek and change volume on this kind.
    pub fn is_playable(self) -> bool {
        !matches!(self, Self::Image)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Audio => "Audio",
            Self::Video => "Video",
            Self::Image => "Image",
        }
    }
}

/// Opaque key the host uses to find the underlying file bytes of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub u64);

/// A file offered by the UI (picker or drop) before filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct FileCandidate {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub source: SourceId,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64, source: SourceId) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
            source,
        }
    }
}

/// An entry of the playlist. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub source: SourceId,
}

impl MediaItem {
    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::from_mime(&self.mime)
    }

    pub fn saved(&self) -> SavedItem {
        SavedItem {
            name: self.name.clone(),
            mime: self.mime.clone(),
            size: self.size,
        }
    }
}

impl From<FileCandidate> for MediaItem {
    fn from(candidate: FileCandidate) -> Self {
        Self {
            name: candidate.name,
            mime: candidate.mime,
            size: candidate.size,
            source: candidate.source,
        }
    }
}

/// Metadata-only copy of a playlist entry, as written to the metadata store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    pub name: String,
    #[serde(rename = "type")]
    pub mime: String,
    #[serde(default)]
    pub size: u64,
}

/// Revocable reference to the bytes backing a loaded item (an object URL on the web).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceHandle(pub String);

impl ResourceHandle {
    pub fn url(&self) -> &str {
        &self.0
    }
}

/// Error codes reported by the platform media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorKind {
    Aborted,
    Network,
    Decode,
    SourceNotSupported,
    Unknown,
}

impl MediaErrorKind {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Aborted,
            2 => Self::Network,
            3 => Self::Decode,
            4 => Self::SourceNotSupported,
            _ => Self::Unknown,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Aborted => "Playback was aborted before the media loaded.",
            Self::Network => "A network error interrupted loading this file.",
            Self::Decode => "The media could not be decoded.",
            Self::SourceNotSupported => "This file format is not supported by your browser.",
            Self::Unknown => "Unable to load this media file.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_mime_prefix() {
        assert_eq!(MediaKind::from_mime("audio/mpeg"), Some(MediaKind::Audio));
        assert_eq!(MediaKind::from_mime("video/webm"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("IMAGE/PNG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("text/plain"), None);
        assert_eq!(MediaKind::from_mime(""), None);
        assert_eq!(MediaKind::from_mime("audiox/foo"), None);
    }

    #[test]
    fn images_are_not_playable() {
        assert!(MediaKind::Audio.is_playable());
        assert!(MediaKind::Video.is_playable());
        assert!(!MediaKind::Image.is_playable());
    }

    #[test]
    fn saved_item_uses_type_key() {
        let item = MediaItem::from(FileCandidate::new("a.mp3", "audio/mpeg", 42, SourceId(1)));
        let json = serde_json::to_string(&item.saved()).unwrap();
        assert_eq!(json, r#"{"name":"a.mp3","type":"audio/mpeg","size":42}"#);
    }

    #[test]
    fn media_error_codes_map_to_kinds() {
        assert_eq!(MediaErrorKind::from_code(1), MediaErrorKind::Aborted);
        assert_eq!(MediaErrorKind::from_code(2), MediaErrorKind::Network);
        assert_eq!(MediaErrorKind::from_code(3), MediaErrorKind::Decode);
        assert_eq!(MediaErrorKind::from_code(4), MediaErrorKind::SourceNotSupported);
        assert_eq!(MediaErrorKind::from_code(0), MediaErrorKind::Unknown);
    }
}
