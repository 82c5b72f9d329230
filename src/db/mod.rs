use crate::api::{SavedItem, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

pub const PLAYLIST_KEY: &str = "mediadeck.playlist";
pub const CURRENT_INDEX_KEY: &str = "mediadeck.current_index";
pub const SETTINGS_KEY: &str = "mediadeck.settings";

/// String-valued key/value store for small JSON metadata blobs.
pub trait MetadataStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Volatile store, used when no backend is available and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `localStorage`, written raw so values stay plain strings.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl MetadataStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
}

/// SQLite `settings(key, value)` table in the platform data directory.
#[cfg(not(target_arch = "wasm32"))]
pub struct SqliteStore {
    conn: Option<rusqlite::Connection>,
}

#[cfg(not(target_arch = "wasm32"))]
impl SqliteStore {
    /// Open the store in the user's data directory. Never fails: a store that
    /// cannot be opened reports `Unavailable` on every access instead.
    pub fn open_default() -> Self {
        match Self::open_at(default_db_path()) {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!("metadata store unavailable: {err}");
                Self { conn: None }
            }
        }
    }

    pub fn open_at(path: std::path::PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Backend(e.to_string()))?;
        }
        let conn = rusqlite::Connection::open(&path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(rusqlite::Connection::open_in_memory()?)
    }

    fn with_connection(conn: rusqlite::Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn: Some(conn) })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MetadataStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.conn.as_ref().ok_or(StoreError::Unavailable)?;
        let result = conn.query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [key],
            |row: &rusqlite::Row| row.get::<_, String>(0),
        );
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.conn.as_ref().ok_or(StoreError::Unavailable)?;
        conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_db_path() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("mediadeck")
        .join("mediadeck.db")
}

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = SqliteStore;

#[cfg(target_arch = "wasm32")]
pub fn open_platform_store() -> PlatformStore {
    BrowserStore
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_platform_store() -> PlatformStore {
    SqliteStore::open_default()
}

/// Color theme of the player shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Light => "theme-light",
        }
    }
}

/// Player settings stored next to the playlist metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_volume")]
    pub volume: u8,
    #[serde(default = "default_seek_step_secs")]
    pub seek_step_secs: f64,
    #[serde(default = "default_volume_step")]
    pub volume_step: u8,
}

fn default_volume() -> u8 {
    80
}

fn default_seek_step_secs() -> f64 {
    5.0
}

fn default_volume_step() -> u8 {
    10
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            volume: default_volume(),
            seek_step_secs: default_seek_step_secs(),
            volume_step: default_volume_step(),
        }
    }
}

impl PlayerSettings {
    fn normalized(mut self) -> Self {
        self.volume = self.volume.min(100);
        if !self.seek_step_secs.is_finite() || self.seek_step_secs <= 0.0 {
            self.seek_step_secs = default_seek_step_secs();
        }
        if self.volume_step == 0 || self.volume_step > 100 {
            self.volume_step = default_volume_step();
        }
        self
    }
}

pub fn load_settings(store: &impl MetadataStore) -> PlayerSettings {
    match store.read(SETTINGS_KEY) {
        Ok(Some(json)) => match serde_json::from_str::<PlayerSettings>(&json) {
            Ok(settings) => settings.normalized(),
            Err(err) => {
                tracing::debug!("ignoring unreadable settings: {err}");
                PlayerSettings::default()
            }
        },
        Ok(None) => PlayerSettings::default(),
        Err(err) => {
            tracing::debug!("settings read failed: {err}");
            PlayerSettings::default()
        }
    }
}

pub fn save_settings(store: &mut impl MetadataStore, settings: &PlayerSettings) -> Result<(), StoreError> {
    let json = serde_json::to_string(settings)?;
    store.write(SETTINGS_KEY, &json)
}

/// Playlist metadata left behind by an earlier session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SavedPlaylist {
    pub items: Vec<SavedItem>,
    pub current_index: Option<usize>,
}

pub fn save_playlist(
    store: &mut impl MetadataStore,
    items: &[SavedItem],
    current_index: usize,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(items)?;
    store.write(PLAYLIST_KEY, &json)?;
    store.write(CURRENT_INDEX_KEY, &current_index.to_string())
}

pub fn load_playlist(store: &impl MetadataStore) -> Result<Option<SavedPlaylist>, StoreError> {
    let Some(json) = store.read(PLAYLIST_KEY)? else {
        return Ok(None);
    };
    let items: Vec<SavedItem> = serde_json::from_str(&json)?;
    let current_index = store
        .read(CURRENT_INDEX_KEY)?
        .and_then(|raw| raw.trim().parse::<usize>().ok());
    Ok(Some(SavedPlaylist {
        items,
        current_index,
    }))
}
