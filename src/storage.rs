use crate::errors::AppError;
use crate::models::MoodEntry;
use std::{
    collections::HashMap,
    future::Future,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tokio::fs;
use tracing::{error, info};

/// Key the entry list is stored under.
pub const ENTRIES_KEY: &str = "moodEntries";

/// String key-value storage holding serialized state.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = io::Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: String) -> impl Future<Output = io::Result<()>> + Send;
}

/// One JSON file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Writes a sibling temp file and renames it over the target, so a crash
    /// mid-write leaves the previous value intact.
    async fn set(&self, key: &str, value: String) -> io::Result<()> {
        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).await?;
        fs::rename(&staging, &path).await
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.values().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> io::Result<()> {
        self.values().insert(key.to_string(), value);
        Ok(())
    }
}

/// Append-only mood history mirrored into a [`KeyValueStore`].
#[derive(Debug)]
pub struct MoodRepository<S> {
    store: S,
    entries: Vec<MoodEntry>,
}

impl<S: KeyValueStore> MoodRepository<S> {
    /// Missing or unreadable history starts out empty.
    pub async fn load(store: S) -> Self {
        let entries: Vec<MoodEntry> = match store.get(ENTRIES_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    error!("failed to parse stored mood entries: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                error!("failed to read stored mood entries: {err}");
                Vec::new()
            }
        };
        info!(count = entries.len(), "loaded mood history");
        Self { store, entries }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// The entry is kept only once the store has accepted the new list.
    pub async fn append_and_persist(&mut self, entry: MoodEntry) -> Result<&MoodEntry, AppError> {
        self.entries.push(entry);
        if let Err(err) = self.persist().await {
            self.entries.pop();
            error!("failed to persist mood entries: {}", err.message);
            return Err(err);
        }
        Ok(&self.entries[self.entries.len() - 1])
    }

    async fn persist(&self) -> Result<(), AppError> {
        let payload = serde_json::to_string(&self.entries).map_err(AppError::internal)?;
        self.store
            .set(ENTRIES_KEY, payload)
            .await
            .map_err(AppError::internal)
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}
