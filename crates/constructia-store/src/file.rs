//! File-backed state provider with whole-file JSON persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use constructia_core::result::AppResult;
use constructia_core::traits::StateStore;

/// File-backed state provider.
///
/// The whole map is serialized to one JSON file on every mutation,
/// written to a temp file and renamed into place. A missing or corrupt
/// file on open is treated as an empty store (corrupt state must never
/// block startup). The lock only serializes writers within this
/// process; concurrent processes are last-writer-wins, like two browser
/// tabs sharing local storage.
#[derive(Debug)]
pub struct FileStateStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStateStore {
    /// Open the store at `path`, loading existing state if present.
    pub async fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "State file is corrupt, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), entries = entries.len(), "Opened state file");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Persist the current map. Callers must hold the write lock.
    async fn persist(&self, entries: &HashMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn delete_prefix(&self, prefix: &str) -> AppResult<u64> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let count = (before - entries.len()) as u64;

        if count > 0 {
            self.persist(&entries).await?;
        }

        debug!(prefix, count, "Deleted keys matching prefix");
        Ok(count)
    }
}
