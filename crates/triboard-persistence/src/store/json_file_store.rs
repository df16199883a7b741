use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use triboard_core::{BoardError, BoardResult};

/// Key-value store kept in one JSON file: an object mapping keys to string values.
///
/// Every `set` and `remove` rewrites the whole file atomically. Writes from one
/// process are serialized by an internal lock.
#[derive(Debug)]
pub struct JsonFileKvStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileKvStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_entries(&self) -> BoardResult<BTreeMap<String, String>> {
        let Some(bytes) = AtomicWriter::read_optional(&self.path).await? else {
            return Ok(BTreeMap::new());
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            BoardError::Storage(format!("{} is not a key-value file: {}", self.path.display(), e))
        })
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> BoardResult<()> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| BoardError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &json).await
    }
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileKvStore {
    async fn get(&self, key: &str) -> BoardResult<Option<String>> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await?;
        tracing::info!(
            "Stored {} bytes under '{}' in {}",
            value.len(),
            key,
            self.path.display()
        );
        Ok(())
    }

    async fn remove(&self, key: &str) -> BoardResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
            tracing::info!("Removed '{}' from {}", key, self.path.display());
        }
        Ok(())
    }
}
