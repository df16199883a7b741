use crate::traits::KeyValueStore;
use std::collections::HashMap;
use tokio::sync::RwLock;
use triboard_core::BoardResult;

/// In-process store, used by tests and headless runs that should not touch disk.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> BoardResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> BoardResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
