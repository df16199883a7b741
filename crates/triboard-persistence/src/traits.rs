use async_trait::async_trait;
use triboard_core::BoardResult;

/// String-keyed store of string values, local to one device.
/// Implementations handle different backends (file, memory, ...)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` when the entry is absent
    async fn get(&self, key: &str) -> BoardResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> BoardResult<()>;

    /// Delete the entry; removing an absent key is not an error
    async fn remove(&self, key: &str) -> BoardResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T>: Send + Sync {
    fn serialize(&self, data: &T) -> BoardResult<String>;

    fn deserialize(&self, text: &str) -> BoardResult<T>;
}
