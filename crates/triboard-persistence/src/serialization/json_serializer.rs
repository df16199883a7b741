use crate::traits::Serializer;
use triboard_core::{BoardError, BoardResult};

/// Compact JSON, one value per store entry
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> BoardResult<String> {
        serde_json::to_string(data).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    fn deserialize(&self, text: &str) -> BoardResult<T> {
        serde_json::from_str(text).map_err(|e| BoardError::Serialization(e.to_string()))
    }
}
