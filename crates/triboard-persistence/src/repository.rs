use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use std::sync::Arc;
use triboard_core::BoardResult;
use triboard_domain::{BoardSnapshot, BoardState};

/// Loads and saves the board as a single entry of a [`KeyValueStore`].
#[derive(Clone)]
pub struct BoardRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl BoardRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored snapshot, `Ok(None)` when nothing has been saved yet.
    pub async fn load_snapshot(&self) -> BoardResult<Option<BoardSnapshot>> {
        match self.store.get(&self.key).await? {
            Some(text) => Ok(Some(JsonSerializer.deserialize(&text)?)),
            None => Ok(None),
        }
    }

    /// Loads the board, substituting an empty one when the entry is missing or
    /// cannot be read.
    pub async fn load(&self) -> BoardState {
        match self.load_snapshot().await {
            Ok(Some(snapshot)) => {
                let board = BoardState::from_snapshot(snapshot);
                tracing::info!(
                    "Loaded board '{}' with {} cards",
                    self.key,
                    board.total_cards()
                );
                board
            }
            Ok(None) => {
                tracing::info!("No stored board under '{}', starting empty", self.key);
                BoardState::new()
            }
            Err(e) => {
                tracing::warn!("Stored board '{}' is unreadable ({}), starting empty", self.key, e);
                BoardState::new()
            }
        }
    }

    pub async fn save(&self, board: &BoardState) -> BoardResult<()> {
        let text = JsonSerializer.serialize(&board.to_snapshot())?;
        self.store.set(&self.key, &text).await?;
        tracing::debug!("Saved board '{}' ({} bytes)", self.key, text.len());
        Ok(())
    }

    /// Drops the stored entry; the next load starts empty.
    pub async fn clear(&self) -> BoardResult<()> {
        self.store.remove(&self.key).await?;
        tracing::info!("Cleared board '{}'", self.key);
        Ok(())
    }
}
