use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use triboard_core::{BoardError, BoardResult};
use triboard_domain::commands::Command;
use triboard_domain::{BoardState, CardId, ColumnId};
use triboard_persistence::{BoardRepository, JsonFileKvStore};

/// A card as reported to the caller: where it sits and what it says.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub column: ColumnId,
    pub index: usize,
    pub text: String,
}

/// Board loaded for one headless command.
pub struct CliContext {
    pub board: BoardState,
    repository: BoardRepository,
}

impl CliContext {
    /// Context with an empty board and the store left unread.
    pub fn open(store_path: &Path, key: &str) -> Self {
        Self {
            board: BoardState::new(),
            repository: BoardRepository::new(Arc::new(JsonFileKvStore::new(store_path)), key),
        }
    }

    /// Reads the stored board. Unlike the interactive board, an unreadable
    /// entry is an error here rather than an empty board.
    pub async fn load(store_path: &Path, key: &str) -> BoardResult<Self> {
        let mut ctx = Self::open(store_path, key);
        if let Some(snapshot) = ctx.repository.load_snapshot().await? {
            ctx.board = BoardState::from_snapshot(snapshot);
        }
        Ok(ctx)
    }

    pub fn key(&self) -> &str {
        self.repository.key()
    }

    /// Removes the stored entry and empties the board.
    pub async fn reset(&mut self) -> BoardResult<()> {
        self.repository.clear().await?;
        self.board = BoardState::new();
        Ok(())
    }

    pub fn execute(&mut self, command: impl Command) -> BoardResult<()> {
        tracing::debug!("Executing: {}", command.description());
        command.execute(&mut self.board)
    }

    pub async fn save(&self) -> BoardResult<()> {
        self.repository.save(&self.board).await
    }

    pub fn card_at(&self, column: ColumnId, index: usize) -> BoardResult<CardId> {
        self.board
            .get(column)
            .get(index)
            .map(|card| card.id)
            .ok_or_else(|| BoardError::NotFound(format!("no card at {}[{}]", column, index)))
    }

    pub fn view(&self, card_id: CardId) -> BoardResult<CardView> {
        let (column, index) = self
            .board
            .find(card_id)
            .ok_or_else(|| BoardError::NotFound(format!("card {}", card_id)))?;
        Ok(CardView {
            column,
            index,
            text: self.board.get(column)[index].text.clone(),
        })
    }
}
