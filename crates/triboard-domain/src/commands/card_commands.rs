use super::{normalize_text, Command};
use crate::{BoardState, CardId, ColumnId};
use triboard_core::{BoardError, BoardResult};

/// Append a new card to the end of a column
pub struct AddCard {
    pub column: ColumnId,
    pub text: String,
}

impl Command for AddCard {
    fn execute(&self, board: &mut BoardState) -> BoardResult<()> {
        let text = normalize_text(&self.text)?;
        let id = board.push(self.column, text);
        tracing::info!("Added card {} to {}", id, self.column);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add card '{}' to {}", self.text.trim(), self.column)
    }
}

/// Replace the text of an existing card
pub struct EditCard {
    pub card_id: CardId,
    pub text: String,
}

impl Command for EditCard {
    fn execute(&self, board: &mut BoardState) -> BoardResult<()> {
        let text = normalize_text(&self.text)?;
        if !board.set_text(self.card_id, text) {
            return Err(BoardError::NotFound(format!("card {}", self.card_id)));
        }
        tracing::info!("Edited card {}", self.card_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Edit card {}", self.card_id)
    }
}

/// Remove a card from the board
pub struct DeleteCard {
    pub card_id: CardId,
}

impl Command for DeleteCard {
    fn execute(&self, board: &mut BoardState) -> BoardResult<()> {
        let (column, _) = board
            .find(self.card_id)
            .ok_or_else(|| BoardError::NotFound(format!("card {}", self.card_id)))?;
        board.remove_by_id(column, self.card_id);
        tracing::info!("Deleted card {} from {}", self.card_id, column);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }
}

/// Move a card to `index` in the target column.
///
/// `index` counts the target column's cards without the moved card, so it is
/// valid both across columns and within the same column.
pub struct MoveCard {
    pub card_id: CardId,
    pub to: ColumnId,
    pub index: usize,
}

impl Command for MoveCard {
    fn execute(&self, board: &mut BoardState) -> BoardResult<()> {
        let (from, from_index) = board
            .find(self.card_id)
            .ok_or_else(|| BoardError::NotFound(format!("card {}", self.card_id)))?;
        let Some((_, card)) = board.remove_by_id(from, self.card_id) else {
            return Err(BoardError::Internal(format!(
                "card {} vanished during move",
                self.card_id
            )));
        };
        board.insert_card(self.to, self.index, card);
        tracing::info!(
            "Moved card {} from {}[{}] to {}[{:?}]",
            self.card_id,
            from,
            from_index,
            self.to,
            board.position(self.to, self.card_id)
        );
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move card {} to {}[{}]", self.card_id, self.to, self.index)
    }
}
