use crate::BoardState;
use triboard_core::BoardResult;

pub mod card_commands;

pub use card_commands::*;

/// Trait for domain commands that mutate the board
pub trait Command: Send + Sync {
    /// Execute this command, mutating the board
    fn execute(&self, board: &mut BoardState) -> BoardResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Trims card text and rejects it when nothing is left.
pub(crate) fn normalize_text(text: &str) -> BoardResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(triboard_core::BoardError::Validation(
            "card text cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
