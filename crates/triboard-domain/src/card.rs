use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CardId = Uuid;

/// A card is its text plus an id generated when it enters the board.
/// Two cards with the same text remain distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }

    pub fn update_text(&mut self, text: String) {
        self.text = text;
    }
}
