use crate::card::{Card, CardId};
use crate::column::ColumnId;
use crate::snapshot::BoardSnapshot;

/// In-memory board: three ordered card lists. Display order is vector order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    columns: [Vec<Card>; 3],
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: ColumnId) -> &[Card] {
        &self.columns[column.index()]
    }

    pub fn texts(&self, column: ColumnId) -> Vec<&str> {
        self.get(column).iter().map(|c| c.text.as_str()).collect()
    }

    pub fn len(&self, column: ColumnId) -> usize {
        self.get(column).len()
    }

    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_cards() == 0
    }

    /// Inserts a new card at `index`, clamped to the end of the column.
    pub fn insert(&mut self, column: ColumnId, index: usize, text: impl Into<String>) -> CardId {
        self.insert_card(column, index, Card::new(text))
    }

    pub fn insert_card(&mut self, column: ColumnId, index: usize, card: Card) -> CardId {
        let id = card.id;
        let cards = &mut self.columns[column.index()];
        let index = index.min(cards.len());
        cards.insert(index, card);
        id
    }

    pub fn push(&mut self, column: ColumnId, text: impl Into<String>) -> CardId {
        let end = self.len(column);
        self.insert(column, end, text)
    }

    pub fn remove_at(&mut self, column: ColumnId, index: usize) -> Option<Card> {
        let cards = &mut self.columns[column.index()];
        (index < cards.len()).then(|| cards.remove(index))
    }

    /// Removes the first card whose text equals `text`, returning its former index.
    pub fn remove_by_value(&mut self, column: ColumnId, text: &str) -> Option<usize> {
        let index = self.get(column).iter().position(|c| c.text == text)?;
        self.columns[column.index()].remove(index);
        Some(index)
    }

    pub fn remove_by_id(&mut self, column: ColumnId, id: CardId) -> Option<(usize, Card)> {
        let index = self.position(column, id)?;
        Some((index, self.columns[column.index()].remove(index)))
    }

    pub fn position(&self, column: ColumnId, id: CardId) -> Option<usize> {
        self.get(column).iter().position(|c| c.id == id)
    }

    /// Locates a card anywhere on the board.
    pub fn find(&self, id: CardId) -> Option<(ColumnId, usize)> {
        ColumnId::ALL
            .into_iter()
            .find_map(|column| self.position(column, id).map(|index| (column, index)))
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        let (column, index) = self.find(id)?;
        self.get(column).get(index)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let (column, index) = self.find(id)?;
        self.columns[column.index()].get_mut(index)
    }

    /// Replaces the text of a card, returning false when the id is unknown.
    pub fn set_text(&mut self, id: CardId, text: String) -> bool {
        match self.card_mut(id) {
            Some(card) => {
                card.update_text(text);
                true
            }
            None => false,
        }
    }

    /// Builds a board from persisted texts; every card receives a fresh id.
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Self {
        let mut board = Self::new();
        for column in ColumnId::ALL {
            board.columns[column.index()] = snapshot
                .column(column)
                .iter()
                .map(|text| Card::new(text.clone()))
                .collect();
        }
        board
    }

    pub fn to_snapshot(&self) -> BoardSnapshot {
        let mut snapshot = BoardSnapshot::default();
        for column in ColumnId::ALL {
            *snapshot.column_mut(column) = self
                .get(column)
                .iter()
                .map(|c| c.text.clone())
                .collect();
        }
        snapshot
    }
}
