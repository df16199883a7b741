use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use triboard_core::BoardError;

/// The three fixed columns of the board, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    #[serde(rename = "column1")]
    Column1,
    #[serde(rename = "column2")]
    Column2,
    #[serde(rename = "column3")]
    Column3,
}

impl ColumnId {
    pub const ALL: [ColumnId; 3] = [Self::Column1, Self::Column2, Self::Column3];

    pub fn index(self) -> usize {
        match self {
            Self::Column1 => 0,
            Self::Column2 => 1,
            Self::Column3 => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Storage key of the column in the persisted board object.
    pub fn key(self) -> &'static str {
        match self {
            Self::Column1 => "column1",
            Self::Column2 => "column2",
            Self::Column3 => "column3",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Column1 => "To Do",
            Self::Column2 => "In Progress",
            Self::Column3 => "Done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    /// Accepts the storage key (`column2`) or the 1-based number (`2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "column1" | "1" => Ok(Self::Column1),
            "column2" | "2" => Ok(Self::Column2),
            "column3" | "3" => Ok(Self::Column3),
            other => Err(BoardError::Validation(format!("unknown column: {other}"))),
        }
    }
}
