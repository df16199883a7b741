//! Persisted shape of the board.
//!
//! The stored value is a JSON object with exactly the three column keys, each
//! mapped to an array of card texts. Card ids are not stored.

use crate::column::ColumnId;
use serde::{Deserialize, Serialize};
use triboard_core::{BoardError, BoardResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub column1: Vec<String>,
    #[serde(default)]
    pub column2: Vec<String>,
    #[serde(default)]
    pub column3: Vec<String>,
}

impl BoardSnapshot {
    pub fn column(&self, column: ColumnId) -> &[String] {
        match column {
            ColumnId::Column1 => &self.column1,
            ColumnId::Column2 => &self.column2,
            ColumnId::Column3 => &self.column3,
        }
    }

    pub fn column_mut(&mut self, column: ColumnId) -> &mut Vec<String> {
        match column {
            ColumnId::Column1 => &mut self.column1,
            ColumnId::Column2 => &mut self.column2,
            ColumnId::Column3 => &mut self.column3,
        }
    }

    pub fn to_json(&self) -> BoardResult<String> {
        serde_json::to_string(self).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> BoardResult<Self> {
        serde_json::from_str(json).map_err(|e| BoardError::Serialization(e.to_string()))
    }
}
