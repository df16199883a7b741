use crate::{CardId, ColumnId};

/// A terminal cell position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Offset {
        Offset {
            dx: self.x.saturating_sub(origin.x),
            dy: self.y.saturating_sub(origin.y),
        }
    }

    pub fn shifted_back(self, offset: Offset) -> Point {
        Point {
            x: self.x.saturating_sub(offset.dx),
            y: self.y.saturating_sub(offset.dy),
        }
    }
}

/// Pointer position relative to the top-left corner of the grabbed card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub dx: u16,
    pub dy: u16,
}

/// Vertical extent of a card as currently laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBounds {
    pub id: CardId,
    pub top: u16,
    pub height: u16,
}

impl CardBounds {
    pub fn midpoint(&self) -> f32 {
        f32::from(self.top) + f32::from(self.height) / 2.0
    }
}

/// Cards of a column that are scrolled out of view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnScroll {
    pub above: Vec<CardId>,
    pub below: Vec<CardId>,
    /// First row of the column's tail (the add trigger and what follows).
    /// A drop at or below it appends to the column.
    pub tail_top: Option<u16>,
}

/// Where cards can be dropped, as seen on screen.
pub trait DropZones {
    /// Column whose area contains `point`, if any.
    fn column_at(&self, point: Point) -> Option<ColumnId>;

    /// Bounds of every card drawn in `column`, top to bottom.
    fn card_bounds(&self, column: ColumnId) -> Vec<CardBounds>;

    fn scroll(&self, _column: ColumnId) -> ColumnScroll {
        ColumnScroll::default()
    }
}
