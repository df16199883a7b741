pub mod board;
pub mod card;
pub mod column;
pub mod commands;
pub mod drag;
pub mod snapshot;

pub use board::BoardState;
pub use card::{Card, CardId};
pub use column::ColumnId;
pub use drag::{
    insertion_slot, ActiveDrag, CardBounds, ColumnScroll, DragOutcome, DragSession, DropTarget, DropZones,
    Ghost, Grab, Offset, Point, Slot,
};
pub use snapshot::BoardSnapshot;
