//! Pointer-driven card moves.
//!
//! A drag is a small state machine, [`DragSession`], whose transitions consume
//! the current session and return the next one. Everything the drag needs is
//! captured when it starts; the screen layout is only consulted through
//! [`DropZones`] to locate the drop target.

pub mod geometry;
pub mod session;
pub mod slot;

pub use geometry::{CardBounds, ColumnScroll, DropZones, Offset, Point};
pub use session::{ActiveDrag, DragOutcome, DragSession, Ghost, Grab};
pub use slot::{insertion_slot, DropTarget, Slot};
