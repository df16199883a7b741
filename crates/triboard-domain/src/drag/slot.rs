use super::geometry::{CardBounds, DropZones, Point};
use crate::{CardId, ColumnId};

/// Where a dropped card lands relative to the cards already in the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Before(CardId),
    End,
}

/// Live drop indicator: target column, slot, and the insertion index counted
/// over the column's cards with the dragged card left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub column: ColumnId,
    pub slot: Slot,
    pub index: usize,
}

impl DropTarget {
    /// Drop target under `pointer`, or `None` when it is outside every column.
    ///
    /// The slot is chosen among the cards on screen. Below the last of them
    /// the card goes before the first card scrolled out below, and on the
    /// column's tail it goes to the very end.
    pub fn locate(zones: &impl DropZones, pointer: Point, dragged: CardId) -> Option<Self> {
        let column = zones.column_at(pointer)?;
        let cards = zones.card_bounds(column);
        let scroll = zones.scroll(column);
        let others = |ids: &[CardId]| ids.iter().filter(|&&id| id != dragged).count();
        let skipped = others(scroll.above.as_slice());

        if scroll.tail_top.is_some_and(|top| pointer.y >= top) {
            let visible = cards.iter().filter(|c| c.id != dragged).count();
            return Some(Self {
                column,
                slot: Slot::End,
                index: skipped + visible + others(scroll.below.as_slice()),
            });
        }

        let (slot, index) = match insertion_slot(&cards, pointer.y, Some(dragged)) {
            (Slot::End, index) => match scroll.below.iter().find(|&&id| id != dragged) {
                Some(&next) => (Slot::Before(next), index),
                None => (Slot::End, index),
            },
            before => before,
        };
        Some(Self {
            column,
            slot,
            index: skipped + index,
        })
    }
}

/// Finds the first card whose vertical midpoint lies strictly below
/// `pointer_y` and returns a slot before it, or [`Slot::End`] when there is
/// none.
///
/// Cards are scanned once, keeping the offset `pointer_y - midpoint` that is
/// negative and closest to zero. On equal offsets the earlier card wins.
pub fn insertion_slot(
    cards: &[CardBounds],
    pointer_y: u16,
    dragged: Option<CardId>,
) -> (Slot, usize) {
    let pointer_y = f32::from(pointer_y);
    let mut closest: Option<(f32, usize, CardId)> = None;

    let candidates = cards.iter().filter(|c| Some(c.id) != dragged);
    let mut count = 0;
    for (index, card) in candidates.enumerate() {
        count = index + 1;
        let offset = pointer_y - card.midpoint();
        let closer = match closest {
            Some((best, _, _)) => offset > best,
            None => true,
        };
        if offset < 0.0 && closer {
            closest = Some((offset, index, card.id));
        }
    }

    match closest {
        Some((_, index, id)) => (Slot::Before(id), index),
        None => (Slot::End, count),
    }
}
