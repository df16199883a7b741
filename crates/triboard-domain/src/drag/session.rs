use super::geometry::{DropZones, Offset, Point};
use super::slot::DropTarget;
use crate::commands::MoveCard;
use crate::{CardId, ColumnId};

/// What the pointer grabbed when a drag starts.
#[derive(Debug, Clone)]
pub struct Grab {
    pub card_id: CardId,
    pub column: ColumnId,
    pub index: usize,
    pub text: String,
    /// Top-left corner of the grabbed card.
    pub card_origin: Point,
    pub card_width: u16,
    pub card_height: u16,
    pub pointer: Point,
}

/// Floating copy of the dragged card that follows the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ghost {
    pub text: String,
    pub origin: Point,
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone)]
pub struct ActiveDrag {
    pub card_id: CardId,
    pub source_column: ColumnId,
    pub source_index: usize,
    pub pointer_offset: Offset,
    pub pointer: Point,
    pub ghost: Ghost,
    pub drop_target: Option<DropTarget>,
}

impl ActiveDrag {
    fn track(&mut self, pointer: Point, zones: &impl DropZones) {
        self.pointer = pointer;
        self.ghost.origin = pointer.shifted_back(self.pointer_offset);
        self.drop_target = DropTarget::locate(zones, pointer, self.card_id);
    }
}

/// At most one drag exists because the controller holds a single session.
/// The ghost and drop indicator live inside `Active` and disappear with it.
#[derive(Debug, Clone, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Active(ActiveDrag),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The card should be moved to `index` of `to` (index excludes the card itself).
    Dropped {
        card_id: CardId,
        from: ColumnId,
        to: ColumnId,
        index: usize,
    },
    /// Released outside every column, or aborted.
    Cancelled,
    /// No drag was in progress.
    Ignored,
}

impl DragOutcome {
    pub fn into_command(self) -> Option<MoveCard> {
        match self {
            Self::Dropped {
                card_id, to, index, ..
            } => Some(MoveCard { card_id, to, index }),
            Self::Cancelled | Self::Ignored => None,
        }
    }
}

impl DragSession {
    /// Idle -> Active. A second grab while a drag is active is ignored.
    pub fn begin(self, grab: Grab, zones: &impl DropZones) -> Self {
        if self.is_active() {
            return self;
        }
        let pointer_offset = grab.pointer.offset_from(grab.card_origin);
        let mut active = ActiveDrag {
            card_id: grab.card_id,
            source_column: grab.column,
            source_index: grab.index,
            pointer_offset,
            pointer: grab.pointer,
            ghost: Ghost {
                text: grab.text,
                origin: grab.card_origin,
                width: grab.card_width,
                height: grab.card_height,
            },
            drop_target: None,
        };
        active.track(grab.pointer, zones);
        tracing::debug!(
            "Drag started: card {} from {}[{}]",
            active.card_id,
            active.source_column,
            active.source_index
        );
        Self::Active(active)
    }

    /// Follows the pointer and recomputes the drop target.
    pub fn pointer_moved(self, pointer: Point, zones: &impl DropZones) -> Self {
        match self {
            Self::Active(mut active) => {
                active.track(pointer, zones);
                Self::Active(active)
            }
            Self::Idle => Self::Idle,
        }
    }

    /// Active -> Idle on pointer release, resolving the drop at `pointer`.
    pub fn release(self, pointer: Point, zones: &impl DropZones) -> (Self, DragOutcome) {
        let Self::Active(active) = self else {
            return (Self::Idle, DragOutcome::Ignored);
        };
        let outcome = match DropTarget::locate(zones, pointer, active.card_id) {
            Some(target) => DragOutcome::Dropped {
                card_id: active.card_id,
                from: active.source_column,
                to: target.column,
                index: target.index,
            },
            None => DragOutcome::Cancelled,
        };
        tracing::debug!("Drag finished: {:?}", outcome);
        (Self::Idle, outcome)
    }

    /// Active -> Idle without moving anything.
    pub fn cancel(self) -> (Self, DragOutcome) {
        match self {
            Self::Active(active) => {
                tracing::debug!("Drag of card {} cancelled", active.card_id);
                (Self::Idle, DragOutcome::Cancelled)
            }
            Self::Idle => (Self::Idle, DragOutcome::Ignored),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        match self {
            Self::Active(active) => Some(active),
            Self::Idle => None,
        }
    }

    pub fn dragged_card(&self) -> Option<CardId> {
        self.active().map(|a| a.card_id)
    }

    pub fn drop_target(&self) -> Option<&DropTarget> {
        self.active().and_then(|a| a.drop_target.as_ref())
    }

    pub fn ghost(&self) -> Option<&Ghost> {
        self.active().map(|a| &a.ghost)
    }
}
