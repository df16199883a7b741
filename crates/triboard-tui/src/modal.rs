use crate::components::centered_rect;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use std::time::{Duration, Instant};
use triboard_core::TextBuffer;
use triboard_domain::{Card, CardId, ColumnId};

/// What confirming the modal will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalIntent {
    AddTo(ColumnId),
    Edit(CardId),
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub input: TextBuffer,
    pub intent: ModalIntent,
    error_until: Option<Instant>,
}

impl Modal {
    pub fn add(column: ColumnId) -> Self {
        Self {
            title: format!("Add a card to {}", column.title()),
            input: TextBuffer::new(),
            intent: ModalIntent::AddTo(column),
            error_until: None,
        }
    }

    pub fn edit(card: &Card) -> Self {
        let mut input = TextBuffer::new();
        input.set(card.text.clone());
        Self {
            title: "Edit card".to_string(),
            input,
            intent: ModalIntent::Edit(card.id),
            error_until: None,
        }
    }

    /// The trimmed text and intent, or `None` after starting the error flash
    /// when the text is blank.
    pub fn confirm(&mut self, now: Instant, flash: Duration) -> Option<(ModalIntent, String)> {
        let text = self.input.trimmed();
        if text.is_empty() {
            self.error_until = Some(now + flash);
            return None;
        }
        Some((self.intent, text.to_string()))
    }

    pub fn is_flashing(&self, now: Instant) -> bool {
        self.error_until.is_some_and(|until| now < until)
    }

    pub fn clear_expired_flash(&mut self, now: Instant) {
        if !self.is_flashing(now) {
            self.error_until = None;
        }
    }
}

pub enum ModalAction {
    None,
    Cancel,
    Confirm,
}

pub fn handle_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    let input = &mut modal.input;
    match key.code {
        KeyCode::Esc => ModalAction::Cancel,
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            input.insert_newline();
            ModalAction::None
        }
        KeyCode::Enter => ModalAction::Confirm,
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            ModalAction::Confirm
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => ModalAction::None,
        KeyCode::Char(c) => {
            input.insert_char(c);
            ModalAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            ModalAction::None
        }
        KeyCode::Delete => {
            input.delete();
            ModalAction::None
        }
        KeyCode::Left => {
            input.move_left();
            ModalAction::None
        }
        KeyCode::Right => {
            input.move_right();
            ModalAction::None
        }
        KeyCode::Home => {
            input.move_home();
            ModalAction::None
        }
        KeyCode::End => {
            input.move_end();
            ModalAction::None
        }
        _ => ModalAction::None,
    }
}

/// Placement of the modal and its clickable parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub area: Rect,
    pub text_area: Rect,
    pub save: Rect,
    pub cancel: Rect,
    pub close: Rect,
    pub hint: Rect,
}

impl ModalLayout {
    pub const SAVE_LABEL: &'static str = "[ Save ]";
    pub const CANCEL_LABEL: &'static str = "[ Cancel ]";
    pub const CLOSE_LABEL: &'static str = "[x]";

    pub fn compute(frame_area: Rect) -> Self {
        let area = centered_rect(60, 50, frame_area);
        let inner = area.inner(Margin::new(1, 1));
        let [text_area, _, buttons, hint] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let save = Rect {
            width: buttons.width.min(8),
            ..buttons
        };
        let cancel_x = buttons.x.saturating_add(10);
        let cancel = Rect {
            x: cancel_x,
            width: buttons.right().saturating_sub(cancel_x).min(10),
            ..buttons
        };
        let close = Rect::new(area.right().saturating_sub(4), area.y, 3.min(area.width), 1);

        Self {
            area,
            text_area,
            save,
            cancel,
            close,
            hint,
        }
    }
}
