use crate::app::App;
use crate::modal::{handle_modal_key, ModalAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use triboard_domain::ColumnId;

impl App {
    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(modal) = self.modal.as_mut() {
            match handle_modal_key(modal, key) {
                ModalAction::Confirm => self.submit_modal().await,
                ModalAction::Cancel => self.close_modal(),
                ModalAction::None => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.cancel_drag(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char(c @ '1'..='3') => {
                let index = usize::from(c as u8 - b'1');
                if let Some(column) = ColumnId::from_index(index) {
                    self.open_add_modal(column);
                }
            }
            _ => {}
        }
    }
}
