use crate::app::App;
use crate::modal::{Modal, ModalIntent};
use std::time::Instant;
use triboard_core::BoardResult;
use triboard_domain::commands::{AddCard, DeleteCard, EditCard};
use triboard_domain::{CardId, ColumnId};

impl App {
    pub fn open_add_modal(&mut self, column: ColumnId) {
        if self.drag.is_active() || self.modal.is_some() {
            return;
        }
        self.modal = Some(Modal::add(column));
    }

    pub fn open_edit_modal(&mut self, card_id: CardId) {
        if self.drag.is_active() || self.modal.is_some() {
            return;
        }
        match self.board.card(card_id) {
            Some(card) => self.modal = Some(Modal::edit(card)),
            None => tracing::warn!("Edit requested for unknown card {}", card_id),
        }
    }

    pub fn close_modal(&mut self) {
        if self.modal.take().is_some() {
            tracing::debug!("Card editor closed without saving");
        }
    }

    /// Applies the modal's text. Blank text keeps the modal open and flashes
    /// the input border instead.
    pub async fn submit_modal(&mut self) {
        let flash = self.config.error_flash();
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        let Some((intent, text)) = modal.confirm(Instant::now(), flash) else {
            tracing::debug!("Rejected blank card text");
            return;
        };
        self.modal = None;

        let result = match intent {
            ModalIntent::AddTo(column) => self.execute_command(AddCard { column, text }).await,
            ModalIntent::Edit(card_id) => self.execute_command(EditCard { card_id, text }).await,
        };
        self.report(result, "save card");
    }

    pub async fn delete_card(&mut self, card_id: CardId) {
        let result = self.execute_command(DeleteCard { card_id }).await;
        self.report(result, "delete card");
    }

    pub(crate) fn report(&mut self, result: BoardResult<()>, action: &str) {
        if let Err(e) = result {
            tracing::error!("Failed to {}: {}", action, e);
            self.status = Some(format!("Could not {}: {}", action, e));
        }
    }
}
