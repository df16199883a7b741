use crate::app::App;
use crate::layout::Hit;
use crate::modal::ModalLayout;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use triboard_domain::{CardId, DropZones, Grab, Point};

impl App {
    pub async fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let point = Point::new(mouse.column, mouse.row);

        if self.modal.is_some() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.handle_modal_click(point).await;
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_board_click(point).await,
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if self.drag.is_active() {
                    if let Some((column, delta)) = self.layout.edge_scroll(point) {
                        self.scroll_column(column, delta);
                    }
                    self.track_pointer(point);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.finish_drag(point).await,
            MouseEventKind::ScrollDown => self.scroll_at(point, 1),
            MouseEventKind::ScrollUp => self.scroll_at(point, -1),
            _ => {}
        }
    }

    fn scroll_at(&mut self, point: Point, delta: isize) {
        let Some(column) = self.layout.column_at(point) else {
            return;
        };
        self.scroll_column(column, delta);
        if self.drag.is_active() {
            self.track_pointer(point);
        }
    }

    fn track_pointer(&mut self, point: Point) {
        let drag = std::mem::take(&mut self.drag);
        self.drag = drag.pointer_moved(point, &self.layout);
    }

    async fn handle_board_click(&mut self, point: Point) {
        if self.drag.is_active() {
            return;
        }
        match self.layout.hit(point) {
            Some(Hit::EditCard(id)) => self.open_edit_modal(id),
            Some(Hit::DeleteCard(id)) => self.delete_card(id).await,
            Some(Hit::Card { id, .. }) => self.begin_drag(id, point),
            Some(Hit::AddCard(column)) => self.open_add_modal(column),
            Some(Hit::Column(_)) | None => {}
        }
    }

    async fn handle_modal_click(&mut self, point: Point) {
        let modal = ModalLayout::compute(self.layout.area);
        let position = Position::new(point.x, point.y);

        if modal.close.contains(position) || modal.cancel.contains(position) {
            self.close_modal();
        } else if modal.save.contains(position) {
            self.submit_modal().await;
        } else if !modal.area.contains(position) {
            self.close_modal();
        }
    }

    pub fn begin_drag(&mut self, card_id: CardId, pointer: Point) {
        let Some(card) = self.layout.card(card_id) else {
            return;
        };
        let Some(text) = self.board.card(card_id).map(|c| c.text.clone()) else {
            return;
        };
        let grab = Grab {
            card_id,
            column: card.column,
            index: card.index,
            text,
            card_origin: Point::new(card.area.x, card.area.y),
            card_width: card.area.width,
            card_height: card.area.height,
            pointer,
        };
        let drag = std::mem::take(&mut self.drag);
        self.drag = drag.begin(grab, &self.layout);
    }

    async fn finish_drag(&mut self, pointer: Point) {
        let drag = std::mem::take(&mut self.drag);
        let (drag, outcome) = drag.release(pointer, &self.layout);
        self.drag = drag;

        if let Some(command) = outcome.into_command() {
            let result = self.execute_command(command).await;
            self.report(result, "move card");
        }
    }

    pub fn cancel_drag(&mut self) {
        let drag = std::mem::take(&mut self.drag);
        let (drag, _) = drag.cancel();
        self.drag = drag;
    }
}
