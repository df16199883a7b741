use crate::app::App;
use crate::components::{render_button, render_popup_with_block};
use crate::layout::{wrap_text, wrapped_cursor, CardLayout, ColumnLayout};
use crate::modal::{Modal, ModalLayout};
use crate::theme::*;
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use triboard_domain::{CardId, DropTarget, Ghost, Slot};

pub fn render(app: &mut App, frame: &mut Frame) {
    app.resize(frame.area());

    let dragged = app.drag.dragged_card();
    let target = app.drag.drop_target().copied();

    for column in &app.layout.columns {
        let is_target = target.is_some_and(|t| t.column == column.id);
        render_column(frame, column, is_target, dragged);
    }
    if let Some(target) = target {
        render_drop_indicator(app, frame, target);
    }
    render_status(app, frame);

    if let Some(ghost) = app.drag.ghost() {
        render_ghost(frame, ghost);
    }
    if let Some(modal) = app.modal.as_ref() {
        render_modal(frame, modal, Instant::now());
    }
}

fn render_column(
    frame: &mut Frame,
    column: &ColumnLayout,
    is_target: bool,
    dragged: Option<CardId>,
) {
    let mut block = Block::default()
        .title(format!(" {} ", column.id.title()))
        .borders(Borders::ALL)
        .border_style(column_border(is_target));
    if column.hidden_above() > 0 {
        let hint = format!(" ▲ {} ", column.hidden_above());
        block = block.title_top(Line::from(hint).right_aligned());
    }
    if column.hidden_below() > 0 {
        let hint = format!(" ▼ {} ", column.hidden_below());
        block = block.title_bottom(Line::from(hint).right_aligned());
    }
    frame.render_widget(block, column.area);

    for card in column.visible_cards() {
        render_card(frame, card, dragged == Some(card.id));
    }

    render_button(frame, "+ Add a card", column.add_button, label_text());
}

fn render_card(frame: &mut Frame, card: &CardLayout, is_drag_source: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(card_border(is_drag_source));
    frame.render_widget(block, card.area);

    let lines: Vec<Line> = card
        .lines
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), card_text(is_drag_source))))
        .collect();
    frame.render_widget(Paragraph::new(lines), card.text_area());

    render_button(frame, "✎", card.edit_button(), edit_button());
    render_button(frame, "✖", card.delete_button(), delete_button());
}

fn render_drop_indicator(app: &App, frame: &mut Frame, target: DropTarget) {
    let before = match target.slot {
        Slot::Before(id) => Some(id),
        Slot::End => None,
    };
    let Some(row) = app.layout.indicator_row(target.column, before) else {
        return;
    };
    let Some(column) = app.layout.column(target.column) else {
        return;
    };
    let area = Rect::new(column.add_button.x, row, column.add_button.width, 1);
    let bar = "─".repeat(usize::from(area.width));
    frame.render_widget(Paragraph::new(Span::styled(bar, drop_indicator())), area);
}

fn render_status(app: &App, frame: &mut Frame) {
    let line = match &app.status {
        Some(message) => Span::styled(message.clone(), error_text()),
        None => Span::styled(
            "Drag cards with the mouse | Wheel: scroll | 1/2/3: add card | Esc: cancel drag | q: quit",
            label_text(),
        ),
    };
    frame.render_widget(Paragraph::new(line), app.layout.status);
}

fn render_ghost(frame: &mut Frame, ghost: &Ghost) {
    let full = Rect::new(ghost.origin.x, ghost.origin.y, ghost.width, ghost.height);
    let area = full.intersection(frame.area());
    if area.is_empty() {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ghost_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = wrap_text(&ghost.text, full.width.saturating_sub(2))
        .into_iter()
        .map(|l| Line::from(Span::styled(l, highlight_text())))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_modal(frame: &mut Frame, modal: &Modal, now: Instant) {
    let layout = ModalLayout::compute(frame.area());
    render_popup_with_block(frame, &modal.title, layout.area);
    render_button(frame, ModalLayout::CLOSE_LABEL, layout.close, highlight_text());

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(input_border(modal.is_flashing(now)));
    let text_inner = input_block.inner(layout.text_area);
    frame.render_widget(input_block, layout.text_area);

    let text = modal.input.as_str();
    let (line, col) = wrapped_cursor(text, modal.input.cursor_pos(), text_inner.width);
    let scroll = line.saturating_sub(usize::from(text_inner.height.saturating_sub(1)));
    let lines: Vec<Line> = wrap_text(text, text_inner.width)
        .into_iter()
        .skip(scroll)
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(lines).style(normal_text()), text_inner);

    if !text_inner.is_empty() {
        let x = text_inner.x + (col as u16).min(text_inner.width - 1);
        let y = text_inner.y + (line - scroll) as u16;
        frame.set_cursor_position(Position::new(x, y));
    }

    render_button(frame, ModalLayout::SAVE_LABEL, layout.save, highlight_text());
    render_button(frame, ModalLayout::CANCEL_LABEL, layout.cancel, label_text());
    render_button(
        frame,
        "Enter: save | Alt+Enter: newline | Esc: cancel",
        layout.hint,
        label_text(),
    );
}
