use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn column_border(is_drop_target: bool) -> Style {
    if is_drop_target {
        Style::default()
            .fg(DROP_TARGET_BORDER)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(UNFOCUSED_BORDER)
    }
}

pub fn card_border(is_drag_source: bool) -> Style {
    if is_drag_source {
        Style::default().fg(DRAG_SOURCE_TEXT)
    } else {
        Style::default().fg(CARD_BORDER)
    }
}

pub fn card_text(is_drag_source: bool) -> Style {
    if is_drag_source {
        Style::default()
            .fg(DRAG_SOURCE_TEXT)
            .add_modifier(Modifier::DIM)
    } else {
        normal_text()
    }
}

pub fn ghost_border() -> Style {
    Style::default()
        .fg(GHOST_BORDER)
        .add_modifier(Modifier::BOLD)
}

pub fn drop_indicator() -> Style {
    Style::default().fg(DROP_INDICATOR).add_modifier(Modifier::BOLD)
}

pub fn edit_button() -> Style {
    Style::default().fg(EDIT_BUTTON)
}

pub fn delete_button() -> Style {
    Style::default().fg(DELETE_BUTTON)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

/// Text area border; red while an empty submission is being flagged.
pub fn input_border(flashing: bool) -> Style {
    if flashing {
        Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD)
    } else {
        focused_border()
    }
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
