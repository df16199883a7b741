use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const DROP_TARGET_BORDER: Color = Color::Green;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const DRAG_SOURCE_TEXT: Color = Color::DarkGray;

pub const CARD_BORDER: Color = Color::Gray;
pub const GHOST_BORDER: Color = Color::Cyan;
pub const DROP_INDICATOR: Color = Color::Blue;

pub const EDIT_BUTTON: Color = Color::LightBlue;
pub const DELETE_BUTTON: Color = Color::LightRed;

pub const POPUP_BG: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
