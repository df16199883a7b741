pub mod card_handlers;
pub mod key_handlers;
pub mod mouse_handlers;
