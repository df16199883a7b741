pub mod app;
pub mod components;
pub mod events;
pub mod handlers;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod ui;

pub use app::App;
pub use layout::{BoardLayout, Hit};
pub use modal::{Modal, ModalAction, ModalIntent, ModalLayout};
