pub mod config;
pub mod error;
pub mod result;
pub mod text;

pub use config::AppConfig;
pub use error::BoardError;
pub use result::BoardResult;
pub use text::TextBuffer;
