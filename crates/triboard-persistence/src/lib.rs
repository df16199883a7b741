pub mod repository;
pub mod serialization;
pub mod store;
pub mod traits;

pub use repository::BoardRepository;
pub use serialization::JsonSerializer;
pub use store::*;
pub use traits::*;
