pub mod entity;
pub mod invariants;

pub use entity::Book;
pub use invariants::{normalize_isbn, validate_book};
