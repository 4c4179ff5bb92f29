pub mod entity;
pub mod invariants;

pub use entity::Series;
pub use invariants::validate_series;
