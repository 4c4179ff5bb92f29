//! Consumption state shared by every media item and every season.
//!
//! Critical Consumption Invariants:
//!
//! 1. Rating is 0 (unrated) or between 1 and 5
//! 2. rating > 0 implies consumed
//! 3. A review implies consumed
//! 4. A consumption date implies consumed and is never in the future
//! 5. Not consumed implies rating = 0, no date and no review
//!
//! All rules live in `Consumption::transition`; setters never write fields
//! directly.

pub mod invariants;
pub mod state;

pub use invariants::validate_consumption;
pub use state::{Consumable, Consumption, ConsumptionChange, Rateable, MAX_RATING};
