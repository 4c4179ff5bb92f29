//! Critical Review Invariants:
//!
//! 1. Review text cannot be blank
//! 2. Creation date is never in the future
//! 3. A review is immutable; replacing it means creating a new one

pub mod entity;

pub use entity::Review;

use crate::domain::{require_not_future, require_text, DomainResult};

/// Validates Review invariants
pub fn validate_review(review: &Review) -> DomainResult<()> {
    require_text("review", review.text().to_string())?;
    require_not_future("review_date", review.created_on())?;
    Ok(())
}
