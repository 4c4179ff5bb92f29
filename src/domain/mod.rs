// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod book;
pub mod consumption;
pub mod media;
pub mod movie;
pub mod review;
pub mod season;
pub mod series;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Value objects
pub use consumption::{Consumable, Consumption, ConsumptionChange, Rateable};
pub use review::{validate_review, Review};

// Season (owned by Series)
pub use season::{validate_season, Season};

// Media entities
pub use book::{normalize_isbn, validate_book, Book};
pub use media::{Media, MediaEntity, MediaIdentity, MediaInfo, MediaKind};
pub use movie::{validate_movie, Movie};
pub use series::{validate_series, Series};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use chrono::{Local, NaiveDate};
use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Season {0} already exists in this series")]
    DuplicateSeason(u32),
}

impl DomainError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is a field validation error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::InvalidField { field, .. } => Some(field),
            DomainError::DuplicateSeason(_) => None,
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

// ============================================================================
// SHARED RULES
// ============================================================================

/// Earliest accepted release year (first known motion picture)
pub const MIN_RELEASE_YEAR: i32 = 1888;

/// Release years may be announced up to this many years ahead
pub const RELEASE_YEAR_LOOKAHEAD: i32 = 2;

/// Local calendar date used for every "not in the future" rule
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Rejects blank strings, returning the value untouched otherwise
pub(crate) fn require_text(field: &'static str, value: String) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid(field, "cannot be empty"));
    }
    Ok(value)
}

/// Dates in the future are never accepted for consumption or reviews
pub(crate) fn require_not_future(field: &'static str, date: NaiveDate) -> DomainResult<NaiveDate> {
    if date > today() {
        return Err(DomainError::invalid(
            field,
            format!("{} is in the future", date.format("%d/%m/%Y")),
        ));
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_require_text_rejects_blank() {
        let err = require_text("title", "   ".to_string()).unwrap_err();
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn test_require_text_keeps_value() {
        assert_eq!(
            require_text("title", " Dune ".to_string()).unwrap(),
            " Dune "
        );
    }

    #[test]
    fn test_future_date_rejected() {
        let tomorrow = today() + Duration::days(1);
        assert!(require_not_future("consumed_on", tomorrow).is_err());
        assert!(require_not_future("consumed_on", today()).is_ok());
    }
}
