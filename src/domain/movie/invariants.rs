use std::time::Duration;

use super::entity::Movie;
use crate::domain::consumption::validate_consumption;
use crate::domain::{require_text, Consumable, DomainError, DomainResult};

/// Validates all Movie invariants
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_duration(movie.duration())?;
    require_text("director", movie.director().to_string())?;
    require_text("writer", movie.writer().to_string())?;
    validate_cast(movie.cast())?;
    require_text("original_title", movie.original_title().to_string())?;
    validate_consumption(movie.consumption())?;
    Ok(())
}

pub(crate) fn validate_duration(duration: Duration) -> DomainResult<Duration> {
    if duration.is_zero() {
        return Err(DomainError::invalid("duration", "must be positive"));
    }
    Ok(duration)
}

/// Cast must list at least one name and no blank names
/// Shared with Series
pub(crate) fn validate_cast(cast: &[String]) -> DomainResult<()> {
    if cast.is_empty() {
        return Err(DomainError::invalid("cast", "must list at least one name"));
    }
    if cast.iter().any(|name| name.trim().is_empty()) {
        return Err(DomainError::invalid("cast", "names cannot be empty"));
    }
    Ok(())
}

/// Critical Movie Invariants:
///
/// 1. Duration is positive
/// 2. Director, writer and original title are never blank
/// 3. Cast is a non-empty ordered list
/// 4. Identity is (title, director, release year)
