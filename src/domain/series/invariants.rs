use super::entity::Series;
use crate::domain::movie::invariants::validate_cast;
use crate::domain::season::validate_season;
use crate::domain::{require_text, DomainError, DomainResult};

/// Validates all Series invariants
pub fn validate_series(series: &Series) -> DomainResult<()> {
    require_text("original_title", series.original_title().to_string())?;
    validate_cast(series.cast())?;
    validate_season_numbers(series)?;
    for season in series.seasons() {
        validate_season(season)?;
    }
    Ok(())
}

/// Seasons are sorted, so duplicates are always adjacent
fn validate_season_numbers(series: &Series) -> DomainResult<()> {
    for pair in series.seasons().windows(2) {
        if pair[0].number() == pair[1].number() {
            return Err(DomainError::DuplicateSeason(pair[0].number()));
        }
    }
    Ok(())
}

/// Critical Series Invariants:
///
/// 1. Season numbers are unique and kept in ascending order
/// 2. Rating is derived from rated seasons on every read, never stored
/// 3. Consumed iff at least one season exists and all seasons are consumed
/// 4. Consumption date is the latest season date when consumed
/// 5. Identity is (title, release year)
