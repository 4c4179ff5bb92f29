use super::entity::Season;
use crate::domain::consumption::validate_consumption;
use crate::domain::{Consumable, DomainError, DomainResult};

/// Validates all Season invariants
pub fn validate_season(season: &Season) -> DomainResult<()> {
    validate_number(season.number())?;
    validate_episode_count(season.episode_count())?;
    validate_years(season.release_year(), season.end_year())?;
    validate_consumption(season.consumption())?;
    Ok(())
}

/// Season numbers start at 1
fn validate_number(number: u32) -> DomainResult<()> {
    if number == 0 {
        return Err(DomainError::invalid("season_number", "must be positive"));
    }
    Ok(())
}

pub(crate) fn validate_episode_count(episode_count: u32) -> DomainResult<()> {
    if episode_count == 0 {
        return Err(DomainError::invalid("episode_count", "must be positive"));
    }
    Ok(())
}

/// If both years are present, the season cannot end before it starts
pub(crate) fn validate_years(release_year: Option<i32>, end_year: Option<i32>) -> DomainResult<()> {
    if let (Some(start), Some(end)) = (release_year, end_year) {
        if end < start {
            return Err(DomainError::invalid(
                "end_year",
                format!("{} is before release year {}", end, start),
            ));
        }
    }
    Ok(())
}

/// Critical Season Invariants:
///
/// 1. Season belongs to exactly one Series
/// 2. Number is positive and unique within the series
/// 3. Episode count is positive
/// 4. If both years exist, release <= end
/// 5. Consumption invariants hold (rating implies consumed, ...)
