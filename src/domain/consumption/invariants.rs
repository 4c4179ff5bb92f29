use super::state::{Consumption, MAX_RATING};
use crate::domain::review::validate_review;
use crate::domain::{require_not_future, DomainError, DomainResult};

/// Validates all Consumption invariants
/// Used when a state is rebuilt from storage instead of through transitions
pub fn validate_consumption(state: &Consumption) -> DomainResult<()> {
    validate_rating(state)?;
    validate_consumed_flag(state)?;
    if let Some(date) = state.consumed_on() {
        require_not_future("consumed_on", date)?;
    }
    if let Some(review) = state.review() {
        validate_review(review)?;
    }
    Ok(())
}

fn validate_rating(state: &Consumption) -> DomainResult<()> {
    if state.rating() > MAX_RATING {
        return Err(DomainError::invalid(
            "rating",
            format!("{} is not 0 (unrated) or between 1 and {}", state.rating(), MAX_RATING),
        ));
    }
    Ok(())
}

/// Anything recorded about consumption requires the consumed flag
fn validate_consumed_flag(state: &Consumption) -> DomainResult<()> {
    if state.is_consumed() {
        return Ok(());
    }
    if state.rating() > 0 {
        return Err(DomainError::invalid("consumed", "a rated item must be consumed"));
    }
    if state.consumed_on().is_some() {
        return Err(DomainError::invalid(
            "consumed",
            "an item with a consumption date must be consumed",
        ));
    }
    if state.review().is_some() {
        return Err(DomainError::invalid("consumed", "a reviewed item must be consumed"));
    }
    Ok(())
}
