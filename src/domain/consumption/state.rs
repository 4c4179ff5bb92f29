use chrono::NaiveDate;

use crate::domain::review::{validate_review, Review};
use crate::domain::{require_not_future, DomainError, DomainResult};

use super::invariants::validate_consumption;

/// Highest rating a user can give
pub const MAX_RATING: u8 = 5;

/// Rating, consumption flag, consumption date and review of one item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Consumption {
    rating: u8,
    consumed: bool,
    consumed_on: Option<NaiveDate>,
    review: Option<Review>,
}

/// A single requested change to a consumption state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsumptionChange {
    /// 0 clears the rating, 1..=5 rates and marks consumed
    Rating(u8),
    /// `false` resets the whole state
    Consumed(bool),
    /// `Some` marks consumed on that date, `None` only clears the date
    ConsumedOn(Option<NaiveDate>),
    /// Attaching a review marks consumed
    Review(Review),
}

impl Consumption {
    /// Fresh, never consumed state
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a state from stored parts, rejecting inconsistent combinations
    pub fn restore(
        rating: u8,
        consumed: bool,
        consumed_on: Option<NaiveDate>,
        review: Option<Review>,
    ) -> DomainResult<Self> {
        let state = Self {
            rating,
            consumed,
            consumed_on,
            review,
        };
        validate_consumption(&state)?;
        Ok(state)
    }

    /// State of an aggregate whose consumption derives from its children
    pub(crate) fn derived(consumed: bool, consumed_on: Option<NaiveDate>) -> Self {
        if !consumed {
            return Self::default();
        }
        Self {
            rating: 0,
            consumed,
            consumed_on,
            review: None,
        }
    }

    /// Apply one change and return the resulting validated state
    /// The current state is left untouched, so a failed change has no effect
    pub fn transition(&self, change: ConsumptionChange) -> DomainResult<Self> {
        let mut next = self.clone();
        match change {
            ConsumptionChange::Rating(rating) => {
                if rating > MAX_RATING {
                    return Err(DomainError::invalid(
                        "rating",
                        format!("{} is not 0 (unrated) or between 1 and {}", rating, MAX_RATING),
                    ));
                }
                next.rating = rating;
                if rating > 0 {
                    next.consumed = true;
                }
            }
            ConsumptionChange::Consumed(consumed) => {
                next = self.with_consumed(consumed);
            }
            ConsumptionChange::ConsumedOn(Some(date)) => {
                next.consumed_on = Some(require_not_future("consumed_on", date)?);
                next.consumed = true;
            }
            ConsumptionChange::ConsumedOn(None) => {
                next.consumed_on = None;
            }
            ConsumptionChange::Review(review) => {
                validate_review(&review)?;
                next.review = Some(review);
                next.consumed = true;
            }
        }
        Ok(next)
    }

    /// Marking as not consumed is a full reset, never a partial one
    pub fn with_consumed(&self, consumed: bool) -> Self {
        if consumed {
            Self {
                consumed: true,
                ..self.clone()
            }
        } else {
            Self::default()
        }
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn consumed_on(&self) -> Option<NaiveDate> {
        self.consumed_on
    }

    pub fn review(&self) -> Option<&Review> {
        self.review.as_ref()
    }
}

/// Read access to the consumption state of a catalog item
pub trait Consumable {
    fn consumption(&self) -> &Consumption;

    /// Series override this with the average of their seasons
    fn rating(&self) -> u8 {
        self.consumption().rating()
    }

    fn is_rated(&self) -> bool {
        self.rating() > 0
    }

    fn is_consumed(&self) -> bool {
        self.consumption().is_consumed()
    }

    fn consumed_on(&self) -> Option<NaiveDate> {
        self.consumption().consumed_on()
    }

    fn review(&self) -> Option<&Review> {
        self.consumption().review()
    }
}

/// Items whose consumption state is set directly by the user
///
/// Implemented by books, movies and seasons. A series is never rated or
/// consumed directly; its state flows up from its seasons.
pub trait Rateable: Consumable {
    fn consumption_mut(&mut self) -> &mut Consumption;

    fn apply(&mut self, change: ConsumptionChange) -> DomainResult<()> {
        let next = self.consumption().transition(change)?;
        *self.consumption_mut() = next;
        Ok(())
    }

    fn set_rating(&mut self, rating: u8) -> DomainResult<()> {
        self.apply(ConsumptionChange::Rating(rating))
    }

    fn set_consumed(&mut self, consumed: bool) {
        let next = self.consumption().with_consumed(consumed);
        *self.consumption_mut() = next;
    }

    fn set_consumed_on(&mut self, date: Option<NaiveDate>) -> DomainResult<()> {
        self.apply(ConsumptionChange::ConsumedOn(date))
    }

    fn set_review(&mut self, review: Review) -> DomainResult<()> {
        self.apply(ConsumptionChange::Review(review))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::today;
    use chrono::Duration;

    fn consumed_state() -> Consumption {
        Consumption::new()
            .transition(ConsumptionChange::Rating(4))
            .and_then(|s| s.transition(ConsumptionChange::ConsumedOn(Some(today()))))
            .and_then(|s| s.transition(ConsumptionChange::Review(Review::today("Great").unwrap())))
            .unwrap()
    }

    #[test]
    fn test_new_state_is_unconsumed() {
        let state = Consumption::new();
        assert_eq!(state.rating(), 0);
        assert!(!state.is_consumed());
        assert!(state.consumed_on().is_none());
        assert!(state.review().is_none());
    }

    #[test]
    fn test_rating_marks_consumed() {
        let state = Consumption::new()
            .transition(ConsumptionChange::Rating(5))
            .unwrap();
        assert_eq!(state.rating(), 5);
        assert!(state.is_consumed());
    }

    #[test]
    fn test_rating_out_of_range_fails() {
        let state = Consumption::new();
        let err = state.transition(ConsumptionChange::Rating(6)).unwrap_err();
        assert_eq!(err.field(), Some("rating"));
        assert_eq!(state, Consumption::new());
    }

    #[test]
    fn test_zero_rating_clears_rating_only() {
        let state = consumed_state()
            .transition(ConsumptionChange::Rating(0))
            .unwrap();
        assert_eq!(state.rating(), 0);
        assert!(state.is_consumed());
        assert!(state.review().is_some());
    }

    #[test]
    fn test_unconsume_resets_everything() {
        let state = consumed_state()
            .transition(ConsumptionChange::Consumed(false))
            .unwrap();
        assert_eq!(state, Consumption::default());
    }

    #[test]
    fn test_unconsume_from_any_state() {
        let partial = Consumption::new()
            .transition(ConsumptionChange::ConsumedOn(Some(today())))
            .unwrap();
        assert_eq!(partial.with_consumed(false), Consumption::default());
        assert_eq!(Consumption::new().with_consumed(false), Consumption::default());
    }

    #[test]
    fn test_consumed_on_marks_consumed() {
        let state = Consumption::new()
            .transition(ConsumptionChange::ConsumedOn(Some(today() - Duration::days(2))))
            .unwrap();
        assert!(state.is_consumed());
        assert_eq!(state.rating(), 0);
    }

    #[test]
    fn test_future_consumed_on_fails() {
        let err = Consumption::new()
            .transition(ConsumptionChange::ConsumedOn(Some(today() + Duration::days(1))))
            .unwrap_err();
        assert_eq!(err.field(), Some("consumed_on"));
    }

    #[test]
    fn test_clearing_date_keeps_consumed() {
        let state = consumed_state()
            .transition(ConsumptionChange::ConsumedOn(None))
            .unwrap();
        assert!(state.is_consumed());
        assert!(state.consumed_on().is_none());
    }

    #[test]
    fn test_review_marks_consumed() {
        let state = Consumption::new()
            .transition(ConsumptionChange::Review(Review::today("Moving").unwrap()))
            .unwrap();
        assert!(state.is_consumed());
        assert_eq!(state.review().map(Review::text), Some("Moving"));
    }

    #[test]
    fn test_restore_rejects_inconsistent_state() {
        assert!(Consumption::restore(3, false, None, None).is_err());
        assert!(Consumption::restore(0, false, Some(today()), None).is_err());
        assert!(Consumption::restore(9, true, None, None).is_err());
        assert!(Consumption::restore(3, true, Some(today()), None).is_ok());
    }

    #[test]
    fn test_derived_state_never_carries_rating() {
        let state = Consumption::derived(true, Some(today()));
        assert_eq!(state.rating(), 0);
        assert!(state.is_consumed());
        assert_eq!(Consumption::derived(false, Some(today())), Consumption::default());
    }
}
