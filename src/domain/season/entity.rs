use crate::domain::consumption::{Consumable, Consumption, Rateable};
use crate::domain::DomainResult;

use super::invariants::{validate_episode_count, validate_season, validate_years};

/// One season of a series
/// Seasons are owned by exactly one Series and never outlive it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    /// Season number, unique within its series (immutable)
    number: u32,

    /// Year the season started airing (if known)
    release_year: Option<i32>,

    /// Year the season finished airing (if known)
    end_year: Option<i32>,

    /// Number of episodes
    episode_count: u32,

    /// Rating, consumed flag, date and review of this season
    consumption: Consumption,
}

impl Season {
    /// Create a new, unconsumed Season
    /// Construction is all-or-nothing: any invalid field fails the whole call
    pub fn new(
        number: u32,
        release_year: Option<i32>,
        end_year: Option<i32>,
        episode_count: u32,
    ) -> DomainResult<Self> {
        Self::restore(number, release_year, end_year, episode_count, Consumption::new())
    }

    /// Rebuild a Season with an existing consumption state
    pub fn restore(
        number: u32,
        release_year: Option<i32>,
        end_year: Option<i32>,
        episode_count: u32,
        consumption: Consumption,
    ) -> DomainResult<Self> {
        let season = Self {
            number,
            release_year,
            end_year,
            episode_count,
            consumption,
        };
        validate_season(&season)?;
        Ok(season)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_year
    }

    pub fn end_year(&self) -> Option<i32> {
        self.end_year
    }

    pub fn episode_count(&self) -> u32 {
        self.episode_count
    }

    pub fn set_release_year(&mut self, release_year: Option<i32>) -> DomainResult<()> {
        validate_years(release_year, self.end_year)?;
        self.release_year = release_year;
        Ok(())
    }

    pub fn set_end_year(&mut self, end_year: Option<i32>) -> DomainResult<()> {
        validate_years(self.release_year, end_year)?;
        self.end_year = end_year;
        Ok(())
    }

    pub fn set_episode_count(&mut self, episode_count: u32) -> DomainResult<()> {
        validate_episode_count(episode_count)?;
        self.episode_count = episode_count;
        Ok(())
    }
}

impl Consumable for Season {
    fn consumption(&self) -> &Consumption {
        &self.consumption
    }
}

impl Rateable for Season {
    fn consumption_mut(&mut self) -> &mut Consumption {
        &mut self.consumption
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Season {}", self.number)
    }
}
