use crate::domain::consumption::{Consumable, Consumption};
use crate::domain::media::{MediaEntity, MediaIdentity, MediaInfo, MediaKind};
use crate::domain::season::Season;
use crate::domain::{require_text, DomainError, DomainResult};
use crate::domain::movie::invariants::validate_cast;

use super::invariants::validate_series;

/// A TV series and the seasons it owns
///
/// Rating and consumption are never set on the series itself: they are
/// derived from the seasons. After any season change the owner must call
/// `recompute_consumed_state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    info: MediaInfo,

    original_title: String,

    /// Main cast, in billing order
    cast: Vec<String>,

    where_to_watch: String,

    /// Sorted by season number, numbers unique
    seasons: Vec<Season>,

    /// Derived from seasons, never carries a rating or review
    consumption: Consumption,
}

impl Series {
    /// Create a new Series with no seasons
    pub fn new(
        info: MediaInfo,
        original_title: String,
        cast: Vec<String>,
        where_to_watch: String,
    ) -> DomainResult<Self> {
        Self::with_seasons(info, original_title, cast, where_to_watch, Vec::new())
    }

    /// Build a Series from existing seasons
    /// Seasons are sorted by number and the consumed state is derived from them
    pub fn with_seasons(
        info: MediaInfo,
        original_title: String,
        cast: Vec<String>,
        where_to_watch: String,
        seasons: Vec<Season>,
    ) -> DomainResult<Self> {
        let mut series = Self {
            info,
            original_title,
            cast,
            where_to_watch,
            seasons,
            consumption: Consumption::new(),
        };
        series.seasons.sort_by_key(Season::number);
        validate_series(&series)?;
        series.recompute_consumed_state();
        Ok(series)
    }

    pub fn original_title(&self) -> &str {
        &self.original_title
    }

    pub fn cast(&self) -> &[String] {
        &self.cast
    }

    pub fn where_to_watch(&self) -> &str {
        &self.where_to_watch
    }

    pub fn set_original_title(&mut self, original_title: String) -> DomainResult<()> {
        self.original_title = require_text("original_title", original_title)?;
        Ok(())
    }

    pub fn set_cast(&mut self, cast: Vec<String>) -> DomainResult<()> {
        validate_cast(&cast)?;
        self.cast = cast;
        Ok(())
    }

    pub fn set_where_to_watch(&mut self, where_to_watch: String) {
        self.where_to_watch = where_to_watch;
    }

    // ========================================================================
    // SEASONS
    // ========================================================================

    /// Seasons ordered by number
    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn season_count(&self) -> usize {
        self.seasons.len()
    }

    pub fn season(&self, number: u32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.number() == number)
    }

    /// Mutable access to one season
    /// Callers must run `recompute_consumed_state` afterwards
    pub fn season_mut(&mut self, number: u32) -> Option<&mut Season> {
        self.seasons.iter_mut().find(|s| s.number() == number)
    }

    /// Insert a season in number order
    pub fn add_season(&mut self, season: Season) -> DomainResult<()> {
        match self
            .seasons
            .binary_search_by_key(&season.number(), Season::number)
        {
            Ok(_) => Err(DomainError::DuplicateSeason(season.number())),
            Err(position) => {
                self.seasons.insert(position, season);
                Ok(())
            }
        }
    }

    /// Returns whether a season with that number existed
    pub fn remove_season(&mut self, number: u32) -> bool {
        let before = self.seasons.len();
        self.seasons.retain(|s| s.number() != number);
        self.seasons.len() != before
    }

    /// Consumed iff there is at least one season and every season is consumed.
    /// When consumed, the date is the latest season date; otherwise cleared.
    pub fn recompute_consumed_state(&mut self) {
        let consumed =
            !self.seasons.is_empty() && self.seasons.iter().all(|s| s.is_consumed());
        let consumed_on = if consumed {
            self.seasons.iter().filter_map(|s| s.consumed_on()).max()
        } else {
            None
        };
        self.consumption = Consumption::derived(consumed, consumed_on);
    }
}

impl Consumable for Series {
    fn consumption(&self) -> &Consumption {
        &self.consumption
    }

    /// Rounded mean of the rated seasons, 0 when none is rated
    fn rating(&self) -> u8 {
        let rated: Vec<u32> = self
            .seasons
            .iter()
            .map(|s| u32::from(s.rating()))
            .filter(|&r| r > 0)
            .collect();
        if rated.is_empty() {
            return 0;
        }
        let mean = f64::from(rated.iter().sum::<u32>()) / rated.len() as f64;
        mean.round() as u8
    }
}

impl MediaEntity for Series {
    fn kind(&self) -> MediaKind {
        MediaKind::Series
    }

    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut MediaInfo {
        &mut self.info
    }

    fn identity(&self) -> MediaIdentity {
        MediaIdentity::Series {
            title: self.info.title().to_string(),
            release_year: self.info.release_year(),
        }
    }
}
