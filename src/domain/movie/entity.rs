use std::time::Duration;

use crate::domain::consumption::{Consumable, Consumption, Rateable};
use crate::domain::media::{MediaEntity, MediaIdentity, MediaInfo, MediaKind};
use crate::domain::{require_text, DomainResult};

use super::invariants::{validate_cast, validate_duration, validate_movie};

/// A film in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    info: MediaInfo,

    /// Running time (always positive)
    duration: Duration,

    director: String,

    writer: String,

    /// Main cast, in billing order
    cast: Vec<String>,

    original_title: String,

    /// Streaming service or medium (free text, may be empty)
    where_to_watch: String,

    consumption: Consumption,
}

impl Movie {
    /// Create a new, unwatched Movie
    pub fn new(
        info: MediaInfo,
        duration: Duration,
        director: String,
        writer: String,
        cast: Vec<String>,
        original_title: String,
        where_to_watch: String,
    ) -> DomainResult<Self> {
        Self::restore(
            info,
            duration,
            director,
            writer,
            cast,
            original_title,
            where_to_watch,
            Consumption::new(),
        )
    }

    /// Rebuild a Movie with an existing consumption state
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        info: MediaInfo,
        duration: Duration,
        director: String,
        writer: String,
        cast: Vec<String>,
        original_title: String,
        where_to_watch: String,
        consumption: Consumption,
    ) -> DomainResult<Self> {
        let movie = Self {
            info,
            duration,
            director,
            writer,
            cast,
            original_title,
            where_to_watch,
            consumption,
        };
        validate_movie(&movie)?;
        Ok(movie)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Running time in whole minutes
    pub fn duration_minutes(&self) -> u64 {
        self.duration.as_secs() / 60
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn writer(&self) -> &str {
        &self.writer
    }

    pub fn cast(&self) -> &[String] {
        &self.cast
    }

    pub fn original_title(&self) -> &str {
        &self.original_title
    }

    pub fn where_to_watch(&self) -> &str {
        &self.where_to_watch
    }

    pub fn set_duration(&mut self, duration: Duration) -> DomainResult<()> {
        self.duration = validate_duration(duration)?;
        Ok(())
    }

    pub fn set_director(&mut self, director: String) -> DomainResult<()> {
        self.director = require_text("director", director)?;
        Ok(())
    }

    pub fn set_writer(&mut self, writer: String) -> DomainResult<()> {
        self.writer = require_text("writer", writer)?;
        Ok(())
    }

    pub fn set_cast(&mut self, cast: Vec<String>) -> DomainResult<()> {
        validate_cast(&cast)?;
        self.cast = cast;
        Ok(())
    }

    pub fn set_original_title(&mut self, original_title: String) -> DomainResult<()> {
        self.original_title = require_text("original_title", original_title)?;
        Ok(())
    }

    pub fn set_where_to_watch(&mut self, where_to_watch: String) {
        self.where_to_watch = where_to_watch;
    }
}

impl Consumable for Movie {
    fn consumption(&self) -> &Consumption {
        &self.consumption
    }
}

impl Rateable for Movie {
    fn consumption_mut(&mut self) -> &mut Consumption {
        &mut self.consumption
    }
}

impl MediaEntity for Movie {
    fn kind(&self) -> MediaKind {
        MediaKind::Movie
    }

    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut MediaInfo {
        &mut self.info
    }

    fn identity(&self) -> MediaIdentity {
        MediaIdentity::Movie {
            title: self.info.title().to_string(),
            director: self.director.clone(),
            release_year: self.info.release_year(),
        }
    }
}
