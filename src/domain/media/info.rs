use chrono::Datelike;

use crate::domain::{require_text, today, DomainError, DomainResult, MIN_RELEASE_YEAR, RELEASE_YEAR_LOOKAHEAD};

/// Title, genre and release year common to every media kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInfo {
    title: String,
    genre: String,
    release_year: i32,
}

impl MediaInfo {
    pub fn new(title: String, genre: String, release_year: i32) -> DomainResult<Self> {
        Ok(Self {
            title: require_text("title", title)?,
            genre: require_text("genre", genre)?,
            release_year: validate_release_year(release_year)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn set_title(&mut self, title: String) -> DomainResult<()> {
        self.title = require_text("title", title)?;
        Ok(())
    }

    pub fn set_genre(&mut self, genre: String) -> DomainResult<()> {
        self.genre = require_text("genre", genre)?;
        Ok(())
    }

    pub fn set_release_year(&mut self, release_year: i32) -> DomainResult<()> {
        self.release_year = validate_release_year(release_year)?;
        Ok(())
    }
}

/// Release year must lie in [1888, current year + 2]
pub fn validate_release_year(release_year: i32) -> DomainResult<i32> {
    let latest = today().year() + RELEASE_YEAR_LOOKAHEAD;
    if release_year < MIN_RELEASE_YEAR || release_year > latest {
        return Err(DomainError::invalid(
            "release_year",
            format!(
                "{} is outside {}..={}",
                release_year, MIN_RELEASE_YEAR, latest
            ),
        ));
    }
    Ok(release_year)
}
