// src/repositories/records.rs
//
// On-disk shape of the catalog file.
//
// Records are plain serde structs; entities are rebuilt from them through
// their validating constructors, so a record that breaks an invariant never
// becomes an entity.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Book, Consumable, Consumption, DomainError, DomainResult, MediaEntity, MediaInfo, Movie,
    Review, Season, Series,
};
use crate::storage::format::{date, duration_secs, optional_date};

/// Whole catalog file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub books: Vec<BookRecord>,
    #[serde(default)]
    pub movies: Vec<MovieRecord>,
    #[serde(default)]
    pub series: Vec<SeriesRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub text: String,
    #[serde(with = "date")]
    pub created_on: NaiveDate,
}

/// Consumption fields stored inline in book, movie and season records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub consumed: bool,
    #[serde(default, with = "optional_date")]
    pub consumed_on: Option<NaiveDate>,
    #[serde(default)]
    pub review: Option<ReviewRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    #[serde(default)]
    pub has_physical_copy: bool,
    #[serde(flatten)]
    pub consumption: ConsumptionRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    /// Seconds
    #[serde(with = "duration_secs")]
    pub duration: Duration,
    pub director: String,
    pub writer: String,
    pub cast: Vec<String>,
    pub original_title: String,
    #[serde(default)]
    pub where_to_watch: String,
    #[serde(flatten)]
    pub consumption: ConsumptionRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub number: u32,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
    pub episode_count: u32,
    #[serde(flatten)]
    pub consumption: ConsumptionRecord,
}

/// Series records carry no rating; consumed state is rewritten on load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub original_title: String,
    pub cast: Vec<String>,
    #[serde(default)]
    pub where_to_watch: String,
    #[serde(default)]
    pub consumed: bool,
    #[serde(default, with = "optional_date")]
    pub consumed_on: Option<NaiveDate>,
    #[serde(default)]
    pub seasons: Vec<SeasonRecord>,
}

// ============================================================================
// ENTITY -> RECORD
// ============================================================================

impl From<&Review> for ReviewRecord {
    fn from(review: &Review) -> Self {
        Self {
            text: review.text().to_string(),
            created_on: review.created_on(),
        }
    }
}

impl From<&Consumption> for ConsumptionRecord {
    fn from(state: &Consumption) -> Self {
        Self {
            rating: state.rating(),
            consumed: state.is_consumed(),
            consumed_on: state.consumed_on(),
            review: state.review().map(ReviewRecord::from),
        }
    }
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title().to_string(),
            genre: book.genre().to_string(),
            release_year: book.release_year(),
            author: book.author().to_string(),
            publisher: book.publisher().to_string(),
            isbn: book.isbn().to_string(),
            has_physical_copy: book.has_physical_copy(),
            consumption: book.consumption().into(),
        }
    }
}

impl From<&Movie> for MovieRecord {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title().to_string(),
            genre: movie.genre().to_string(),
            release_year: movie.release_year(),
            duration: movie.duration(),
            director: movie.director().to_string(),
            writer: movie.writer().to_string(),
            cast: movie.cast().to_vec(),
            original_title: movie.original_title().to_string(),
            where_to_watch: movie.where_to_watch().to_string(),
            consumption: movie.consumption().into(),
        }
    }
}

impl From<&Season> for SeasonRecord {
    fn from(season: &Season) -> Self {
        Self {
            number: season.number(),
            release_year: season.release_year(),
            end_year: season.end_year(),
            episode_count: season.episode_count(),
            consumption: season.consumption().into(),
        }
    }
}

impl From<&Series> for SeriesRecord {
    fn from(series: &Series) -> Self {
        Self {
            title: series.title().to_string(),
            genre: series.genre().to_string(),
            release_year: series.release_year(),
            original_title: series.original_title().to_string(),
            cast: series.cast().to_vec(),
            where_to_watch: series.where_to_watch().to_string(),
            consumed: series.is_consumed(),
            consumed_on: series.consumed_on(),
            seasons: series.seasons().iter().map(SeasonRecord::from).collect(),
        }
    }
}

// ============================================================================
// RECORD -> ENTITY
// ============================================================================

impl TryFrom<ReviewRecord> for Review {
    type Error = DomainError;

    fn try_from(record: ReviewRecord) -> DomainResult<Self> {
        Review::new(record.text, record.created_on)
    }
}

impl TryFrom<ConsumptionRecord> for Consumption {
    type Error = DomainError;

    fn try_from(record: ConsumptionRecord) -> DomainResult<Self> {
        let review = record.review.map(Review::try_from).transpose()?;
        Consumption::restore(record.rating, record.consumed, record.consumed_on, review)
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = DomainError;

    fn try_from(record: BookRecord) -> DomainResult<Self> {
        Book::restore(
            MediaInfo::new(record.title, record.genre, record.release_year)?,
            record.author,
            record.publisher,
            record.isbn,
            record.has_physical_copy,
            record.consumption.try_into()?,
        )
    }
}

impl TryFrom<MovieRecord> for Movie {
    type Error = DomainError;

    fn try_from(record: MovieRecord) -> DomainResult<Self> {
        Movie::restore(
            MediaInfo::new(record.title, record.genre, record.release_year)?,
            record.duration,
            record.director,
            record.writer,
            record.cast,
            record.original_title,
            record.where_to_watch,
            record.consumption.try_into()?,
        )
    }
}

impl TryFrom<SeasonRecord> for Season {
    type Error = DomainError;

    fn try_from(record: SeasonRecord) -> DomainResult<Self> {
        Season::restore(
            record.number,
            record.release_year,
            record.end_year,
            record.episode_count,
            record.consumption.try_into()?,
        )
    }
}

impl TryFrom<SeriesRecord> for Series {
    type Error = DomainError;

    /// Stored `consumed`/`consumed_on` are ignored and derived from the seasons
    fn try_from(record: SeriesRecord) -> DomainResult<Self> {
        let seasons = record
            .seasons
            .into_iter()
            .map(Season::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Series::with_seasons(
            MediaInfo::new(record.title, record.genre, record.release_year)?,
            record.original_title,
            record.cast,
            record.where_to_watch,
            seasons,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{today, Rateable};

    fn book_record() -> BookRecord {
        serde_json::from_str(
            r#"{
                "title": "Dom Casmurro",
                "genre": "Romance",
                "release_year": 1899,
                "author": "Machado de Assis",
                "publisher": "Garnier",
                "isbn": "978-85-359-0277-1",
                "rating": 5,
                "consumed": true,
                "consumed_on": "10/01/2020",
                "review": { "text": "Capitu!", "created_on": "11/01/2020" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_book_record_rebuilds_entity() {
        let book = Book::try_from(book_record()).unwrap();
        assert_eq!(book.rating(), 5);
        assert!(!book.has_physical_copy());
        assert_eq!(book.review().map(Review::text), Some("Capitu!"));
        assert_eq!(
            book.consumed_on(),
            NaiveDate::from_ymd_opt(2020, 1, 10)
        );
    }

    #[test]
    fn test_inconsistent_record_is_rejected() {
        let mut record = book_record();
        record.consumption.consumed = false;
        let err = Book::try_from(record).unwrap_err();
        assert_eq!(err.field(), Some("consumed"));
    }

    #[test]
    fn test_series_consumed_flag_is_recomputed() {
        let record: SeriesRecord = serde_json::from_str(
            r#"{
                "title": "Dark",
                "genre": "Sci-Fi",
                "release_year": 2017,
                "original_title": "Dark",
                "cast": ["Louis Hofmann"],
                "consumed": true,
                "seasons": [
                    { "number": 1, "episode_count": 10, "rating": 4, "consumed": true },
                    { "number": 2, "episode_count": 8 }
                ]
            }"#,
        )
        .unwrap();
        let series = Series::try_from(record).unwrap();
        assert!(!series.is_consumed());
        assert_eq!(series.rating(), 4);
    }

    #[test]
    fn test_series_record_has_no_rating_key() {
        let mut season = Season::new(1, None, None, 6).unwrap();
        season.set_rating(3).unwrap();
        season.set_consumed_on(Some(today())).unwrap();
        let series = Series::with_seasons(
            MediaInfo::new("Dark".into(), "Sci-Fi".into(), 2017).unwrap(),
            "Dark".into(),
            vec!["Louis Hofmann".into()],
            String::new(),
            vec![season],
        )
        .unwrap();

        let value = serde_json::to_value(SeriesRecord::from(&series)).unwrap();
        assert!(value.get("rating").is_none());
        assert_eq!(value["consumed"], true);
        assert_eq!(value["seasons"][0]["rating"], 3);
    }
}
