// src/services/diary_service.rs
//
// Controller between the UI adapter and the core.
//
// RULES:
// - Every write goes through Catalog (uniqueness, persistence)
// - Ratings and consumption go through the entities' own setters
// - Any season change is followed by recompute_consumed_state before the
//   series is written back

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Book, DomainError, DomainResult, Media, MediaEntity, MediaIdentity, MediaInfo, MediaKind,
    Movie, Rateable, Review, Season, Series,
};
use crate::error::{AppError, AppResult};
use crate::repositories::CatalogRepository;

use super::catalog::Catalog;
use super::query_service::{self, ListOptions, SearchCriteria, SearchField};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub has_physical_copy: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub duration_minutes: u32,
    pub director: String,
    pub writer: String,
    pub cast: Vec<String>,
    pub original_title: String,
    pub where_to_watch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSeriesRequest {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub original_title: String,
    pub cast: Vec<String>,
    pub where_to_watch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSeasonRequest {
    pub number: u32,
    pub release_year: Option<i32>,
    pub end_year: Option<i32>,
    pub episode_count: u32,
}

impl TryFrom<CreateBookRequest> for Book {
    type Error = DomainError;

    fn try_from(request: CreateBookRequest) -> DomainResult<Self> {
        Book::new(
            MediaInfo::new(request.title, request.genre, request.release_year)?,
            request.author,
            request.publisher,
            request.isbn,
            request.has_physical_copy,
        )
    }
}

impl TryFrom<CreateMovieRequest> for Movie {
    type Error = DomainError;

    fn try_from(request: CreateMovieRequest) -> DomainResult<Self> {
        Movie::new(
            MediaInfo::new(request.title, request.genre, request.release_year)?,
            Duration::from_secs(u64::from(request.duration_minutes) * 60),
            request.director,
            request.writer,
            request.cast,
            request.original_title,
            request.where_to_watch,
        )
    }
}

impl TryFrom<CreateSeriesRequest> for Series {
    type Error = DomainError;

    fn try_from(request: CreateSeriesRequest) -> DomainResult<Self> {
        Series::new(
            MediaInfo::new(request.title, request.genre, request.release_year)?,
            request.original_title,
            request.cast,
            request.where_to_watch,
        )
    }
}

impl TryFrom<CreateSeasonRequest> for Season {
    type Error = DomainError;

    fn try_from(request: CreateSeasonRequest) -> DomainResult<Self> {
        Season::new(
            request.number,
            request.release_year,
            request.end_year,
            request.episode_count,
        )
    }
}

pub struct DiaryService {
    catalog: Catalog,
}

impl DiaryService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Load the catalog from `repository` and wrap it
    pub fn open(repository: Arc<dyn CatalogRepository>) -> AppResult<Self> {
        Ok(Self::new(Catalog::open(repository)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ========================================================================
    // CREATE / UPDATE / REMOVE
    // ========================================================================

    pub fn create_book(&mut self, request: CreateBookRequest) -> AppResult<Book> {
        let book = Book::try_from(request)?;
        self.catalog.add(book.clone())?;
        Ok(book)
    }

    pub fn create_movie(&mut self, request: CreateMovieRequest) -> AppResult<Movie> {
        let movie = Movie::try_from(request)?;
        self.catalog.add(movie.clone())?;
        Ok(movie)
    }

    pub fn create_series(&mut self, request: CreateSeriesRequest) -> AppResult<Series> {
        let series = Series::try_from(request)?;
        self.catalog.add(series.clone())?;
        Ok(series)
    }

    pub fn add_season(&mut self, series_title: &str, request: CreateSeasonRequest) -> AppResult<Series> {
        let season = Season::try_from(request)?;
        let mut series = self.require_series(series_title)?;
        series.add_season(season)?;
        series.recompute_consumed_state();
        self.catalog.update(series.clone())?;
        Ok(series)
    }

    /// Returns false when the series exists but has no such season
    pub fn remove_season(&mut self, series_title: &str, number: u32) -> AppResult<bool> {
        self.catalog.remove_season(series_title, number)
    }

    /// Replace the entry currently identified by `original` with `media`
    pub fn update_media(&mut self, original: &MediaIdentity, mut media: Media) -> AppResult<Media> {
        if let Media::Series(series) = &mut media {
            series.recompute_consumed_state();
        }
        self.catalog.replace(original, media.clone())?;
        Ok(media)
    }

    pub fn remove(&mut self, kind: MediaKind, title: &str) -> AppResult<bool> {
        self.catalog.remove(kind, title)
    }

    // ========================================================================
    // CONSUMPTION & RATING
    // ========================================================================

    /// Mark as consumed, optionally on a given date
    /// For a series every season is marked.
    pub fn mark_consumed(&mut self, kind: MediaKind, title: &str, date: Option<NaiveDate>) -> AppResult<Media> {
        if kind == MediaKind::Series {
            let series = self.modify_all_seasons(title, |season| mark(season, date))?;
            return Ok(series.into());
        }
        self.modify_rateable(kind, title, "consumed", |item| mark(item, date))
    }

    /// Full reset of rating, date and review
    /// For a series every season is reset.
    pub fn mark_unconsumed(&mut self, kind: MediaKind, title: &str) -> AppResult<Media> {
        if kind == MediaKind::Series {
            let series = self.modify_all_seasons(title, |season| {
                season.set_consumed(false);
                Ok(())
            })?;
            return Ok(series.into());
        }
        self.modify_rateable(kind, title, "consumed", |item| {
            item.set_consumed(false);
            Ok(())
        })
    }

    /// Rate a book or movie, optionally attaching a review dated today
    /// Series are rated per season.
    pub fn rate(&mut self, kind: MediaKind, title: &str, rating: u8, review: Option<String>) -> AppResult<Media> {
        self.modify_rateable(kind, title, "rating", |item| rate_item(item, rating, review))
    }

    pub fn mark_season_consumed(
        &mut self,
        series_title: &str,
        number: u32,
        date: Option<NaiveDate>,
    ) -> AppResult<Series> {
        self.modify_season(series_title, number, |season| mark(season, date))
    }

    pub fn mark_season_unconsumed(&mut self, series_title: &str, number: u32) -> AppResult<Series> {
        self.modify_season(series_title, number, |season| {
            season.set_consumed(false);
            Ok(())
        })
    }

    pub fn rate_season(
        &mut self,
        series_title: &str,
        number: u32,
        rating: u8,
        review: Option<String>,
    ) -> AppResult<Series> {
        self.modify_season(series_title, number, |season| rate_item(season, rating, review))
    }

    // ========================================================================
    // READS
    // ========================================================================

    pub fn find(&self, kind: MediaKind, title: &str) -> AppResult<Media> {
        self.catalog
            .find_by_title(kind, title)
            .ok_or_else(|| AppError::not_found(format!("{} '{}'", kind, title)))
    }

    pub fn list(&self, kind: MediaKind, options: &ListOptions) -> Vec<Media> {
        query_service::list(&self.catalog, kind, options)
    }

    pub fn filter(&self, kind: MediaKind, genre: Option<&str>, year: Option<i32>) -> Vec<Media> {
        query_service::filter(&self.catalog, kind, genre, year)
    }

    pub fn search(&self, kind: MediaKind, field: SearchField, term: &str) -> AppResult<Vec<Media>> {
        query_service::search(&self.catalog, kind, field, term)
    }

    pub fn search_all(&self, kind: MediaKind, criteria: &[SearchCriteria]) -> AppResult<Vec<Media>> {
        query_service::search_all(&self.catalog, kind, criteria)
    }

    pub fn list_consumed(&self, kind: MediaKind) -> Vec<Media> {
        query_service::list_consumed(&self.catalog, kind)
    }

    pub fn list_unconsumed(&self, kind: MediaKind) -> Vec<Media> {
        query_service::list_unconsumed(&self.catalog, kind)
    }

    pub fn list_rated(&self, kind: MediaKind) -> Vec<Media> {
        query_service::list_rated(&self.catalog, kind)
    }

    pub fn list_unrated(&self, kind: MediaKind) -> Vec<Media> {
        query_service::list_unrated(&self.catalog, kind)
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn require_series(&self, title: &str) -> AppResult<Series> {
        self.catalog
            .find_series(title)
            .ok_or_else(|| AppError::not_found(format!("series '{}'", title)))
    }

    /// Apply `change` to a copy of a book or movie, then write it back
    fn modify_rateable(
        &mut self,
        kind: MediaKind,
        title: &str,
        field: &'static str,
        change: impl FnOnce(&mut dyn Rateable) -> DomainResult<()>,
    ) -> AppResult<Media> {
        let mut media = self.find(kind, title)?;
        match &mut media {
            Media::Book(book) => change(book as &mut dyn Rateable)?,
            Media::Movie(movie) => change(movie as &mut dyn Rateable)?,
            Media::Series(_) => {
                return Err(DomainError::invalid(field, "a series is rated and consumed per season").into())
            }
        }
        self.catalog.update(media.clone())?;
        Ok(media)
    }

    fn modify_season(
        &mut self,
        series_title: &str,
        number: u32,
        change: impl FnOnce(&mut Season) -> DomainResult<()>,
    ) -> AppResult<Series> {
        let mut series = self.require_series(series_title)?;
        let label = series.title().to_string();
        let season = series
            .season_mut(number)
            .ok_or_else(|| AppError::not_found(format!("season {} of series '{}'", number, label)))?;
        change(season)?;
        series.recompute_consumed_state();
        self.catalog.update(series.clone())?;
        info!("Season {} of '{}' changed", number, label);
        Ok(series)
    }

    fn modify_all_seasons(
        &mut self,
        series_title: &str,
        change: impl Fn(&mut Season) -> DomainResult<()>,
    ) -> AppResult<Series> {
        let mut series = self.require_series(series_title)?;
        for number in series.seasons().iter().map(Season::number).collect::<Vec<_>>() {
            if let Some(season) = series.season_mut(number) {
                change(season)?;
            }
        }
        series.recompute_consumed_state();
        self.catalog.update(series.clone())?;
        Ok(series)
    }
}

fn mark<R: Rateable + ?Sized>(item: &mut R, date: Option<NaiveDate>) -> DomainResult<()> {
    item.set_consumed(true);
    if date.is_some() {
        item.set_consumed_on(date)?;
    }
    Ok(())
}

fn rate_item<R: Rateable + ?Sized>(item: &mut R, rating: u8, review: Option<String>) -> DomainResult<()> {
    let review = review.map(Review::today).transpose()?;
    item.set_rating(rating)?;
    if let Some(review) = review {
        item.set_review(review)?;
    }
    Ok(())
}
