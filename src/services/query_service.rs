// src/services/query_service.rs
//
// Stateless listing, filtering, searching and sorting over a Catalog.
// Every function returns fresh copies in catalog order unless it sorts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{normalize_isbn, Consumable, DomainError, Media, MediaEntity, MediaKind};
use crate::error::{AppError, AppResult};

use super::catalog::Catalog;

/// Field a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Author,
    Director,
    Cast,
    Genre,
    Year,
    Isbn,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Director => "director",
            SearchField::Cast => "cast",
            SearchField::Genre => "genre",
            SearchField::Year => "year",
            SearchField::Isbn => "isbn",
        }
    }

    /// Which fields each kind can be searched by
    pub fn supports(&self, kind: MediaKind) -> bool {
        match self {
            SearchField::Title | SearchField::Genre | SearchField::Year => true,
            SearchField::Author | SearchField::Isbn => kind == MediaKind::Book,
            SearchField::Director => kind == MediaKind::Movie,
            SearchField::Cast => kind != MediaKind::Book,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "titulo" | "título" => Ok(SearchField::Title),
            "author" | "autor" => Ok(SearchField::Author),
            "director" | "diretor" | "direcao" | "direção" => Ok(SearchField::Director),
            "cast" | "actor" | "ator" | "elenco" => Ok(SearchField::Cast),
            "genre" | "genero" | "gênero" => Ok(SearchField::Genre),
            "year" | "ano" => Ok(SearchField::Year),
            "isbn" => Ok(SearchField::Isbn),
            other => Err(format!("Unknown search field: {}", other)),
        }
    }
}

/// One (field, term) pair of a multi-criteria search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub field: SearchField,
    pub term: String,
}

impl SearchCriteria {
    pub fn new(field: SearchField, term: impl Into<String>) -> Self {
        Self {
            field,
            term: term.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Filters and ordering for `list`
/// `None` (or a blank genre) means no constraint on that axis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub sort: Option<SortOrder>,
}

// ============================================================================
// MATCHING
// ============================================================================

/// A criterion checked once against the kind and parsed once
#[derive(Debug)]
enum Matcher {
    Title(String),
    Author(String),
    Director(String),
    Cast(String),
    Genre(String),
    Year(i32),
    Isbn(String),
}

impl Matcher {
    fn compile(kind: MediaKind, field: SearchField, term: &str) -> AppResult<Self> {
        if !field.supports(kind) {
            return Err(AppError::UnsupportedField {
                kind,
                field: field.to_string(),
            });
        }

        let needle = term.trim().to_lowercase();
        Ok(match field {
            SearchField::Title => Matcher::Title(needle),
            SearchField::Author => Matcher::Author(needle),
            SearchField::Director => Matcher::Director(needle),
            SearchField::Cast => Matcher::Cast(needle),
            SearchField::Genre => Matcher::Genre(needle),
            SearchField::Year => Matcher::Year(term.trim().parse().map_err(|_| {
                DomainError::invalid("year", format!("'{}' is not a year", term.trim()))
            })?),
            SearchField::Isbn => Matcher::Isbn(normalize_isbn(term)),
        })
    }

    fn matches(&self, media: &Media) -> bool {
        match self {
            Matcher::Title(needle) => contains(media.title(), needle),
            Matcher::Author(needle) => media
                .as_book()
                .is_some_and(|book| contains(book.author(), needle)),
            Matcher::Director(needle) => media
                .as_movie()
                .is_some_and(|movie| contains(movie.director(), needle)),
            Matcher::Cast(needle) => media.cast().iter().any(|name| contains(name, needle)),
            Matcher::Genre(genre) => media.genre().to_lowercase() == *genre,
            Matcher::Year(year) => media.release_year() == *year,
            Matcher::Isbn(isbn) => media
                .as_book()
                .is_some_and(|book| normalize_isbn(book.isbn()) == *isbn),
        }
    }
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

// ============================================================================
// QUERIES
// ============================================================================

/// Genre (ignoring case) and exact year, both optional
pub fn filter(catalog: &Catalog, kind: MediaKind, genre: Option<&str>, year: Option<i32>) -> Vec<Media> {
    let genre = genre
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_lowercase);

    catalog
        .all(kind)
        .into_iter()
        .filter(|media| {
            genre
                .as_deref()
                .map_or(true, |g| media.genre().to_lowercase() == g)
                && year.map_or(true, |y| media.release_year() == y)
        })
        .collect()
}

/// Entries of `kind` whose `field` matches `term`
/// Fails with UnsupportedField when `kind` has no such field.
pub fn search(catalog: &Catalog, kind: MediaKind, field: SearchField, term: &str) -> AppResult<Vec<Media>> {
    search_all(catalog, kind, &[SearchCriteria::new(field, term)])
}

/// Entries matching every criterion; no criteria matches everything
pub fn search_all(catalog: &Catalog, kind: MediaKind, criteria: &[SearchCriteria]) -> AppResult<Vec<Media>> {
    let matchers = criteria
        .iter()
        .map(|c| Matcher::compile(kind, c.field, &c.term))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(catalog
        .all(kind)
        .into_iter()
        .filter(|media| matchers.iter().all(|m| m.matches(media)))
        .collect())
}

/// Stable sort by (possibly derived) rating; ties keep their input order
pub fn sort_by_rating<T: Consumable>(mut items: Vec<T>, order: SortOrder) -> Vec<T> {
    match order {
        SortOrder::Ascending => items.sort_by_key(|item| item.rating()),
        SortOrder::Descending => items.sort_by(|a, b| b.rating().cmp(&a.rating())),
    }
    items
}

/// Filter, then optionally sort by rating
pub fn list(catalog: &Catalog, kind: MediaKind, options: &ListOptions) -> Vec<Media> {
    let items = filter(catalog, kind, options.genre.as_deref(), options.year);
    match options.sort {
        Some(order) => sort_by_rating(items, order),
        None => items,
    }
}

/// For series this is the derived flag, not any single season
pub fn list_consumed(catalog: &Catalog, kind: MediaKind) -> Vec<Media> {
    partition_by(catalog, kind, |media| media.is_consumed())
}

pub fn list_unconsumed(catalog: &Catalog, kind: MediaKind) -> Vec<Media> {
    partition_by(catalog, kind, |media| !media.is_consumed())
}

/// Rated entries, best first
pub fn list_rated(catalog: &Catalog, kind: MediaKind) -> Vec<Media> {
    sort_by_rating(
        partition_by(catalog, kind, |media| media.is_rated()),
        SortOrder::Descending,
    )
}

pub fn list_unrated(catalog: &Catalog, kind: MediaKind) -> Vec<Media> {
    partition_by(catalog, kind, |media| !media.is_rated())
}

fn partition_by(catalog: &Catalog, kind: MediaKind, keep: impl Fn(&Media) -> bool) -> Vec<Media> {
    catalog.all(kind).into_iter().filter(|media| keep(media)).collect()
}
