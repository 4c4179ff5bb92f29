// src/services/test_support.rs
//
// Builders shared by the service test suites.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{Book, MediaInfo, Movie, Rateable, Season, Series};
use crate::repositories::{CatalogData, MockCatalogRepository};

use super::catalog::Catalog;

pub fn book(title: &str, genre: &str, year: i32) -> Book {
    Book::new(
        MediaInfo::new(title.into(), genre.into(), year).unwrap(),
        format!("Author of {}", title),
        "Companhia das Letras".into(),
        "978-85-359-0277-1".into(),
        false,
    )
    .unwrap()
}

pub fn movie(title: &str, genre: &str, year: i32) -> Movie {
    Movie::new(
        MediaInfo::new(title.into(), genre.into(), year).unwrap(),
        Duration::from_secs(100 * 60),
        format!("Director of {}", title),
        "Some Writer".into(),
        vec!["Fernanda Montenegro".into(), "Selton Mello".into()],
        title.into(),
        String::new(),
    )
    .unwrap()
}

pub fn rated_movie(title: &str, rating: u8) -> Movie {
    let mut movie = movie(title, "Drama", 2000);
    movie.set_rating(rating).unwrap();
    movie
}

pub fn series(title: &str, genre: &str, year: i32) -> Series {
    Series::new(
        MediaInfo::new(title.into(), genre.into(), year).unwrap(),
        title.into(),
        vec!["Wagner Moura".into()],
        "Netflix".into(),
    )
    .unwrap()
}

pub fn series_with_seasons(title: &str, seasons: u32) -> Series {
    let mut series = series(title, "Drama", 2015);
    for number in 1..=seasons {
        series
            .add_season(Season::new(number, Some(2015), None, 10).unwrap())
            .unwrap();
    }
    series.recompute_consumed_state();
    series
}

/// Repository that starts with `data` and accepts every save
pub fn accepting_repository(data: CatalogData) -> MockCatalogRepository {
    let mut repo = MockCatalogRepository::new();
    repo.expect_load().return_once(move || Ok(data));
    repo.expect_save().returning(|_| Ok(()));
    repo
}

pub fn catalog_with(data: CatalogData) -> Catalog {
    Catalog::open(Arc::new(accepting_repository(data))).unwrap()
}
