use crate::domain::book::Book;
use crate::domain::consumption::{Consumable, Consumption};
use crate::domain::movie::Movie;
use crate::domain::series::Series;

use super::{MediaEntity, MediaIdentity, MediaInfo, MediaKind};

/// Any catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Book(Book),
    Movie(Movie),
    Series(Series),
}

impl Media {
    pub fn as_book(&self) -> Option<&Book> {
        match self {
            Media::Book(book) => Some(book),
            _ => None,
        }
    }

    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            Media::Movie(movie) => Some(movie),
            _ => None,
        }
    }

    pub fn as_series(&self) -> Option<&Series> {
        match self {
            Media::Series(series) => Some(series),
            _ => None,
        }
    }

    /// Cast list, empty for books
    pub fn cast(&self) -> &[String] {
        match self {
            Media::Book(_) => &[],
            Media::Movie(movie) => movie.cast(),
            Media::Series(series) => series.cast(),
        }
    }

    fn entity(&self) -> &dyn MediaEntity {
        match self {
            Media::Book(book) => book,
            Media::Movie(movie) => movie,
            Media::Series(series) => series,
        }
    }

    fn entity_mut(&mut self) -> &mut dyn MediaEntity {
        match self {
            Media::Book(book) => book,
            Media::Movie(movie) => movie,
            Media::Series(series) => series,
        }
    }
}

impl Consumable for Media {
    fn consumption(&self) -> &Consumption {
        self.entity().consumption()
    }

    fn rating(&self) -> u8 {
        self.entity().rating()
    }
}

impl MediaEntity for Media {
    fn kind(&self) -> MediaKind {
        self.entity().kind()
    }

    fn info(&self) -> &MediaInfo {
        self.entity().info()
    }

    fn info_mut(&mut self) -> &mut MediaInfo {
        self.entity_mut().info_mut()
    }

    fn identity(&self) -> MediaIdentity {
        self.entity().identity()
    }
}

impl From<Book> for Media {
    fn from(book: Book) -> Self {
        Media::Book(book)
    }
}

impl From<Movie> for Media {
    fn from(movie: Movie) -> Self {
        Media::Movie(movie)
    }
}

impl From<Series> for Media {
    fn from(series: Series) -> Self {
        Media::Series(series)
    }
}

impl std::fmt::Display for Media {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identity())
    }
}
