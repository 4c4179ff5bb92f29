use crate::domain::consumption::{Consumable, Consumption, Rateable};
use crate::domain::media::{MediaEntity, MediaIdentity, MediaInfo, MediaKind};
use crate::domain::{require_text, DomainResult};

use super::invariants::{validate_book, validate_isbn};

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Title, genre, release year
    info: MediaInfo,

    author: String,

    publisher: String,

    /// ISBN exactly as entered (separators kept)
    isbn: String,

    /// Whether the user owns a physical copy
    has_physical_copy: bool,

    consumption: Consumption,
}

impl Book {
    /// Create a new, unread Book
    pub fn new(
        info: MediaInfo,
        author: String,
        publisher: String,
        isbn: String,
        has_physical_copy: bool,
    ) -> DomainResult<Self> {
        Self::restore(info, author, publisher, isbn, has_physical_copy, Consumption::new())
    }

    /// Rebuild a Book with an existing consumption state
    pub fn restore(
        info: MediaInfo,
        author: String,
        publisher: String,
        isbn: String,
        has_physical_copy: bool,
        consumption: Consumption,
    ) -> DomainResult<Self> {
        let book = Self {
            info,
            author,
            publisher,
            isbn,
            has_physical_copy,
            consumption,
        };
        validate_book(&book)?;
        Ok(book)
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn has_physical_copy(&self) -> bool {
        self.has_physical_copy
    }

    pub fn set_author(&mut self, author: String) -> DomainResult<()> {
        self.author = require_text("author", author)?;
        Ok(())
    }

    pub fn set_publisher(&mut self, publisher: String) -> DomainResult<()> {
        self.publisher = require_text("publisher", publisher)?;
        Ok(())
    }

    pub fn set_isbn(&mut self, isbn: String) -> DomainResult<()> {
        validate_isbn(&isbn)?;
        self.isbn = isbn;
        Ok(())
    }

    pub fn set_has_physical_copy(&mut self, has_physical_copy: bool) {
        self.has_physical_copy = has_physical_copy;
    }
}

impl Consumable for Book {
    fn consumption(&self) -> &Consumption {
        &self.consumption
    }
}

impl Rateable for Book {
    fn consumption_mut(&mut self) -> &mut Consumption {
        &mut self.consumption
    }
}

impl MediaEntity for Book {
    fn kind(&self) -> MediaKind {
        MediaKind::Book
    }

    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut MediaInfo {
        &mut self.info
    }

    fn identity(&self) -> MediaIdentity {
        MediaIdentity::Book {
            title: self.info.title().to_string(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            release_year: self.info.release_year(),
        }
    }
}
