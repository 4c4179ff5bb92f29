// src/services/catalog.rs
//
// In-memory catalog backed by a CatalogRepository.
//
// RULES:
// - Every mutation is applied to a copy, saved, then swapped in
// - A failed save or a rejected mutation leaves the catalog untouched
// - Reads hand out clones, never references into the live collections

use std::sync::Arc;

use log::{debug, info, warn};

use crate::domain::{
    Book, DomainError, Media, MediaEntity, MediaIdentity, MediaKind, Movie, Series,
};
use crate::error::{AppError, AppResult};
use crate::repositories::{CatalogData, CatalogRepository};

pub struct Catalog {
    repository: Arc<dyn CatalogRepository>,
    data: CatalogData,
}

impl Catalog {
    /// Load the stored catalog (empty if nothing was stored yet)
    pub fn open(repository: Arc<dyn CatalogRepository>) -> AppResult<Self> {
        let data = repository.load()?;
        debug!("Catalog opened with {} entries", total(&data));
        Ok(Self { repository, data })
    }

    /// Copy of the whole catalog
    pub fn snapshot(&self) -> CatalogData {
        self.data.clone()
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Store a new entry
    ///
    /// Fails with DuplicateEntity if the identity already exists or another
    /// entry of the same kind has the same title (ignoring case).
    pub fn add(&mut self, media: impl Into<Media>) -> AppResult<()> {
        let media = media.into();
        let identity = media.identity();
        let mut next = self.data.clone();

        match media {
            Media::Book(book) => insert(&mut next.books, book)?,
            Media::Movie(movie) => insert(&mut next.movies, movie)?,
            Media::Series(mut series) => {
                series.recompute_consumed_state();
                insert(&mut next.series, series)?
            }
        }

        self.commit(next)?;
        info!("Added {}", identity);
        Ok(())
    }

    /// Replace the entry with the same identity, keeping its position
    pub fn update(&mut self, media: impl Into<Media>) -> AppResult<()> {
        let media = media.into();
        let identity = media.identity();
        self.replace(&identity, media)
    }

    /// Replace the entry identified by `identity` with `media`
    ///
    /// Used for edits that change identity fields (title, author, ...).
    /// The new values must not clash with any other entry.
    pub fn replace(&mut self, identity: &MediaIdentity, media: impl Into<Media>) -> AppResult<()> {
        let media = media.into();
        if media.kind() != identity.kind() {
            return Err(DomainError::invalid(
                "kind",
                format!("cannot replace a {} with a {}", identity.kind(), media.kind()),
            )
            .into());
        }

        let new_identity = media.identity();
        let mut next = self.data.clone();
        match media {
            Media::Book(book) => overwrite(&mut next.books, identity, book)?,
            Media::Movie(movie) => overwrite(&mut next.movies, identity, movie)?,
            Media::Series(mut series) => {
                series.recompute_consumed_state();
                overwrite(&mut next.series, identity, series)?
            }
        }

        self.commit(next)?;
        if &new_identity == identity {
            info!("Updated {}", identity);
        } else {
            info!("Updated {} (now {})", identity, new_identity);
        }
        Ok(())
    }

    /// Remove the first entry of `kind` whose title matches, ignoring case
    /// Returns false (and saves nothing) when there is no match.
    pub fn remove(&mut self, kind: MediaKind, title: &str) -> AppResult<bool> {
        let mut next = self.data.clone();
        let removed = match kind {
            MediaKind::Book => take_by_title(&mut next.books, title).map(Media::from),
            MediaKind::Movie => take_by_title(&mut next.movies, title).map(Media::from),
            MediaKind::Series => take_by_title(&mut next.series, title).map(Media::from),
        };

        let Some(removed) = removed else {
            warn!("Nothing to remove: no {} titled '{}'", kind, title);
            return Ok(false);
        };

        self.commit(next)?;
        info!("Removed {}", removed);
        Ok(true)
    }

    /// Remove one season from a series and save
    /// Returns false when the series has no such season.
    pub fn remove_season(&mut self, series_title: &str, number: u32) -> AppResult<bool> {
        let mut next = self.data.clone();
        let series = next
            .series
            .iter_mut()
            .find(|s| same_title(s.title(), series_title))
            .ok_or_else(|| AppError::not_found(format!("series '{}'", series_title)))?;

        if !series.remove_season(number) {
            warn!("Series '{}' has no season {}", series.title(), number);
            return Ok(false);
        }
        series.recompute_consumed_state();
        let label = series.title().to_string();

        self.commit(next)?;
        info!("Removed season {} from series '{}'", number, label);
        Ok(true)
    }

    fn commit(&mut self, next: CatalogData) -> AppResult<()> {
        self.repository.save(&next)?;
        self.data = next;
        Ok(())
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// At most one match, since titles are unique per kind
    pub fn find_by_title(&self, kind: MediaKind, title: &str) -> Option<Media> {
        match kind {
            MediaKind::Book => self.find_book(title).map(Media::from),
            MediaKind::Movie => self.find_movie(title).map(Media::from),
            MediaKind::Series => self.find_series(title).map(Media::from),
        }
    }

    /// Entries of one kind, in catalog order
    pub fn all(&self, kind: MediaKind) -> Vec<Media> {
        match kind {
            MediaKind::Book => self.books().into_iter().map(Media::from).collect(),
            MediaKind::Movie => self.movies().into_iter().map(Media::from).collect(),
            MediaKind::Series => self.series().into_iter().map(Media::from).collect(),
        }
    }

    pub fn books(&self) -> Vec<Book> {
        self.data.books.clone()
    }

    pub fn movies(&self) -> Vec<Movie> {
        self.data.movies.clone()
    }

    pub fn series(&self) -> Vec<Series> {
        self.data.series.clone()
    }

    pub fn find_book(&self, title: &str) -> Option<Book> {
        find_by_title(&self.data.books, title)
    }

    pub fn find_movie(&self, title: &str) -> Option<Movie> {
        find_by_title(&self.data.movies, title)
    }

    pub fn find_series(&self, title: &str) -> Option<Series> {
        find_by_title(&self.data.series, title)
    }

    pub fn len(&self, kind: MediaKind) -> usize {
        match kind {
            MediaKind::Book => self.data.books.len(),
            MediaKind::Movie => self.data.movies.len(),
            MediaKind::Series => self.data.series.len(),
        }
    }

    pub fn total_len(&self) -> usize {
        total(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// ============================================================================
// HELPERS (generic over the three collections)
// ============================================================================

pub(crate) fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn total(data: &CatalogData) -> usize {
    data.books.len() + data.movies.len() + data.series.len()
}

fn find_by_title<T: MediaEntity + Clone>(items: &[T], title: &str) -> Option<T> {
    items.iter().find(|item| same_title(item.title(), title)).cloned()
}

fn take_by_title<T: MediaEntity>(items: &mut Vec<T>, title: &str) -> Option<T> {
    let index = items.iter().position(|item| same_title(item.title(), title))?;
    Some(items.remove(index))
}

/// Identity or title clash with any entry except the one at `skip`
fn check_unique<T: MediaEntity>(items: &[T], candidate: &T, skip: Option<usize>) -> AppResult<()> {
    let identity = candidate.identity();
    let clash = items.iter().enumerate().any(|(index, item)| {
        Some(index) != skip
            && (item.identity() == identity || same_title(item.title(), candidate.title()))
    });
    if clash {
        warn!("Rejected duplicate {}", identity);
        return Err(AppError::DuplicateEntity {
            kind: candidate.kind(),
            identity,
        });
    }
    Ok(())
}

fn insert<T: MediaEntity>(items: &mut Vec<T>, item: T) -> AppResult<()> {
    check_unique(items, &item, None)?;
    items.push(item);
    Ok(())
}

fn overwrite<T: MediaEntity>(items: &mut [T], identity: &MediaIdentity, item: T) -> AppResult<()> {
    let index = items
        .iter()
        .position(|existing| &existing.identity() == identity)
        .ok_or_else(|| {
            warn!("Cannot update missing {}", identity);
            AppError::not_found(identity)
        })?;
    check_unique(items, &item, Some(index))?;
    items[index] = item;
    Ok(())
}
