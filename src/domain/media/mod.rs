//! Shared shape of every catalog entry (Book, Movie, Series).
//!
//! The three kinds are a tagged union (`Media`) rather than a hierarchy.
//! Common fields live in the embedded `MediaInfo`, common behaviour in the
//! `MediaEntity` trait.

pub mod entity;
pub mod info;
pub mod kind;

pub use entity::Media;
pub use info::{validate_release_year, MediaInfo};
pub use kind::{MediaIdentity, MediaKind};

use crate::domain::{Consumable, DomainResult};

/// Behaviour shared by Book, Movie and Series
pub trait MediaEntity: Consumable {
    fn kind(&self) -> MediaKind;

    fn info(&self) -> &MediaInfo;

    fn info_mut(&mut self) -> &mut MediaInfo;

    /// Field tuple used to detect duplicates and to locate the entry
    fn identity(&self) -> MediaIdentity;

    fn title(&self) -> &str {
        self.info().title()
    }

    fn genre(&self) -> &str {
        self.info().genre()
    }

    fn release_year(&self) -> i32 {
        self.info().release_year()
    }

    fn set_title(&mut self, title: String) -> DomainResult<()> {
        self.info_mut().set_title(title)
    }

    fn set_genre(&mut self, genre: String) -> DomainResult<()> {
        self.info_mut().set_genre(genre)
    }

    fn set_release_year(&mut self, release_year: i32) -> DomainResult<()> {
        self.info_mut().set_release_year(release_year)
    }
}
