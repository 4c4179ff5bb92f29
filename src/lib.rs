// src/lib.rs
// Diário Cultural - Local-first catalog of books, films and TV series
//
// Architecture:
// - Domain-centric: entities validate themselves, all consumption rules
//   live in one transition function
// - Explicit store: the Catalog owns every entry and saves after each mutation
// - Stateless queries over catalog snapshots
// - Local-first: one JSON file the user controls

// ============================================================================
// CORE
// ============================================================================

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod storage;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod config;
pub mod logging;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_book,
    validate_movie,
    validate_review,
    validate_season,
    validate_series,
    // Media
    Book,
    Consumable,
    Consumption,
    ConsumptionChange,
    DomainError,
    DomainResult,
    Media,
    MediaEntity,
    MediaIdentity,
    MediaInfo,
    MediaKind,
    Movie,
    Rateable,
    // Value objects
    Review,
    Season,
    Series,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{CatalogData, CatalogRepository, JsonCatalogRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    Catalog,
    CreateBookRequest,
    CreateMovieRequest,
    CreateSeasonRequest,
    CreateSeriesRequest,
    DiaryService,
    ListOptions,
    SearchCriteria,
    SearchField,
    SortOrder,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{ErrorResponse, ErrorType, ToErrorResponse};
pub use config::AppConfig;
