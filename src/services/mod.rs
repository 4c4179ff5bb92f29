// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog;
pub mod diary_service;
pub mod query_service;

#[cfg(test)]
mod test_support;


#[cfg(test)]
mod query_service_tests;


pub use catalog::Catalog;

pub use diary_service::{
    CreateBookRequest,
    CreateMovieRequest,
    CreateSeasonRequest,
    CreateSeriesRequest,
    DiaryService,
};

pub use query_service::{
    ListOptions,
    SearchCriteria,
    SearchField,
    SortOrder,
};
