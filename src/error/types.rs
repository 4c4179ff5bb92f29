// src/error/types.rs
use std::path::PathBuf;

use crate::domain::{DomainError, MediaIdentity, MediaKind};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{identity} already exists")]
    DuplicateEntity {
        kind: MediaKind,
        identity: MediaIdentity,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Cannot search {kind} by {field}")]
    UnsupportedField { kind: MediaKind, field: String },

    #[error("Catalog file {} is corrupt: {reason}", .path.display())]
    CorruptState { path: PathBuf, reason: String },

    #[error("Catalog file {} could not be accessed: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        AppError::NotFound(what.to_string())
    }

    /// Storage failures abort the operation; everything else is recoverable
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::CorruptState { .. } | AppError::Persistence { .. } | AppError::Serialization(_)
        )
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let corrupt = AppError::CorruptState {
            path: PathBuf::from("catalog.json"),
            reason: "expected value".into(),
        };
        assert!(corrupt.is_fatal());
        assert!(!AppError::not_found("book 'Dune'").is_fatal());
        assert!(!AppError::from(DomainError::DuplicateSeason(2)).is_fatal());
    }

    #[test]
    fn test_messages_carry_context() {
        let err = AppError::DuplicateEntity {
            kind: MediaKind::Series,
            identity: MediaIdentity::Series {
                title: "Dark".into(),
                release_year: 2017,
            },
        };
        assert_eq!(err.to_string(), "series 'Dark' (2017) already exists");

        let err = AppError::from(DomainError::invalid("isbn", "bad length"));
        assert_eq!(err.to_string(), "Invalid isbn: bad length");
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::not_found("movie 'Up'")).unwrap();
        assert_eq!(json, "\"movie 'Up' not found\"");
    }
}
