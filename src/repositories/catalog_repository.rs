// src/repositories/catalog_repository.rs
//
// Catalog persistence: one JSON file holding every book, movie and series.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, error};
use tempfile::NamedTempFile;

use crate::config::AppConfig;
use crate::domain::{Book, DomainError, Movie, Series};
use crate::error::{AppError, AppResult};

use super::records::{BookRecord, CatalogFile, MovieRecord, SeriesRecord};

/// Everything the catalog owns, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogData {
    pub books: Vec<Book>,
    pub movies: Vec<Movie>,
    pub series: Vec<Series>,
}

impl CatalogData {
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.movies.is_empty() && self.series.is_empty()
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    /// Missing storage is an empty catalog, unreadable storage is an error
    fn load(&self) -> AppResult<CatalogData>;

    /// Replace the stored catalog; all or nothing
    fn save(&self, data: &CatalogData) -> AppResult<()>;
}

pub struct JsonCatalogRepository {
    path: PathBuf,
    pretty: bool,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            path: config.data_file.clone(),
            pretty: config.pretty_json,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, reason: impl Into<String>) -> AppError {
        AppError::CorruptState {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    fn io_failure(&self, source: io::Error) -> AppError {
        error!("Catalog I/O failed on {}: {}", self.path.display(), source);
        AppError::Persistence {
            path: self.path.clone(),
            source,
        }
    }

    fn decode(&self, file: CatalogFile) -> AppResult<CatalogData> {
        Ok(CatalogData {
            books: decode_all(file.books, "book", |r: &BookRecord| r.title.clone())
                .map_err(|reason| self.corrupt(reason))?,
            movies: decode_all(file.movies, "movie", |r: &MovieRecord| r.title.clone())
                .map_err(|reason| self.corrupt(reason))?,
            series: decode_all(file.series, "series", |r: &SeriesRecord| r.title.clone())
                .map_err(|reason| self.corrupt(reason))?,
        })
    }

    fn encode(&self, data: &CatalogData) -> AppResult<Vec<u8>> {
        let file = CatalogFile {
            books: data.books.iter().map(BookRecord::from).collect(),
            movies: data.movies.iter().map(MovieRecord::from).collect(),
            series: data.series.iter().map(SeriesRecord::from).collect(),
        };
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&file)?
        } else {
            serde_json::to_vec(&file)?
        };
        Ok(bytes)
    }

    /// Write to a temp file next to the target, then rename over it
    fn write_atomically(&self, bytes: &[u8]) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Rebuild entities from records, naming the first offending record
fn decode_all<R, E>(
    records: Vec<R>,
    kind: &str,
    title: impl Fn(&R) -> String,
) -> Result<Vec<E>, String>
where
    E: TryFrom<R, Error = DomainError>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let label = title(&record);
            E::try_from(record)
                .map_err(|e| format!("{} #{} ('{}'): {}", kind, index + 1, label, e))
        })
        .collect()
}

impl CatalogRepository for JsonCatalogRepository {
    fn load(&self) -> AppResult<CatalogData> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No catalog at {}, starting empty", self.path.display());
                return Ok(CatalogData::default());
            }
            Err(e) => return Err(self.io_failure(e)),
        };

        if text.trim().is_empty() {
            debug!("Catalog at {} is empty", self.path.display());
            return Ok(CatalogData::default());
        }

        let file: CatalogFile =
            serde_json::from_str(&text).map_err(|e| self.corrupt(e.to_string()))?;
        let data = self.decode(file)?;

        debug!(
            "Loaded catalog from {}: {} books, {} movies, {} series",
            self.path.display(),
            data.books.len(),
            data.movies.len(),
            data.series.len()
        );
        Ok(data)
    }

    fn save(&self, data: &CatalogData) -> AppResult<()> {
        let bytes = self.encode(data)?;
        self.write_atomically(&bytes)
            .map_err(|e| self.io_failure(e))?;
        debug!(
            "Saved catalog to {} ({} entries)",
            self.path.display(),
            data.books.len() + data.movies.len() + data.series.len()
        );
        Ok(())
    }
}
