// src/storage/mod.rs
//
// On-disk concerns shared by the repositories and the UI adapter:
// where the catalog file lives and how dates and durations are encoded.

pub mod format;
pub mod location;

pub use format::{format_date, parse_date, DATE_FORMAT};
pub use location::{default_data_file, APP_DIR_NAME, DATA_FILE_NAME};
