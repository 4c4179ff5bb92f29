// src/storage/location.rs
use std::path::PathBuf;

/// Directory created under the platform data dir
pub const APP_DIR_NAME: &str = "diario-cultural";

pub const DATA_FILE_NAME: &str = "diario_cultural.json";

/// Get the default catalog file path
///
/// Path structure: {APP_DATA}/diario-cultural/diario_cultural.json
/// Falls back to ./data/diario_cultural.json when the platform has no data dir.
pub fn default_data_file() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR_NAME).join(DATA_FILE_NAME),
        None => PathBuf::from("data").join(DATA_FILE_NAME),
    }
}
