//! Durable storage for the highlight set.
//!
//! The desktop analog of the original key-value store: one JSON file named
//! after the `"highlight"` key in the platform config dir. Loading is total;
//! a missing or corrupt file means an empty set, never an error.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::highlight::HighlightSet;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "Carada";
const APP_NAME: &str = "Carada";

/// Storage key for the highlight set; doubles as the file stem.
const HIGHLIGHT_KEY: &str = "highlight";

fn highlight_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(format!("{HIGHLIGHT_KEY}.json")))
}

/// Reads the persisted highlight set. Absent, unreadable or malformed data
/// all deserialize to the empty set.
pub fn load_highlights() -> HighlightSet {
    let Some(path) = highlight_file() else {
        return HighlightSet::default();
    };
    let Ok(data) = fs::read_to_string(path) else {
        return HighlightSet::default();
    };
    serde_json::from_str(&data).unwrap_or_default()
}

/// Writes the full highlight set. Called synchronously from every mutator so
/// the file never lags the in-memory set.
pub fn save_highlights(highlights: &HighlightSet) -> Result<(), PersistError> {
    let path = highlight_file().ok_or(PersistError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(highlights)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
