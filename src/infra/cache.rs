//! Persistent on-disk copy of the last fetched catalog document.
//!
//! Keeps the dashboard usable offline: a failed fetch falls back to the
//! cached document instead of an empty screen.

use std::{
    fs,
    path::PathBuf,
    sync::OnceLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

use crate::domain::catalog::RawCatalog;

const CACHE_FILENAME: &str = "catalog_cache.json";

/// Cache TTL: 24 hours. The catalog is a static snapshot that is republished
/// at most daily.
pub const CATALOG_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cached catalog document with its fetch timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCache {
    /// Unix timestamp (seconds) when the document was fetched.
    pub cached_at: u64,
    /// The raw document exactly as fetched; normalization happens per load.
    pub raw: RawCatalog,
}

impl CatalogCache {
    pub fn new(raw: RawCatalog) -> Self {
        let cached_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self { cached_at, raw }
    }

    pub fn is_expired(&self) -> bool {
        self.age() > CATALOG_CACHE_TTL
    }

    pub fn age(&self) -> Duration {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Duration::from_secs(now.saturating_sub(self.cached_at))
    }

    pub fn fetched_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.cached_at)
    }

    /// Human-readable age string.
    pub fn age_string(&self) -> String {
        let secs = self.age().as_secs();
        if secs < 60 {
            format!("{secs}s")
        } else if secs < 3600 {
            format!("{}m", secs / 60)
        } else if secs < 86400 {
            format!("{}h", secs / 3600)
        } else {
            format!("{}d", secs / 86400)
        }
    }
}

fn cache_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("carada");
        let _ = fs::create_dir_all(&base);
        base.join(CACHE_FILENAME)
    })
    .clone()
}

/// Load the catalog cache from disk, if it exists.
pub fn load_catalog_cache() -> Option<CatalogCache> {
    let path = cache_path();

    if !path.exists() {
        println!("[cache] No catalog cache found at {}", path.display());
        return None;
    }

    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str::<CatalogCache>(&content) {
            Ok(cache) => {
                println!(
                    "[cache] Loaded catalog cache (age: {}) from {}",
                    cache.age_string(),
                    path.display()
                );
                Some(cache)
            }
            Err(e) => {
                println!("[cache] Failed to parse catalog cache: {e}");
                None
            }
        },
        Err(e) => {
            println!("[cache] Failed to read catalog cache: {e}");
            None
        }
    }
}

/// Save the catalog cache to disk.
pub fn save_catalog_cache(cache: &CatalogCache) -> Result<(), std::io::Error> {
    let path = cache_path();
    let content = serde_json::to_string(cache)?; // compact, the document can be large
    fs::write(&path, content)?;
    println!("[cache] Saved catalog cache to {}", path.display());
    Ok(())
}

/// Remove the cached document; the next load goes to the network.
pub fn clear_catalog_cache() {
    let path = cache_path();
    if path.exists() {
        if let Err(e) = fs::remove_file(&path) {
            println!("[cache] Failed to remove catalog cache: {e}");
        }
    }
}
