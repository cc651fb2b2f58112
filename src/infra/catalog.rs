//! Fetches the catalog document (`cars.json`).
//!
//! One-shot fetch at startup, no retry: a cache within its TTL is served
//! directly, a successful fetch refreshes the on-disk cache, and a failed
//! fetch falls back to whatever cached copy exists (marked stale so the
//! UI can say so). With neither, the error propagates.

use std::time::SystemTime;

use reqwest::{Client, Url};
use thiserror::Error;

use crate::domain::catalog::RawCatalog;
use crate::infra::cache::{load_catalog_cache, save_catalog_cache, CatalogCache};

const DEFAULT_CATALOG_URL: &str = "https://skynatbs.github.io/carada/cars.json";
const ENV_CATALOG_URL: &str = "CARADA_CATALOG_URL";
const USER_AGENT: &str = concat!("carada/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum CatalogFetchError {
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to decode catalog document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where the returned document came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Stale,
}

#[derive(Clone, Debug)]
pub struct CatalogPayload {
    pub raw: RawCatalog,
    pub fetched_at: SystemTime,
    pub status: CacheStatus,
}

#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    url: Url,
}

impl CatalogClient {
    pub fn new() -> Result<Self, CatalogFetchError> {
        let url = std::env::var(ENV_CATALOG_URL)
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        Self::with_url(&url)
    }

    pub fn with_url(url: &str) -> Result<Self, CatalogFetchError> {
        let url = Url::parse(url)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, url })
    }

    /// Fetches the catalog, writing through to the on-disk cache on success
    /// and reading back from it on failure.
    pub async fn get_catalog(&self) -> Result<CatalogPayload, CatalogFetchError> {
        // A cache within its TTL short-circuits the network entirely; the
        // settings page clears the cache to force a refetch.
        if let Some(cache) = load_catalog_cache() {
            if !cache.is_expired() {
                println!(
                    "[catalog] Using cached catalog (age: {})",
                    cache.age_string()
                );
                return Ok(CatalogPayload {
                    fetched_at: cache.fetched_at(),
                    raw: cache.raw,
                    status: CacheStatus::Fresh,
                });
            }
        }

        println!("[catalog] Fetching catalog from {}", self.url);

        match self.fetch().await {
            Ok(raw) => {
                let cache = CatalogCache::new(raw.clone());
                if let Err(e) = save_catalog_cache(&cache) {
                    println!("[catalog] Warning: failed to save catalog cache: {e}");
                }
                Ok(CatalogPayload {
                    raw,
                    fetched_at: cache.fetched_at(),
                    status: CacheStatus::Fresh,
                })
            }
            Err(error) => {
                println!("[catalog] Fetch failed ({error}); trying cached copy");
                if let Some(cache) = load_catalog_cache() {
                    return Ok(CatalogPayload {
                        fetched_at: cache.fetched_at(),
                        raw: cache.raw,
                        status: CacheStatus::Stale,
                    });
                }
                Err(error)
            }
        }
    }

    async fn fetch(&self) -> Result<RawCatalog, CatalogFetchError> {
        let body = self
            .http
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let raw = serde_json::from_str(&body)?;
        Ok(raw)
    }
}
