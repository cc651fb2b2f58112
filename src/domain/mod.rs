//! The client-side data pipeline: catalog ingestion, the filter/sort query
//! engine, the highlight set and aggregation. Pure and I/O free.

pub mod aggregate;
pub mod app_state;
pub mod catalog;
pub mod entities;
pub mod highlight;
pub mod query;

#[allow(unused_imports)]
pub use aggregate::{aggregate_brand_models, aggregate_brands, aggregate_models, GroupStats};
#[allow(unused_imports)]
pub use app_state::{AppState, CatalogStatus};
#[allow(unused_imports)]
pub use catalog::{load, CatalogError, RawCatalog};
#[allow(unused_imports)]
pub use entities::{BrandDirectory, BrandId, Listing, UNKNOWN_BRAND};
#[allow(unused_imports)]
pub use highlight::HighlightSet;
#[allow(unused_imports)]
pub use query::{query, FilterCriteria, FilterField, SortOrder};
