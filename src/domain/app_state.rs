use std::collections::BTreeSet;
use std::time::SystemTime;

use super::entities::{BrandDirectory, Listing};
use super::highlight::HighlightSet;
use super::query::{query, FilterCriteria, FilterField, SortOrder};

/// All shared application state, held in a single Dioxus signal. The UI event
/// sequence is the only writer; reads clone what they need (copy-on-write).
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Normalized catalog. Read-only after `apply_catalog`.
    pub listings: Vec<Listing>,
    pub brands: BrandDirectory,
    pub criteria: FilterCriteria,
    pub sort: SortOrder,
    pub highlights: HighlightSet,
    /// Brand picked on the dashboard for the per-model breakdown.
    pub selected_brand: Option<String>,
    pub catalog: CatalogStatus,
}

/// Provenance of the current catalog, surfaced on the settings page. A load
/// failure lands in `error` so the UI can observe it.
#[derive(Clone, Debug, Default)]
pub struct CatalogStatus {
    pub fetched_at: Option<SystemTime>,
    pub from_cache: bool,
    pub error: Option<String>,
}

impl AppState {
    pub fn apply_catalog(
        &mut self,
        listings: Vec<Listing>,
        brands: BrandDirectory,
        fetched_at: SystemTime,
        from_cache: bool,
    ) {
        self.listings = listings;
        self.brands = brands;
        self.catalog = CatalogStatus {
            fetched_at: Some(fetched_at),
            from_cache,
            error: None,
        };
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) {
        self.criteria.set(field, value);
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort = order;
    }

    pub fn select_brand(&mut self, brand: Option<String>) {
        self.selected_brand = brand;
    }

    /// The filtered and sorted sequence for the current criteria. Pure
    /// recompute-on-read; the listings page wraps this behind the debouncer.
    pub fn visible_listings(&self) -> Vec<Listing> {
        query(&self.listings, &self.criteria, self.sort)
    }

    pub fn brand_options(&self) -> Vec<String> {
        self.distinct(|listing| listing.brand.clone())
    }

    pub fn year_options(&self) -> Vec<String> {
        let years: BTreeSet<i32> = self.listings.iter().map(|listing| listing.year).collect();
        years.into_iter().rev().map(|year| year.to_string()).collect()
    }

    pub fn province_options(&self) -> Vec<String> {
        self.distinct(|listing| listing.province.clone())
    }

    pub fn status_options(&self) -> Vec<String> {
        self.distinct(|listing| listing.status.clone())
    }

    fn distinct(&self, field: impl Fn(&Listing) -> String) -> Vec<String> {
        let values: BTreeSet<String> = self
            .listings
            .iter()
            .map(field)
            .filter(|value| !value.is_empty())
            .collect();
        values.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{load, RawBrand, RawCatalog, RawListing};

    fn seeded_state() -> AppState {
        let raw = RawCatalog {
            brands: Some(vec![
                RawBrand {
                    id: 1,
                    name: "Toyota".to_string(),
                },
                RawBrand {
                    id: 2,
                    name: "Honda".to_string(),
                },
            ]),
            cars: Some(vec![
                RawListing {
                    id: "a".to_string(),
                    brand_id: 1,
                    model: "Corolla".to_string(),
                    name: String::new(),
                    year: 2019,
                    price: "500,000".to_string(),
                    province: "Bangkok".to_string(),
                    status: "Available".to_string(),
                    image_url: String::new(),
                },
                RawListing {
                    id: "b".to_string(),
                    brand_id: 2,
                    model: "Civic".to_string(),
                    name: String::new(),
                    year: 2021,
                    price: "650,000".to_string(),
                    province: "Chiang Mai".to_string(),
                    status: "Sold".to_string(),
                    image_url: String::new(),
                },
            ]),
        };

        let (listings, brands) = load(&raw).unwrap();
        let mut state = AppState::default();
        state.apply_catalog(listings, brands, SystemTime::now(), false);
        state
    }

    #[test]
    fn options_are_distinct_and_sorted() {
        let state = seeded_state();
        assert_eq!(state.brand_options(), vec!["Honda", "Toyota"]);
        assert_eq!(state.year_options(), vec!["2021", "2019"]);
        assert_eq!(state.province_options(), vec!["Bangkok", "Chiang Mai"]);
        assert_eq!(state.status_options(), vec!["Available", "Sold"]);
    }

    #[test]
    fn set_filter_with_empty_value_clears_the_slot() {
        let mut state = seeded_state();
        state.set_filter(FilterField::Status, "Available");
        assert_eq!(state.visible_listings().len(), 1);
        state.set_filter(FilterField::Status, "");
        assert_eq!(state.visible_listings().len(), 2);
    }

    #[test]
    fn apply_catalog_clears_a_previous_load_error() {
        let mut state = seeded_state();
        state.catalog.error = Some("boom".to_string());
        let listings = state.listings.clone();
        let brands = state.brands.clone();
        state.apply_catalog(listings, brands, SystemTime::now(), true);
        assert!(state.catalog.error.is_none());
        assert!(state.catalog.from_cache);
    }
}
