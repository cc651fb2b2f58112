//! Summary statistics over the listing sequence, feeding the dashboard
//! tables and distribution bars. All derived, never persisted.

use std::collections::BTreeMap;

use super::entities::Listing;

/// Count and summed value for one group (a brand, or a model within one).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupStats {
    pub count: usize,
    pub total_value: u64,
}

impl GroupStats {
    fn add(&mut self, amount: u64) {
        self.count += 1;
        self.total_value += amount;
    }

    /// Mean price for the group. An empty group averages to 0.0, not NaN.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_value as f64 / self.count as f64
        }
    }
}

/// Per-brand counts and totals.
pub fn aggregate_brands(listings: &[Listing]) -> BTreeMap<String, GroupStats> {
    let mut groups: BTreeMap<String, GroupStats> = BTreeMap::new();
    for listing in listings {
        groups
            .entry(listing.brand.clone())
            .or_default()
            .add(listing.price_value());
    }
    groups
}

/// Per-model counts and totals, optionally scoped to one brand.
pub fn aggregate_models(listings: &[Listing], brand: Option<&str>) -> BTreeMap<String, GroupStats> {
    let mut groups: BTreeMap<String, GroupStats> = BTreeMap::new();
    for listing in listings {
        if let Some(brand) = brand {
            if listing.brand != brand {
                continue;
            }
        }
        groups
            .entry(listing.model.clone())
            .or_default()
            .add(listing.price_value());
    }
    groups
}

/// Per-brand, per-model breakdown for the grouped dashboard table.
pub fn aggregate_brand_models(
    listings: &[Listing],
) -> BTreeMap<String, BTreeMap<String, GroupStats>> {
    let mut groups: BTreeMap<String, BTreeMap<String, GroupStats>> = BTreeMap::new();
    for listing in listings {
        groups
            .entry(listing.brand.clone())
            .or_default()
            .entry(listing.model.clone())
            .or_default()
            .add(listing.price_value());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, brand: &str, model: &str, price: &str) -> Listing {
        Listing {
            id: id.to_string(),
            brand_id: 1,
            brand: brand.to_string(),
            model: model.to_string(),
            name: String::new(),
            year: 2019,
            price: price.to_string(),
            province: "Bangkok".to_string(),
            status: "Available".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn brand_totals_match_the_example_catalog() {
        let listings = vec![
            listing("a", "Toyota", "Corolla", "500,000"),
            listing("b", "Toyota", "Camry", "800,000"),
        ];

        let brands = aggregate_brands(&listings);
        let toyota = brands.get("Toyota").unwrap();
        assert_eq!(toyota.count, 2);
        assert_eq!(toyota.total_value, 1_300_000);
    }

    #[test]
    fn empty_group_averages_to_zero() {
        assert_eq!(GroupStats::default().average(), 0.0);
    }

    #[test]
    fn average_is_total_over_count() {
        let listings = vec![
            listing("a", "Toyota", "Corolla", "500,000"),
            listing("b", "Toyota", "Camry", "800,000"),
        ];
        let brands = aggregate_brands(&listings);
        assert_eq!(brands.get("Toyota").unwrap().average(), 650_000.0);
    }

    #[test]
    fn model_aggregation_scopes_to_the_requested_brand() {
        let listings = vec![
            listing("a", "Toyota", "Corolla", "500,000"),
            listing("b", "Toyota", "Camry", "800,000"),
            listing("c", "Honda", "Civic", "650,000"),
        ];

        let toyota_models = aggregate_models(&listings, Some("Toyota"));
        assert_eq!(toyota_models.len(), 2);
        assert!(toyota_models.contains_key("Corolla"));
        assert!(!toyota_models.contains_key("Civic"));

        let all_models = aggregate_models(&listings, None);
        assert_eq!(all_models.len(), 3);
    }

    #[test]
    fn brand_model_breakdown_nests_totals() {
        let listings = vec![
            listing("a", "Toyota", "Corolla", "500,000"),
            listing("b", "Toyota", "Corolla", "450,000"),
            listing("c", "Toyota", "Camry", "800,000"),
        ];

        let nested = aggregate_brand_models(&listings);
        let corolla = nested.get("Toyota").unwrap().get("Corolla").unwrap();
        assert_eq!(corolla.count, 2);
        assert_eq!(corolla.total_value, 950_000);
    }

    #[test]
    fn digitless_prices_count_as_zero_value() {
        let listings = vec![listing("a", "Toyota", "Corolla", "TBD")];
        let brands = aggregate_brands(&listings);
        let toyota = brands.get("Toyota").unwrap();
        assert_eq!(toyota.count, 1);
        assert_eq!(toyota.total_value, 0);
    }
}
