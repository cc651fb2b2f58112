//! Filtering and sorting of the listing sequence.

use serde::{Deserialize, Serialize};

use super::entities::Listing;
use crate::util::price::parse_amount;

/// One slot per listing field the filter bar exposes. `None` means the field
/// is unconstrained; it is never confused with "match the empty string".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub brand: Option<String>,
    /// Kept as the raw select value; `query` parses it so the invalid-year
    /// policy lives in one place.
    pub year: Option<String>,
    pub province: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Brand,
    Year,
    Province,
    Status,
}

impl FilterCriteria {
    /// Updates one slot from a select value. The UI's "Any …" option submits
    /// an empty string, which clears the constraint.
    pub fn set(&mut self, field: FilterField, value: &str) {
        let slot = match field {
            FilterField::Brand => &mut self.brand,
            FilterField::Year => &mut self.year,
            FilterField::Province => &mut self.province,
            FilterField::Status => &mut self.status,
        };
        *slot = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.year.is_none() && self.province.is_none() && self.status.is_none()
    }

    /// Human-readable summary of the active constraints, used by the
    /// "no cars found" message.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = [
            self.brand.as_ref().map(|v| format!("brand {v}")),
            self.year.as_ref().map(|v| format!("year {v}")),
            self.province.as_ref().map(|v| format!("province {v}")),
            self.status.as_ref().map(|v| format!("status {v}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            "the current filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Sort order for the visible listing sequence. The display label maps to the
/// like-named behavior: "Most Recent" is the year sort, "Lowest Price" the
/// price sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    YearDescending,
    PriceAscending,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            Self::YearDescending => "Most Recent",
            Self::PriceAscending => "Lowest Price",
        }
    }
}

/// Applies the criteria conjunctively, then sorts.
///
/// Pure: the input slice is never mutated. Both sorts are stable, so ties keep
/// their catalog order. A year criterion that does not parse as an integer
/// matches nothing and yields an empty result rather than an error.
pub fn query(listings: &[Listing], criteria: &FilterCriteria, order: SortOrder) -> Vec<Listing> {
    let mut result: Vec<Listing> = listings.to_vec();

    if let Some(brand) = &criteria.brand {
        result.retain(|listing| &listing.brand == brand);
    }
    if let Some(year) = &criteria.year {
        match year.trim().parse::<i32>() {
            Ok(year) => result.retain(|listing| listing.year == year),
            Err(_) => return Vec::new(),
        }
    }
    if let Some(province) = &criteria.province {
        result.retain(|listing| &listing.province == province);
    }
    if let Some(status) = &criteria.status {
        result.retain(|listing| &listing.status == status);
    }

    match order {
        SortOrder::YearDescending => result.sort_by(|a, b| b.year.cmp(&a.year)),
        SortOrder::PriceAscending => result.sort_by_key(|listing| parse_amount(&listing.price)),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, brand: &str, year: i32, price: &str, province: &str, status: &str) -> Listing {
        Listing {
            id: id.to_string(),
            brand_id: 1,
            brand: brand.to_string(),
            model: format!("{brand} {id}"),
            name: String::new(),
            year,
            price: price.to_string(),
            province: province.to_string(),
            status: status.to_string(),
            image_url: String::new(),
        }
    }

    fn fleet() -> Vec<Listing> {
        vec![
            listing("a", "Toyota", 2019, "500,000", "Bangkok", "Available"),
            listing("b", "Toyota", 2021, "800,000", "Chiang Mai", "Sold"),
            listing("c", "Honda", 2021, "650,000", "Bangkok", "Available"),
            listing("d", "Honda", 2018, "฿320,000", "Phuket", "Available"),
        ]
    }

    #[test]
    fn empty_criteria_only_sorts() {
        let listings = fleet();
        let result = query(&listings, &FilterCriteria::default(), SortOrder::YearDescending);
        assert_eq!(result.len(), listings.len());
        let years: Vec<i32> = result.iter().map(|l| l.year).collect();
        assert_eq!(years, vec![2021, 2021, 2019, 2018]);
    }

    #[test]
    fn filtering_is_conjunctive() {
        let listings = fleet();
        let both = FilterCriteria {
            brand: Some("Toyota".to_string()),
            year: Some("2021".to_string()),
            ..FilterCriteria::default()
        };
        let by_brand = FilterCriteria {
            brand: Some("Toyota".to_string()),
            ..FilterCriteria::default()
        };
        let by_year = FilterCriteria {
            year: Some("2021".to_string()),
            ..FilterCriteria::default()
        };

        let combined = query(&listings, &both, SortOrder::YearDescending);
        let brand_only = query(&listings, &by_brand, SortOrder::YearDescending);
        let year_only = query(&listings, &by_year, SortOrder::YearDescending);
        let intersection: Vec<&Listing> = brand_only
            .iter()
            .filter(|l| year_only.iter().any(|other| other.id == l.id))
            .collect();

        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].id, "b");
        assert_eq!(intersection.len(), combined.len());
        assert_eq!(intersection[0].id, combined[0].id);
    }

    #[test]
    fn invalid_year_criterion_matches_nothing() {
        let listings = fleet();
        let criteria = FilterCriteria {
            year: Some("twenty-one".to_string()),
            ..FilterCriteria::default()
        };
        assert!(query(&listings, &criteria, SortOrder::YearDescending).is_empty());
    }

    #[test]
    fn year_sort_is_stable_on_ties() {
        let listings = fleet();
        let result = query(&listings, &FilterCriteria::default(), SortOrder::YearDescending);
        // "b" precedes "c" in the catalog; both are 2021.
        assert_eq!(result[0].id, "b");
        assert_eq!(result[1].id, "c");
    }

    #[test]
    fn price_sort_uses_extracted_amounts() {
        let listings = fleet();
        let result = query(&listings, &FilterCriteria::default(), SortOrder::PriceAscending);
        let ids: Vec<&str> = result.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "a", "c", "b"]);
    }

    #[test]
    fn query_does_not_mutate_its_input() {
        let listings = fleet();
        let before = listings.clone();
        let _ = query(&listings, &FilterCriteria::default(), SortOrder::PriceAscending);
        assert_eq!(listings, before);
    }

    #[test]
    fn example_scenario_from_the_source_catalog() {
        let listings = vec![
            listing("a", "Toyota", 2019, "500,000", "Bangkok", "Available"),
            listing("b", "Toyota", 2021, "800,000", "Chiang Mai", "Sold"),
        ];
        let criteria = FilterCriteria {
            status: Some("Available".to_string()),
            ..FilterCriteria::default()
        };

        let result = query(&listings, &criteria, SortOrder::YearDescending);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a");
        assert_eq!(result[0].year, 2019);
    }

    #[test]
    fn set_maps_empty_string_to_unconstrained() {
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterField::Brand, "Toyota");
        assert_eq!(criteria.brand.as_deref(), Some("Toyota"));
        criteria.set(FilterField::Brand, "");
        assert!(criteria.brand.is_none());
        assert!(criteria.is_empty());
    }

    #[test]
    fn describe_lists_active_constraints() {
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterField::Year, "2021");
        criteria.set(FilterField::Province, "Bangkok");
        assert_eq!(criteria.describe(), "year 2021, province Bangkok");
    }
}
