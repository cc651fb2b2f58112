//! Catalog ingestion: raw source document in, normalized listings out.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{BrandDirectory, BrandId, Listing, UNKNOWN_BRAND};

/// Top-level shape of the source document (`cars.json`).
///
/// Both lists are required for a usable catalog; they are modeled as `Option`
/// so [`load`] can report which one is missing instead of silently treating
/// the document as empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawCatalog {
    #[serde(rename = "MMList")]
    pub brands: Option<Vec<RawBrand>>,
    #[serde(rename = "Cars")]
    pub cars: Option<Vec<RawListing>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawBrand {
    #[serde(rename = "mkID")]
    pub id: BrandId,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(rename = "Cid")]
    pub id: String,
    #[serde(rename = "MkID")]
    pub brand_id: BrandId,
    #[serde(rename = "Model", default)]
    pub model: String,
    #[serde(rename = "NameMMT", default)]
    pub name: String,
    #[serde(rename = "Yr", default)]
    pub year: i32,
    #[serde(rename = "Prc", default)]
    pub price: String,
    #[serde(rename = "Province", default)]
    pub province: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Img300", default)]
    pub image_url: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog: missing `{0}` list")]
    MalformedCatalog(&'static str),
}

/// Normalizes the raw document into listings plus the brand directory.
///
/// Duplicate brand ids resolve last-write-wins: the final `MMList` entry for
/// an id owns its name. Listings whose `MkID` has no directory entry resolve
/// to [`UNKNOWN_BRAND`]. The input is never mutated, and nothing is returned
/// on failure (no partial state).
pub fn load(raw: &RawCatalog) -> Result<(Vec<Listing>, BrandDirectory), CatalogError> {
    let brands = raw
        .brands
        .as_ref()
        .ok_or(CatalogError::MalformedCatalog("MMList"))?;
    let cars = raw
        .cars
        .as_ref()
        .ok_or(CatalogError::MalformedCatalog("Cars"))?;

    let mut directory = BrandDirectory::new();
    for brand in brands {
        directory.insert(brand.id, brand.name.clone());
    }

    let listings = cars
        .iter()
        .map(|car| Listing {
            id: car.id.clone(),
            brand_id: car.brand_id,
            brand: directory
                .get(&car.brand_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_BRAND.to_string()),
            model: car.model.clone(),
            name: car.name.clone(),
            year: car.year,
            price: car.price.clone(),
            province: car.province.clone(),
            status: car.status.clone(),
            image_url: car.image_url.clone(),
        })
        .collect();

    Ok((listings, directory))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_brand(id: BrandId, name: &str) -> RawBrand {
        RawBrand {
            id,
            name: name.to_string(),
        }
    }

    fn raw_listing(id: &str, brand_id: BrandId) -> RawListing {
        RawListing {
            id: id.to_string(),
            brand_id,
            model: "Corolla".to_string(),
            name: "Toyota Corolla 1.8".to_string(),
            year: 2019,
            price: "500,000".to_string(),
            province: "Bangkok".to_string(),
            status: "Available".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn resolves_brand_names_through_directory() {
        let raw = RawCatalog {
            brands: Some(vec![raw_brand(1, "Toyota")]),
            cars: Some(vec![raw_listing("a", 1)]),
        };

        let (listings, directory) = load(&raw).unwrap();
        assert_eq!(listings[0].brand, "Toyota");
        assert_eq!(directory.get(&1).map(String::as_str), Some("Toyota"));
    }

    #[test]
    fn unresolved_brand_falls_back_to_unknown() {
        let raw = RawCatalog {
            brands: Some(vec![raw_brand(1, "Toyota")]),
            cars: Some(vec![raw_listing("a", 99)]),
        };

        let (listings, _) = load(&raw).unwrap();
        assert_eq!(listings[0].brand, UNKNOWN_BRAND);
    }

    #[test]
    fn duplicate_brand_ids_are_last_write_wins() {
        let raw = RawCatalog {
            brands: Some(vec![raw_brand(1, "Toyota"), raw_brand(1, "Honda")]),
            cars: Some(vec![raw_listing("a", 1)]),
        };

        let (listings, directory) = load(&raw).unwrap();
        assert_eq!(directory.get(&1).map(String::as_str), Some("Honda"));
        assert_eq!(listings[0].brand, "Honda");
    }

    #[test]
    fn missing_brand_list_is_malformed() {
        let raw = RawCatalog {
            brands: None,
            cars: Some(vec![raw_listing("a", 1)]),
        };
        assert!(matches!(
            load(&raw),
            Err(CatalogError::MalformedCatalog("MMList"))
        ));
    }

    #[test]
    fn missing_car_list_is_malformed() {
        let raw = RawCatalog {
            brands: Some(vec![raw_brand(1, "Toyota")]),
            cars: None,
        };
        assert!(matches!(
            load(&raw),
            Err(CatalogError::MalformedCatalog("Cars"))
        ));
    }

    #[test]
    fn copies_all_source_fields() {
        let raw = RawCatalog {
            brands: Some(vec![raw_brand(1, "Toyota")]),
            cars: Some(vec![raw_listing("a", 1)]),
        };

        let (listings, _) = load(&raw).unwrap();
        let listing = &listings[0];
        assert_eq!(listing.id, "a");
        assert_eq!(listing.model, "Corolla");
        assert_eq!(listing.name, "Toyota Corolla 1.8");
        assert_eq!(listing.year, 2019);
        assert_eq!(listing.price, "500,000");
        assert_eq!(listing.province, "Bangkok");
        assert_eq!(listing.status, "Available");
    }

    #[test]
    fn parses_the_source_document_shape() {
        let json = r#"{
            "MMList": [{"mkID": 1, "Name": "Toyota"}],
            "Cars": [{
                "Cid": "a", "MkID": 1, "Model": "Corolla", "Yr": 2019,
                "Prc": "500,000", "Province": "Bangkok", "Status": "Available"
            }]
        }"#;

        let raw: RawCatalog = serde_json::from_str(json).unwrap();
        let (listings, _) = load(&raw).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].brand, "Toyota");
    }
}
