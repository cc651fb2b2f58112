use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::util::price::parse_amount;

/// Brand key as used by the catalog source (`mkID` on brands, `MkID` on cars).
pub type BrandId = i64;

/// Lookup from brand id to display name. Built once at catalog load and
/// immutable afterwards.
pub type BrandDirectory = HashMap<BrandId, String>;

/// Resolved brand name for listings whose `MkID` has no directory entry.
pub const UNKNOWN_BRAND: &str = "Unknown";

/// A single car listing, enriched with the resolved brand name.
///
/// Listings are value objects: the catalog is read-only, so nothing mutates
/// one after `catalog::load` constructs it. The price stays in its source
/// formatting ("฿1,234,500"); use [`Listing::price_value`] for arithmetic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub brand_id: BrandId,
    /// Resolved via the brand directory; [`UNKNOWN_BRAND`] when unresolved.
    pub brand: String,
    pub model: String,
    /// Full display name from the source (make, model and trim).
    pub name: String,
    pub year: i32,
    /// Formatted currency string exactly as delivered by the source.
    pub price: String,
    pub province: String,
    pub status: String,
    pub image_url: String,
}

impl Listing {
    /// Numeric amount behind the formatted price string. Total: a price with
    /// no digits is worth 0.
    pub fn price_value(&self) -> u64 {
        parse_amount(&self.price)
    }
}
