//! The highlight set: listings the user has pinned.

use serde::{Deserialize, Serialize};

use super::entities::Listing;

/// Ordered set of pinned listings, most-recently-pinned last, no duplicate
/// ids. Each entry is the full listing snapshot taken at pin time, so a
/// highlighted card survives the catalog being refiltered or reloaded.
///
/// Mutation happens only through the operations below; callers persist the
/// set right after mutating (see `app::persist_highlights`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightSet {
    entries: Vec<Listing>,
}

impl HighlightSet {
    /// Pins a listing. Pinning an already-pinned id replaces its snapshot and
    /// moves it to the most-recent position instead of duplicating it.
    pub fn pin(&mut self, listing: Listing) {
        self.entries.retain(|entry| entry.id != listing.id);
        self.entries.push(listing);
    }

    /// Removes the entry with the given id; a no-op when absent.
    pub fn unpin(&mut self, id: &str) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Unpins when present, pins otherwise. Returns `true` when the listing
    /// ended up pinned.
    pub fn toggle(&mut self, listing: Listing) -> bool {
        if self.is_pinned(&listing.id) {
            self.unpin(&listing.id);
            false
        } else {
            self.pin(listing);
            true
        }
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Listing] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, year: i32) -> Listing {
        Listing {
            id: id.to_string(),
            brand_id: 1,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            name: String::new(),
            year,
            price: "500,000".to_string(),
            province: "Bangkok".to_string(),
            status: "Available".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn toggle_twice_restores_the_original_set() {
        let mut set = HighlightSet::default();
        set.pin(listing("a", 2019));
        let before = set.clone();

        set.toggle(listing("b", 2021));
        set.toggle(listing("b", 2021));

        assert_eq!(set, before);
    }

    #[test]
    fn pinning_again_moves_to_most_recent_without_duplicating() {
        let mut set = HighlightSet::default();
        set.pin(listing("a", 2019));
        set.pin(listing("b", 2021));
        set.pin(listing("a", 2020)); // refreshed snapshot

        assert_eq!(set.len(), 2);
        let ids: Vec<&str> = set.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(set.entries().last().unwrap().year, 2020);
    }

    #[test]
    fn unpin_of_absent_id_is_a_noop() {
        let mut set = HighlightSet::default();
        set.pin(listing("a", 2019));
        set.unpin("zzz");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = HighlightSet::default();
        set.pin(listing("a", 2019));
        set.pin(listing("b", 2021));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_reports_the_resulting_membership() {
        let mut set = HighlightSet::default();
        assert!(set.toggle(listing("a", 2019)));
        assert!(set.is_pinned("a"));
        assert!(!set.toggle(listing("a", 2019)));
        assert!(!set.is_pinned("a"));
    }

    #[test]
    fn serde_round_trip_preserves_order_and_snapshots() {
        let mut set = HighlightSet::default();
        set.pin(listing("a", 2019));
        set.pin(listing("b", 2021));

        let encoded = serde_json::to_string(&set).unwrap();
        let decoded: HighlightSet = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, set);
    }
}
