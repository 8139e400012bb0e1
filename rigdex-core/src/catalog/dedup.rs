//! Flattening embedded listing arrays out of build containers.

use super::profile::CatalogProfile;
use rigdex_model::{BuildRecord, ListingRecord};
use std::collections::HashSet;

/// Flatten a catalog's listings out of the containers, keeping the first
/// occurrence of each identity key and silently discarding later duplicates.
///
/// Containers are walked in input order, so output order is the order of
/// first appearance. Unnamed entries cannot be identified and are dropped.
pub fn flatten_dedup(profile: &CatalogProfile, containers: &[BuildRecord]) -> Vec<ListingRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut listings = Vec::new();

    for container in containers {
        for listing in container.embedded_listings(profile.section_field) {
            let key = listing.identity_key();
            if key.is_empty() {
                continue;
            }
            if seen.insert(key.to_owned()) {
                listings.push(listing);
            }
        }
    }

    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::profile::LAPTOPS;

    fn build_with_laptops(names: &[&str]) -> BuildRecord {
        BuildRecord::new("test build").with_section(
            "laptops",
            names
                .iter()
                .map(|n| ListingRecord::new(*n, 1000.0))
                .collect(),
        )
    }

    #[test]
    fn first_occurrence_wins() {
        let containers = vec![
            build_with_laptops(&["A"]),
            build_with_laptops(&["A", "B"]),
            build_with_laptops(&["B", "C"]),
        ];

        let flat = flatten_dedup(&LAPTOPS, &containers);
        let names: Vec<&str> = flat.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn flatten_is_idempotent() {
        let containers = vec![build_with_laptops(&["A", "B"]), build_with_laptops(&["A"])];

        let once = flatten_dedup(&LAPTOPS, &containers);
        let again = flatten_dedup(&LAPTOPS, &containers);
        assert_eq!(once, again);
    }

    #[test]
    fn whitespace_only_names_are_dropped() {
        let containers = vec![build_with_laptops(&["  ", "Real"])];
        let flat = flatten_dedup(&LAPTOPS, &containers);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].name, "Real");
    }

    #[test]
    fn padded_names_collapse_to_one_listing() {
        let containers = vec![build_with_laptops(&["A "]), build_with_laptops(&["A"])];
        let flat = flatten_dedup(&LAPTOPS, &containers);
        assert_eq!(flat.len(), 1);
    }
}
