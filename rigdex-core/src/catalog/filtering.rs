//! Filter predicates applied to deduplicated listings.

use super::facets::listing_magnitude;
use super::profile::{CatalogProfile, FacetKind};
use rigdex_model::ListingRecord;
use std::collections::BTreeMap;
use tracing::debug;

/// Categorical facet selections: within one facet any accepted value may
/// match (case-insensitive substring of the listing's value); across facets
/// every selected facet must match.
pub fn matches_selections(
    profile: &CatalogProfile,
    listing: &ListingRecord,
    selections: &BTreeMap<String, Vec<String>>,
) -> bool {
    selections.iter().all(|(facet, accepted)| {
        if accepted.is_empty() {
            return true;
        }
        match profile.facet(facet).map(|f| f.kind) {
            Some(FacetKind::Categorical) => {
                let Some(value) = listing.attr_text(facet) else {
                    return false;
                };
                let value = value.to_lowercase();
                accepted
                    .iter()
                    .any(|candidate| value.contains(&candidate.to_lowercase()))
            }
            _ => {
                // Stray key from an out-of-date client; not a dimension of
                // this catalog, so it cannot narrow anything.
                debug!(facet = %facet, catalog = %profile.kind, "ignoring selection on unknown facet");
                true
            }
        }
    })
}

/// Numeric lower bounds against parsed magnitudes. With a bound active, a
/// listing whose field fails to parse is excluded.
pub fn meets_magnitude_bounds(
    profile: &CatalogProfile,
    listing: &ListingRecord,
    bounds: &BTreeMap<String, u64>,
) -> bool {
    bounds.iter().all(|(facet, min)| {
        match profile.facet(facet).map(|f| f.kind) {
            Some(FacetKind::Magnitude(rule)) => {
                listing_magnitude(listing, facet, rule).is_some_and(|value| value >= *min)
            }
            _ => {
                debug!(facet = %facet, catalog = %profile.kind, "ignoring bound on unknown facet");
                true
            }
        }
    })
}

/// Price bounds apply directly, no parsing involved.
pub fn within_price_bounds(listing: &ListingRecord, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_some_and(|m| listing.price < m) {
        return false;
    }
    if max.is_some_and(|m| listing.price > m) {
        return false;
    }
    true
}

/// Free-text search: case-insensitive substring against the name or any of
/// the profile's searchable facet fields.
pub fn matches_search(profile: &CatalogProfile, listing: &ListingRecord, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    if listing.name.to_lowercase().contains(&needle) {
        return true;
    }
    profile.searchable.iter().any(|field| {
        listing
            .attr_text(field)
            .is_some_and(|value| value.to_lowercase().contains(&needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::profile::LAPTOPS;

    fn laptop(name: &str, brand: &str, ram: &str, price: f64) -> ListingRecord {
        ListingRecord::new(name, price)
            .with_attr("brand", brand)
            .with_attr("ram", ram)
    }

    #[test]
    fn selection_is_substring_and_case_insensitive() {
        let listing = laptop("XPS 13", "Dell Inc.", "16GB", 90000.0);
        let mut selections = BTreeMap::new();
        selections.insert("brand".to_string(), vec!["dell".to_string()]);
        assert!(matches_selections(&LAPTOPS, &listing, &selections));

        selections.insert("brand".to_string(), vec!["Lenovo".to_string()]);
        assert!(!matches_selections(&LAPTOPS, &listing, &selections));
    }

    #[test]
    fn values_within_one_facet_or_together() {
        let listing = laptop("XPS 13", "Dell", "16GB", 90000.0);
        let mut selections = BTreeMap::new();
        selections.insert(
            "brand".to_string(),
            vec!["Lenovo".to_string(), "Dell".to_string()],
        );
        assert!(matches_selections(&LAPTOPS, &listing, &selections));
    }

    #[test]
    fn facets_and_together() {
        let listing = laptop("XPS 13", "Dell", "16GB", 90000.0);
        let mut selections = BTreeMap::new();
        selections.insert("brand".to_string(), vec!["Dell".to_string()]);
        selections.insert("processor".to_string(), vec!["Ryzen".to_string()]);
        // brand matches but the processor facet is absent on the listing
        assert!(!matches_selections(&LAPTOPS, &listing, &selections));
    }

    #[test]
    fn magnitude_bound_excludes_unparseable_when_active() {
        let specified = laptop("A", "Acer", "16GB", 1.0);
        let vague = laptop("B", "Acer", "Expandable", 1.0);
        let mut bounds = BTreeMap::new();

        assert!(meets_magnitude_bounds(&LAPTOPS, &vague, &bounds));

        bounds.insert("ram".to_string(), 8);
        assert!(meets_magnitude_bounds(&LAPTOPS, &specified, &bounds));
        assert!(!meets_magnitude_bounds(&LAPTOPS, &vague, &bounds));
    }

    #[test]
    fn tb_listing_passes_gb_bound() {
        let listing = laptop("A", "Acer", "16GB", 1.0).with_attr("storage", "1TB");
        let mut bounds = BTreeMap::new();
        bounds.insert("storage".to_string(), 512);
        assert!(meets_magnitude_bounds(&LAPTOPS, &listing, &bounds));

        bounds.insert("storage".to_string(), 2048);
        assert!(!meets_magnitude_bounds(&LAPTOPS, &listing, &bounds));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let listing = laptop("A", "Acer", "8GB", 30000.0);
        assert!(within_price_bounds(&listing, Some(30000.0), Some(30000.0)));
        assert!(!within_price_bounds(&listing, Some(30001.0), None));
        assert!(!within_price_bounds(&listing, None, Some(29999.0)));
    }

    #[test]
    fn search_covers_name_and_searchable_facets() {
        let listing = laptop("XPS 13", "Dell", "16GB", 90000.0).with_attr("processor", "Intel i7");
        assert!(matches_search(&LAPTOPS, &listing, "xps"));
        assert!(matches_search(&LAPTOPS, &listing, "dell"));
        assert!(matches_search(&LAPTOPS, &listing, "i7"));
        // ram is filterable but not a searchable field
        assert!(!matches_search(&LAPTOPS, &listing, "16gb"));
    }
}
