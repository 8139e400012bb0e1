//! Stable comparators over listing sort keys.

use super::facets::listing_magnitude;
use super::profile::{CatalogProfile, FacetKind};
use crate::query::{SortKey, SortOrder};
use rigdex_model::ListingRecord;
use std::cmp::Ordering;

/// Compare two listings using the provided sort key and order.
pub fn compare_listings(
    a: &ListingRecord,
    b: &ListingRecord,
    profile: &CatalogProfile,
    sort: &SortKey,
    order: SortOrder,
) -> Ordering {
    let ord = match sort {
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Name => compare_names(a, b),
        SortKey::Facet(facet) => match profile.facet(facet).map(|f| f.kind) {
            Some(FacetKind::Magnitude(rule)) => {
                // Unparseable magnitudes sort as zero rather than dropping out
                let a_value = listing_magnitude(a, facet, rule).unwrap_or(0);
                let b_value = listing_magnitude(b, facet, rule).unwrap_or(0);
                a_value.cmp(&b_value)
            }
            Some(FacetKind::Categorical) => compare_optional_str(
                a.attr_text(facet).map(|v| v.to_lowercase()).as_deref(),
                b.attr_text(facet).map(|v| v.to_lowercase()).as_deref(),
            ),
            // Not a dimension of this catalog; fall back to names so the
            // ordering stays deterministic.
            None => compare_names(a, b),
        },
    };

    if order == SortOrder::Descending {
        ord.reverse()
    } else {
        ord
    }
}

/// Sort a listing slice in place.
///
/// `sort_by` is stable, so listings that compare equal keep their relative
/// (first-appearance) order; repeated queries over unchanged data paginate
/// identically.
pub fn sort_listings(
    listings: &mut [ListingRecord],
    profile: &CatalogProfile,
    sort: &SortKey,
    order: SortOrder,
) {
    listings.sort_by(|a, b| compare_listings(a, b, profile, sort, order));
}

fn compare_names(a: &ListingRecord, b: &ListingRecord) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn compare_optional_str(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::profile::LAPTOPS;

    fn laptop(name: &str, ram: &str, price: f64) -> ListingRecord {
        ListingRecord::new(name, price).with_attr("ram", ram)
    }

    #[test]
    fn price_ascending_and_descending() {
        let mut listings = vec![
            laptop("B", "8GB", 50000.0),
            laptop("A", "8GB", 30000.0),
            laptop("C", "8GB", 40000.0),
        ];

        sort_listings(&mut listings, &LAPTOPS, &SortKey::Price, SortOrder::Ascending);
        let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);

        sort_listings(&mut listings, &LAPTOPS, &SortKey::Price, SortOrder::Descending);
        let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut listings = vec![
            laptop("beta", "8GB", 1.0),
            laptop("Alpha", "8GB", 2.0),
            laptop("GAMMA", "8GB", 3.0),
        ];
        sort_listings(&mut listings, &LAPTOPS, &SortKey::Name, SortOrder::Ascending);
        let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "GAMMA"]);
    }

    #[test]
    fn magnitude_sort_normalizes_units_and_zeroes_unparseable() {
        let mut listings = vec![
            laptop("tb", "1TB", 1.0),
            laptop("vague", "Expandable", 1.0),
            laptop("gb", "512GB", 1.0),
        ];
        sort_listings(
            &mut listings,
            &LAPTOPS,
            &SortKey::Facet("ram".to_string()),
            SortOrder::Ascending,
        );
        let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["vague", "gb", "tb"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut listings = vec![
            laptop("first", "8GB", 100.0),
            laptop("second", "8GB", 100.0),
            laptop("third", "8GB", 100.0),
        ];
        sort_listings(&mut listings, &LAPTOPS, &SortKey::Price, SortOrder::Ascending);
        let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
