//! Facet option derivation and magnitude parsing.

use super::profile::{CatalogProfile, FacetKind, UnitRule};
use crate::query::FilterOptions;
use once_cell::sync::Lazy;
use regex::Regex;
use rigdex_model::ListingRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Leading integer plus an optional trailing unit token ("16GB", "1 TB",
/// "144Hz", "27\"").
static MAGNITUDE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\s*([A-Za-z]+)?").unwrap());

/// Parse a magnitude field to its normalized numeric value.
///
/// Capacities follow the storage rule: a `TB` unit multiplies by 1024 so
/// terabyte and gigabyte listings compare in the same (GB) scale. Verbatim
/// facets take the leading integer as-is. Returns `None` when the text has no
/// leading digits.
pub fn parse_magnitude(raw: &str, rule: UnitRule) -> Option<u64> {
    let caps = MAGNITUDE_RE.captures(raw)?;
    let value: u64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2).map(|m| m.as_str());

    match rule {
        UnitRule::Storage if unit.is_some_and(|u| u.eq_ignore_ascii_case("tb")) => {
            Some(value.saturating_mul(1024))
        }
        _ => Some(value),
    }
}

/// Parsed magnitude of one listing's facet field, if present and parseable.
pub fn listing_magnitude(listing: &ListingRecord, facet: &str, rule: UnitRule) -> Option<u64> {
    let raw = listing.attr_text(facet)?;
    parse_magnitude(&raw, rule)
}

/// Collect the distinct facet values across the deduplicated set.
///
/// Must run before any filter is applied: the UI always offers the full
/// option space, no matter how far the current query has narrowed.
pub fn derive_filter_options(
    profile: &CatalogProfile,
    listings: &[ListingRecord],
) -> FilterOptions {
    let mut categorical: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut magnitudes: BTreeMap<String, Vec<u64>> = BTreeMap::new();

    for facet in profile.facets {
        match facet.kind {
            FacetKind::Categorical => {
                let values: BTreeSet<String> = listings
                    .iter()
                    .filter_map(|l| l.attr_text(facet.name))
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .collect();
                categorical.insert(facet.name.to_string(), values.into_iter().collect());
            }
            FacetKind::Magnitude(rule) => {
                let values: BTreeSet<u64> = listings
                    .iter()
                    .filter_map(|l| listing_magnitude(l, facet.name, rule))
                    .collect();
                magnitudes.insert(facet.name.to_string(), values.into_iter().collect());
            }
        }
    }

    FilterOptions {
        categorical,
        magnitudes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::profile::LAPTOPS;

    #[test]
    fn storage_units_normalize_to_gb() {
        assert_eq!(parse_magnitude("512GB", UnitRule::Storage), Some(512));
        assert_eq!(parse_magnitude("1TB", UnitRule::Storage), Some(1024));
        assert_eq!(parse_magnitude("1 tb", UnitRule::Storage), Some(1024));
        // "2TB" and "2048GB" are the same capacity
        assert_eq!(
            parse_magnitude("2TB", UnitRule::Storage),
            parse_magnitude("2048GB", UnitRule::Storage)
        );
    }

    #[test]
    fn verbatim_takes_leading_integer() {
        assert_eq!(parse_magnitude("27\"", UnitRule::Verbatim), Some(27));
        assert_eq!(parse_magnitude("144Hz", UnitRule::Verbatim), Some(144));
        // Verbatim facets never unit-convert, even with a TB-looking token
        assert_eq!(parse_magnitude("1TB", UnitRule::Verbatim), Some(1));
    }

    #[test]
    fn unparseable_text_is_absent() {
        assert_eq!(parse_magnitude("Expandable", UnitRule::Storage), None);
        assert_eq!(parse_magnitude("", UnitRule::Verbatim), None);
    }

    #[test]
    fn options_cover_the_whole_set_sorted() {
        let listings = vec![
            ListingRecord::new("A", 1.0)
                .with_attr("brand", "Dell")
                .with_attr("ram", "16GB"),
            ListingRecord::new("B", 2.0)
                .with_attr("brand", "Acer")
                .with_attr("ram", "8GB"),
            ListingRecord::new("C", 3.0)
                .with_attr("brand", "Dell")
                .with_attr("ram", "1TB"),
        ];

        let options = derive_filter_options(&LAPTOPS, &listings);
        assert_eq!(options.categorical["brand"], vec!["Acer", "Dell"]);
        assert_eq!(options.magnitudes["ram"], vec![8, 16, 1024]);
    }
}
