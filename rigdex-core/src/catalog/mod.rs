//! The catalog query engine.
//!
//! One pure pipeline serves every storefront catalog: flatten the listings
//! embedded across build containers, deduplicate, derive the facet option
//! space, filter, sort, paginate. Per-catalog differences live entirely in
//! [`profile`] descriptor tables.

pub mod dedup;
pub mod facets;
pub mod filtering;
pub mod profile;
pub mod sorting;

pub use profile::{CatalogKind, CatalogProfile, FacetDef, FacetKind, UnitRule};

use crate::error::{CatalogError, Result};
use crate::query::{normalize_query, CatalogQuery, ResultPage};
use rigdex_model::{BuildRecord, ListingRecord};
use tracing::debug;

/// Execute a catalog query against the given containers.
///
/// Pure and synchronous: the only I/O in a request (fetching the containers)
/// happens before this call. Malformed listing data never fails the query —
/// unparseable magnitudes and absent fields read as absent — so the single
/// error case is a page below 1, which is rejected rather than clamped.
pub fn execute(
    profile: &CatalogProfile,
    containers: &[BuildRecord],
    query: &CatalogQuery,
) -> Result<ResultPage<ListingRecord>> {
    if query.page < 1 {
        return Err(CatalogError::InvalidQuery(format!(
            "page must be >= 1, got {}",
            query.page
        )));
    }
    let query = normalize_query(query);

    let deduplicated = dedup::flatten_dedup(profile, containers);

    // Options come from the unfiltered set so the pickers keep offering the
    // full space while the user narrows other facets.
    let filter_options = facets::derive_filter_options(profile, &deduplicated);

    let total_before = deduplicated.len();
    let mut filtered: Vec<ListingRecord> = deduplicated
        .into_iter()
        .filter(|l| !profile.require_positive_price || l.price > 0.0)
        .filter(|l| filtering::matches_selections(profile, l, &query.selections))
        .filter(|l| filtering::meets_magnitude_bounds(profile, l, &query.min_magnitudes))
        .filter(|l| filtering::within_price_bounds(l, query.min_price, query.max_price))
        .filter(|l| {
            query
                .search
                .as_deref()
                .is_none_or(|needle| filtering::matches_search(profile, l, needle))
        })
        .collect();

    sorting::sort_listings(&mut filtered, profile, &query.sort, query.order);

    let total_results = filtered.len();
    let page = query.page as usize;
    let page_size = profile.page_size;
    let start = (page - 1).saturating_mul(page_size);
    let items: Vec<ListingRecord> = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();
    let has_more = total_results > page * page_size;

    debug!(
        catalog = %profile.kind,
        deduplicated = total_before,
        filtered = total_results,
        page,
        returned = items.len(),
        "catalog query executed"
    );

    Ok(ResultPage {
        items,
        total_results,
        has_more,
        filter_options,
    })
}
